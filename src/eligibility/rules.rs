//! Eligibility classes and the entitlement rule table.
//!
//! Nationalities are mapped onto a closed set of [`EligibilityClass`]es by
//! configurable groups, and each class has one [`EntitlementRule`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The rule group a nationality belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityClass {
    /// Yearly entitlement after one year of service.
    Standard,
    /// Biennial entitlement after two years of service.
    Extended,
    /// Any nationality not listed in another group.
    Default,
}

/// Which nationalities belong to the standard and extended groups.
///
/// Matching ignores case and surrounding whitespace. A nationality listed in
/// both groups is classified as standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NationalityGroups {
    /// Nationalities on the standard rule.
    #[serde(default)]
    pub standard: Vec<String>,
    /// Nationalities on the extended rule.
    #[serde(default)]
    pub extended: Vec<String>,
}

impl NationalityGroups {
    /// Classifies a nationality. Unrecognised values fall through to [`EligibilityClass::Default`].
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::eligibility::{EligibilityClass, NationalityGroups};
    ///
    /// let groups = NationalityGroups {
    ///     standard: vec!["Maldivian".to_string()],
    ///     extended: vec!["Nepali".to_string()],
    /// };
    /// assert_eq!(groups.classify(" maldivian "), EligibilityClass::Standard);
    /// assert_eq!(groups.classify("NEPALI"), EligibilityClass::Extended);
    /// assert_eq!(groups.classify("Filipino"), EligibilityClass::Default);
    /// ```
    pub fn classify(&self, nationality: &str) -> EligibilityClass {
        let nationality = nationality.trim();
        let listed = |group: &[String]| {
            group
                .iter()
                .any(|n| n.trim().eq_ignore_ascii_case(nationality))
        };

        if listed(&self.standard) {
            EligibilityClass::Standard
        } else if listed(&self.extended) {
            EligibilityClass::Extended
        } else {
            EligibilityClass::Default
        }
    }
}

/// Entitlement granted to one eligibility class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntitlementRule {
    /// Years of service required before the first entitlement.
    pub min_years: Decimal,
    /// Days granted per cycle once eligible.
    pub entitlement_days: u32,
    /// Length of one entitlement cycle in years.
    pub cycle_years: u32,
}

/// One rule per eligibility class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleTable {
    /// Rule for the standard group.
    pub standard: EntitlementRule,
    /// Rule for the extended group.
    pub extended: EntitlementRule,
    /// Rule for every other nationality.
    pub default: EntitlementRule,
}

impl RuleTable {
    /// Returns the rule for a class.
    pub fn rule_for(&self, class: EligibilityClass) -> &EntitlementRule {
        match class {
            EligibilityClass::Standard => &self.standard,
            EligibilityClass::Extended => &self.extended,
            EligibilityClass::Default => &self.default,
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            standard: EntitlementRule {
                min_years: Decimal::ONE,
                entitlement_days: 30,
                cycle_years: 1,
            },
            extended: EntitlementRule {
                min_years: Decimal::TWO,
                entitlement_days: 60,
                cycle_years: 2,
            },
            default: EntitlementRule {
                min_years: Decimal::ONE,
                entitlement_days: 30,
                cycle_years: 1,
            },
        }
    }
}

/// Where the long-service check sits relative to the nationality rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongServicePrecedence {
    /// Checked after the standard and extended groups, before the default rule.
    #[default]
    Fallback,
    /// Checked before every nationality rule.
    Override,
}

/// The long-service entitlement ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LongServiceRule {
    /// Years of service at which the ceiling applies.
    pub min_years: Decimal,
    /// Days granted under the ceiling.
    pub entitlement_days: u32,
    /// Where the check is evaluated.
    #[serde(default)]
    pub precedence: LongServicePrecedence,
}

impl Default for LongServiceRule {
    fn default() -> Self {
        Self {
            min_years: Decimal::new(5, 0),
            entitlement_days: 120,
            precedence: LongServicePrecedence::Fallback,
        }
    }
}
