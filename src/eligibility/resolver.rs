//! Annual-leave eligibility resolution.
//!
//! [`EligibilityPolicy::resolve`] turns an employee's nationality, join date
//! and fractional years of service into an [`EligibilityResult`]. The
//! evaluation order of the rules is explicit in
//! [`EligibilityPolicy::evaluation_order`].

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{EligibilityResult, EligibilityStatus, EntitlementBasis};

use super::rules::{
    EligibilityClass, EntitlementRule, LongServicePrecedence, LongServiceRule, NationalityGroups,
    RuleTable,
};

/// One step in the ordered rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStep {
    /// The long-service ceiling; applies only when its minimum is reached.
    LongService,
    /// The nationality class rule; always produces a result.
    Class(EligibilityClass),
}

/// Nationality groups, the rule table and the long-service ceiling.
///
/// # Example
///
/// ```
/// use leave_engine::eligibility::{EligibilityPolicy, NationalityGroups};
/// use leave_engine::models::EligibilityStatus;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = EligibilityPolicy::new(
///     NationalityGroups {
///         standard: vec!["Maldivian".to_string()],
///         extended: vec!["Nepali".to_string()],
///     },
///     Default::default(),
///     Default::default(),
/// );
///
/// let join = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
/// let result = policy.resolve("Maldivian", join, Decimal::new(21, 1));
///
/// assert_eq!(result.entitled_days, 30);
/// assert_eq!(result.status, EligibilityStatus::Eligible);
/// assert_eq!(result.next_entitlement_date, NaiveDate::from_ymd_opt(2023, 4, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityPolicy {
    groups: NationalityGroups,
    rules: RuleTable,
    long_service: LongServiceRule,
}

impl EligibilityPolicy {
    /// Creates a policy from its parts.
    pub fn new(groups: NationalityGroups, rules: RuleTable, long_service: LongServiceRule) -> Self {
        Self {
            groups,
            rules,
            long_service,
        }
    }

    /// The nationality groups.
    pub fn groups(&self) -> &NationalityGroups {
        &self.groups
    }

    /// The per-class rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The long-service ceiling.
    pub fn long_service(&self) -> &LongServiceRule {
        &self.long_service
    }

    /// The order in which rules are tried for a class. The first step that
    /// produces a result wins.
    ///
    /// With fallback precedence the standard and extended groups never reach
    /// the long-service check; only the default class does.
    pub fn evaluation_order(&self, class: EligibilityClass) -> Vec<RuleStep> {
        match (self.long_service.precedence, class) {
            (LongServicePrecedence::Override, _) | (_, EligibilityClass::Default) => {
                vec![RuleStep::LongService, RuleStep::Class(class)]
            }
            (LongServicePrecedence::Fallback, _) => vec![RuleStep::Class(class)],
        }
    }

    /// Resolves annual-leave eligibility.
    ///
    /// Never fails: unknown nationalities use the default rule and a negative
    /// `years_of_service` (joining in the future) yields a pending result.
    pub fn resolve(
        &self,
        nationality: &str,
        join_date: NaiveDate,
        years_of_service: Decimal,
    ) -> EligibilityResult {
        let class = self.groups.classify(nationality);

        if years_of_service < Decimal::ZERO {
            return pending(class, self.rules.rule_for(class), join_date);
        }

        for step in self.evaluation_order(class) {
            match step {
                RuleStep::LongService => {
                    if years_of_service >= self.long_service.min_years {
                        return long_service(&self.long_service);
                    }
                }
                RuleStep::Class(class) => {
                    return apply_rule(
                        class,
                        self.rules.rule_for(class),
                        join_date,
                        years_of_service,
                    );
                }
            }
        }

        // evaluation_order always ends with a class step
        apply_rule(
            class,
            self.rules.rule_for(class),
            join_date,
            years_of_service,
        )
    }
}

fn basis_for(class: EligibilityClass) -> EntitlementBasis {
    match class {
        EligibilityClass::Standard => EntitlementBasis::Standard,
        EligibilityClass::Extended => EntitlementBasis::Extended,
        EligibilityClass::Default => EntitlementBasis::Default,
    }
}

/// Adds whole years, clamping Feb 29 to Feb 28. `None` if the result is out of range.
fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Whole years needed to reach `min_years`, rounding a fractional minimum up.
fn whole_years(min_years: Decimal) -> u32 {
    min_years.ceil().to_u32().unwrap_or(0)
}

fn apply_rule(
    class: EligibilityClass,
    rule: &EntitlementRule,
    join_date: NaiveDate,
    years_of_service: Decimal,
) -> EligibilityResult {
    let min_years = whole_years(rule.min_years);

    if years_of_service < rule.min_years {
        return EligibilityResult {
            entitled_days: 0,
            status: EligibilityStatus::NotEligible,
            next_entitlement_date: add_years(join_date, min_years),
            current_cycle_start: None,
            basis: basis_for(class),
            description: format!(
                "Eligible for annual leave after {} year(s) of service",
                rule.min_years.normalize()
            ),
        };
    }

    let cycle_years = rule.cycle_years.max(1);
    // Out-of-range service leaves both dates unset rather than wrapping
    let completed_cycles = ((years_of_service - rule.min_years) / Decimal::from(cycle_years))
        .floor()
        .to_u32();

    let cycle_start_offset = completed_cycles
        .and_then(|cycles| cycles.checked_mul(cycle_years))
        .and_then(|years| years.checked_add(min_years));
    let current_cycle_start = cycle_start_offset.and_then(|years| add_years(join_date, years));
    let next_entitlement_date = cycle_start_offset
        .and_then(|years| years.checked_add(cycle_years))
        .and_then(|years| add_years(join_date, years));

    let description = if cycle_years == 1 {
        format!("{} days annual leave per year", rule.entitlement_days)
    } else {
        format!(
            "{} days annual leave every {} years",
            rule.entitlement_days, cycle_years
        )
    };

    EligibilityResult {
        entitled_days: rule.entitlement_days,
        status: EligibilityStatus::Eligible,
        next_entitlement_date,
        current_cycle_start,
        basis: basis_for(class),
        description,
    }
}

fn long_service(rule: &LongServiceRule) -> EligibilityResult {
    EligibilityResult {
        entitled_days: rule.entitlement_days,
        status: EligibilityStatus::Eligible,
        next_entitlement_date: None,
        current_cycle_start: None,
        basis: EntitlementBasis::LongService,
        description: format!(
            "Long-service benefit of {} days after {} years of service",
            rule.entitlement_days,
            rule.min_years.normalize()
        ),
    }
}

fn pending(
    class: EligibilityClass,
    rule: &EntitlementRule,
    join_date: NaiveDate,
) -> EligibilityResult {
    EligibilityResult {
        entitled_days: 0,
        status: EligibilityStatus::Pending,
        next_entitlement_date: add_years(join_date, whole_years(rule.min_years)),
        current_cycle_start: None,
        basis: basis_for(class),
        description: format!("Service starts on {}", join_date),
    }
}
