// ============================================================================
// Answer Domain Model
// Domain-tagged canonical answers and multiple-choice sets
// ============================================================================

use crate::domain::question::NumberDomain;
use crate::numeric::{format_seconds, ClockUnit, Fraction, Money};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical answer, tagged by numeric domain.
///
/// Replaces an optional-field overlay ("fraction answer present only if the
/// domain is fractions") with one variant per domain, each carrying exactly
/// the representation that domain grades in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnswerValue {
    Integer(i64),
    Decimal {
        value: f64,
        /// Decimal places the answer displays with (2x the operand places
        /// for multiplication results)
        places: u8,
    },
    Fraction(Fraction),
    Currency(Money),
    Clock {
        /// Canonical value in whole seconds
        seconds: i64,
        /// Display unit; HourMin values are always `:00`-aligned
        unit: ClockUnit,
    },
}

impl AnswerValue {
    /// The numeric domain this answer belongs to.
    pub fn domain(&self) -> NumberDomain {
        match self {
            AnswerValue::Integer(_) => NumberDomain::Integer,
            AnswerValue::Decimal { .. } => NumberDomain::Decimal,
            AnswerValue::Fraction(_) => NumberDomain::Fraction,
            AnswerValue::Currency(_) => NumberDomain::Currency,
            AnswerValue::Clock { .. } => NumberDomain::Clock,
        }
    }

    /// Domain-formatted display text: plain number, mixed-number text,
    /// `"$x.xx"`, or `"M:SS"`/`"H:MM"`.
    pub fn display_text(&self) -> String {
        match self {
            AnswerValue::Integer(value) => value.to_string(),
            AnswerValue::Decimal { value, places } => {
                format!("{:.*}", *places as usize, value)
            },
            AnswerValue::Fraction(fraction) => fraction.to_mixed_text(),
            AnswerValue::Currency(money) => money.format_dollars(),
            AnswerValue::Clock { seconds, unit } => format_seconds(*seconds, *unit),
        }
    }

    /// Canonical plain-number value: dollars for currency, total seconds for
    /// time, the decimal value of the rational for fractions.
    pub fn canonical_value(&self) -> f64 {
        match self {
            AnswerValue::Integer(value) => *value as f64,
            AnswerValue::Decimal { value, .. } => *value,
            AnswerValue::Fraction(fraction) => fraction.to_f64(),
            AnswerValue::Currency(money) => money.to_f64(),
            AnswerValue::Clock { seconds, .. } => *seconds as f64,
        }
    }
}

// ============================================================================
// Choice Set
// ============================================================================

/// Ordered candidate answers for a multiple-choice question.
///
/// Entries are in the question's native text representation. Invariants,
/// upheld by the distractor builders: no duplicates under the domain's
/// equality rule, and exactly one entry equal to the canonical answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChoiceSet {
    entries: Vec<String>,
}

impl ChoiceSet {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Exact-text membership check (domain equality lives in `grading`).
    pub fn contains_text(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| entry == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericResult;

    #[test]
    fn test_domains() {
        assert_eq!(AnswerValue::Integer(7).domain(), NumberDomain::Integer);
        assert_eq!(
            AnswerValue::Currency(Money::from_cents(575)).domain(),
            NumberDomain::Currency
        );
        assert_eq!(
            AnswerValue::Clock {
                seconds: 150,
                unit: ClockUnit::MinSec
            }
            .domain(),
            NumberDomain::Clock
        );
    }

    #[test]
    fn test_display_text() -> NumericResult<()> {
        assert_eq!(AnswerValue::Integer(7).display_text(), "7");
        assert_eq!(
            AnswerValue::Decimal {
                value: 4.5,
                places: 1
            }
            .display_text(),
            "4.5"
        );
        assert_eq!(
            AnswerValue::Decimal {
                value: 4.5,
                places: 2
            }
            .display_text(),
            "4.50"
        );
        assert_eq!(
            AnswerValue::Fraction(Fraction::new(9, 4)?).display_text(),
            "2 1/4"
        );
        assert_eq!(
            AnswerValue::Currency(Money::from_cents(575)).display_text(),
            "$5.75"
        );
        assert_eq!(
            AnswerValue::Clock {
                seconds: 150,
                unit: ClockUnit::MinSec
            }
            .display_text(),
            "2:30"
        );
        assert_eq!(
            AnswerValue::Clock {
                seconds: 4500,
                unit: ClockUnit::HourMin
            }
            .display_text(),
            "1:15"
        );
        Ok(())
    }

    #[test]
    fn test_canonical_value() -> NumericResult<()> {
        assert_eq!(AnswerValue::Integer(7).canonical_value(), 7.0);
        assert_eq!(
            AnswerValue::Fraction(Fraction::new(1, 2)?).canonical_value(),
            0.5
        );
        assert_eq!(
            AnswerValue::Currency(Money::from_cents(575)).canonical_value(),
            5.75
        );
        assert_eq!(
            AnswerValue::Clock {
                seconds: 4500,
                unit: ClockUnit::HourMin
            }
            .canonical_value(),
            4500.0
        );
        Ok(())
    }

    #[test]
    fn test_choice_set() {
        let choices = ChoiceSet::new(vec!["5.75".to_string(), "6.25".to_string()]);
        assert_eq!(choices.len(), 2);
        assert!(choices.contains_text("5.75"));
        assert!(!choices.contains_text("7.00"));
    }
}
