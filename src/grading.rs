// ============================================================================
// Grading
// Domain-aware answer validation and session scoring
// ============================================================================

use crate::domain::{AnswerValue, Question};
use crate::numeric::{parse_clock_answer, Fraction, Money};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::trace;

/// Plain-number tolerance: submissions within a cent-sized window count as
/// equal, so `"4.5"` grades correct against `4.50`.
const NUMBER_TOLERANCE: f64 = 0.01;

/// Clock tolerance in seconds.
const SECONDS_TOLERANCE: f64 = 1.0;

/// Tolerant plain-number equality.
pub fn numbers_match(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() < NUMBER_TOLERANCE
}

/// Tolerant second-count equality.
pub fn seconds_match(expected: i64, actual: i64) -> bool {
    ((expected - actual) as f64).abs() < SECONDS_TOLERANCE
}

/// Parse a plain-number submission.
///
/// Goes through `Decimal` rather than `f64::from_str` so inputs like
/// `"1e300"` or `"NaN"` are rejected instead of producing surprising
/// comparisons.
fn parse_number(text: &str) -> Option<f64> {
    let parsed: Decimal = text.trim().parse().ok()?;
    parsed.to_f64()
}

/// Exact rational comparison of two mixed-number texts.
///
/// Both sides are parsed and compared as rationals, never by decimal
/// approximation, so `"2/4"` equals `"1/2"`. False when either side fails
/// to parse.
pub fn fractions_equal(a: &str, b: &str) -> bool {
    match (a.trim().parse::<Fraction>(), b.trim().parse::<Fraction>()) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}

/// Check a submitted answer against the canonical one under the domain's
/// equality rule.
///
/// Malformed input is an incorrect answer, never an error: a user typing
/// `"banana"` into an integer question gets it marked wrong.
pub fn check_submission(answer: &AnswerValue, submitted: &str) -> bool {
    let correct = match answer {
        AnswerValue::Integer(value) => {
            parse_number(submitted).is_some_and(|n| numbers_match(*value as f64, n))
        },
        AnswerValue::Decimal { value, .. } => {
            parse_number(submitted).is_some_and(|n| numbers_match(*value, n))
        },
        AnswerValue::Fraction(fraction) => {
            // Rational equality: "2/4" matches 1/2, "0.5" does not
            submitted
                .trim()
                .parse::<Fraction>()
                .is_ok_and(|parsed| parsed == *fraction)
        },
        AnswerValue::Currency(money) => Money::parse_dollars(submitted)
            .is_ok_and(|parsed| parsed == *money),
        AnswerValue::Clock { seconds, .. } => parse_clock_answer(submitted, *seconds)
            .is_some_and(|parsed| seconds_match(*seconds, parsed)),
    };

    trace!(domain = %answer.domain(), submitted, correct, "checked submission");
    correct
}

// ============================================================================
// Score Summary
// ============================================================================

/// Aggregate results over a graded (or partially graded) batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    /// Questions in the batch
    pub total: usize,
    /// Questions that have been graded
    pub graded: usize,
    pub correct: usize,
    /// Fraction of graded questions answered correctly, 0.0 when nothing
    /// has been graded yet
    pub accuracy: f64,
    /// Longest run of consecutive correct answers, in presentation order
    pub longest_streak: usize,
    /// Total time across graded questions
    pub time_spent_secs: f64,
}

impl ScoreSummary {
    /// Summarize a batch in presentation order. Ungraded questions count
    /// toward `total` only and break any streak.
    pub fn from_questions(questions: &[Question]) -> Self {
        let mut graded = 0;
        let mut correct = 0;
        let mut time_spent_secs = 0.0;
        let mut longest_streak = 0;
        let mut streak = 0;

        for question in questions {
            match question.grade_record() {
                Some(record) => {
                    graded += 1;
                    time_spent_secs += record.time_spent_secs;
                    if record.is_correct {
                        correct += 1;
                        streak += 1;
                        longest_streak = longest_streak.max(streak);
                    } else {
                        streak = 0;
                    }
                },
                None => streak = 0,
            }
        }

        let accuracy = if graded == 0 {
            0.0
        } else {
            correct as f64 / graded as f64
        };

        Self {
            total: questions.len(),
            graded,
            correct,
            accuracy,
            longest_streak,
            time_spent_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Operator, Prompt};
    use crate::numeric::ClockUnit;

    #[test]
    fn test_integer_submissions() {
        let answer = AnswerValue::Integer(12);
        assert!(check_submission(&answer, "12"));
        assert!(check_submission(&answer, " 12 "));
        assert!(check_submission(&answer, "12.0"));
        assert!(!check_submission(&answer, "13"));
        assert!(!check_submission(&answer, "twelve"));
        assert!(!check_submission(&answer, ""));
    }

    #[test]
    fn test_decimal_tolerance() {
        let answer = AnswerValue::Decimal {
            value: 4.5,
            places: 2,
        };
        assert!(check_submission(&answer, "4.50"));
        assert!(check_submission(&answer, "4.5"));
        assert!(check_submission(&answer, "4.505"));
        assert!(!check_submission(&answer, "4.52"));
    }

    #[test]
    fn test_fraction_rational_equality() {
        let answer = AnswerValue::Fraction(Fraction::new(1, 2).unwrap());
        assert!(check_submission(&answer, "1/2"));
        assert!(check_submission(&answer, "2/4"));
        assert!(!check_submission(&answer, "1/3"));
        // Decimal approximations are not accepted for fractions
        assert!(!check_submission(&answer, "0.5"));

        let mixed = AnswerValue::Fraction(Fraction::new(9, 4).unwrap());
        assert!(check_submission(&mixed, "2 1/4"));
        assert!(check_submission(&mixed, "9/4"));
    }

    #[test]
    fn test_fractions_equal_is_textual_and_exact() {
        assert!(fractions_equal("1/2", "2/4"));
        assert!(fractions_equal(" 2 1/4 ", "9/4"));
        assert!(!fractions_equal("1/2", "1/3"));
        assert!(!fractions_equal("abc", "1/2"));
        assert!(!fractions_equal("1/2", ""));
    }

    #[test]
    fn test_currency_submissions() {
        let answer = AnswerValue::Currency(Money::from_cents(575));
        assert!(check_submission(&answer, "$5.75"));
        assert!(check_submission(&answer, "5.75"));
        assert!(check_submission(&answer, " $ 5.75 "));
        assert!(!check_submission(&answer, "$5.76"));
        assert!(!check_submission(&answer, "$"));
    }

    #[test]
    fn test_clock_submissions_by_magnitude() {
        let min_sec = AnswerValue::Clock {
            seconds: 150,
            unit: ClockUnit::MinSec,
        };
        assert!(check_submission(&min_sec, "2:30"));
        assert!(!check_submission(&min_sec, "2:31"));
        assert!(!check_submission(&min_sec, "150"));

        let hour_min = AnswerValue::Clock {
            seconds: 4500,
            unit: ClockUnit::HourMin,
        };
        assert!(check_submission(&hour_min, "1:15"));
        assert!(!check_submission(&hour_min, "1:16"));
    }

    fn graded_question(correct: bool, time: f64) -> Question {
        let mut q = Question::new(
            Prompt::Expression("4 + 3".to_string()),
            Operator::Addition,
            Difficulty::Easy,
            AnswerValue::Integer(7),
        );
        let submission = if correct { "7" } else { "8" };
        q.grade(submission, time).unwrap();
        q
    }

    fn ungraded_question() -> Question {
        Question::new(
            Prompt::Expression("4 + 3".to_string()),
            Operator::Addition,
            Difficulty::Easy,
            AnswerValue::Integer(7),
        )
    }

    #[test]
    fn test_summary_empty_batch() {
        let summary = ScoreSummary::from_questions(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.longest_streak, 0);
    }

    #[test]
    fn test_summary_counts_and_accuracy() {
        let batch = vec![
            graded_question(true, 2.0),
            graded_question(true, 3.0),
            graded_question(false, 1.0),
            graded_question(true, 4.0),
            ungraded_question(),
        ];
        let summary = ScoreSummary::from_questions(&batch);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.graded, 4);
        assert_eq!(summary.correct, 3);
        assert_eq!(summary.accuracy, 0.75);
        assert_eq!(summary.longest_streak, 2);
        assert_eq!(summary.time_spent_secs, 10.0);
    }

    #[test]
    fn test_streak_broken_by_ungraded() {
        let batch = vec![
            graded_question(true, 1.0),
            ungraded_question(),
            graded_question(true, 1.0),
            graded_question(true, 1.0),
        ];
        let summary = ScoreSummary::from_questions(&batch);
        assert_eq!(summary.longest_streak, 2);
    }
}
