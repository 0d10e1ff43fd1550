// ============================================================================
// Currency Question Generator
// Dollars-and-cents arithmetic over integer cents
// ============================================================================

use crate::domain::{
    AnswerValue, ChoiceSet, Difficulty, NumberDomain, Operator, Prompt, Question, QuestionStyle,
};
use crate::engine::distractor::{build_offset_choices, CHOICE_COUNT};
use crate::interfaces::{QuestionGenerator, QuestionRequest, RandomSource};
use crate::numeric::Money;

/// Currency question generator.
///
/// All amounts are whole cents, so every prompt and answer is exact at two
/// decimal places. Multiplication and division pair a dollar amount with a
/// small integer factor rather than a second amount. Algebraic requests are
/// remapped to addition; the question carries the remapped operator.
pub struct CurrencyGenerator;

impl CurrencyGenerator {
    fn addition(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let max_cents = match difficulty {
            Difficulty::Easy => 2_000,
            Difficulty::Hard => 10_000,
        };
        let a = rng.range_i64(100, max_cents);
        let b = rng.range_i64(100, max_cents);
        (
            Prompt::Expression(format!(
                "{} + {}",
                Money::from_cents(a).format_dollars(),
                Money::from_cents(b).format_dollars()
            )),
            a + b,
        )
    }

    fn subtraction(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let max_cents = match difficulty {
            Difficulty::Easy => 2_000,
            Difficulty::Hard => 10_000,
        };
        let a = rng.range_i64(100, max_cents);
        // Bounded by the first amount so change never goes negative
        let b = rng.range_i64(100, a);
        (
            Prompt::Expression(format!(
                "{} - {}",
                Money::from_cents(a).format_dollars(),
                Money::from_cents(b).format_dollars()
            )),
            a - b,
        )
    }

    fn multiplication(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let (max_cents, max_factor) = match difficulty {
            Difficulty::Easy => (1_000, 5),
            Difficulty::Hard => (2_500, 9),
        };
        let amount = rng.range_i64(100, max_cents);
        let factor = rng.range_i64(2, max_factor);
        (
            Prompt::Expression(format!(
                "{} × {}",
                Money::from_cents(amount).format_dollars(),
                factor
            )),
            amount * factor,
        )
    }

    fn division(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let (max_cents, max_factor) = match difficulty {
            Difficulty::Easy => (1_000, 5),
            Difficulty::Hard => (2_500, 9),
        };
        // Quotient first; the dividend is the exact product, so splitting a
        // bill always comes out to whole cents
        let quotient = rng.range_i64(100, max_cents);
        let divisor = rng.range_i64(2, max_factor);
        (
            Prompt::Expression(format!(
                "{} ÷ {}",
                Money::from_cents(quotient * divisor).format_dollars(),
                divisor
            )),
            quotient,
        )
    }
}

/// Proportional distractors: perturb by up to half the correct amount,
/// clamped to at least one cent.
pub(crate) fn currency_choices(rng: &mut dyn RandomSource, correct_cents: i64) -> ChoiceSet {
    build_offset_choices(
        rng,
        Money::from_cents(correct_cents).format_dollars(),
        CHOICE_COUNT,
        |rng| {
            let magnitude = ((correct_cents as f64 * rng.next_f64() * 0.5).round() as i64).max(1);
            let signed = if rng.chance(0.5) { magnitude } else { -magnitude };
            Money::from_cents((correct_cents + signed).max(1)).format_dollars()
        },
        |step| Money::from_cents(correct_cents + step as i64).format_dollars(),
    )
}

impl QuestionGenerator for CurrencyGenerator {
    fn domain(&self) -> NumberDomain {
        NumberDomain::Currency
    }

    fn name(&self) -> &str {
        "currency"
    }

    fn generate(&self, rng: &mut dyn RandomSource, request: &QuestionRequest) -> Question {
        let operator = match request.operator {
            Operator::Algebraic => Operator::Addition,
            other => other,
        };

        let (prompt, cents) = match operator {
            Operator::Subtraction => Self::subtraction(rng, request.difficulty),
            Operator::Multiplication => Self::multiplication(rng, request.difficulty),
            Operator::Division => Self::division(rng, request.difficulty),
            _ => Self::addition(rng, request.difficulty),
        };

        let question = Question::new(
            prompt,
            operator,
            request.difficulty,
            AnswerValue::Currency(Money::from_cents(cents)),
        );

        if request.style == QuestionStyle::MultipleChoice {
            let choices = currency_choices(rng, cents);
            question.with_choices(choices)
        } else {
            question
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::SeededSource;

    fn request(operator: Operator, difficulty: Difficulty) -> QuestionRequest {
        QuestionRequest {
            difficulty,
            operator,
            style: QuestionStyle::Expression,
        }
    }

    fn parse_dollars(text: &str) -> Money {
        Money::parse_dollars(text).unwrap()
    }

    #[test]
    fn test_addition_amounts_and_answer() {
        let mut rng = SeededSource::new(41);
        for _ in 0..200 {
            let q = CurrencyGenerator.generate(
                &mut rng,
                &request(Operator::Addition, Difficulty::Easy),
            );
            let (a, b) = q.prompt.text().split_once('+').unwrap();
            let (a, b) = (parse_dollars(a.trim()), parse_dollars(b.trim()));
            assert!((100..=2_000).contains(&a.cents()));
            assert!((100..=2_000).contains(&b.cents()));
            assert_eq!(
                q.answer,
                AnswerValue::Currency(Money::from_cents(a.cents() + b.cents()))
            );
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut rng = SeededSource::new(42);
        for _ in 0..200 {
            let q = CurrencyGenerator.generate(
                &mut rng,
                &request(Operator::Subtraction, Difficulty::Hard),
            );
            assert!(q.canonical_value() >= 0.0);
        }
    }

    #[test]
    fn test_division_splits_to_whole_cents() {
        let mut rng = SeededSource::new(43);
        for _ in 0..200 {
            let q = CurrencyGenerator.generate(
                &mut rng,
                &request(Operator::Division, Difficulty::Hard),
            );
            let (dividend, divisor) = q.prompt.text().split_once('÷').unwrap();
            let dividend = parse_dollars(dividend.trim()).cents();
            let divisor: i64 = divisor.trim().parse().unwrap();
            let AnswerValue::Currency(quotient) = q.answer else {
                panic!("currency generator produced a non-currency answer");
            };
            assert_eq!(quotient.cents() * divisor, dividend);
            assert!((2..=9).contains(&divisor));
        }
    }

    #[test]
    fn test_algebraic_remaps_to_addition() {
        let mut rng = SeededSource::new(44);
        let q = CurrencyGenerator.generate(
            &mut rng,
            &request(Operator::Algebraic, Difficulty::Easy),
        );
        assert_eq!(q.operator, Operator::Addition);
        assert!(q.prompt.text().contains('+'));
    }

    #[test]
    fn test_choices_are_positive_dollar_texts() {
        let mut rng = SeededSource::new(45);
        for _ in 0..100 {
            let q = CurrencyGenerator.generate(
                &mut rng,
                &QuestionRequest {
                    difficulty: Difficulty::Easy,
                    operator: Operator::Subtraction,
                    style: QuestionStyle::MultipleChoice,
                },
            );
            let choices = q.choices.as_ref().unwrap();
            assert_eq!(choices.len(), 2);
            assert!(choices.contains_text(&q.display_answer()));
            for entry in choices.iter() {
                assert!(parse_dollars(entry).cents() >= 1);
            }
        }
    }
}
