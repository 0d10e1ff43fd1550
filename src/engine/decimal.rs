// ============================================================================
// Decimal Question Generator
// Fixed-place decimal arithmetic drawn as scaled integers
// ============================================================================

use crate::domain::{
    AnswerValue, ChoiceSet, Difficulty, NumberDomain, Operator, Prompt, Question, QuestionStyle,
};
use crate::engine::distractor::{build_offset_choices, CHOICE_COUNT};
use crate::interfaces::{QuestionGenerator, QuestionRequest, RandomSource};

/// Decimal question generator.
///
/// Operands carry 1 (easy) or 2 (hard) decimal places and are drawn as
/// scaled integers, so displayed text is always exact. Multiplication
/// results carry twice the operand place count; everything else stays at
/// the operand precision. Ranges mirror the integer generator's.
pub struct DecimalGenerator;

const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Operand decimal places for a difficulty tier.
fn places_for(difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Hard => 2,
    }
}

/// Render a scaled integer with the given place count (handles the
/// `-0.x` case).
fn format_scaled(raw: i64, places: u8) -> String {
    let scale = pow10(places);
    let sign = if raw < 0 { "-" } else { "" };
    let abs = raw.abs();
    format!(
        "{}{}.{:0>width$}",
        sign,
        abs / scale,
        abs % scale,
        width = places as usize
    )
}

fn scaled_to_f64(raw: i64, places: u8) -> f64 {
    raw as f64 / pow10(places) as f64
}

impl DecimalGenerator {
    fn addition(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, AnswerValue) {
        let places = places_for(difficulty);
        let scale = pow10(places);
        let max = match difficulty {
            Difficulty::Easy => 20,
            Difficulty::Hard => 100,
        };
        let a = rng.range_i64(1, max * scale);
        let b = rng.range_i64(1, max * scale);
        (
            Prompt::Expression(format!(
                "{} + {}",
                format_scaled(a, places),
                format_scaled(b, places)
            )),
            AnswerValue::Decimal {
                value: scaled_to_f64(a + b, places),
                places,
            },
        )
    }

    fn subtraction(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, AnswerValue) {
        let places = places_for(difficulty);
        let scale = pow10(places);
        let max = match difficulty {
            Difficulty::Easy => 20,
            Difficulty::Hard => 100,
        };
        let a = rng.range_i64(1, max * scale);
        let b = rng.range_i64(1, a);
        (
            Prompt::Expression(format!(
                "{} - {}",
                format_scaled(a, places),
                format_scaled(b, places)
            )),
            AnswerValue::Decimal {
                value: scaled_to_f64(a - b, places),
                places,
            },
        )
    }

    fn multiplication(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, AnswerValue) {
        let places = places_for(difficulty);
        let scale = pow10(places);
        let max = match difficulty {
            Difficulty::Easy => 10,
            Difficulty::Hard => 25,
        };
        let a = rng.range_i64(1, max * scale);
        let b = rng.range_i64(1, max * scale);
        // The product of two p-place operands is exact at 2p places
        (
            Prompt::Expression(format!(
                "{} × {}",
                format_scaled(a, places),
                format_scaled(b, places)
            )),
            AnswerValue::Decimal {
                value: (a * b) as f64 / (scale * scale) as f64,
                places: places * 2,
            },
        )
    }

    fn division(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, AnswerValue) {
        let places = places_for(difficulty);
        let scale = pow10(places);
        let (max_divisor, max_quotient) = match difficulty {
            Difficulty::Easy => (10, 10),
            Difficulty::Hard => (20, 20),
        };
        // Integer divisor and place-exact quotient; dividend is the exact
        // product so the division never leaves a remainder
        let divisor = rng.range_i64(2, max_divisor);
        let quotient = rng.range_i64(1, max_quotient * scale);
        let dividend = quotient * divisor;
        (
            Prompt::Expression(format!("{} ÷ {}", format_scaled(dividend, places), divisor)),
            AnswerValue::Decimal {
                value: scaled_to_f64(quotient, places),
                places,
            },
        )
    }

    /// Decimal algebra mirrors the integer shapes; the right-hand side is
    /// always computed forward from the drawn operands, never
    /// reverse-engineered from a rounded display value.
    fn algebraic(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, AnswerValue) {
        let places = places_for(difficulty);
        let scale = pow10(places);

        match difficulty {
            Difficulty::Easy => match rng.pick_index(3) {
                0 => {
                    // x + a = b
                    let x = rng.range_i64(1, 10 * scale);
                    let a = rng.range_i64(1, 10 * scale);
                    (
                        Prompt::Equation {
                            text: format!(
                                "x + {} = {}",
                                format_scaled(a, places),
                                format_scaled(x + a, places)
                            ),
                            variable: 'x',
                        },
                        AnswerValue::Decimal {
                            value: scaled_to_f64(x, places),
                            places,
                        },
                    )
                },
                1 => {
                    // x - a = b
                    let a = rng.range_i64(1, 10 * scale);
                    let b = rng.range_i64(0, 10 * scale);
                    (
                        Prompt::Equation {
                            text: format!(
                                "x - {} = {}",
                                format_scaled(a, places),
                                format_scaled(b, places)
                            ),
                            variable: 'x',
                        },
                        AnswerValue::Decimal {
                            value: scaled_to_f64(a + b, places),
                            places,
                        },
                    )
                },
                _ => {
                    // a·x = b with an integer coefficient, exact at p places
                    let a = rng.range_i64(2, 9);
                    let x = rng.range_i64(1, 10 * scale);
                    (
                        Prompt::Equation {
                            text: format!("{}x = {}", a, format_scaled(a * x, places)),
                            variable: 'x',
                        },
                        AnswerValue::Decimal {
                            value: scaled_to_f64(x, places),
                            places,
                        },
                    )
                },
            },
            Difficulty::Hard => {
                // a·x ± b = c
                let a = rng.range_i64(2, 5);
                let x = rng.range_i64(-10 * scale, 15 * scale);
                let b = rng.range_i64(1, 20 * scale);
                let text = if rng.chance(0.5) {
                    format!(
                        "{}x + {} = {}",
                        a,
                        format_scaled(b, places),
                        format_scaled(a * x + b, places)
                    )
                } else {
                    format!(
                        "{}x - {} = {}",
                        a,
                        format_scaled(b, places),
                        format_scaled(a * x - b, places)
                    )
                };
                (
                    Prompt::Equation {
                        text,
                        variable: 'x',
                    },
                    AnswerValue::Decimal {
                        value: scaled_to_f64(x, places),
                        places,
                    },
                )
            },
        }
    }
}

/// Whole-number offset distractors, floored at zero.
///
/// Same policy as the integer distractors: the perturbation is a signed
/// whole unit, well clear of the plain-number grading tolerance. Only the
/// rendering differs, keeping the answer's place count.
pub(crate) fn decimal_choices(
    rng: &mut dyn RandomSource,
    value: f64,
    places: u8,
    difficulty: Difficulty,
) -> ChoiceSet {
    let scale = pow10(places);
    let correct_raw = (value * scale as f64).round() as i64;
    let max_offset = match difficulty {
        Difficulty::Easy => 5,
        Difficulty::Hard => 10,
    };

    build_offset_choices(
        rng,
        format_scaled(correct_raw, places),
        CHOICE_COUNT,
        |rng| {
            let offset = rng.range_i64(1, max_offset) * scale;
            let signed = if rng.chance(0.5) { offset } else { -offset };
            format_scaled((correct_raw + signed).max(0), places)
        },
        |step| format_scaled(correct_raw + step as i64 * scale, places),
    )
}

impl QuestionGenerator for DecimalGenerator {
    fn domain(&self) -> NumberDomain {
        NumberDomain::Decimal
    }

    fn name(&self) -> &str {
        "decimal"
    }

    fn generate(&self, rng: &mut dyn RandomSource, request: &QuestionRequest) -> Question {
        let (prompt, answer) = match request.operator {
            Operator::Subtraction => Self::subtraction(rng, request.difficulty),
            Operator::Multiplication => Self::multiplication(rng, request.difficulty),
            Operator::Division => Self::division(rng, request.difficulty),
            Operator::Algebraic => Self::algebraic(rng, request.difficulty),
            Operator::Addition => Self::addition(rng, request.difficulty),
        };

        let question = Question::new(prompt, request.operator, request.difficulty, answer);

        if request.style == QuestionStyle::MultipleChoice {
            let (value, places) = match question.answer {
                AnswerValue::Decimal { value, places } => (value, places),
                _ => (question.canonical_value(), places_for(request.difficulty)),
            };
            let choices = decimal_choices(rng, value, places, request.difficulty);
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

    #[test]
    fn test_format_scaled() {
        assert_eq!(format_scaled(45, 1), "4.5");
        assert_eq!(format_scaled(4505, 2), "45.05");
        assert_eq!(format_scaled(-5, 1), "-0.5");
        assert_eq!(format_scaled(0, 2), "0.00");
    }

    #[test]
    fn test_addition_display_matches_value() {
        let mut rng = SeededSource::new(21);
        for _ in 0..200 {
            let q = DecimalGenerator.generate(
                &mut rng,
                &request(Operator::Addition, Difficulty::Easy),
            );
            let (a, b) = q.prompt.text().split_once('+').unwrap();
            let sum: f64 = a.trim().parse::<f64>().unwrap() + b.trim().parse::<f64>().unwrap();
            assert!((q.canonical_value() - sum).abs() < 1e-9);
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut rng = SeededSource::new(22);
        for _ in 0..200 {
            let q = DecimalGenerator.generate(
                &mut rng,
                &request(Operator::Subtraction, Difficulty::Hard),
            );
            assert!(q.canonical_value() >= 0.0);
        }
    }

    #[test]
    fn test_division_is_place_exact() {
        let mut rng = SeededSource::new(23);
        for _ in 0..200 {
            let q = DecimalGenerator.generate(
                &mut rng,
                &request(Operator::Division, Difficulty::Hard),
            );
            let (dividend, divisor) = q.prompt.text().split_once('÷').unwrap();
            let dividend: f64 = dividend.trim().parse().unwrap();
            let divisor: f64 = divisor.trim().parse().unwrap();
            assert!((q.canonical_value() * divisor - dividend).abs() < 1e-9);
        }
    }

    #[test]
    fn test_multiplication_doubles_places() {
        let mut rng = SeededSource::new(24);
        let q = DecimalGenerator.generate(
            &mut rng,
            &request(Operator::Multiplication, Difficulty::Hard),
        );
        let AnswerValue::Decimal { places, .. } = q.answer else {
            panic!("decimal generator produced a non-decimal answer");
        };
        assert_eq!(places, 4);
    }

    #[test]
    fn test_algebraic_display_round_trips() {
        let mut rng = SeededSource::new(25);
        for _ in 0..200 {
            let q = DecimalGenerator.generate(
                &mut rng,
                &request(Operator::Algebraic, Difficulty::Hard),
            );
            assert_eq!(q.prompt.variable(), Some('x'));
            let displayed: f64 = q.display_answer().parse().unwrap();
            assert!((displayed - q.canonical_value()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_multiple_choice_shape() {
        let mut rng = SeededSource::new(26);
        for _ in 0..100 {
            let q = DecimalGenerator.generate(
                &mut rng,
                &QuestionRequest {
                    difficulty: Difficulty::Easy,
                    operator: Operator::Addition,
                    style: QuestionStyle::MultipleChoice,
                },
            );
            let choices = q.choices.as_ref().unwrap();
            assert_eq!(choices.len(), 2);
            assert!(choices.contains_text(&q.display_answer()));
        }
    }
}
