// ============================================================================
// Integer Question Generator
// Whole-number arithmetic and algebra with difficulty-scaled ranges
// ============================================================================

use crate::domain::{
    AnswerValue, ChoiceSet, Difficulty, NumberDomain, Operator, Prompt, Question, QuestionStyle,
};
use crate::engine::distractor::{build_offset_choices, CHOICE_COUNT};
use crate::interfaces::{QuestionGenerator, QuestionRequest, RandomSource};

/// Integer question generator.
///
/// Operand ranges by difficulty:
/// - addition/subtraction: 1..=20 easy, 1..=100 hard
/// - multiplication: 1..=10 easy, 1..=25 hard
/// - division: divisor 2..=10 easy, 2..=20 hard; quotient drawn in the same
///   range starting at 1, dividend formed as the exact product
/// - algebraic: single-step `x + a = b` / `x - a = b` / `a·x = b` (easy),
///   two-step `a·x ± b = c` with a in 2..=5 and x in -10..=15 (hard)
pub struct IntegerGenerator;

impl IntegerGenerator {
    fn addition(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let max = match difficulty {
            Difficulty::Easy => 20,
            Difficulty::Hard => 100,
        };
        let a = rng.range_i64(1, max);
        let b = rng.range_i64(1, max);
        (Prompt::Expression(format!("{} + {}", a, b)), a + b)
    }

    fn subtraction(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let max = match difficulty {
            Difficulty::Easy => 20,
            Difficulty::Hard => 100,
        };
        let a = rng.range_i64(1, max);
        // Second operand bounded by the first so the result is never negative
        let b = rng.range_i64(1, a);
        (Prompt::Expression(format!("{} - {}", a, b)), a - b)
    }

    fn multiplication(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let max = match difficulty {
            Difficulty::Easy => 10,
            Difficulty::Hard => 25,
        };
        let a = rng.range_i64(1, max);
        let b = rng.range_i64(1, max);
        (Prompt::Expression(format!("{} × {}", a, b)), a * b)
    }

    fn division(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        let max = match difficulty {
            Difficulty::Easy => 10,
            Difficulty::Hard => 20,
        };
        // Divisor and quotient first; the dividend is their exact product
        let divisor = rng.range_i64(2, max);
        let quotient = rng.range_i64(1, max);
        let dividend = divisor * quotient;
        (
            Prompt::Expression(format!("{} ÷ {}", dividend, divisor)),
            quotient,
        )
    }

    fn algebraic(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, i64) {
        match difficulty {
            Difficulty::Easy => Self::algebraic_easy(rng),
            Difficulty::Hard => Self::algebraic_hard(rng),
        }
    }

    /// Single-step equations with a positive or non-negative solution.
    fn algebraic_easy(rng: &mut dyn RandomSource) -> (Prompt, i64) {
        match rng.pick_index(3) {
            0 => {
                // x + a = b
                let x = rng.range_i64(1, 10);
                let a = rng.range_i64(1, 10);
                (
                    Prompt::Equation {
                        text: format!("x + {} = {}", a, x + a),
                        variable: 'x',
                    },
                    x,
                )
            },
            1 => {
                // x - a = b, solution x = a + b stays positive
                let a = rng.range_i64(1, 10);
                let b = rng.range_i64(0, 10);
                (
                    Prompt::Equation {
                        text: format!("x - {} = {}", a, b),
                        variable: 'x',
                    },
                    a + b,
                )
            },
            _ => {
                // a·x = b
                let a = rng.range_i64(2, 9);
                let x = rng.range_i64(1, 10);
                (
                    Prompt::Equation {
                        text: format!("{}x = {}", a, a * x),
                        variable: 'x',
                    },
                    x,
                )
            },
        }
    }

    /// Two-step equations; negative solutions allowed.
    fn algebraic_hard(rng: &mut dyn RandomSource) -> (Prompt, i64) {
        let a = rng.range_i64(2, 5);
        let x = rng.range_i64(-10, 15);
        let b = rng.range_i64(1, 20);

        let text = if rng.chance(0.5) {
            format!("{}x + {} = {}", a, b, a * x + b)
        } else {
            format!("{}x - {} = {}", a, b, a * x - b)
        };

        (
            Prompt::Equation {
                text,
                variable: 'x',
            },
            x,
        )
    }
}

/// Offset-perturbed distractors, floored at zero.
pub(crate) fn integer_choices(
    rng: &mut dyn RandomSource,
    correct: i64,
    difficulty: Difficulty,
) -> ChoiceSet {
    let max_offset = match difficulty {
        Difficulty::Easy => 5,
        Difficulty::Hard => 10,
    };

    build_offset_choices(
        rng,
        correct.to_string(),
        CHOICE_COUNT,
        |rng| {
            let offset = rng.range_i64(1, max_offset);
            let signed = if rng.chance(0.5) { offset } else { -offset };
            (correct + signed).max(0).to_string()
        },
        |step| (correct + step as i64).to_string(),
    )
}

impl QuestionGenerator for IntegerGenerator {
    fn domain(&self) -> NumberDomain {
        NumberDomain::Integer
    }

    fn name(&self) -> &str {
        "integer"
    }

    fn generate(&self, rng: &mut dyn RandomSource, request: &QuestionRequest) -> Question {
        let (prompt, value) = match request.operator {
            Operator::Subtraction => Self::subtraction(rng, request.difficulty),
            Operator::Multiplication => Self::multiplication(rng, request.difficulty),
            Operator::Division => Self::division(rng, request.difficulty),
            Operator::Algebraic => Self::algebraic(rng, request.difficulty),
            Operator::Addition => Self::addition(rng, request.difficulty),
        };

        let question = Question::new(
            prompt,
            request.operator,
            request.difficulty,
            AnswerValue::Integer(value),
        );

        if request.style == QuestionStyle::MultipleChoice {
            let choices = integer_choices(rng, value, request.difficulty);
            question.with_choices(choices)
        } else {
            question
        }
    }
}
