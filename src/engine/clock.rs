// ============================================================================
// Clock Question Generator
// Duration arithmetic in minutes:seconds and hours:minutes
// ============================================================================

use crate::domain::{
    AnswerValue, ChoiceSet, Difficulty, NumberDomain, Operator, Prompt, Question, QuestionStyle,
};
use crate::engine::distractor::{build_offset_choices, CHOICE_COUNT};
use crate::interfaces::{QuestionGenerator, QuestionRequest, RandomSource};
use crate::numeric::{format_seconds, ClockUnit};

/// Clock question generator.
///
/// Each question picks one of the two display units. Answer parsing at
/// grading time infers the unit from whether the expected answer exceeds
/// 3600 seconds, so generation keeps the two modes on their own side of
/// that line: `MinSec` answers never exceed an hour, and `HourMin` values
/// are whole minutes with answers always above an hour. Prompt operands are
/// not constrained the same way (a dividend may render as `"75:00"`), only
/// answers are. Algebraic requests are remapped to addition.
pub struct ClockGenerator;

impl ClockGenerator {
    /// Draw a minutes:seconds operand for addition and subtraction.
    fn min_sec_operand(rng: &mut dyn RandomSource, difficulty: Difficulty) -> i64 {
        let max_minutes = match difficulty {
            Difficulty::Easy => 10,
            // Capped so even the sum of two operands stays under an hour
            Difficulty::Hard => 25,
        };
        rng.range_i64(1, max_minutes) * 60 + rng.range_i64(0, 59)
    }

    /// Draw an hours:minutes operand in whole minutes.
    fn hour_min_operand(rng: &mut dyn RandomSource, difficulty: Difficulty) -> i64 {
        let max_hours = match difficulty {
            Difficulty::Easy => 3,
            Difficulty::Hard => 9,
        };
        rng.range_i64(1, max_hours) * 60 + rng.range_i64(0, 59)
    }

    fn factor(rng: &mut dyn RandomSource, difficulty: Difficulty) -> i64 {
        let max = match difficulty {
            Difficulty::Easy => 5,
            Difficulty::Hard => 9,
        };
        rng.range_i64(2, max)
    }

    fn binary_prompt(a_seconds: i64, symbol: &str, b_seconds: i64, unit: ClockUnit) -> Prompt {
        Prompt::Expression(format!(
            "{} {} {}",
            format_seconds(a_seconds, unit),
            symbol,
            format_seconds(b_seconds, unit)
        ))
    }

    fn scalar_prompt(seconds: i64, symbol: &str, factor: i64, unit: ClockUnit) -> Prompt {
        Prompt::Expression(format!(
            "{} {} {}",
            format_seconds(seconds, unit),
            symbol,
            factor
        ))
    }

    /// Generate in minutes:seconds mode; the answer stays at or below 3600
    /// seconds for every operator.
    fn min_sec(
        rng: &mut dyn RandomSource,
        operator: Operator,
        difficulty: Difficulty,
    ) -> (Prompt, i64) {
        let unit = ClockUnit::MinSec;
        match operator {
            Operator::Subtraction => {
                let mut a = Self::min_sec_operand(rng, difficulty);
                let mut b = Self::min_sec_operand(rng, difficulty);
                if b > a {
                    std::mem::swap(&mut a, &mut b);
                }
                (Self::binary_prompt(a, "-", b, unit), a - b)
            },
            Operator::Multiplication => {
                // Product capped at one hour: 400 * 9 == 3600
                let max_seconds = match difficulty {
                    Difficulty::Easy => 600,
                    Difficulty::Hard => 400,
                };
                let amount = rng.range_i64(30, max_seconds);
                let factor = Self::factor(rng, difficulty);
                (
                    Self::scalar_prompt(amount, "×", factor, unit),
                    amount * factor,
                )
            },
            Operator::Division => {
                let max_seconds = match difficulty {
                    Difficulty::Easy => 600,
                    Difficulty::Hard => 400,
                };
                let quotient = rng.range_i64(30, max_seconds);
                let divisor = Self::factor(rng, difficulty);
                (
                    Self::scalar_prompt(quotient * divisor, "÷", divisor, unit),
                    quotient,
                )
            },
            _ => {
                let a = Self::min_sec_operand(rng, difficulty);
                let b = Self::min_sec_operand(rng, difficulty);
                (Self::binary_prompt(a, "+", b, unit), a + b)
            },
        }
    }

    /// Generate in hours:minutes mode; everything is whole minutes and the
    /// answer always exceeds 3600 seconds.
    fn hour_min(
        rng: &mut dyn RandomSource,
        operator: Operator,
        difficulty: Difficulty,
    ) -> (Prompt, i64) {
        let unit = ClockUnit::HourMin;
        let max_hours = match difficulty {
            Difficulty::Easy => 3,
            Difficulty::Hard => 9,
        };
        match operator {
            Operator::Subtraction => {
                // Difference drawn first and kept above an hour
                let b = Self::hour_min_operand(rng, difficulty);
                let diff = rng.range_i64(61, max_hours * 60);
                let a = b + diff;
                (Self::binary_prompt(a * 60, "-", b * 60, unit), diff * 60)
            },
            Operator::Multiplication => {
                let amount = rng.range_i64(61, max_hours * 60);
                let factor = Self::factor(rng, difficulty);
                (
                    Self::scalar_prompt(amount * 60, "×", factor, unit),
                    amount * factor * 60,
                )
            },
            Operator::Division => {
                let quotient = rng.range_i64(61, max_hours * 60);
                let divisor = Self::factor(rng, difficulty);
                (
                    Self::scalar_prompt(quotient * divisor * 60, "÷", divisor, unit),
                    quotient * 60,
                )
            },
            _ => {
                let a = Self::hour_min_operand(rng, difficulty);
                let b = Self::hour_min_operand(rng, difficulty);
                (Self::binary_prompt(a * 60, "+", b * 60, unit), (a + b) * 60)
            },
        }
    }
}

/// Offset distractors in the answer's display unit.
///
/// `MinSec` perturbs by 30 to 330 seconds clamped to non-negative; `HourMin`
/// perturbs by 1 to 5 whole minutes so every entry stays minute-aligned.
pub(crate) fn clock_choices(
    rng: &mut dyn RandomSource,
    correct_seconds: i64,
    unit: ClockUnit,
) -> ChoiceSet {
    match unit {
        ClockUnit::MinSec => build_offset_choices(
            rng,
            format_seconds(correct_seconds, unit),
            CHOICE_COUNT,
            |rng| {
                let offset = rng.range_i64(30, 330);
                let signed = if rng.chance(0.5) { offset } else { -offset };
                format_seconds((correct_seconds + signed).max(0), unit)
            },
            |step| format_seconds(correct_seconds + step as i64, unit),
        ),
        ClockUnit::HourMin => build_offset_choices(
            rng,
            format_seconds(correct_seconds, unit),
            CHOICE_COUNT,
            |rng| {
                let offset = rng.range_i64(1, 5) * 60;
                let signed = if rng.chance(0.5) { offset } else { -offset };
                format_seconds((correct_seconds + signed).max(60), unit)
            },
            |step| format_seconds(correct_seconds + step as i64 * 60, unit),
        ),
    }
}

impl QuestionGenerator for ClockGenerator {
    fn domain(&self) -> NumberDomain {
        NumberDomain::Clock
    }

    fn name(&self) -> &str {
        "clock"
    }

    fn generate(&self, rng: &mut dyn RandomSource, request: &QuestionRequest) -> Question {
        let operator = match request.operator {
            Operator::Algebraic => Operator::Addition,
            other => other,
        };

        let unit = if rng.chance(0.5) {
            ClockUnit::MinSec
        } else {
            ClockUnit::HourMin
        };

        let (prompt, seconds) = match unit {
            ClockUnit::MinSec => Self::min_sec(rng, operator, request.difficulty),
            ClockUnit::HourMin => Self::hour_min(rng, operator, request.difficulty),
        };

        let question = Question::new(
            prompt,
            operator,
            request.difficulty,
            AnswerValue::Clock { seconds, unit },
        );

        if request.style == QuestionStyle::MultipleChoice {
            let choices = clock_choices(rng, seconds, unit);
            question.with_choices(choices)
        } else {
            question
        }
    }
}
