// ============================================================================
// Fraction Question Generator
// Exact rational arithmetic with its own operator draw
// ============================================================================

use crate::domain::{
    AnswerValue, ChoiceSet, Difficulty, NumberDomain, Operator, Prompt, Question, QuestionStyle,
};
use crate::engine::distractor::{CHOICE_COUNT, MAX_ATTEMPTS};
use crate::interfaces::{shuffle, QuestionGenerator, QuestionRequest, RandomSource};
use crate::numeric::Fraction;
use tracing::warn;

/// Fraction question generator.
///
/// Fractions draw their own operator from the four arithmetic operators,
/// ignoring the requested one; the drawn operator is what the question
/// records, so an algebraic request lands on whatever the internal draw
/// picks. All arithmetic is exact rational arithmetic over reduced
/// fractions.
pub struct FractionGenerator;

/// Difficulty tiers for operand draws. `Medium` sits between the two
/// requestable tiers and is only used for distractor draws, so wrong
/// answers do not cluster at the same denominators as the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FractionTier {
    Easy,
    Medium,
    Hard,
}

impl From<Difficulty> for FractionTier {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => FractionTier::Easy,
            Difficulty::Hard => FractionTier::Hard,
        }
    }
}

/// Draw a positive fraction for the tier. Proper fractions keep the
/// numerator below the denominator; improper draws allow numerators up to
/// a tier-scaled multiple of it.
fn generate_fraction(rng: &mut dyn RandomSource, tier: FractionTier, allow_improper: bool) -> Fraction {
    let (max_den, improper_factor) = match tier {
        FractionTier::Easy => (8, 2),
        FractionTier::Medium => (12, 3),
        FractionTier::Hard => (20, 4),
    };

    let den = rng.range_i64(2, max_den);
    let num = if allow_improper {
        rng.range_i64(1, improper_factor * den)
    } else {
        rng.range_i64(1, den - 1)
    };

    // Reduction cannot fail for positive operands in these ranges
    Fraction::new(num, den).unwrap_or_else(|_| Fraction::from_integer(1))
}

impl FractionGenerator {
    fn draw_operator(rng: &mut dyn RandomSource) -> Operator {
        match rng.pick_index(4) {
            0 => Operator::Addition,
            1 => Operator::Subtraction,
            2 => Operator::Multiplication,
            _ => Operator::Division,
        }
    }

    fn build(rng: &mut dyn RandomSource, difficulty: Difficulty) -> (Prompt, Fraction, Operator) {
        let tier = FractionTier::from(difficulty);
        let operator = Self::draw_operator(rng);
        let allow_improper = difficulty == Difficulty::Hard;

        let mut a = generate_fraction(rng, tier, allow_improper);
        let mut b = generate_fraction(rng, tier, allow_improper);

        let answer = match operator {
            Operator::Subtraction => {
                // Keep the difference non-negative by ordering the operands
                if b > a {
                    std::mem::swap(&mut a, &mut b);
                }
                a - b
            },
            Operator::Multiplication => a * b,
            Operator::Division => a / b,
            _ => a + b,
        };

        (
            Prompt::Expression(format!(
                "{} {} {}",
                a.to_mixed_text(),
                operator.symbol(),
                b.to_mixed_text()
            )),
            answer,
            operator,
        )
    }
}

/// One distractor candidate: a small perturbation of the correct value or
/// an unrelated medium-tier draw.
fn perturbed_candidate(rng: &mut dyn RandomSource, correct: Fraction) -> Fraction {
    let (num, den) = (correct.numerator(), correct.denominator());
    let delta = if rng.chance(0.5) { 1 } else { -1 };
    let attempt = match rng.pick_index(3) {
        0 => Fraction::new(num + delta, den),
        1 => Fraction::new(num, den + delta),
        _ => Ok(generate_fraction(rng, FractionTier::Medium, true)),
    };
    attempt.unwrap_or_else(|_| generate_fraction(rng, FractionTier::Medium, true))
}

/// Distractors with value-level distinctness.
///
/// Distinct rationals can render to different mixed-number text while a
/// string-level check would miss equal values written differently, so this
/// loop dedups on the `Fraction` values themselves. Candidates perturb the
/// correct numerator or denominator by one, or draw a fresh medium-tier
/// fraction; the fallback bumps the correct numerator over a fixed
/// denominator.
pub(crate) fn fraction_choices(rng: &mut dyn RandomSource, correct: Fraction) -> ChoiceSet {
    let mut values = vec![correct];
    let mut attempts = 0u32;
    let mut step = 1u32;

    while values.len() < CHOICE_COUNT {
        let candidate = if attempts < MAX_ATTEMPTS {
            attempts += 1;
            perturbed_candidate(rng, correct)
        } else {
            if step == 1 {
                warn!(
                    attempts = MAX_ATTEMPTS,
                    "fraction distractor candidates exhausted, using deterministic fallback"
                );
            }
            let bumped = Fraction::new(correct.numerator() + step as i64, correct.denominator())
                .unwrap_or_else(|_| Fraction::from_integer(step as i64));
            step += 1;
            bumped
        };

        if candidate > Fraction::from_integer(0) && !values.contains(&candidate) {
            values.push(candidate);
        }
    }

    let mut entries: Vec<String> = values.iter().map(Fraction::to_mixed_text).collect();
    shuffle(rng, &mut entries);
    ChoiceSet::new(entries)
}

impl QuestionGenerator for FractionGenerator {
    fn domain(&self) -> NumberDomain {
        NumberDomain::Fraction
    }

    fn name(&self) -> &str {
        "fraction"
    }

    fn generate(&self, rng: &mut dyn RandomSource, request: &QuestionRequest) -> Question {
        let (prompt, answer, operator) = Self::build(rng, request.difficulty);

        let question = Question::new(
            prompt,
            operator,
            request.difficulty,
            AnswerValue::Fraction(answer),
        );

        if request.style == QuestionStyle::MultipleChoice {
            let choices = fraction_choices(rng, answer);
            question.with_choices(choices)
        } else {
            question
        }
    }
}
