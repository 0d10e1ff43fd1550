// ============================================================================
// Quiz Engine
// Batch orchestration over the per-domain generator registry
// ============================================================================

use crate::domain::{NumberDomain, Operator, Question, QuizConfig};
use crate::engine::clock::ClockGenerator;
use crate::engine::currency::CurrencyGenerator;
use crate::engine::decimal::DecimalGenerator;
use crate::engine::fraction::FractionGenerator;
use crate::engine::integer::IntegerGenerator;
use crate::interfaces::{
    choose, QuestionGenerator, QuestionRequest, RandomSource, SeededSource, ThreadRngSource,
};
use tracing::{debug, trace};

/// Number of registered domain generators.
const GENERATOR_COUNT: usize = 5;

/// One generator per numeric domain.
fn default_generators() -> [Box<dyn QuestionGenerator>; GENERATOR_COUNT] {
    [
        Box::new(IntegerGenerator),
        Box::new(DecimalGenerator),
        Box::new(FractionGenerator),
        Box::new(CurrencyGenerator),
        Box::new(ClockGenerator),
    ]
}

/// Registry slot for a domain; the array order is fixed.
fn registry_index(domain: NumberDomain) -> usize {
    match domain {
        NumberDomain::Integer => 0,
        NumberDomain::Decimal => 1,
        NumberDomain::Fraction => 2,
        NumberDomain::Currency => 3,
        NumberDomain::Clock => 4,
    }
}

/// Batch question generator.
///
/// Owns a randomness source and the per-domain generator registry. Every
/// question draws its domain and operator uniformly from the config's
/// effective pools, so two engines seeded identically produce identical
/// batches.
pub struct QuizEngine {
    rng: Box<dyn RandomSource>,
    generators: [Box<dyn QuestionGenerator>; GENERATOR_COUNT],
}

impl QuizEngine {
    /// Create an engine over the given randomness source.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng,
            generators: default_generators(),
        }
    }

    /// Create an engine with a deterministic seed, for reproducible batches.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SeededSource::new(seed)))
    }

    /// Generate `config.count` questions.
    ///
    /// Always returns exactly `count` fully-formed questions; generators are
    /// total over the request space. Presentation order is generation order.
    pub fn generate_batch(&mut self, config: &QuizConfig) -> Vec<Question> {
        let operators = config.effective_operators();
        let domains = config.effective_domains();

        debug!(
            count = config.count,
            difficulty = %config.difficulty,
            style = %config.style,
            operators = operators.len(),
            domains = domains.len(),
            "generating question batch"
        );

        let mut questions = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let operator = choose(self.rng.as_mut(), &operators)
                .copied()
                .unwrap_or(Operator::Addition);
            let domain = choose(self.rng.as_mut(), &domains)
                .copied()
                .unwrap_or(NumberDomain::Integer);

            let request = QuestionRequest {
                difficulty: config.difficulty,
                operator,
                style: config.style,
            };

            let generator = &self.generators[registry_index(domain)];
            let question = generator.generate(self.rng.as_mut(), &request);

            trace!(
                id = %question.id,
                generator = generator.name(),
                operator = %question.operator,
                prompt = %question.prompt,
                "generated question"
            );
            questions.push(question);
        }

        questions
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new(Box::new(ThreadRngSource))
    }
}

/// Generate one batch with thread-local randomness.
///
/// Convenience entry point for callers that do not need a reusable or
/// seeded engine.
pub fn generate_question_batch(config: &QuizConfig) -> Vec<Question> {
    QuizEngine::default().generate_batch(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Operator, QuestionStyle};

    #[test]
    fn test_batch_count_and_defaults() {
        let mut engine = QuizEngine::seeded(61);
        let config = QuizConfig::new(7, Difficulty::Easy);
        let batch = engine.generate_batch(&config);

        assert_eq!(batch.len(), 7);
        for q in &batch {
            // Empty selections fall back to integer addition
            assert_eq!(q.domain(), NumberDomain::Integer);
            assert_eq!(q.operator, Operator::Addition);
            assert_eq!(q.difficulty, Difficulty::Easy);
            assert!(q.choices.is_none());
        }
    }

    #[test]
    fn test_selections_are_respected() {
        let mut engine = QuizEngine::seeded(62);
        let config = QuizConfig::new(50, Difficulty::Hard)
            .with_operators(vec![Operator::Multiplication, Operator::Division])
            .with_domains(vec![NumberDomain::Currency, NumberDomain::Clock])
            .with_style(QuestionStyle::MultipleChoice);
        let batch = engine.generate_batch(&config);

        assert_eq!(batch.len(), 50);
        for q in &batch {
            assert!(matches!(
                q.domain(),
                NumberDomain::Currency | NumberDomain::Clock
            ));
            assert!(matches!(
                q.operator,
                Operator::Multiplication | Operator::Division
            ));
            assert_eq!(q.choices.as_ref().unwrap().len(), 2);
        }
    }

    #[test]
    fn test_seeded_batches_are_reproducible() {
        let config = QuizConfig::hard_mixed_choice(30);
        let a = QuizEngine::seeded(63).generate_batch(&config);
        let b = QuizEngine::seeded(63).generate_batch(&config);

        assert_eq!(a.len(), b.len());
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.prompt, right.prompt);
            assert_eq!(left.answer, right.answer);
            assert_eq!(left.choices, right.choices);
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let config = QuizConfig::mixed_drill(20);
        let a = QuizEngine::seeded(64).generate_batch(&config);
        let b = QuizEngine::seeded(65).generate_batch(&config);

        let prompts_a: Vec<_> = a.iter().map(|q| q.prompt.text().to_string()).collect();
        let prompts_b: Vec<_> = b.iter().map(|q| q.prompt.text().to_string()).collect();
        assert_ne!(prompts_a, prompts_b);
    }

    #[test]
    fn test_every_domain_gets_generated() {
        let mut engine = QuizEngine::seeded(66);
        let config = QuizConfig::hard_mixed_choice(200);
        let batch = engine.generate_batch(&config);

        for domain in [
            NumberDomain::Integer,
            NumberDomain::Decimal,
            NumberDomain::Fraction,
            NumberDomain::Currency,
            NumberDomain::Clock,
        ] {
            assert!(batch.iter().any(|q| q.domain() == domain));
        }
    }
}
