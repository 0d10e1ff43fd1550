// ============================================================================
// Engine Factory
// Validated construction of engines and batches from configuration
// ============================================================================

use crate::domain::{Difficulty, NumberDomain, Operator, Question, QuestionStyle, QuizConfig};
use crate::engine::quiz_engine::QuizEngine;
use tracing::info;

/// Validate a configuration and generate one batch from it.
///
/// The convenience path for callers holding a deserialized or user-assembled
/// config; engines themselves never re-validate.
pub fn create_from_config(config: &QuizConfig) -> Result<Vec<Question>, String> {
    config.validate()?;

    info!(
        count = config.count,
        difficulty = %config.difficulty,
        "creating batch from config"
    );

    let mut engine = QuizEngine::default();
    Ok(engine.generate_batch(config))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder over [`QuizConfig`] plus an optional seed.
///
/// ```
/// use quiz_engine::engine::QuizEngineBuilder;
/// use quiz_engine::domain::{Difficulty, NumberDomain, Operator};
///
/// let questions = QuizEngineBuilder::new(10, Difficulty::Easy)
///     .operators(vec![Operator::Addition, Operator::Subtraction])
///     .domains(vec![NumberDomain::Currency])
///     .seed(42)
///     .generate()
///     .unwrap();
/// assert_eq!(questions.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct QuizEngineBuilder {
    config: QuizConfig,
    seed: Option<u64>,
}

impl QuizEngineBuilder {
    pub fn new(count: usize, difficulty: Difficulty) -> Self {
        Self {
            config: QuizConfig::new(count, difficulty),
            seed: None,
        }
    }

    /// Start from a preset or externally assembled config.
    pub fn from_config(config: QuizConfig) -> Self {
        Self { config, seed: None }
    }

    pub fn operators(mut self, operators: Vec<Operator>) -> Self {
        self.config.operators = operators;
        self
    }

    pub fn domains(mut self, domains: Vec<NumberDomain>) -> Self {
        self.config.domains = domains;
        self
    }

    pub fn style(mut self, style: QuestionStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Use deterministic randomness; unseeded builders use thread-local
    /// randomness.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The config as assembled so far.
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Build the engine without generating.
    pub fn build_engine(&self) -> QuizEngine {
        match self.seed {
            Some(seed) => QuizEngine::seeded(seed),
            None => QuizEngine::default(),
        }
    }

    /// Validate, build, and generate one batch.
    pub fn generate(&self) -> Result<Vec<Question>, String> {
        self.config.validate()?;
        Ok(self.build_engine().generate_batch(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_valid_config() {
        let batch = create_from_config(&QuizConfig::easy_arithmetic(5)).unwrap();
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = QuizConfig::new(5, Difficulty::Easy)
            .with_operators(vec![Operator::Addition, Operator::Addition]);
        assert!(create_from_config(&config).is_err());
    }

    #[test]
    fn test_builder_assembles_config() {
        let builder = QuizEngineBuilder::new(8, Difficulty::Hard)
            .operators(vec![Operator::Division])
            .domains(vec![NumberDomain::Decimal])
            .style(QuestionStyle::MultipleChoice);

        let config = builder.config();
        assert_eq!(config.count, 8);
        assert_eq!(config.operators, vec![Operator::Division]);
        assert_eq!(config.domains, vec![NumberDomain::Decimal]);
        assert_eq!(config.style, QuestionStyle::MultipleChoice);
    }

    #[test]
    fn test_seeded_builder_is_deterministic() {
        let builder = QuizEngineBuilder::from_config(QuizConfig::mixed_drill(12)).seed(7);
        let a = builder.generate().unwrap();
        let b = builder.generate().unwrap();

        assert_eq!(a.len(), 12);
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.prompt, right.prompt);
            assert_eq!(left.answer, right.answer);
        }
    }
}
