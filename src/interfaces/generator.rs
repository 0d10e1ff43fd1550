// ============================================================================
// Question Generator Interface
// Defines the contract for per-domain question generators
// ============================================================================

use crate::domain::{Difficulty, NumberDomain, Operator, Question, QuestionStyle};
use crate::interfaces::RandomSource;

/// A single generation request, as drawn by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRequest {
    pub difficulty: Difficulty,
    pub operator: Operator,
    pub style: QuestionStyle,
}

/// Strategy pattern interface for per-domain question generators.
/// Implementations: Integer, Decimal, Fraction, Currency, Clock.
///
/// Generators are total: for any request they return a fully-formed
/// `Question`, never an error. Operators a domain cannot express are
/// remapped internally (currency/clock treat `Algebraic` as `Addition`;
/// the fraction generator re-rolls its own operator entirely).
pub trait QuestionGenerator: Send + Sync {
    /// The numeric domain this generator produces questions for.
    fn domain(&self) -> NumberDomain;

    /// Generator name for logging.
    fn name(&self) -> &str;

    /// Produce one question. Attaches a two-entry choice set when the
    /// request's style is multiple-choice.
    fn generate(&self, rng: &mut dyn RandomSource, request: &QuestionRequest) -> Question;
}
