// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod generator;
mod rng;

pub use generator::{QuestionGenerator, QuestionRequest};
pub use rng::{choose, shuffle, RandomSource, SeededSource, ThreadRngSource};
