// ============================================================================
// Engine Module
// Per-domain question generators and the batch orchestrator
// ============================================================================

pub mod clock;
pub mod currency;
pub mod decimal;
mod distractor;
pub mod factory;
pub mod fraction;
pub mod integer;
pub mod quiz_engine;

pub use clock::ClockGenerator;
pub use currency::CurrencyGenerator;
pub use decimal::DecimalGenerator;
pub use factory::{create_from_config, QuizEngineBuilder};
pub use fraction::FractionGenerator;
pub use integer::IntegerGenerator;
pub use quiz_engine::{generate_question_batch, QuizEngine};
