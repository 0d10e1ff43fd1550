// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod answer;
pub mod config;
pub mod question;

pub use answer::{AnswerValue, ChoiceSet};
pub use config::QuizConfig;
pub use question::{
    Difficulty, Grade, GradingError, NumberDomain, Operator, Prompt, Question, QuestionId,
    QuestionStyle,
};
