// ============================================================================
// Quiz Engine Library
// Difficulty-scaled math question generation and domain-aware grading
// ============================================================================

//! # Quiz Engine
//!
//! A question generation and grading engine for arithmetic practice across
//! five numeric domains: integers, decimals, fractions, currency, and clock
//! times.
//!
//! ## Features
//!
//! - **Per-domain generators** behind a common strategy interface
//! - **Two difficulty tiers** scaling operand ranges and decimal precision
//! - **Exact construction**: subtraction never goes negative, division never
//!   leaves a remainder, money stays in whole cents
//! - **Multiple-choice distractors** with guaranteed distinctness
//! - **Domain-aware grading**: `"2/4"` matches `1/2`, `"$5.75"` matches
//!   `"5.75"`, `"2:30"` matches 150 seconds
//! - **Seedable randomness** for reproducible batches
//!
//! ## Example
//!
//! ```rust
//! use quiz_engine::prelude::*;
//!
//! let config = QuizConfig::new(5, Difficulty::Easy)
//!     .with_operators(vec![Operator::Addition, Operator::Subtraction])
//!     .with_domains(vec![NumberDomain::Integer, NumberDomain::Currency]);
//!
//! let mut questions = generate_question_batch(&config);
//! assert_eq!(questions.len(), 5);
//!
//! // Grade a submission against the first question's canonical answer
//! let answer = questions[0].display_answer();
//! let correct = questions[0].grade(&answer, 3.2).unwrap();
//! assert!(correct);
//!
//! let summary = ScoreSummary::from_questions(&questions);
//! assert_eq!(summary.graded, 1);
//! ```

pub mod domain;
pub mod engine;
pub mod grading;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AnswerValue, ChoiceSet, Difficulty, Grade, GradingError, NumberDomain, Operator, Prompt,
        Question, QuestionId, QuestionStyle, QuizConfig,
    };
    pub use crate::engine::{
        create_from_config, generate_question_batch, QuizEngine, QuizEngineBuilder,
    };
    pub use crate::grading::{check_submission, ScoreSummary};
    pub use crate::interfaces::{
        QuestionGenerator, QuestionRequest, RandomSource, SeededSource, ThreadRngSource,
    };
    pub use crate::numeric::{ClockUnit, Fraction, Money};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_generate_and_grade_full_batch() {
        let config = QuizConfig::hard_mixed_choice(40);
        let mut engine = QuizEngine::seeded(1001);
        let mut questions = engine.generate_batch(&config);
        assert_eq!(questions.len(), 40);

        // Submitting each question's own display answer always grades correct
        for question in &mut questions {
            let answer = question.display_answer();
            assert_eq!(question.grade(&answer, 1.0), Ok(true));
        }

        let summary = ScoreSummary::from_questions(&questions);
        assert_eq!(summary.graded, 40);
        assert_eq!(summary.correct, 40);
        assert_eq!(summary.accuracy, 1.0);
        assert_eq!(summary.longest_streak, 40);
    }

    #[test]
    fn test_choice_sets_have_exactly_one_correct_entry() {
        let config = QuizConfig::hard_mixed_choice(60);
        let mut engine = QuizEngine::seeded(1002);
        let questions = engine.generate_batch(&config);

        for question in &questions {
            let choices = question.choices.as_ref().unwrap();
            let correct = choices
                .iter()
                .filter(|entry| check_submission(&question.answer, entry))
                .count();
            assert_eq!(correct, 1, "prompt: {}", question.prompt);
        }
    }

    #[test]
    fn test_expression_style_has_no_choices() {
        let config = QuizConfig::mixed_drill(20);
        let mut engine = QuizEngine::seeded(1003);
        for question in engine.generate_batch(&config) {
            assert!(question.choices.is_none());
            assert_eq!(question.style(), QuestionStyle::Expression);
        }
    }

    #[test]
    fn test_wrong_submissions_grade_incorrect() {
        let config = QuizConfig::mixed_drill(20);
        let mut engine = QuizEngine::seeded(1004);
        let mut questions = engine.generate_batch(&config);

        for question in &mut questions {
            assert_eq!(question.grade("not a number", 1.0), Ok(false));
        }

        let summary = ScoreSummary::from_questions(&questions);
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.longest_streak, 0);
    }
}
