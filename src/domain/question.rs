// ============================================================================
// Question Domain Model
// ============================================================================

use crate::domain::answer::{AnswerValue, ChoiceSet};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Opaque question identifier, stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuestionId(Uuid);

impl QuestionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty tier scaling operand ranges and decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Arithmetic operation a question exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// Solve-for-unknown equations; only integers and decimals support it.
    Algebraic,
}

impl Operator {
    /// Infix glyph used in prompt text. `Algebraic` prompts render as
    /// equations, so its glyph is the equals sign.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Addition => "+",
            Operator::Subtraction => "-",
            Operator::Multiplication => "×",
            Operator::Division => "÷",
            Operator::Algebraic => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Addition => write!(f, "addition"),
            Operator::Subtraction => write!(f, "subtraction"),
            Operator::Multiplication => write!(f, "multiplication"),
            Operator::Division => write!(f, "division"),
            Operator::Algebraic => write!(f, "algebraic"),
        }
    }
}

/// Numeric representation family of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberDomain {
    Integer,
    Decimal,
    Fraction,
    Currency,
    Clock,
}

impl fmt::Display for NumberDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberDomain::Integer => write!(f, "integer"),
            NumberDomain::Decimal => write!(f, "decimal"),
            NumberDomain::Fraction => write!(f, "fraction"),
            NumberDomain::Currency => write!(f, "currency"),
            NumberDomain::Clock => write!(f, "clock"),
        }
    }
}

/// How a question is presented and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuestionStyle {
    /// Free-form answer to an expression or equation
    Expression,
    /// Pick one of the offered choices
    MultipleChoice,
}

impl fmt::Display for QuestionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionStyle::Expression => write!(f, "expression"),
            QuestionStyle::MultipleChoice => write!(f, "multiple-choice"),
        }
    }
}

/// Human-readable prompt, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prompt {
    /// An expression to evaluate, e.g. `"4 + 3"` or `"$4.50 + $2.25"`
    Expression(String),
    /// An equation to solve for `variable`, e.g. `"3x + 2 = 11"`
    Equation { text: String, variable: char },
}

impl Prompt {
    pub fn text(&self) -> &str {
        match self {
            Prompt::Expression(text) => text,
            Prompt::Equation { text, .. } => text,
        }
    }

    /// The unknown being solved for, present only for equations.
    pub fn variable(&self) -> Option<char> {
        match self {
            Prompt::Expression(_) => None,
            Prompt::Equation { variable, .. } => Some(*variable),
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

// ============================================================================
// Grading State
// ============================================================================

/// Recorded outcome of a grading transition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grade {
    /// The raw text the user submitted
    pub submitted: String,
    pub is_correct: bool,
    pub time_spent_secs: f64,
    pub graded_at: DateTime<Utc>,
}

/// Errors from the one-shot grading transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingError {
    /// The question has already been graded
    AlreadyGraded,
}

impl fmt::Display for GradingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradingError::AlreadyGraded => write!(f, "question has already been graded"),
        }
    }
}

impl std::error::Error for GradingError {}

// ============================================================================
// Question Entity
// ============================================================================

/// The unit of work and the unit of grading.
///
/// Immutable once generated, except for the grading record which transitions
/// exactly once from ungraded to graded via [`Question::grade`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Question {
    pub id: QuestionId,
    pub prompt: Prompt,
    /// The operator that actually produced this question (after any
    /// domain-internal remapping)
    pub operator: Operator,
    pub difficulty: Difficulty,
    /// Canonical answer, tagged by domain
    pub answer: AnswerValue,
    /// Candidate answers, present only for multiple-choice style
    pub choices: Option<ChoiceSet>,
    pub generated_at: DateTime<Utc>,

    grade: Option<Grade>,
}

impl Question {
    pub fn new(
        prompt: Prompt,
        operator: Operator,
        difficulty: Difficulty,
        answer: AnswerValue,
    ) -> Self {
        Self {
            id: QuestionId::new(),
            prompt,
            operator,
            difficulty,
            answer,
            choices: None,
            generated_at: Utc::now(),
            grade: None,
        }
    }

    /// Builder method: attach a multiple-choice set.
    pub fn with_choices(mut self, choices: ChoiceSet) -> Self {
        self.choices = Some(choices);
        self
    }

    // ========================================================================
    // Derived Accessors
    // ========================================================================

    /// Numeric domain, derived from the answer's variant.
    pub fn domain(&self) -> NumberDomain {
        self.answer.domain()
    }

    /// Presentation style, derived from the presence of choices.
    pub fn style(&self) -> QuestionStyle {
        if self.choices.is_some() {
            QuestionStyle::MultipleChoice
        } else {
            QuestionStyle::Expression
        }
    }

    /// Domain-formatted answer text (mixed-number text, `"$x.xx"`,
    /// `"M:SS"`/`"H:MM"`, or a plain number).
    pub fn display_answer(&self) -> String {
        self.answer.display_text()
    }

    /// Canonical answer as a plain number (dollars for currency, total
    /// seconds for time, the decimal value of a rational for fractions).
    pub fn canonical_value(&self) -> f64 {
        self.answer.canonical_value()
    }

    // ========================================================================
    // Grading
    // ========================================================================

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    pub fn grade_record(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    /// Convenience view of the grading outcome, `None` while ungraded.
    pub fn is_correct(&self) -> Option<bool> {
        self.grade.as_ref().map(|g| g.is_correct)
    }

    /// Grade a submitted answer against the canonical one.
    ///
    /// Validates via the domain's equality rule and records the result.
    /// A malformed submission grades as incorrect, never as an error.
    ///
    /// # Errors
    /// `AlreadyGraded` if the one-shot transition is replayed.
    pub fn grade(
        &mut self,
        submitted: &str,
        time_spent_secs: f64,
    ) -> Result<bool, GradingError> {
        if self.grade.is_some() {
            return Err(GradingError::AlreadyGraded);
        }

        let is_correct = crate::grading::check_submission(&self.answer, submitted);
        self.grade = Some(Grade {
            submitted: submitted.to_string(),
            is_correct,
            time_spent_secs,
            graded_at: Utc::now(),
        });

        Ok(is_correct)
    }
}
