// ============================================================================
// Quiz Configuration
// Configuration for question batch generation
// ============================================================================

use crate::domain::question::{Difficulty, NumberDomain, Operator, QuestionStyle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a question batch.
///
/// `operators` and `domains` are selection sets; an empty set falls back to
/// `[Addition]` / `[Integer]` at generation time, so a config round-trips
/// through storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuizConfig {
    /// Number of questions to generate
    pub count: usize,

    /// Difficulty tier applied to every question
    pub difficulty: Difficulty,

    /// Operators to draw from (empty means addition only)
    pub operators: Vec<Operator>,

    /// Presentation style for the whole batch
    pub style: QuestionStyle,

    /// Numeric domains to draw from (empty means integers only)
    pub domains: Vec<NumberDomain>,
}

impl QuizConfig {
    /// Create a configuration with required parameters; operators, style and
    /// domains take their defaults until set by builder methods.
    pub fn new(count: usize, difficulty: Difficulty) -> Self {
        Self {
            count,
            difficulty,
            operators: Vec::new(),
            style: QuestionStyle::Expression,
            domains: Vec::new(),
        }
    }

    /// Builder method: set the operator selection.
    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = operators;
        self
    }

    /// Builder method: set the domain selection.
    pub fn with_domains(mut self, domains: Vec<NumberDomain>) -> Self {
        self.domains = domains;
        self
    }

    /// Builder method: set the presentation style.
    pub fn with_style(mut self, style: QuestionStyle) -> Self {
        self.style = style;
        self
    }

    /// Operator pool actually drawn from: the selection, or `[Addition]`
    /// when the selection is empty.
    pub fn effective_operators(&self) -> Vec<Operator> {
        if self.operators.is_empty() {
            vec![Operator::Addition]
        } else {
            self.operators.clone()
        }
    }

    /// Domain pool actually drawn from: the selection, or `[Integer]` when
    /// the selection is empty.
    pub fn effective_domains(&self) -> Vec<NumberDomain> {
        if self.domains.is_empty() {
            vec![NumberDomain::Integer]
        } else {
            self.domains.clone()
        }
    }

    /// Validate the configuration.
    ///
    /// The selections are sets; duplicates would silently skew the uniform
    /// operator/domain draws.
    pub fn validate(&self) -> Result<(), String> {
        for (i, operator) in self.operators.iter().enumerate() {
            if self.operators[..i].contains(operator) {
                return Err(format!("duplicate operator selection: {}", operator));
            }
        }

        for (i, domain) in self.domains.iter().enumerate() {
            if self.domains[..i].contains(domain) {
                return Err(format!("duplicate domain selection: {}", domain));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl QuizConfig {
    /// Easy integer addition and subtraction, free-form answers.
    pub fn easy_arithmetic(count: usize) -> Self {
        Self::new(count, Difficulty::Easy)
            .with_operators(vec![Operator::Addition, Operator::Subtraction])
            .with_domains(vec![NumberDomain::Integer])
    }

    /// All four base operators across integers, decimals and fractions.
    pub fn mixed_drill(count: usize) -> Self {
        Self::new(count, Difficulty::Easy)
            .with_operators(vec![
                Operator::Addition,
                Operator::Subtraction,
                Operator::Multiplication,
                Operator::Division,
            ])
            .with_domains(vec![
                NumberDomain::Integer,
                NumberDomain::Decimal,
                NumberDomain::Fraction,
            ])
    }

    /// Hard multiple-choice questions over every operator and domain.
    pub fn hard_mixed_choice(count: usize) -> Self {
        Self::new(count, Difficulty::Hard)
            .with_operators(vec![
                Operator::Addition,
                Operator::Subtraction,
                Operator::Multiplication,
                Operator::Division,
                Operator::Algebraic,
            ])
            .with_domains(vec![
                NumberDomain::Integer,
                NumberDomain::Decimal,
                NumberDomain::Fraction,
                NumberDomain::Currency,
                NumberDomain::Clock,
            ])
            .with_style(QuestionStyle::MultipleChoice)
    }
}
