// ============================================================================
// Numeric Module
// Exact value types for the five question domains
// ============================================================================
//
// This module provides:
// - FixedDecimal<D> / Money: fixed-point arithmetic, integer cents for currency
// - Fraction: exact rational arithmetic and mixed-number text
// - ClockUnit + clock formatting/parsing for the time domain
// - NumericError: shared error type for arithmetic and parsing
//
// Design principles:
// - No floating point inside arithmetic; f64 appears only at the boundary
//   (canonical answers handed to the session layer)
// - All fallible operations return Result (no panics)
// - Parsing of user-submitted text never throws outward

mod clock;
mod errors;
mod fixed_decimal;
mod fraction;

pub use clock::{format_seconds, minutes_to_clock, parse_clock_answer, seconds_to_clock, ClockUnit};
pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Money};
pub use fraction::Fraction;
