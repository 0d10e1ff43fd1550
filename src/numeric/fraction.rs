// ============================================================================
// Fraction
// Exact rational arithmetic for fraction questions and answer grading
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact rational value.
///
/// Always held in reduced form with a positive denominator and the sign on
/// the numerator, so derived equality is rational equality: `1/2 == 2/4`
/// after construction. Never backed by floating point; `to_f64` exists only
/// to hand a canonical plain number to the session layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };

    /// One (1/1)
    pub const ONE: Fraction = Fraction { num: 1, den: 1 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a reduced fraction.
    ///
    /// A negative denominator moves its sign to the numerator.
    ///
    /// # Errors
    /// `DivisionByZero` if the denominator is zero.
    pub fn new(num: i64, den: i64) -> NumericResult<Self> {
        Self::from_i128(num as i128, den as i128)
    }

    /// Create a whole-number fraction (n/1).
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    /// Reduce an i128 ratio and narrow back to i64.
    fn from_i128(num: i128, den: i128) -> NumericResult<Self> {
        if den == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let sign = if (num < 0) != (den < 0) && num != 0 {
            -1
        } else {
            1
        };
        let (num, den) = (num.unsigned_abs(), den.unsigned_abs());

        let mut a = num;
        let mut b = den;
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        let g = if a == 0 { 1 } else { a };

        let num = (num / g) as i128 * sign as i128;
        let den = (den / g) as i128;

        if num > i64::MAX as i128 || num < i64::MIN as i128 || den > i64::MAX as i128 {
            return Err(NumericError::Overflow);
        }

        Ok(Self {
            num: num as i64,
            den: den as i64,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn numerator(self) -> i64 {
        self.num
    }

    #[inline]
    pub const fn denominator(self) -> i64 {
        self.den
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.num > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    /// True when |value| >= 1 and the denominator is not 1.
    #[inline]
    pub const fn is_improper(self) -> bool {
        self.den != 1 && self.num.abs() >= self.den
    }

    /// Decimal value of the rational (the canonical plain number).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        Self::from_i128(
            self.num as i128 * rhs.den as i128 + rhs.num as i128 * self.den as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Checked subtraction.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        Self::from_i128(
            self.num as i128 * rhs.den as i128 - rhs.num as i128 * self.den as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Checked multiplication.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Self::from_i128(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// Checked division. Always an exact rational quotient.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Self::from_i128(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    // ========================================================================
    // Mixed-Number Rendering
    // ========================================================================

    /// Render as mixed-number text.
    ///
    /// - denominator 1: bare integer (`"3"`, `"-2"`)
    /// - proper fraction: `"n/d"` (`"3/4"`, `"-3/4"`)
    /// - improper fraction: `"w n/d"` with the sign on the whole part only
    ///   (`"2 1/4"`, `"-2 1/4"`)
    pub fn to_mixed_text(&self) -> String {
        if self.den == 1 {
            return self.num.to_string();
        }

        let whole = self.num / self.den;
        let rem = (self.num % self.den).abs();

        if whole == 0 {
            if self.num < 0 {
                format!("-{}/{}", rem, self.den)
            } else {
                format!("{}/{}", rem, self.den)
            }
        } else {
            format!("{} {}/{}", whole, rem, self.den)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Fraction {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    /// Cross-multiplied comparison; denominators are always positive.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in production)
impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Fraction addition overflow")
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("Fraction subtraction overflow")
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("Fraction multiplication overflow")
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("Fraction division by zero or overflow")
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_mixed_text())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Fraction {
    type Err = NumericError;

    /// Parse mixed-number text.
    ///
    /// Accepts bare integers (`"3"`), plain fractions (`"3/4"`), and mixed
    /// numbers (`"2 1/4"`, `"-2 1/4"`). Never panics.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();

        match parts.len() {
            1 => parse_simple(parts[0]),
            2 => {
                let whole: i64 = parts[0].parse().map_err(|_| NumericError::InvalidInput)?;
                let frac = parse_simple(parts[1])?;
                if frac.is_negative() {
                    return Err(NumericError::InvalidInput);
                }

                let magnitude = Fraction::from_integer(whole.abs()).checked_add(frac)?;
                if whole < 0 || parts[0].starts_with('-') {
                    Ok(-magnitude)
                } else {
                    Ok(magnitude)
                }
            },
            _ => Err(NumericError::InvalidInput),
        }
    }
}

/// Parse `"n"` or `"n/d"` (no embedded whitespace).
fn parse_simple(s: &str) -> NumericResult<Fraction> {
    if s.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    match s.split_once('/') {
        Some((num, den)) => {
            let num: i64 = num.parse().map_err(|_| NumericError::InvalidInput)?;
            let den: i64 = den.parse().map_err(|_| NumericError::InvalidInput)?;
            Fraction::new(num, den)
        },
        None => {
            let value: i64 = s.parse().map_err(|_| NumericError::InvalidInput)?;
            Ok(Fraction::from_integer(value))
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
