//! Plain rational-number arithmetic.
//!
//! A [`Fract`] is a numerator/denominator pair with the four arithmetic
//! operations against other fractions and against integers, plus a
//! reciprocal. No reduction or normalisation is performed: `2/4` stays
//! `2/4`, and the sign lives wherever the arithmetic put it. Callers that
//! need canonical forms reduce themselves.
//!
//! Nothing here shares state with the rest of the toolkit.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A fraction: numerator over denominator.
///
/// The denominator is not checked for zero; dividing by a fraction with a
/// zero numerator, or reciprocating `0/x`, produces a zero denominator
/// that the caller must handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fract {
    /// Numerator.
    pub num: i64,
    /// Denominator.
    pub den: i64,
}

impl Fract {
    /// Construct `num / den`.
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// The reciprocal: `den / num`.
    pub const fn recip(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
        }
    }
}

impl Add for Fract {
    type Output = Fract;

    fn add(self, rhs: Fract) -> Fract {
        Fract {
            num: self.num * rhs.den + self.den * rhs.num,
            den: self.den * rhs.den,
        }
    }
}

impl Sub for Fract {
    type Output = Fract;

    fn sub(self, rhs: Fract) -> Fract {
        Fract {
            num: self.num * rhs.den - self.den * rhs.num,
            den: self.den * rhs.den,
        }
    }
}

impl Mul for Fract {
    type Output = Fract;

    fn mul(self, rhs: Fract) -> Fract {
        Fract {
            num: self.num * rhs.num,
            den: self.den * rhs.den,
        }
    }
}

impl Div for Fract {
    type Output = Fract;

    fn div(self, rhs: Fract) -> Fract {
        Fract {
            num: self.num * rhs.den,
            den: self.den * rhs.num,
        }
    }
}

impl Add<i64> for Fract {
    type Output = Fract;

    fn add(self, rhs: i64) -> Fract {
        Fract {
            num: self.num + self.den * rhs,
            den: self.den,
        }
    }
}

impl Sub<i64> for Fract {
    type Output = Fract;

    fn sub(self, rhs: i64) -> Fract {
        Fract {
            num: self.num - self.den * rhs,
            den: self.den,
        }
    }
}

impl Mul<i64> for Fract {
    type Output = Fract;

    fn mul(self, rhs: i64) -> Fract {
        Fract {
            num: self.num * rhs,
            den: self.den,
        }
    }
}

impl Div<i64> for Fract {
    type Output = Fract;

    fn div(self, rhs: i64) -> Fract {
        Fract {
            num: self.num,
            den: self.den * rhs,
        }
    }
}

impl fmt::Display for Fract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
