//! Named-function arithmetic.
//!
//! Each function mirrors one of the operator impls on [`Complex`] and accepts anything that
//! converts into a [`Complex`], so plain `f64` operands can be mixed in on either side.

use crate::complex::Complex;

pub fn negate(c: impl Into<Complex>) -> Complex {
    -c.into()
}

pub fn add(a: impl Into<Complex>, b: impl Into<Complex>) -> Complex {
    a.into() + b.into()
}

/// `a + negate(b)`.
pub fn subtract(a: impl Into<Complex>, b: impl Into<Complex>) -> Complex {
    a.into() - b.into()
}

pub fn multiply(a: impl Into<Complex>, b: impl Into<Complex>) -> Complex {
    a.into() * b.into()
}

/// Multiplies `a` by the conjugate of `b`, then scales by `1 / magnitude(b)^2`.
///
/// A zero-magnitude divisor is not rejected; the result carries the infinite or NaN components
/// that IEEE-754 arithmetic produces.
pub fn divide(a: impl Into<Complex>, b: impl Into<Complex>) -> Complex {
    a.into() / b.into()
}

pub fn conjugate(c: impl Into<Complex>) -> Complex {
    c.into().conjugate()
}

/// Exact componentwise comparison. `NaN` is unequal to everything and `-0.0 == 0.0`.
pub fn equals(a: impl Into<Complex>, b: impl Into<Complex>) -> bool {
    a.into() == b.into()
}
