//! Elementary complex functions.
//!
//! Everything here is built out of polar conversion and the arithmetic operators on
//! [`Complex`]; multi-valued functions return the principal branch selected by `atan2`.

use crate::complex::{Complex, IMAGINARY_UNIT};

/// Principal square root: half the phase, square root of the magnitude.
pub fn sqrt(c: Complex) -> Complex {
    Complex::from_polar(c.magnitude().sqrt(), 0.5 * c.phase())
}

pub fn exp(c: Complex) -> Complex {
    Complex::from_polar(c.real().exp(), c.imaginary())
}

/// Principal natural logarithm, `ln|c| + i*arg(c)`.
pub fn log(c: Complex) -> Complex {
    c.magnitude().ln() + IMAGINARY_UNIT * c.phase()
}

/// `value ^ power`.
///
/// A base of exactly zero magnitude returns zero for every exponent instead of going through
/// `log(0)`.
pub fn pow(value: Complex, power: Complex) -> Complex {
    if value.magnitude() == 0.0 {
        return Complex::ZERO;
    }
    exp((value.magnitude().ln() + value.phase() * IMAGINARY_UNIT) * power)
}

pub fn cos(c: Complex) -> Complex {
    let e = exp(IMAGINARY_UNIT * c);
    0.5 * (e + 1.0 / e)
}

pub fn acos(c: Complex) -> Complex {
    let e = c + sqrt(c * c - 1.0);
    log(e) / IMAGINARY_UNIT
}
