use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A complex number with `f64` components.
///
/// Values are never validated: NaN and infinite components are carried through every operation
/// exactly as IEEE-754 arithmetic produces them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

/// The imaginary unit, `i`.
pub const IMAGINARY_UNIT: Complex = Complex::new(0.0, 1.0);

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// Returned by [`crate::try_parse`] when the input cannot be parsed.
    ///
    /// Like `f64::NAN` it is unequal to itself, so it makes a poor hash key: every insert into a
    /// `HashSet` adds a new entry and lookups never find it. Check [`Complex::is_nan`] first.
    pub const NAN: Complex = Complex::new(f64::NAN, f64::NAN);

    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub const fn from_real(re: f64) -> Self {
        Complex::new(re, 0.0)
    }

    /// Builds `magnitude * e^(i*phase)`.
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Complex::new(magnitude * phase.cos(), magnitude * phase.sin())
    }

    pub const fn real(self) -> f64 {
        self.re
    }

    pub const fn imaginary(self) -> f64 {
        self.im
    }

    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean norm, `sqrt(re^2 + im^2)`.
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Angle in radians in `(-pi, pi]`, from `atan2(im, re)`.
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Polar form as `(magnitude, phase)`.
    pub fn to_polar(self) -> (f64, f64) {
        (self.magnitude(), self.phase())
    }

    /// `true` if either component is NaN.
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    pub fn conjugate(self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// `1 / self`. A zero divisor gives NaN components.
    pub fn recip(self) -> Self {
        Complex::ONE / self
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self {
        Complex::new(-self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Div for Complex {
    type Output = Complex;

    // a / b = a * conj(b) / |b|^2, with no zero check on `b`
    fn div(self, rhs: Self) -> Self {
        let t = 1.0 / rhs.magnitude();
        Complex::from_real(t * t) * self * rhs.conjugate()
    }
}

// Mixed real/complex operands promote the real side through `from_real`.
macro_rules! real_operand {
    ($($trait:ident $method:ident $assign_trait:ident $assign_method:ident),*) => {$(
        impl $trait<f64> for Complex {
            type Output = Complex;

            fn $method(self, rhs: f64) -> Complex {
                $trait::$method(self, Complex::from_real(rhs))
            }
        }

        impl $trait<Complex> for f64 {
            type Output = Complex;

            fn $method(self, rhs: Complex) -> Complex {
                $trait::$method(Complex::from_real(self), rhs)
            }
        }

        impl $assign_trait for Complex {
            fn $assign_method(&mut self, rhs: Complex) {
                *self = $trait::$method(*self, rhs);
            }
        }

        impl $assign_trait<f64> for Complex {
            fn $assign_method(&mut self, rhs: f64) {
                *self = $trait::$method(*self, Complex::from_real(rhs));
            }
        }
    )*};
}

real_operand!(
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign
);

// Equal values must hash equally, so `-0.0` is folded into `+0.0` before hashing. NaN never
// compares equal, so its bit pattern is irrelevant.
impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fn canonical_bits(x: f64) -> u64 {
            if x == 0.0 {
                0
            } else {
                x.to_bits()
            }
        }
        canonical_bits(self.re).hash(state);
        canonical_bits(self.im).hash(state);
    }
}

/// Lets `Complex` key a `HashMap`. Values with a NaN component are never equal to anything,
/// themselves included, so such keys can be inserted (repeatedly, as distinct entries) but never
/// found again. Filter them out with [`Complex::is_nan`] before using a value as a key.
impl Eq for Complex {}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<num_complex::Complex64> for Complex {
    fn from(z: num_complex::Complex64) -> Self {
        Complex::new(z.re, z.im)
    }
}

impl From<Complex> for num_complex::Complex64 {
    fn from(z: Complex) -> Self {
        num_complex::Complex64::new(z.re, z.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn operators() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -4.0);

        assert_eq!(a + b, Complex::new(4.0, -2.0));
        assert_eq!(a - b, Complex::new(-2.0, 6.0));
        assert_eq!(a * b, Complex::new(11.0, 2.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(a.conjugate(), Complex::new(1.0, -2.0));

        let q = a / b;
        assert_relative_eq!(q.real(), -0.2, epsilon = 1e-15);
        assert_relative_eq!(q.imaginary(), 0.4, epsilon = 1e-15);
    }

    #[test]
    fn real_operands() {
        let a = Complex::new(1.0, 2.0);

        assert_eq!(a + 1.0, Complex::new(2.0, 2.0));
        assert_eq!(1.0 + a, Complex::new(2.0, 2.0));
        assert_eq!(3.0 - a, Complex::new(2.0, -2.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(2.0 * a, Complex::new(2.0, 4.0));
        assert_eq!(a / 2.0, Complex::new(0.5, 1.0));

        let mut b = a;
        b *= IMAGINARY_UNIT;
        b += 1.0;
        assert_eq!(b, Complex::new(-1.0, 1.0));
    }

    #[test]
    fn divide_by_zero_is_not_finite() {
        let q = Complex::new(1.0, 1.0) / Complex::ZERO;
        assert!(!q.real().is_finite());
        assert!(!q.imaginary().is_finite());
    }

    #[test]
    fn polar() {
        let z = Complex::from_polar(2.0, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(z.real(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(z.imaginary(), 2.0);

        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
        assert_eq!(Complex::new(-1.0, 0.0).phase(), std::f64::consts::PI);
    }

    #[test]
    fn equality_follows_f64() {
        assert_eq!(Complex::new(0.0, -0.0), Complex::new(-0.0, 0.0));
        assert_ne!(Complex::NAN, Complex::NAN);
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(Complex::new(0.0, 1.0));
        assert!(set.contains(&Complex::new(-0.0, 1.0)));
        assert!(!set.insert(Complex::new(0.0, 1.0)));
    }

    #[test]
    fn nan_keys_never_match() {
        let mut set = HashSet::new();
        assert!(set.insert(Complex::NAN));
        assert!(set.insert(Complex::NAN));
        assert_eq!(set.len(), 2);
        assert!(!set.contains(&Complex::NAN));

        assert!(Complex::NAN.is_nan());
        assert!(Complex::new(1.0, f64::NAN).is_nan());
        assert!(!Complex::new(1.0, f64::INFINITY).is_nan());
    }

    #[test]
    fn num_complex_interop() {
        let z = num_complex::Complex64::new(1.5, -2.0);
        let ours = Complex::from(z);
        assert_eq!(ours, Complex::new(1.5, -2.0));
        assert_eq!(num_complex::Complex64::from(ours), z);
    }
}
