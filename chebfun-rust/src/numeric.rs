//! Scalar trait for the sample values held by a Chebfun
//!
//! A Chebfun stores real (`f64`) or complex (`Complex<f64>`) samples. The
//! transforms always run in complex arithmetic; `ChebScalar` provides the
//! conversions in and out of that representation, plus the pointwise
//! operations needed when a Chebfun is resampled through a composition.

use crate::elementary::ElementaryFunction;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt::{Debug, Display};

/// Numeric trait for Chebfun sample values
///
/// Implemented for `f64` and `Complex<f64>`.
pub trait ChebScalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Zero
    + From<f64>
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + std::ops::Mul<f64, Output = Self>
    + std::ops::Div<f64, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Whether values carry an imaginary part
    const IS_COMPLEX: bool;

    /// Widen to a complex number
    fn to_complex(self) -> Complex<f64>;

    /// Narrow from a complex number (real types discard the imaginary residue)
    fn from_complex(z: Complex<f64>) -> Self;

    /// Absolute value / complex modulus
    fn modulus(self) -> f64;

    /// Real part
    fn re(self) -> f64;

    /// Imaginary part (zero for real types)
    fn im(self) -> f64;

    /// `self` raised to the power `exponent`
    fn pow(self, exponent: Self) -> Self;

    /// Apply an elementary function pointwise
    fn apply(self, func: ElementaryFunction) -> Self;
}

impl ChebScalar for f64 {
    const IS_COMPLEX: bool = false;

    fn to_complex(self) -> Complex<f64> {
        Complex::new(self, 0.0)
    }

    fn from_complex(z: Complex<f64>) -> Self {
        z.re
    }

    fn modulus(self) -> f64 {
        self.abs()
    }

    fn re(self) -> f64 {
        self
    }

    fn im(self) -> f64 {
        0.0
    }

    fn pow(self, exponent: Self) -> Self {
        self.powf(exponent)
    }

    fn apply(self, func: ElementaryFunction) -> Self {
        use ElementaryFunction::*;
        match func {
            Arccos => self.acos(),
            Arccosh => self.acosh(),
            Arcsin => self.asin(),
            Arcsinh => self.asinh(),
            Arctan => self.atan(),
            Arctanh => self.atanh(),
            Cos => self.cos(),
            Sin => self.sin(),
            Tan => self.tan(),
            Cosh => self.cosh(),
            Sinh => self.sinh(),
            Tanh => self.tanh(),
            Exp => self.exp(),
            Exp2 => self.exp2(),
            Expm1 => self.exp_m1(),
            Log => self.ln(),
            Log2 => self.log2(),
            Log1p => self.ln_1p(),
            Sqrt => self.sqrt(),
            Ceil => self.ceil(),
            Trunc => self.trunc(),
            Fabs => self.abs(),
            Floor => self.floor(),
        }
    }
}

impl ChebScalar for Complex<f64> {
    const IS_COMPLEX: bool = true;

    fn to_complex(self) -> Complex<f64> {
        self
    }

    fn from_complex(z: Complex<f64>) -> Self {
        z
    }

    fn modulus(self) -> f64 {
        self.norm()
    }

    fn re(self) -> f64 {
        self.re
    }

    fn im(self) -> f64 {
        self.im
    }

    fn pow(self, exponent: Self) -> Self {
        if self.is_zero() {
            // powc goes through ln(0)
            return if exponent.is_zero() {
                Complex::new(1.0, 0.0)
            } else {
                Complex::zero()
            };
        }
        self.powc(exponent)
    }

    fn apply(self, func: ElementaryFunction) -> Self {
        use ElementaryFunction::*;
        let one = Complex::new(1.0, 0.0);
        match func {
            Arccos => self.acos(),
            Arccosh => self.acosh(),
            Arcsin => self.asin(),
            Arcsinh => self.asinh(),
            Arctan => self.atan(),
            Arctanh => self.atanh(),
            Cos => self.cos(),
            Sin => self.sin(),
            Tan => self.tan(),
            Cosh => self.cosh(),
            Sinh => self.sinh(),
            Tanh => self.tanh(),
            Exp => self.exp(),
            Exp2 => self.expf(2.0),
            Expm1 => self.exp() - one,
            Log => self.ln(),
            Log2 => self.log(2.0),
            Log1p => (one + self).ln(),
            Sqrt => self.sqrt(),
            Ceil => Complex::new(self.re.ceil(), self.im.ceil()),
            Trunc => Complex::new(self.re.trunc(), self.im.trunc()),
            Fabs => Complex::new(self.norm(), 0.0),
            Floor => Complex::new(self.re.floor(), self.im.floor()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_round_trip_discards_imaginary() {
        let z = Complex::new(1.5, 1e-17);
        assert_eq!(<f64 as ChebScalar>::from_complex(z), 1.5);
        assert_eq!(2.0_f64.to_complex(), Complex::new(2.0, 0.0));
        assert_eq!(ChebScalar::im(3.0_f64), 0.0);
    }

    #[test]
    fn test_complex_keeps_imaginary() {
        let z = Complex::new(0.5, -2.0);
        assert_eq!(<Complex<f64> as ChebScalar>::from_complex(z), z);
        assert!((ChebScalar::modulus(Complex::new(3.0, 4.0)) - 5.0).abs() < 1e-15);
    }

    #[test]
    fn test_elementary_agrees_between_real_and_complex() {
        let funcs = [
            ElementaryFunction::Sin,
            ElementaryFunction::Cos,
            ElementaryFunction::Exp,
            ElementaryFunction::Exp2,
            ElementaryFunction::Expm1,
            ElementaryFunction::Log1p,
            ElementaryFunction::Sqrt,
            ElementaryFunction::Arctan,
            ElementaryFunction::Floor,
        ];
        let x = 0.37_f64;
        for func in funcs {
            let real = x.apply(func);
            let complex = Complex::new(x, 0.0).apply(func);
            assert!(
                (real - complex.re).abs() < 1e-14 && complex.im.abs() < 1e-14,
                "{:?}: {} vs {}",
                func,
                real,
                complex
            );
        }
    }

    #[test]
    fn test_complex_pow_at_zero() {
        let zero = Complex::new(0.0, 0.0);
        assert_eq!(zero.pow(Complex::new(2.0, 0.0)), zero);
        assert_eq!(zero.pow(zero), Complex::new(1.0, 0.0));
    }
}
