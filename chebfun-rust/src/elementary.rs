//! Elementary functions of a Chebfun
//!
//! `f(chebfun)` is the Chebfun of `x -> f(chebfun(x))`, rebuilt adaptively
//! from pointwise samples. Complex-valued Chebfuns go through the complex
//! branch of each function.

use crate::chebfun::Chebfun;
use crate::dichotomy::DichotomyConfig;
use crate::error::Result;
use crate::numeric::ChebScalar;
use std::fmt;

/// Pointwise function that can be composed with a Chebfun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementaryFunction {
    Arccos,
    Arccosh,
    Arcsin,
    Arcsinh,
    Arctan,
    Arctanh,
    Cos,
    Sin,
    Tan,
    Cosh,
    Sinh,
    Tanh,
    Exp,
    Exp2,
    Expm1,
    Log,
    Log2,
    Log1p,
    Sqrt,
    Ceil,
    Trunc,
    Fabs,
    Floor,
}

impl ElementaryFunction {
    pub const ALL: [ElementaryFunction; 23] = [
        Self::Arccos,
        Self::Arccosh,
        Self::Arcsin,
        Self::Arcsinh,
        Self::Arctan,
        Self::Arctanh,
        Self::Cos,
        Self::Sin,
        Self::Tan,
        Self::Cosh,
        Self::Sinh,
        Self::Tanh,
        Self::Exp,
        Self::Exp2,
        Self::Expm1,
        Self::Log,
        Self::Log2,
        Self::Log1p,
        Self::Sqrt,
        Self::Ceil,
        Self::Trunc,
        Self::Fabs,
        Self::Floor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Arccos => "arccos",
            Self::Arccosh => "arccosh",
            Self::Arcsin => "arcsin",
            Self::Arcsinh => "arcsinh",
            Self::Arctan => "arctan",
            Self::Arctanh => "arctanh",
            Self::Cos => "cos",
            Self::Sin => "sin",
            Self::Tan => "tan",
            Self::Cosh => "cosh",
            Self::Sinh => "sinh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Exp2 => "exp2",
            Self::Expm1 => "expm1",
            Self::Log => "log",
            Self::Log2 => "log2",
            Self::Log1p => "log1p",
            Self::Sqrt => "sqrt",
            Self::Ceil => "ceil",
            Self::Trunc => "trunc",
            Self::Fabs => "fabs",
            Self::Floor => "floor",
        }
    }
}

impl fmt::Display for ElementaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! elementary_methods {
    ($($method:ident => $variant:ident),* $(,)?) => {
        impl<T: ChebScalar> Chebfun<T> {
            $(
                #[doc = concat!("`", stringify!($method), "` of the Chebfun, resampled")]
                pub fn $method(&self, config: &DichotomyConfig) -> Result<Self> {
                    self.compose(ElementaryFunction::$variant, config)
                }
            )*
        }
    };
}

elementary_methods! {
    arccos => Arccos,
    arccosh => Arccosh,
    arcsin => Arcsin,
    arcsinh => Arcsinh,
    arctan => Arctan,
    arctanh => Arctanh,
    cos => Cos,
    sin => Sin,
    tan => Tan,
    cosh => Cosh,
    sinh => Sinh,
    tanh => Tanh,
    exp => Exp,
    exp2 => Exp2,
    expm1 => Expm1,
    log => Log,
    log2 => Log2,
    log1p => Log1p,
    sqrt => Sqrt,
    ceil => Ceil,
    trunc => Trunc,
    fabs => Fabs,
    floor => Floor,
}

impl<T: ChebScalar> Chebfun<T> {
    /// Chebfun of `x -> func(self(x))`
    pub fn compose(&self, func: ElementaryFunction, config: &DichotomyConfig) -> Result<Self> {
        log::debug!("composing {} with {}", func, self);
        self.map(config, |v| v.apply(func))
    }

    /// Absolute value; same as [`Chebfun::fabs`]
    pub fn abs(&self, config: &DichotomyConfig) -> Result<Self> {
        self.fabs(config)
    }
}
