//! Built-in unary math kernels published under stable native addresses.
//!
//! An external code generator resolves catalogue entries by name and embeds
//! their addresses in generated code; the runtime crate calls the same
//! entries directly through [`Kernel::entry`]. Every entry is an
//! `extern "C"` function compiled into this crate, so its address is
//! process-wide constant and callable for the whole process lifetime.

/// Native signature shared by every catalogue entry.
pub type NativeUnaryFn = extern "C" fn(f64) -> f64;

/// The built-in unary kernel catalogue.
///
/// Fixed and complete: one variant per kernel a code generator may
/// reference. Variants parse from and display as the classic libm names
/// (`"acos"`, ..., `"log10"`, `"sqrt"`, `"fabs"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "proptest", derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kernel {
    Acos,
    Asin,
    Atan,
    Cos,
    Cosh,
    Sin,
    Sinh,
    Tan,
    Tanh,
    Exp,
    Log,
    Log10,
    Sqrt,
    Fabs,
}

impl Kernel {
    /// Resolve this kernel to its built-in implementation.
    ///
    /// Total: every variant has exactly one entry, assigned once at link
    /// time and never torn down.
    pub fn entry(self) -> NativeUnaryFn {
        match self {
            Self::Acos => acos,
            Self::Asin => asin,
            Self::Atan => atan,
            Self::Cos => cos,
            Self::Cosh => cosh,
            Self::Sin => sin,
            Self::Sinh => sinh,
            Self::Tan => tan,
            Self::Tanh => tanh,
            Self::Exp => exp,
            Self::Log => log,
            Self::Log10 => log10,
            Self::Sqrt => sqrt,
            Self::Fabs => fabs,
        }
    }

    /// Raw code address of the entry, for embedding in generated code.
    pub fn addr(self) -> *const () {
        self.entry() as *const ()
    }

    /// The libm name of this kernel.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

extern "C" fn acos(x: f64) -> f64 {
    x.acos()
}

extern "C" fn asin(x: f64) -> f64 {
    x.asin()
}

extern "C" fn atan(x: f64) -> f64 {
    x.atan()
}

extern "C" fn cos(x: f64) -> f64 {
    x.cos()
}

extern "C" fn cosh(x: f64) -> f64 {
    x.cosh()
}

extern "C" fn sin(x: f64) -> f64 {
    x.sin()
}

extern "C" fn sinh(x: f64) -> f64 {
    x.sinh()
}

extern "C" fn tan(x: f64) -> f64 {
    x.tan()
}

extern "C" fn tanh(x: f64) -> f64 {
    x.tanh()
}

extern "C" fn exp(x: f64) -> f64 {
    x.exp()
}

extern "C" fn log(x: f64) -> f64 {
    x.ln()
}

extern "C" fn log10(x: f64) -> f64 {
    x.log10()
}

extern "C" fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

extern "C" fn fabs(x: f64) -> f64 {
    x.abs()
}
