//! Typed callable kinds for compiled scalar functions.
//!
//! Generated code arrives as a raw address. The producer knows the arity of
//! the function it compiled, so it binds the address to the matching kind
//! here; from that point on the signature travels with the type and every
//! call site is an ordinary native call.

use jitcall_kernels::Kernel;

/// A compiled `f64 -> f64` function with the C calling convention.
///
/// Built-in catalogue kernels convert in safely via [`From`]; addresses of
/// generated code are adopted with [`UnaryFn::from_addr`].
#[derive(Debug, Clone, Copy)]
pub struct UnaryFn(extern "C" fn(f64) -> f64);

impl UnaryFn {
    pub fn new(f: extern "C" fn(f64) -> f64) -> Self {
        Self(f)
    }

    /// Bind a raw code address produced by an external code generator.
    ///
    /// # Safety
    ///
    /// Caller must ensure:
    /// - `addr` references executable code with the exact signature
    ///   `extern "C" fn(f64) -> f64`
    /// - the code stays valid and callable for the lifetime of the handle
    pub unsafe fn from_addr(addr: *const ()) -> Self {
        Self(unsafe { std::mem::transmute::<*const (), extern "C" fn(f64) -> f64>(addr) })
    }

    /// Call the function with `x`.
    ///
    /// A direct, synchronous native call: no validation, no retries, no
    /// effects beyond the callee's own. NaN and infinity results propagate
    /// unchanged.
    pub fn call(self, x: f64) -> f64 {
        (self.0)(x)
    }

    /// Raw code address, for embedding in generated code.
    pub fn addr(self) -> *const () {
        self.0 as *const ()
    }
}

impl From<extern "C" fn(f64) -> f64> for UnaryFn {
    fn from(f: extern "C" fn(f64) -> f64) -> Self {
        Self(f)
    }
}

impl From<Kernel> for UnaryFn {
    fn from(kernel: Kernel) -> Self {
        Self(kernel.entry())
    }
}

/// A compiled `(f64, f64) -> f64` function with the C calling convention.
///
/// The shape produced by the expression compiler: `x` and `y` in, one
/// sample out.
#[derive(Debug, Clone, Copy)]
pub struct BinaryFn(extern "C" fn(f64, f64) -> f64);

impl BinaryFn {
    pub fn new(f: extern "C" fn(f64, f64) -> f64) -> Self {
        Self(f)
    }

    /// Bind a raw code address produced by an external code generator.
    ///
    /// # Safety
    ///
    /// Caller must ensure:
    /// - `addr` references executable code with the exact signature
    ///   `extern "C" fn(f64, f64) -> f64`
    /// - the code stays valid and callable for the lifetime of the handle
    pub unsafe fn from_addr(addr: *const ()) -> Self {
        Self(unsafe { std::mem::transmute::<*const (), extern "C" fn(f64, f64) -> f64>(addr) })
    }

    /// Call the function with `(x, y)`.
    ///
    /// Same contract as [`UnaryFn::call`]: a plain forwarding call.
    pub fn call(self, x: f64, y: f64) -> f64 {
        (self.0)(x, y)
    }

    /// Raw code address, for embedding in generated code.
    pub fn addr(self) -> *const () {
        self.0 as *const ()
    }
}

impl From<extern "C" fn(f64, f64) -> f64> for BinaryFn {
    fn from(f: extern "C" fn(f64, f64) -> f64) -> Self {
        Self(f)
    }
}
