//! Backend implementations for different SIMD instruction sets
//!
//! Runtime-length [`Vector`](crate::Vector) comparisons and boolean reductions
//! are routed through these backends. Fixed-size vectors never touch them:
//! their loops are short enough that the compiler unrolls them directly.
//!
//! # Safety
//!
//! All `unsafe` code is isolated within backend implementations. The public API
//! remains 100% safe.
//!
//! # Backends
//!
//! - `scalar`: Portable baseline implementation (no SIMD)
//! - `sse2`: x86_64 baseline SIMD (128-bit)

pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod sse2;

use std::fmt;

use crate::Backend;
use scalar::ScalarBackend;
#[cfg(target_arch = "x86_64")]
use sse2::Sse2Backend;

/// Component-wise comparison operator
///
/// # Examples
///
/// ```
/// use trueno_relational::CompareOp;
///
/// assert!(CompareOp::LessThan.apply(1, 2));
/// assert!(!CompareOp::Equal.apply(f32::NAN, f32::NAN));
/// assert!(CompareOp::NotEqual.apply(f32::NAN, f32::NAN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `a < b`
    LessThan,
    /// `a <= b`
    LessThanEqual,
    /// `a > b`
    GreaterThan,
    /// `a >= b`
    GreaterThanEqual,
    /// `a == b`
    Equal,
    /// `a != b`
    NotEqual,
}

impl CompareOp {
    /// All operators, in declaration order
    pub const ALL: [CompareOp; 6] = [
        CompareOp::LessThan,
        CompareOp::LessThanEqual,
        CompareOp::GreaterThan,
        CompareOp::GreaterThanEqual,
        CompareOp::Equal,
        CompareOp::NotEqual,
    ];

    /// Apply the operator to a pair of scalars
    #[inline]
    pub fn apply<T: PartialOrd>(self, a: T, b: T) -> bool {
        match self {
            CompareOp::LessThan => a < b,
            CompareOp::LessThanEqual => a <= b,
            CompareOp::GreaterThan => a > b,
            CompareOp::GreaterThanEqual => a >= b,
            CompareOp::Equal => a == b,
            CompareOp::NotEqual => a != b,
        }
    }

    /// GLSL built-in name of the operator
    pub fn glsl_name(self) -> &'static str {
        match self {
            CompareOp::LessThan => "lessThan",
            CompareOp::LessThanEqual => "lessThanEqual",
            CompareOp::GreaterThan => "greaterThan",
            CompareOp::GreaterThanEqual => "greaterThanEqual",
            CompareOp::Equal => "equal",
            CompareOp::NotEqual => "notEqual",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glsl_name())
    }
}

/// Backend trait defining relational operations
///
/// All backend implementations must implement this trait to ensure
/// consistent behavior across different SIMD instruction sets.
///
/// # Safety
///
/// Implementations may use unsafe SIMD intrinsics. Callers must ensure:
/// - Input slices are valid
/// - Result slice has sufficient capacity
/// - Slices `a` and `b` have the same length
pub trait RelationalBackend {
    /// Component-wise comparison: result[i] = a[i] OP b[i]
    ///
    /// # Safety
    ///
    /// - `a` and `b` must have the same length
    /// - `result` must have length >= `a.len()`
    unsafe fn compare(op: CompareOp, a: &[f32], b: &[f32], result: &mut [bool]);

    /// OR reduction; false for an empty slice
    ///
    /// # Safety
    ///
    /// Marked unsafe to allow SIMD implementations.
    unsafe fn any(v: &[bool]) -> bool;

    /// AND reduction; true for an empty slice
    ///
    /// # Safety
    ///
    /// Marked unsafe to allow SIMD implementations.
    unsafe fn all(v: &[bool]) -> bool;

    /// Component-wise negation: result[i] = !v[i]
    ///
    /// # Safety
    ///
    /// - `result` must have length >= `v.len()`
    unsafe fn not(v: &[bool], result: &mut [bool]);
}

/// Check the kernel preconditions for a binary comparison
///
/// # Panics
///
/// Panics if `a` and `b` differ in length or `result` is shorter than `a`.
/// The SIMD kernels read `a.len()` elements from both inputs, so this holds in
/// release builds too.
#[inline]
fn check_compare_lengths(a: usize, b: usize, result: usize) {
    assert_eq!(a, b, "comparison operands must have the same length");
    assert!(result >= a, "result buffer holds {result} elements, need {a}");
}

/// Compare two slices of any scalar kind with the portable kernel
pub(crate) fn compare_generic<T: PartialOrd + Copy>(
    op: CompareOp,
    a: &[T],
    b: &[T],
    result: &mut [bool],
) {
    check_compare_lengths(a.len(), b.len(), result.len());
    ScalarBackend::compare_slices(op, a, b, result);
}

/// Dispatch an `f32` comparison to the kernel for `backend`
pub(crate) fn compare_f32(
    backend: Backend,
    op: CompareOp,
    a: &[f32],
    b: &[f32],
    result: &mut [bool],
) {
    check_compare_lengths(a.len(), b.len(), result.len());

    // SAFETY: lengths checked above
    unsafe {
        match backend {
            #[cfg(target_arch = "x86_64")]
            Backend::SSE2 => Sse2Backend::compare(op, a, b, result),
            _ => ScalarBackend::compare(op, a, b, result),
        }
    }
}

/// Dispatch an OR reduction to the kernel for `backend`
pub(crate) fn any(backend: Backend, v: &[bool]) -> bool {
    unsafe {
        match backend {
            #[cfg(target_arch = "x86_64")]
            Backend::SSE2 => Sse2Backend::any(v),
            _ => ScalarBackend::any(v),
        }
    }
}

/// Dispatch an AND reduction to the kernel for `backend`
pub(crate) fn all(backend: Backend, v: &[bool]) -> bool {
    unsafe {
        match backend {
            #[cfg(target_arch = "x86_64")]
            Backend::SSE2 => Sse2Backend::all(v),
            _ => ScalarBackend::all(v),
        }
    }
}

/// Dispatch a component-wise negation to the kernel for `backend`
///
/// # Panics
///
/// Panics if `result` is shorter than `v`.
pub(crate) fn not(backend: Backend, v: &[bool], result: &mut [bool]) {
    assert!(
        result.len() >= v.len(),
        "result buffer holds {} elements, need {}",
        result.len(),
        v.len()
    );

    // SAFETY: length checked above
    unsafe {
        match backend {
            #[cfg(target_arch = "x86_64")]
            Backend::SSE2 => Sse2Backend::not(v, result),
            _ => ScalarBackend::not(v, result),
        }
    }
}
