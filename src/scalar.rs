//! Scalar kinds accepted by the relational functions
//!
//! Ordering comparisons are defined for floating-point and integer element
//! types only. `bool` deliberately does not implement [`Scalar`], so asking
//! whether one boolean is "less than" another is rejected at compile time:
//!
//! ```compile_fail
//! use trueno_relational::less_than;
//!
//! let _ = less_than(&[true, false], &[false, true]);
//! ```
//!
//! Boolean vectors can still be compared for equality:
//!
//! ```
//! use trueno_relational::equal;
//!
//! assert_eq!(equal(&[true, false], &[true, true]), [true, false]);
//! ```

use std::fmt::Debug;
use std::ops::Sub;

use crate::backends::{self, CompareOp};
use crate::Backend;

mod private {
    use super::{backends, Backend, CompareOp};

    pub trait Sealed: Copy + PartialOrd {
        /// Only `f32` has SIMD kernels; every other kind runs the scalar loop.
        fn compare_slices(
            _backend: Backend,
            op: CompareOp,
            a: &[Self],
            b: &[Self],
            result: &mut [bool],
        ) {
            backends::compare_generic(op, a, b, result);
        }
    }
}

/// Floating-point or integer element type
///
/// This trait is sealed: the set of scalar kinds is closed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a floating-point or integer scalar",
    label = "ordering comparisons require floating-point or integer components",
    note = "boolean vectors support `equal`/`not_equal` and the `any`/`all`/`not` reductions only"
)]
pub trait Scalar: private::Sealed + Copy + PartialOrd + Debug + Send + Sync + 'static {}

/// Compare two equal-length slices on the given backend
///
/// # Panics
///
/// Panics if `a` and `b` differ in length or `result` is shorter than `a`.
pub(crate) fn compare_slices<T: Scalar>(
    backend: Backend,
    op: CompareOp,
    a: &[T],
    b: &[T],
    result: &mut [bool],
) {
    <T as private::Sealed>::compare_slices(backend, op, a, b, result);
}

/// Floating-point element type, for tolerance-based equality
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a floating-point scalar",
    label = "epsilon comparisons require `f32` or `f64` components"
)]
pub trait Float: Scalar + Sub<Output = Self> {
    /// Absolute value
    fn abs(self) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}
            impl Scalar for $t {}
        )*
    };
}

impl_scalar!(f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl private::Sealed for f32 {
    fn compare_slices(
        backend: Backend,
        op: CompareOp,
        a: &[f32],
        b: &[f32],
        result: &mut [bool],
    ) {
        backends::compare_f32(backend, op, a, b, result);
    }
}

impl Scalar for f32 {}

impl Float for f32 {
    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }
}

impl Float for f64 {
    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }
}
