//! Scalar (non-SIMD) backend implementation
//!
//! This is the portable baseline implementation that works on all platforms.
//! It uses simple loops without any SIMD instructions.
//!
//! # Performance
//!
//! This backend provides the correctness reference. It is also the only kernel
//! for non-`f32` element types.

use super::{CompareOp, RelationalBackend};

/// Scalar backend (portable, no SIMD)
pub struct ScalarBackend;

impl ScalarBackend {
    /// Component-wise comparison over any ordered element type
    ///
    /// Elements are visited in index order.
    pub fn compare_slices<T: PartialOrd + Copy>(
        op: CompareOp,
        a: &[T],
        b: &[T],
        result: &mut [bool],
    ) {
        for ((out, &x), &y) in result.iter_mut().zip(a).zip(b) {
            *out = op.apply(x, y);
        }
    }
}

impl RelationalBackend for ScalarBackend {
    // SAFETY: This function is safe because:
    // 1. All slice accesses go through zipped iterators
    // 2. No raw pointer arithmetic is performed
    // 3. Marked unsafe only to match RelationalBackend trait interface
    unsafe fn compare(op: CompareOp, a: &[f32], b: &[f32], result: &mut [bool]) {
        Self::compare_slices(op, a, b, result);
    }

    // SAFETY: iterator-only access; marked unsafe to match the trait
    unsafe fn any(v: &[bool]) -> bool {
        for &x in v {
            if x {
                return true;
            }
        }
        false
    }

    // SAFETY: iterator-only access; marked unsafe to match the trait
    unsafe fn all(v: &[bool]) -> bool {
        for &x in v {
            if !x {
                return false;
            }
        }
        true
    }

    // SAFETY: iterator-only access; marked unsafe to match the trait
    unsafe fn not(v: &[bool], result: &mut [bool]) {
        for (out, &x) in result.iter_mut().zip(v) {
            *out = !x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_compare_less_than() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        let mut result = [false; 3];

        unsafe {
            ScalarBackend::compare(CompareOp::LessThan, &a, &b, &mut result);
        }

        assert_eq!(result, [true, false, false]);
    }

    #[test]
    fn test_scalar_compare_equal() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        let mut result = [false; 3];

        unsafe {
            ScalarBackend::compare(CompareOp::Equal, &a, &b, &mut result);
        }

        assert_eq!(result, [false, true, false]);
    }

    #[test]
    fn test_compare_slices_integers() {
        let a = [i64::MIN, 0, i64::MAX];
        let b = [0, 0, 0];
        let mut result = [false; 3];

        ScalarBackend::compare_slices(CompareOp::GreaterThanEqual, &a, &b, &mut result);
        assert_eq!(result, [false, true, true]);
    }

    #[test]
    fn test_compare_empty() {
        let a: [f32; 0] = [];
        let mut result: [bool; 0] = [];
        unsafe {
            ScalarBackend::compare(CompareOp::NotEqual, &a, &a, &mut result);
        }
        assert_eq!(result, []);
    }

    #[test]
    fn test_scalar_any() {
        unsafe {
            assert!(ScalarBackend::any(&[false, true]));
            assert!(!ScalarBackend::any(&[false, false]));
            assert!(!ScalarBackend::any(&[]));
        }
    }

    #[test]
    fn test_scalar_all() {
        unsafe {
            assert!(ScalarBackend::all(&[true, true]));
            assert!(!ScalarBackend::all(&[true, false]));
            assert!(ScalarBackend::all(&[]));
        }
    }

    #[test]
    fn test_scalar_not() {
        let v = [true, false, false];
        let mut result = [false; 3];
        unsafe {
            ScalarBackend::not(&v, &mut result);
        }
        assert_eq!(result, [false, true, true]);
    }
}
