//! SSE2 backend implementation (x86_64 baseline SIMD)
//!
//! This backend uses SSE2 intrinsics for 128-bit SIMD operations.
//! SSE2 is available on all x86_64 CPUs as a baseline requirement.
//!
//! # Performance
//!
//! - Comparisons: 4 x f32 lanes per instruction, mask extracted with `movemask`
//! - Boolean reductions: 16 bools per register (a `bool` is one byte, 0 or 1)
//!
//! # Safety
//!
//! All SSE2 intrinsics are marked `unsafe` by Rust. This module carefully isolates
//! all unsafe code and verifies correctness through comprehensive testing.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{CompareOp, RelationalBackend};

/// SSE2 backend (128-bit SIMD for x86_64)
pub struct Sse2Backend;

/// Compare 4 lanes; each result lane is all ones (true) or all zeros (false)
///
/// The ordered predicates return false for NaN and `cmpneq` returns true,
/// matching Rust's scalar operators.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn compare_lanes(op: CompareOp, va: __m128, vb: __m128) -> __m128 {
    match op {
        CompareOp::LessThan => _mm_cmplt_ps(va, vb),
        CompareOp::LessThanEqual => _mm_cmple_ps(va, vb),
        CompareOp::GreaterThan => _mm_cmpgt_ps(va, vb),
        CompareOp::GreaterThanEqual => _mm_cmpge_ps(va, vb),
        CompareOp::Equal => _mm_cmpeq_ps(va, vb),
        CompareOp::NotEqual => _mm_cmpneq_ps(va, vb),
    }
}

impl RelationalBackend for Sse2Backend {
    #[target_feature(enable = "sse2")]
    unsafe fn compare(op: CompareOp, a: &[f32], b: &[f32], result: &mut [bool]) {
        let len = a.len();
        let mut i = 0;

        // Process 4 elements at a time using SSE2 (128-bit = 4 x f32)
        while i + 4 <= len {
            let va = _mm_loadu_ps(a.as_ptr().add(i));
            let vb = _mm_loadu_ps(b.as_ptr().add(i));

            // Collapse the lane mask to 4 bits, lane 0 in bit 0
            let bits = _mm_movemask_ps(compare_lanes(op, va, vb));

            for lane in 0..4 {
                result[i + lane] = (bits >> lane) & 1 != 0;
            }

            i += 4;
        }

        // Handle remaining elements with scalar code
        for j in i..len {
            result[j] = op.apply(a[j], b[j]);
        }
    }

    #[target_feature(enable = "sse2")]
    unsafe fn any(v: &[bool]) -> bool {
        let len = v.len();
        let ptr = v.as_ptr() as *const u8;
        let zero = _mm_setzero_si128();
        let mut i = 0;

        // 16 bools at a time; stop at the first chunk holding a true
        while i + 16 <= len {
            let chunk = _mm_loadu_si128(ptr.add(i) as *const __m128i);
            let is_false = _mm_movemask_epi8(_mm_cmpeq_epi8(chunk, zero));
            if is_false != 0xFFFF {
                return true;
            }
            i += 16;
        }

        v[i..].iter().any(|&x| x)
    }

    #[target_feature(enable = "sse2")]
    unsafe fn all(v: &[bool]) -> bool {
        let len = v.len();
        let ptr = v.as_ptr() as *const u8;
        let zero = _mm_setzero_si128();
        let mut i = 0;

        // 16 bools at a time; stop at the first chunk holding a false
        while i + 16 <= len {
            let chunk = _mm_loadu_si128(ptr.add(i) as *const __m128i);
            let is_false = _mm_movemask_epi8(_mm_cmpeq_epi8(chunk, zero));
            if is_false != 0 {
                return false;
            }
            i += 16;
        }

        v[i..].iter().all(|&x| x)
    }

    #[target_feature(enable = "sse2")]
    unsafe fn not(v: &[bool], result: &mut [bool]) {
        let len = v.len();
        let src = v.as_ptr() as *const u8;
        let dst = result.as_mut_ptr() as *mut u8;
        let ones = _mm_set1_epi8(1);
        let mut i = 0;

        // XOR with 1 maps 0 <-> 1, so the output stays a valid bool
        while i + 16 <= len {
            let chunk = _mm_loadu_si128(src.add(i) as *const __m128i);
            _mm_storeu_si128(dst.add(i) as *mut __m128i, _mm_xor_si128(chunk, ones));
            i += 16;
        }

        for j in i..len {
            result[j] = !v[j];
        }
    }
}
