//! Trueno Relational: Vector Relational Functions
//!
//! Component-wise comparisons and boolean reductions over fixed-size vectors,
//! following the GLSL vector relational built-ins (`lessThan`, `equal`, `any`,
//! `all`, `not`, ...).
//!
//! # Design Principles
//!
//! - **Misuse does not compile**: operand sizes are part of the vector type,
//!   ordering comparisons require a floating-point or integer [`Scalar`], and
//!   reductions require boolean vectors
//! - **Pure functions**: every operation reads its inputs and returns a fresh value
//! - **Zero unsafe in public API**: `unsafe` isolated in backends
//! - **Runtime dispatch**: runtime-length [`Vector`] comparisons auto-select the
//!   best available SIMD backend
//!
//! # Quick Start
//!
//! ```rust
//! use trueno_relational::{all, any, equal, less_than, not, IVec3};
//!
//! let x = IVec3::new([1, 2, 3]);
//! let y = IVec3::new([3, 2, 1]);
//!
//! assert_eq!(less_than(&x, &y).into_array(), [true, false, false]);
//!
//! let eq = equal(&x, &y);
//! assert!(any(&eq));
//! assert!(!all(&eq));
//! assert_eq!(not(&eq).into_array(), [true, false, true]);
//! ```
//!
//! Plain arrays work too:
//!
//! ```rust
//! use trueno_relational::greater_than_equal;
//!
//! assert_eq!(greater_than_equal(&[0.5, 2.0], &[1.0, 2.0]), [false, true]);
//! ```
//!
//! Mixing sizes is a type error:
//!
//! ```compile_fail
//! use trueno_relational::less_than;
//!
//! let _ = less_than(&[1, 2, 3], &[1, 2]);
//! ```
//!
//! # Features
//!
//! - `tracing`: emit spans for runtime-length [`Vector`] operations

pub mod backends;
pub mod error;
pub mod relational;
pub mod scalar;
pub mod tvec;
pub mod vec_type;
pub mod vector;

pub use backends::CompareOp;
pub use error::{RelationalError, Result};
pub use relational::{
    all, any, equal, equal_eps, equal_eps_vec, greater_than, greater_than_equal, less_than,
    less_than_equal, not, not_equal, not_equal_eps, not_equal_eps_vec, BoolVecReduce,
    VecRelational,
};
pub use scalar::{Float, Scalar};
pub use tvec::{
    BVec2, BVec3, BVec4, DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, TVec, UVec2, UVec3, UVec4,
    Vec2, Vec3, Vec4,
};
pub use vec_type::{BVecOf, VecType};
pub use vector::Vector;

/// Backend execution target
///
/// Only instruction sets with relational kernels are listed: wider x86
/// extensions would run the same SSE2 code, so they are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Scalar fallback (no SIMD)
    Scalar,
    /// SSE2 (x86_64 baseline, 128-bit)
    SSE2,
    /// Auto-select best available
    Auto,
}

impl Backend {
    /// Select the best available backend for the current platform
    ///
    /// This is a convenience wrapper around `select_best_available_backend()`
    pub fn select_best() -> Self {
        select_best_available_backend()
    }
}

/// Select the best available backend for the current platform
///
/// SSE2 is part of the x86_64 baseline. On 32-bit x86 it is detected at
/// runtime; every other platform gets Scalar.
///
/// # Examples
///
/// ```
/// use trueno_relational::select_best_available_backend;
///
/// let backend = select_best_available_backend();
/// println!("Using backend: {:?}", backend);
/// ```
pub fn select_best_available_backend() -> Backend {
    #[cfg(target_arch = "x86_64")]
    {
        Backend::SSE2
    }

    #[cfg(target_arch = "x86")]
    {
        if is_x86_feature_detected!("sse2") {
            Backend::SSE2
        } else {
            Backend::Scalar
        }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        Backend::Scalar
    }
}
