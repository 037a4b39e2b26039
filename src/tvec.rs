//! GLSL-style fixed-size vector type
//!
//! [`TVec`] is a thin wrapper over `[T; N]` carrying the element count in its
//! type. It exists so the relational functions have a named vector to work on
//! (`Vec3`, `IVec2`, `BVec4`, ...); it provides construction and read access
//! only, no arithmetic.
//!
//! # Example
//!
//! ```
//! use trueno_relational::{less_than, BVec3, IVec3};
//!
//! let x = IVec3::new([1, 2, 3]);
//! let y = IVec3::new([3, 2, 1]);
//! assert_eq!(less_than(&x, &y), BVec3::new([true, false, false]));
//! ```

use std::fmt;
use std::ops::Index;

use crate::{RelationalError, Result, VecType};

/// Fixed-size vector of `N` elements of type `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TVec<T, const N: usize>([T; N]);

/// 2-component `f32` vector
pub type Vec2 = TVec<f32, 2>;
/// 3-component `f32` vector
pub type Vec3 = TVec<f32, 3>;
/// 4-component `f32` vector
pub type Vec4 = TVec<f32, 4>;
/// 2-component `f64` vector
pub type DVec2 = TVec<f64, 2>;
/// 3-component `f64` vector
pub type DVec3 = TVec<f64, 3>;
/// 4-component `f64` vector
pub type DVec4 = TVec<f64, 4>;
/// 2-component `i32` vector
pub type IVec2 = TVec<i32, 2>;
/// 3-component `i32` vector
pub type IVec3 = TVec<i32, 3>;
/// 4-component `i32` vector
pub type IVec4 = TVec<i32, 4>;
/// 2-component `u32` vector
pub type UVec2 = TVec<u32, 2>;
/// 3-component `u32` vector
pub type UVec3 = TVec<u32, 3>;
/// 4-component `u32` vector
pub type UVec4 = TVec<u32, 4>;
/// 2-component boolean vector
pub type BVec2 = TVec<bool, 2>;
/// 3-component boolean vector
pub type BVec3 = TVec<bool, 3>;
/// 4-component boolean vector
pub type BVec4 = TVec<bool, 4>;

impl<T: Copy, const N: usize> TVec<T, N> {
    /// Create a vector from its components
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// Create a vector with every component set to `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use trueno_relational::BVec4;
    ///
    /// assert_eq!(BVec4::splat(true).as_array(), &[true; 4]);
    /// ```
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Create a vector whose component `i` is `f(i)`, evaluated in index order
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(std::array::from_fn(f))
    }

    /// Borrow the components
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Take the components
    pub const fn into_array(self) -> [T; N] {
        self.0
    }

    /// Number of components
    pub const fn len(&self) -> usize {
        N
    }

    /// True for the zero-component vector
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterate over the components in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Copy, const N: usize> VecType for TVec<T, N> {
    type Elem = T;
    type Rebind<U: Copy> = TVec<U, N>;

    const SIZE: usize = N;

    #[inline]
    fn component(&self, index: usize) -> T {
        self.0[index]
    }

    #[inline]
    fn from_components<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::from_fn(f)
    }
}

impl<T, const N: usize> Index<usize> for TVec<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> From<[T; N]> for TVec<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<TVec<T, N>> for [T; N] {
    fn from(v: TVec<T, N>) -> Self {
        v.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for TVec<T, N> {
    type Error = RelationalError;

    /// Build a vector from a slice of exactly `N` elements
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if `slice.len() != N`.
    fn try_from(slice: &[T]) -> Result<Self> {
        let components: [T; N] = slice.try_into().map_err(|_| RelationalError::SizeMismatch {
            expected: N,
            actual: slice.len(),
        })?;
        Ok(Self(components))
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a TVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for TVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        f.write_str(")")
    }
}
