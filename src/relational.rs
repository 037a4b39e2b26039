//! Vector relational functions
//!
//! Relational and equality operators (`<`, `<=`, `>`, `>=`, `==`, `!=`) act on
//! scalars and produce a single `bool`. The functions here apply them
//! component-wise to fixed-size vectors and produce a boolean vector, and
//! reduce boolean vectors with [`any`], [`all`] and [`not`]. They mirror the
//! GLSL built-ins `lessThan`, `lessThanEqual`, `greaterThan`,
//! `greaterThanEqual`, `equal`, `notEqual`, `any`, `all` and `not`.
//!
//! Both operands of a comparison share one vector type, so their sizes match
//! by construction and the result has the same size.
//!
//! # Example
//!
//! ```
//! use trueno_relational::{all, any, equal, less_than};
//!
//! let x = [1, 2, 3];
//! let y = [3, 2, 1];
//!
//! assert_eq!(less_than(&x, &y), [true, false, false]);
//! assert_eq!(equal(&x, &y), [false, true, false]);
//! assert!(any(&equal(&x, &y)));
//! assert!(!all(&equal(&x, &y)));
//! ```
//!
//! Reductions accept boolean vectors only:
//!
//! ```compile_fail
//! use trueno_relational::any;
//!
//! let _ = any(&[1, 0, 1]);
//! ```

use crate::{BVecOf, Float, Scalar, VecType};

/// Build the boolean vector `f(x[i], y[i])`, visiting indices in order
#[inline]
fn componentwise<V, F>(x: &V, y: &V, mut f: F) -> BVecOf<V>
where
    V: VecType,
    F: FnMut(V::Elem, V::Elem) -> bool,
{
    <BVecOf<V> as VecType>::from_components(|i| f(x.component(i), y.component(i)))
}

/// Returns the component-wise comparison result of `x < y`
///
/// # Examples
///
/// ```
/// use trueno_relational::less_than;
///
/// assert_eq!(less_than(&[1.0, 5.0], &[2.0, 5.0]), [true, false]);
/// ```
#[inline]
pub fn less_than<V>(x: &V, y: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Scalar,
{
    componentwise(x, y, |a, b| a < b)
}

/// Returns the component-wise comparison result of `x <= y`
#[inline]
pub fn less_than_equal<V>(x: &V, y: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Scalar,
{
    componentwise(x, y, |a, b| a <= b)
}

/// Returns the component-wise comparison result of `x > y`
#[inline]
pub fn greater_than<V>(x: &V, y: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Scalar,
{
    componentwise(x, y, |a, b| a > b)
}

/// Returns the component-wise comparison result of `x >= y`
#[inline]
pub fn greater_than_equal<V>(x: &V, y: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Scalar,
{
    componentwise(x, y, |a, b| a >= b)
}

/// Returns the component-wise comparison result of `x == y`
///
/// Unlike the ordering comparisons this accepts boolean vectors.
///
/// # Examples
///
/// ```
/// use trueno_relational::{equal, BVec2};
///
/// let a = BVec2::new([true, false]);
/// let b = BVec2::new([true, true]);
/// assert_eq!(equal(&a, &b), BVec2::new([true, false]));
/// ```
#[inline]
pub fn equal<V>(x: &V, y: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: PartialEq,
{
    componentwise(x, y, |a, b| a == b)
}

/// Returns the component-wise comparison result of `x != y`
#[inline]
pub fn not_equal<V>(x: &V, y: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: PartialEq,
{
    componentwise(x, y, |a, b| a != b)
}

/// Returns true if any component of `v` is true
///
/// A zero-component vector yields `false`. Stops at the first true component.
#[inline]
pub fn any<B>(v: &B) -> bool
where
    B: VecType<Elem = bool>,
{
    (0..B::SIZE).any(|i| v.component(i))
}

/// Returns true if all components of `v` are true
///
/// A zero-component vector yields `true`. Stops at the first false component.
#[inline]
pub fn all<B>(v: &B) -> bool
where
    B: VecType<Elem = bool>,
{
    (0..B::SIZE).all(|i| v.component(i))
}

/// Returns the component-wise logical complement of `v`
///
/// # Examples
///
/// ```
/// use trueno_relational::not;
///
/// assert_eq!(not(&[true, false]), [false, true]);
/// ```
#[inline]
pub fn not<B>(v: &B) -> B
where
    B: VecType<Elem = bool>,
{
    B::from_components(|i| !v.component(i))
}

/// Returns the component-wise result of `|x - y| <= epsilon`
///
/// NaN in either operand compares unequal.
///
/// # Examples
///
/// ```
/// use trueno_relational::{equal_eps, Vec3};
///
/// let a = Vec3::new([1.0, 2.0, 3.0]);
/// let b = Vec3::new([1.0005, 2.1, 3.0]);
/// assert_eq!(equal_eps(&a, &b, 1e-3).into_array(), [true, false, true]);
/// ```
#[inline]
pub fn equal_eps<V>(x: &V, y: &V, epsilon: V::Elem) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Float,
{
    componentwise(x, y, |a, b| (a - b).abs() <= epsilon)
}

/// Returns the component-wise result of `|x - y| > epsilon`
///
/// Always the complement of [`equal_eps`], NaN included.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn not_equal_eps<V>(x: &V, y: &V, epsilon: V::Elem) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Float,
{
    componentwise(x, y, |a, b| !((a - b).abs() <= epsilon))
}

/// Like [`equal_eps`] with a per-component tolerance
#[inline]
pub fn equal_eps_vec<V>(x: &V, y: &V, epsilon: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Float,
{
    <BVecOf<V> as VecType>::from_components(|i| {
        (x.component(i) - y.component(i)).abs() <= epsilon.component(i)
    })
}

/// Like [`not_equal_eps`] with a per-component tolerance
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn not_equal_eps_vec<V>(x: &V, y: &V, epsilon: &V) -> BVecOf<V>
where
    V: VecType,
    V::Elem: Float,
{
    <BVecOf<V> as VecType>::from_components(|i| {
        !((x.component(i) - y.component(i)).abs() <= epsilon.component(i))
    })
}

/// Method-style component-wise comparisons
///
/// Implemented for every [`VecType`]; the ordering methods additionally need
/// a [`Scalar`] element type.
///
/// # Examples
///
/// ```
/// use trueno_relational::{BoolVecReduce, VecRelational, Vec2};
///
/// let a = Vec2::new([0.0, 1.0]);
/// let b = Vec2::new([0.5, 0.5]);
/// assert!(a.less_than(&b).any());
/// assert!(!a.greater_than_equal(&b).all());
/// ```
pub trait VecRelational: VecType {
    /// See [`less_than`]
    fn less_than(&self, other: &Self) -> BVecOf<Self>
    where
        Self::Elem: Scalar,
    {
        less_than(self, other)
    }

    /// See [`less_than_equal`]
    fn less_than_equal(&self, other: &Self) -> BVecOf<Self>
    where
        Self::Elem: Scalar,
    {
        less_than_equal(self, other)
    }

    /// See [`greater_than`]
    fn greater_than(&self, other: &Self) -> BVecOf<Self>
    where
        Self::Elem: Scalar,
    {
        greater_than(self, other)
    }

    /// See [`greater_than_equal`]
    fn greater_than_equal(&self, other: &Self) -> BVecOf<Self>
    where
        Self::Elem: Scalar,
    {
        greater_than_equal(self, other)
    }

    /// See [`equal`]
    fn equal(&self, other: &Self) -> BVecOf<Self>
    where
        Self::Elem: PartialEq,
    {
        equal(self, other)
    }

    /// See [`not_equal`]
    fn not_equal(&self, other: &Self) -> BVecOf<Self>
    where
        Self::Elem: PartialEq,
    {
        not_equal(self, other)
    }
}

impl<V: VecType> VecRelational for V {}

/// Method-style boolean reductions
pub trait BoolVecReduce: VecType<Elem = bool> {
    /// See [`any`]
    fn any(&self) -> bool {
        any(self)
    }

    /// See [`all`]
    fn all(&self) -> bool {
        all(self)
    }

    /// See [`not`]
    fn not(&self) -> Self {
        not(self)
    }
}

impl<B: VecType<Elem = bool>> BoolVecReduce for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BVec2, BVec3, BVec4, DVec2, IVec3, TVec, UVec4, Vec4};

    #[test]
    fn test_ordering_comparisons_integers() {
        let x = IVec3::new([1, 2, 3]);
        let y = IVec3::new([3, 2, 1]);

        assert_eq!(less_than(&x, &y), BVec3::new([true, false, false]));
        assert_eq!(less_than_equal(&x, &y), BVec3::new([true, true, false]));
        assert_eq!(greater_than(&x, &y), BVec3::new([false, false, true]));
        assert_eq!(greater_than_equal(&x, &y), BVec3::new([false, true, true]));
    }

    #[test]
    fn test_equality_comparisons() {
        let x = IVec3::new([1, 2, 3]);
        let y = IVec3::new([3, 2, 1]);

        let eq = equal(&x, &y);
        assert_eq!(eq, BVec3::new([false, true, false]));
        assert!(any(&eq));
        assert!(!all(&eq));

        assert_eq!(not_equal(&x, &y), BVec3::new([true, false, true]));
    }

    #[test]
    fn test_not_equal_on_zero_vectors() {
        let x = [0, 0];
        let y = [0, 0];

        let ne = not_equal(&x, &y);
        assert_eq!(ne, [false, false]);
        assert!(!any(&ne));
    }

    #[test]
    fn test_bool_reductions() {
        let v = BVec2::new([true, false]);

        assert_eq!(not(&v), BVec2::new([false, true]));
        assert!(any(&v));
        assert!(!all(&v));
    }

    #[test]
    fn test_reductions_on_uniform_vectors() {
        assert!(!any(&BVec4::splat(false)));
        assert!(all(&BVec4::splat(true)));
        assert!(any(&BVec4::splat(true)));
        assert!(!all(&BVec4::splat(false)));
    }

    #[test]
    fn test_zero_length_identities() {
        let empty: [bool; 0] = [];

        assert!(!any(&empty));
        assert!(all(&empty));
        assert_eq!(not(&empty), empty);

        let x: [f32; 0] = [];
        assert_eq!(less_than(&x, &x), empty);
    }

    #[test]
    fn test_equal_on_bool_vectors() {
        let a = [true, false, true];
        let b = [true, true, false];

        assert_eq!(equal(&a, &b), [true, false, false]);
        assert_eq!(not_equal(&a, &b), [false, true, true]);
    }

    #[test]
    fn test_float_nan_semantics() {
        let x = Vec4::new([f32::NAN, 1.0, 0.0, f32::INFINITY]);
        let y = Vec4::new([1.0, f32::NAN, -0.0, f32::INFINITY]);

        assert_eq!(less_than(&x, &y).into_array(), [false, false, false, false]);
        assert_eq!(less_than_equal(&x, &y).into_array(), [false, false, true, true]);
        assert_eq!(equal(&x, &y).into_array(), [false, false, true, true]);
        assert_eq!(not_equal(&x, &y).into_array(), [true, true, false, false]);
    }

    #[test]
    fn test_equal_of_self_with_nan_is_false() {
        let x = [f64::NAN, 1.0];
        assert_eq!(equal(&x, &x), [false, true]);
    }

    #[test]
    fn test_unsigned_extremes() {
        let x = UVec4::new([0, u32::MAX, 7, 7]);
        let y = UVec4::new([u32::MAX, 0, 7, 8]);

        assert_eq!(less_than(&x, &y).into_array(), [true, false, false, true]);
        assert_eq!(greater_than_equal(&x, &y).into_array(), [false, true, true, false]);
    }

    #[test]
    fn test_large_vector() {
        let x: TVec<i64, 16> = TVec::from_fn(|i| i as i64);
        let y: TVec<i64, 16> = TVec::splat(8);

        let lt = less_than(&x, &y);
        for i in 0..16 {
            assert_eq!(lt[i], i < 8);
        }
    }

    #[test]
    fn test_equal_eps() {
        let a = DVec2::new([1.0, 2.0]);
        let b = DVec2::new([1.05, 2.2]);

        assert_eq!(equal_eps(&a, &b, 0.1).into_array(), [true, false]);
        assert_eq!(not_equal_eps(&a, &b, 0.1).into_array(), [false, true]);
    }

    #[test]
    fn test_equal_eps_zero_matches_equal() {
        let a = [1.0f32, -3.5, 0.0];
        let b = [1.0f32, 3.5, -0.0];

        assert_eq!(equal_eps(&a, &b, 0.0), equal(&a, &b));
        assert_eq!(not_equal_eps(&a, &b, 0.0), not_equal(&a, &b));
    }

    #[test]
    fn test_equal_eps_nan() {
        let a = [f32::NAN, 1.0];
        let b = [f32::NAN, f32::NAN];

        assert_eq!(equal_eps(&a, &b, f32::INFINITY), [false, false]);
        assert_eq!(not_equal_eps(&a, &b, f32::INFINITY), [true, true]);
    }

    #[test]
    fn test_equal_eps_vec() {
        let a = [1.0f32, 1.0, 1.0];
        let b = [1.5f32, 1.5, 1.5];
        let eps = [0.1f32, 0.5, 1.0];

        assert_eq!(equal_eps_vec(&a, &b, &eps), [false, true, true]);
        assert_eq!(not_equal_eps_vec(&a, &b, &eps), [true, false, false]);
    }

    #[test]
    fn test_method_style() {
        let x = IVec3::new([1, 2, 3]);
        let y = IVec3::new([3, 2, 1]);

        assert_eq!(x.less_than(&y), less_than(&x, &y));
        assert_eq!(x.less_than_equal(&y), less_than_equal(&x, &y));
        assert_eq!(x.greater_than(&y), greater_than(&x, &y));
        assert_eq!(x.greater_than_equal(&y), greater_than_equal(&x, &y));
        assert_eq!(x.equal(&y), equal(&x, &y));
        assert_eq!(x.not_equal(&y), not_equal(&x, &y));

        let eq = x.equal(&y);
        assert!(eq.any());
        assert!(!eq.all());
        assert_eq!(BoolVecReduce::not(&eq), BVec3::new([true, false, true]));
    }

    #[test]
    fn test_comparisons_visit_in_index_order() {
        struct Recorder([i32; 3]);

        impl VecType for Recorder {
            type Elem = i32;
            type Rebind<U: Copy> = [U; 3];
            const SIZE: usize = 3;

            fn component(&self, index: usize) -> i32 {
                self.0[index]
            }

            fn from_components<F: FnMut(usize) -> i32>(f: F) -> Self {
                Recorder(std::array::from_fn(f))
            }
        }

        let x = Recorder([1, 2, 3]);
        let mut seen = Vec::new();
        let result = componentwise(&x, &x, |a, _| {
            seen.push(a);
            true
        });

        assert_eq!(result, [true; 3]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
