//! Fixed-size vector capability trait
//!
//! [`VecType`] is the contract every relational function is written against:
//! a fixed element count known at compile time, per-index read access, and a
//! parallel vector of the same count for any other element type (most
//! importantly `bool`, the result type of every comparison).
//!
//! Implemented for plain arrays `[T; N]` and for [`TVec`](crate::TVec).

/// Boolean vector with the same element count as `V`
pub type BVecOf<V> = <V as VecType>::Rebind<bool>;

/// Fixed-size, indexable vector
///
/// # Invariants
///
/// - `Self::Rebind<U>` has the same `SIZE` as `Self`
/// - `from_components` calls its closure once per index, in order `0..SIZE`
///
/// # Examples
///
/// ```
/// use trueno_relational::VecType;
///
/// let v = <[i32; 3]>::from_components(|i| i as i32 * 10);
/// assert_eq!(v, [0, 10, 20]);
/// assert_eq!(<[i32; 3]>::SIZE, 3);
/// assert_eq!(v.component(2), 20);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a fixed-size vector type",
    label = "vector relational functions require a fixed-size vector such as `[T; N]` or `TVec<T, N>`"
)]
pub trait VecType: Sized {
    /// Element type
    type Elem: Copy;

    /// The same vector shape holding `U` instead of `Self::Elem`
    type Rebind<U: Copy>: VecType<Elem = U>;

    /// Number of elements
    const SIZE: usize;

    /// Read the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::SIZE`.
    fn component(&self, index: usize) -> Self::Elem;

    /// Build a vector from elements supplied by position
    fn from_components<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Self::Elem;
}

impl<T: Copy, const N: usize> VecType for [T; N] {
    type Elem = T;
    type Rebind<U: Copy> = [U; N];

    const SIZE: usize = N;

    #[inline]
    fn component(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn from_components<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        std::array::from_fn(f)
    }
}
