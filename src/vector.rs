//! Runtime-length vector with multi-backend relational operations
//!
//! The fixed-size functions in [`relational`](crate::relational) check sizes
//! through the type system. [`Vector`] carries its length at runtime instead, so
//! every binary comparison checks the operand lengths once and returns
//! [`RelationalError::SizeMismatch`] on disagreement.

use crate::backends::{self, CompareOp};
use crate::{scalar, Backend, RelationalError, Result, Scalar};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Runtime-length vector with multi-backend support
///
/// # Examples
///
/// ```
/// use trueno_relational::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let b = Vector::from_slice(&[3.0, 2.0, 1.0]);
/// let result = a.less_than(&b).unwrap();
///
/// assert_eq!(result.as_slice(), &[true, false, false]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
    backend: Backend,
}

impl<T> Vector<T>
where
    T: Clone,
{
    /// Create vector from slice using auto-selected optimal backend
    ///
    /// # Examples
    ///
    /// ```
    /// use trueno_relational::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(v.len(), 4);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
            backend: crate::select_best_available_backend(),
        }
    }

    /// Create vector with specific backend (for benchmarking or testing)
    ///
    /// `Backend::Auto` is resolved to the best available backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use trueno_relational::{Backend, Vector};
    ///
    /// let v = Vector::from_slice_with_backend(&[1.0, 2.0], Backend::Scalar);
    /// assert_eq!(v.backend(), Backend::Scalar);
    /// ```
    pub fn from_slice_with_backend(data: &[T], backend: Backend) -> Self {
        let resolved_backend = match backend {
            Backend::Auto => crate::select_best_available_backend(),
            _ => backend,
        };

        Self {
            data: data.to_vec(),
            backend: resolved_backend,
        }
    }

    /// Get underlying data as slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get vector length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.backend
    }
}

impl<T: Scalar> Vector<T> {
    /// Component-wise `self < other`
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if vectors have different lengths.
    pub fn less_than(&self, other: &Self) -> Result<Vector<bool>> {
        self.compare(other, CompareOp::LessThan)
    }

    /// Component-wise `self <= other`
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if vectors have different lengths.
    pub fn less_than_equal(&self, other: &Self) -> Result<Vector<bool>> {
        self.compare(other, CompareOp::LessThanEqual)
    }

    /// Component-wise `self > other`
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if vectors have different lengths.
    pub fn greater_than(&self, other: &Self) -> Result<Vector<bool>> {
        self.compare(other, CompareOp::GreaterThan)
    }

    /// Component-wise `self >= other`
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if vectors have different lengths.
    pub fn greater_than_equal(&self, other: &Self) -> Result<Vector<bool>> {
        self.compare(other, CompareOp::GreaterThanEqual)
    }

    /// Component-wise `self == other`
    ///
    /// # Examples
    ///
    /// ```
    /// use trueno_relational::Vector;
    ///
    /// let a = Vector::from_slice(&[1, 2, 3]);
    /// let b = Vector::from_slice(&[3, 2, 1]);
    /// let eq = a.equal(&b).unwrap();
    ///
    /// assert_eq!(eq.as_slice(), &[false, true, false]);
    /// assert!(eq.any());
    /// assert!(!eq.all());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if vectors have different lengths.
    pub fn equal(&self, other: &Self) -> Result<Vector<bool>> {
        self.compare(other, CompareOp::Equal)
    }

    /// Component-wise `self != other`
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if vectors have different lengths.
    pub fn not_equal(&self, other: &Self) -> Result<Vector<bool>> {
        self.compare(other, CompareOp::NotEqual)
    }

    /// Component-wise comparison with an explicit operator
    ///
    /// # Errors
    ///
    /// Returns [`RelationalError::SizeMismatch`] if vectors have different lengths.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            skip(self, other, op),
            fields(op = %op, len = self.len(), backend = ?self.backend)
        )
    )]
    pub fn compare(&self, other: &Self, op: CompareOp) -> Result<Vector<bool>> {
        if self.len() != other.len() {
            return Err(RelationalError::SizeMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let mut result = vec![false; self.len()];
        scalar::compare_slices(self.backend, op, &self.data, &other.data, &mut result);

        Ok(Vector {
            data: result,
            backend: self.backend,
        })
    }
}

impl Vector<bool> {
    /// True if any element is true; false for an empty vector
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn any(&self) -> bool {
        backends::any(self.backend, &self.data)
    }

    /// True if every element is true; true for an empty vector
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn all(&self) -> bool {
        backends::all(self.backend, &self.data)
    }

    /// Element-wise logical complement
    ///
    /// # Examples
    ///
    /// ```
    /// use trueno_relational::Vector;
    ///
    /// let v = Vector::from_slice(&[true, false]);
    /// assert_eq!(v.not().as_slice(), &[false, true]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn not(&self) -> Vector<bool> {
        let mut result = vec![false; self.len()];
        backends::not(self.backend, &self.data, &mut result);

        Vector {
            data: result,
            backend: self.backend,
        }
    }
}
