//! Motion and force vectors over a shared 6-component storage.
//!
//! Components are ordered angular first, linear second:
//! - motion: `[ωx, ωy, ωz, vx, vy, vz]`
//! - force: `[nx, ny, nz, fx, fy, fz]`
//!
//! The split is a convention only. Storage, access and printing do not
//! depend on it; [`SpatialVector::angular`] and [`SpatialVector::linear`]
//! just slice it.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};

use nalgebra::{RealField, Scalar};
use tracing::{debug, trace};

use super::error::{Result, SpatialError};
use super::kind::{Force, Motion, SpatialKind};
use crate::core_types::{Vec3, Vec6, SPATIAL_DIM};

/// A six-dimensional spatial vector of kind `K`.
///
/// Thin wrapper around a [`Vec6`]. `K` is a zero-sized tag, so a
/// `SpatialVector` has exactly the layout of its storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct SpatialVector<T, K> {
    data: Vec6<T>,
    kind: PhantomData<K>,
}

/// Spatial motion vector, e.g. a spatial velocity or acceleration.
pub type MotionVector<T> = SpatialVector<T, Motion>;

/// Spatial force vector, e.g. a spatial force or momentum.
pub type ForceVector<T> = SpatialVector<T, Force>;

impl<T: Scalar, K: SpatialKind> SpatialVector<T, K> {
    /// Wrap an existing 6D vector.
    #[inline]
    pub fn from_data(data: Vec6<T>) -> Self {
        SpatialVector {
            data,
            kind: PhantomData,
        }
    }

    /// Create from six components, in order.
    #[inline]
    pub fn new(v0: T, v1: T, v2: T, v3: T, v4: T, v5: T) -> Self {
        Self::from_data(Vec6::new(v0, v1, v2, v3, v4, v5))
    }

    /// Create from its angular (first three) and linear (last three) halves.
    pub fn from_parts(angular: &Vec3<T>, linear: &Vec3<T>) -> Self {
        Self::from_data(Vec6::from_iterator(
            angular.iter().chain(linear.iter()).cloned(),
        ))
    }

    /// Create from a runtime list of components.
    ///
    /// # Panics
    /// Panics if `values` does not hold exactly six components. The check is
    /// always on, release builds included. Use [`Self::try_from_slice`] for
    /// untrusted input.
    #[track_caller]
    pub fn from_slice(values: &[T]) -> Self {
        assert!(
            values.len() == SPATIAL_DIM,
            "SpatialVector::from_slice: expected {} components, got {}",
            SPATIAL_DIM,
            values.len()
        );
        Self::from_data(Vec6::from_column_slice(values))
    }

    /// Create from a runtime list of components.
    ///
    /// # Errors
    /// Returns [`SpatialError::WrongArity`] unless `values` holds exactly six
    /// components.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        if values.len() != SPATIAL_DIM {
            debug!(
                kind = K::NAME,
                found = values.len(),
                "rejected spatial vector component list"
            );
            return Err(SpatialError::WrongArity {
                expected: SPATIAL_DIM,
                found: values.len(),
            });
        }
        Ok(Self::from_data(Vec6::from_column_slice(values)))
    }

    /// The underlying 6D vector.
    #[inline]
    pub fn data(&self) -> &Vec6<T> {
        &self.data
    }

    /// Unwrap into the underlying 6D vector.
    #[inline]
    pub fn into_data(self) -> Vec6<T> {
        self.data
    }

    /// Components as a slice, in index order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Iterate over the six components in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Component `index`, or `None` outside `[0, 5]`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable component `index`, or `None` outside `[0, 5]`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.as_mut_slice().get_mut(index)
    }

    /// Overwrite component `index`.
    ///
    /// # Errors
    /// Returns [`SpatialError::IndexOutOfRange`] outside `[0, 5]`; the vector
    /// is left untouched.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                trace!(kind = K::NAME, index, "spatial vector write out of range");
                Err(SpatialError::IndexOutOfRange { index })
            }
        }
    }

    /// Angular half (components 0..3), copied out.
    pub fn angular(&self) -> Vec3<T> {
        self.data.fixed_rows::<3>(0).into_owned()
    }

    /// Linear half (components 3..6), copied out.
    pub fn linear(&self) -> Vec3<T> {
        self.data.fixed_rows::<3>(3).into_owned()
    }
}

impl<T: RealField, K: SpatialKind> SpatialVector<T, K> {
    /// The zero vector of this kind.
    pub fn zeros() -> Self {
        Self::from_data(Vec6::zeros())
    }
}

impl<T: RealField, K: SpatialKind> Default for SpatialVector<T, K> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, K: SpatialKind> From<Vec6<T>> for SpatialVector<T, K> {
    fn from(data: Vec6<T>) -> Self {
        Self::from_data(data)
    }
}

impl<T: Scalar, K: SpatialKind> From<[T; SPATIAL_DIM]> for SpatialVector<T, K> {
    fn from(values: [T; SPATIAL_DIM]) -> Self {
        Self::from_data(Vec6::from(values))
    }
}

impl<'a, T: Scalar, K: SpatialKind> IntoIterator for &'a SpatialVector<T, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Scalar, K: SpatialKind> TryFrom<&'a [T]> for SpatialVector<T, K> {
    type Error = SpatialError;

    fn try_from(values: &'a [T]) -> Result<Self> {
        Self::try_from_slice(values)
    }
}

// Checked: an index outside [0, 5] panics instead of reading past the storage.
impl<T: Scalar, K: SpatialKind> Index<usize> for SpatialVector<T, K> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < SPATIAL_DIM,
            "SpatialVector::index: index {index} out of range [0, 5]"
        );
        &self.data[index]
    }
}

impl<T: Scalar, K: SpatialKind> IndexMut<usize> for SpatialVector<T, K> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < SPATIAL_DIM,
            "SpatialVector::index_mut: index {index} out of range [0, 5]"
        );
        &mut self.data[index]
    }
}

// Same-kind arithmetic only: twist + twist, wrench + wrench.
impl<T: RealField, K: SpatialKind> Add for SpatialVector<T, K> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_data(self.data + rhs.data)
    }
}

impl<T: RealField, K: SpatialKind> Sub for SpatialVector<T, K> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_data(self.data - rhs.data)
    }
}

impl<T: RealField, K: SpatialKind> Neg for SpatialVector<T, K> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_data(-self.data)
    }
}

impl<T: RealField, K: SpatialKind> AddAssign for SpatialVector<T, K> {
    fn add_assign(&mut self, rhs: Self) {
        self.data += rhs.data;
    }
}

impl<T: RealField, K: SpatialKind> SubAssign for SpatialVector<T, K> {
    fn sub_assign(&mut self, rhs: Self) {
        self.data -= rhs.data;
    }
}

/// One component per line, in index order. Honours `{:.N}` precision.
impl<T: Scalar + fmt::Display, K: SpatialKind> fmt::Display for SpatialVector<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match precision {
                Some(p) => write!(f, "{value:.p$}")?,
                None => write!(f, "{value}")?,
            }
        }
        Ok(())
    }
}
