//! Dual pairing of motion and force vectors.
//!
//! The scalar product `m · f` of a motion vector and a force vector is the
//! instantaneous power the force delivers. It is the only product defined
//! between the two kinds, and pairing two vectors of the same kind does not
//! compile:
//!
//! ```compile_fail
//! use rbd_core::{power, MotionVector};
//!
//! let a = MotionVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
//! let b = MotionVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
//! let _ = power(&a, &b);
//! ```

use nalgebra::RealField;

use super::vector::{ForceVector, MotionVector};

/// Scalar pairing between dual spatial vector kinds.
pub trait Pairing<Rhs> {
    type Output;

    /// Instantaneous power of the pair.
    fn power(&self, rhs: &Rhs) -> Self::Output;
}

impl<T: RealField> Pairing<ForceVector<T>> for MotionVector<T> {
    type Output = T;

    /// `Σ m[i] * f[i]` as the 1×6 by 6×1 product `mᵀ f`, summed in index order.
    #[inline]
    fn power(&self, force: &ForceVector<T>) -> T {
        self.data().dot(force.data())
    }
}

// Delegates, so both argument orders give bit-identical results.
impl<T: RealField> Pairing<MotionVector<T>> for ForceVector<T> {
    type Output = T;

    #[inline]
    fn power(&self, motion: &MotionVector<T>) -> T {
        motion.power(self)
    }
}

/// Instantaneous power of a motion/force pair, in either order.
///
/// ```
/// use rbd_core::{power, ForceVector, MotionVector};
///
/// let twist = MotionVector::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
/// let wrench = ForceVector::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
/// assert_eq!(power(&twist, &wrench), 0.0);
/// ```
#[inline]
pub fn power<A, B>(a: &A, b: &B) -> A::Output
where
    A: Pairing<B>,
{
    a.power(b)
}
