//! Fixed-size vector aliases backing the spatial types.

use nalgebra::{Vector3, Vector6};

/// Number of components in a spatial vector.
pub const SPATIAL_DIM: usize = 6;

/// 6D column vector, the storage of every spatial vector.
///
/// This is a simple alias for `nalgebra::Vector6<T>`; element access, the
/// transpose/dot product and the arithmetic come from nalgebra.
pub type Vec6<T> = Vector6<T>;

/// 3D column vector for the angular and linear halves of a spatial vector.
pub type Vec3<T> = Vector3<T>;
