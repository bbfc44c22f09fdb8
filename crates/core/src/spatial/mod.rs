//! Spatial vector algebra
//!
//! Motion and force vectors are one generic struct, [`SpatialVector`],
//! distinguished by a compile-time kind tag. Same-kind vectors add and
//! subtract; across kinds only the [`Pairing`] exists.

pub mod error;
pub mod kind;
pub mod pairing;
pub mod vector;

pub use error::{Result, SpatialError};
pub use kind::{Force, Motion, SpatialKind};
pub use pairing::{power, Pairing};
pub use vector::{ForceVector, MotionVector, SpatialVector};
