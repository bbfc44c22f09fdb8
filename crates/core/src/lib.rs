//! Rigid Body Dynamics Core Library
//!
//! Six-dimensional spatial vectors for rigid-body mechanics, in the
//! motion/force split used by Featherstone-style dynamics.
//!
//! ## Spatial vectors
//!
//! - [`MotionVector`]: spatial velocities and accelerations (twists)
//! - [`ForceVector`]: spatial forces and momenta (wrenches)
//!
//! Both share one storage layout (a [`Vec6`], angular half first) and differ
//! only by a zero-sized kind tag. The only operation defined across kinds is
//! the pairing [`power`], the scalar product of a motion and a force.
//!
//! ```
//! use rbd_core::{power, ForceVector, MotionVector};
//!
//! let velocity = MotionVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
//! let force = ForceVector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
//!
//! assert_eq!(power(&velocity, &force), 91.0);
//! assert_eq!(power(&force, &velocity), 91.0);
//! ```

// Core types and utilities
pub mod core_types;

// Spatial vector algebra
pub mod spatial;

// Re-export core types
pub use core_types::{Vec3, Vec6, SPATIAL_DIM};

// Re-export spatial types
pub use spatial::{
    power, Force, ForceVector, Motion, MotionVector, Pairing, SpatialError, SpatialKind,
    SpatialVector,
};
