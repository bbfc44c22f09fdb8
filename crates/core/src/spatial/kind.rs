//! Zero-sized tags naming the two kinds of spatial vector.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// Kind tag of a [`SpatialVector`](super::SpatialVector).
///
/// Sealed: the motion/force split is the whole of spatial vector algebra,
/// downstream crates cannot add a third kind.
pub trait SpatialKind: sealed::Sealed + Debug + Clone + Copy + PartialEq + Eq + 'static {
    /// Human-readable kind name, used in diagnostics.
    const NAME: &'static str;
}

/// Motion kind: spatial velocities and accelerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Motion;

/// Force kind: spatial forces and momenta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Force;

impl sealed::Sealed for Motion {}
impl sealed::Sealed for Force {}

impl SpatialKind for Motion {
    const NAME: &'static str = "motion";
}

impl SpatialKind for Force {
    const NAME: &'static str = "force";
}
