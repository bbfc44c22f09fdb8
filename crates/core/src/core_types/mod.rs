//! Core types and utilities

pub mod vec;

pub use vec::{Vec3, Vec6, SPATIAL_DIM};
