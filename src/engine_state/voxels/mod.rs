//! # Voxels
//!
//! World data: the voxel id vocabulary, integer grid coordinates, the
//! fixed-size world grid itself, and the pluggable initial-state generators.

pub mod block;
pub mod generation;
pub mod grid;
pub mod position;
