//! # Interaction
//!
//! Ray-based voxel picking: marching a segment through the grid, finding the
//! first solid voxel it touches, and inferring the adjacent cell eligible
//! for placement.

pub mod placement;
pub mod raycast;
