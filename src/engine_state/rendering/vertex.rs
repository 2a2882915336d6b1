//! Vertex data structure for the renderer collaborator.
//!
//! The engine emits a plain triangle list of these; the host uploads the
//! buffer and draws `WorldMesh::triangle_count()` triangles from it.

use cgmath::{Point3, Vector3};

/// A vertex in the world mesh.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 32 bytes, `#[repr(C)]` so the buffer can be handed to a GPU
/// API via `bytemuck::cast_slice` without repacking.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
    tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - Corner position in world space
    /// * `normal` - The containing face's normal
    /// * `tex_coords` - Normalized atlas coordinates
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, tex_coords: [f32; 2]) -> Self {
        Vertex {
            position: position.into(),
            normal: normal.into(),
            tex_coords,
        }
    }

    /// The vertex position in world space.
    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    /// The face normal carried by this vertex.
    pub fn normal(&self) -> [f32; 3] {
        self.normal
    }

    /// The normalized atlas coordinates.
    pub fn tex_coords(&self) -> [f32; 2] {
        self.tex_coords
    }
}
