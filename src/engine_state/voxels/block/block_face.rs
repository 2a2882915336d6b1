//! # Block Face Module
//!
//! The six faces of a voxel and the per-voxel exposure flags used for face
//! culling.

use cgmath::{Point3, Vector3};

/// The six faces of a voxel, named by the neighbor direction they face.
///
/// The discriminants index into [`FaceVisibility`] and fix the emission
/// order of the mesh builder.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum VoxelFace {
    /// Face adjacent to the `z - 1` neighbor
    NegZ = 0,

    /// Face adjacent to the `z + 1` neighbor
    PosZ = 1,

    /// Face adjacent to the `x - 1` neighbor
    NegX = 2,

    /// Face adjacent to the `x + 1` neighbor
    PosX = 3,

    /// Face adjacent to the `y + 1` neighbor
    PosY = 4,

    /// Face adjacent to the `y - 1` neighbor
    NegY = 5,
}

impl VoxelFace {
    /// Returns all six faces in emission order.
    pub fn all() -> [VoxelFace; 6] {
        [
            VoxelFace::NegZ,
            VoxelFace::PosZ,
            VoxelFace::NegX,
            VoxelFace::PosX,
            VoxelFace::PosY,
            VoxelFace::NegY,
        ]
    }

    /// The grid offset of the neighbor this face is adjacent to.
    pub fn neighbor_offset(self) -> (i32, i32, i32) {
        match self {
            VoxelFace::NegZ => (0, 0, -1),
            VoxelFace::PosZ => (0, 0, 1),
            VoxelFace::NegX => (-1, 0, 0),
            VoxelFace::PosX => (1, 0, 0),
            VoxelFace::PosY => (0, 1, 0),
            VoxelFace::NegY => (0, -1, 0),
        }
    }

    /// The normal emitted with this face's vertices.
    ///
    /// The Z faces carry the renderer's inward-Z convention; the lighting in
    /// the host renderer is tuned against exactly these vectors.
    pub fn normal(self) -> Vector3<f32> {
        match self {
            VoxelFace::NegZ => Vector3::new(0.0, 0.0, 1.0),
            VoxelFace::PosZ => Vector3::new(0.0, 0.0, -1.0),
            VoxelFace::NegX => Vector3::new(-1.0, 0.0, 0.0),
            VoxelFace::PosX => Vector3::new(1.0, 0.0, 0.0),
            VoxelFace::PosY => Vector3::new(0.0, 1.0, 0.0),
            VoxelFace::NegY => Vector3::new(0.0, -1.0, 0.0),
        }
    }

    /// The four corners of this face for the voxel at `(x, y, z)`, in the
    /// order bottom-left, top-left, top-right, bottom-right.
    ///
    /// The order fixes the winding for the two emitted triangles, so a
    /// renderer culling clockwise faces sees every face from outside the
    /// voxel.
    pub fn corners(self, x: i32, y: i32, z: i32) -> [Point3<f32>; 4] {
        let (x0, y0, z0) = (x as f32, y as f32, z as f32);
        let (x1, y1, z1) = (x0 + 1.0, y0 + 1.0, z0 + 1.0);

        match self {
            VoxelFace::NegZ => [
                Point3::new(x0, y0, z0),
                Point3::new(x0, y1, z0),
                Point3::new(x1, y1, z0),
                Point3::new(x1, y0, z0),
            ],

            VoxelFace::PosZ => [
                Point3::new(x1, y0, z1),
                Point3::new(x1, y1, z1),
                Point3::new(x0, y1, z1),
                Point3::new(x0, y0, z1),
            ],

            VoxelFace::NegX => [
                Point3::new(x0, y0, z1),
                Point3::new(x0, y1, z1),
                Point3::new(x0, y1, z0),
                Point3::new(x0, y0, z0),
            ],

            VoxelFace::PosX => [
                Point3::new(x1, y0, z0),
                Point3::new(x1, y1, z0),
                Point3::new(x1, y1, z1),
                Point3::new(x1, y0, z1),
            ],

            VoxelFace::PosY => [
                Point3::new(x0, y1, z0),
                Point3::new(x0, y1, z1),
                Point3::new(x1, y1, z1),
                Point3::new(x1, y1, z0),
            ],

            VoxelFace::NegY => [
                Point3::new(x1, y0, z0),
                Point3::new(x1, y0, z1),
                Point3::new(x0, y0, z1),
                Point3::new(x0, y0, z0),
            ],
        }
    }
}

/// Per-face exposure flags for one voxel, indexed by [`VoxelFace`].
///
/// A face is exposed when its axis-neighbor is non-opaque (empty or outside
/// the grid); only exposed faces are emitted into the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVisibility([bool; 6]);

impl FaceVisibility {
    /// Wraps raw exposure flags in [`VoxelFace::all`] order.
    pub fn new(exposed: [bool; 6]) -> Self {
        FaceVisibility(exposed)
    }

    /// Whether the given face is exposed.
    pub fn is_exposed(&self, face: VoxelFace) -> bool {
        self.0[face as usize]
    }

    /// Whether every face is hidden by an opaque neighbor.
    pub fn fully_hidden(&self) -> bool {
        !self.0.iter().any(|&exposed| exposed)
    }

    /// Number of exposed faces.
    pub fn exposed_count(&self) -> usize {
        self.0.iter().filter(|&&exposed| exposed).count()
    }
}
