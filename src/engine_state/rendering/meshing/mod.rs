//! # World Meshing
//!
//! Converts the voxel grid into a renderable triangle list. The builder
//! walks every cell, culls faces hidden by opaque neighbors, and emits two
//! triangles (six unshared vertices) per visible face with the face's atlas
//! UVs.
//!
//! This is a full-rebuild algorithm: O(WORLD_DIM³) per call, invoked
//! synchronously after every voxel edit. There is no dirty-region tracking;
//! the returned mesh always reflects exactly the grid it was built from.

use log::debug;

use crate::engine_state::rendering::atlas::TextureAtlas;
use crate::engine_state::rendering::vertex::Vertex;
use crate::engine_state::voxels::block::block_face::VoxelFace;
use crate::engine_state::voxels::block::AIR;
use crate::engine_state::voxels::grid::{VoxelGrid, WORLD_DIM, WORLD_VOLUME};

/// The complete triangle geometry for the world, plus the emitted face
/// count the renderer needs to know how many triangles to draw.
pub struct WorldMesh {
    vertices: Vec<Vertex>,
    face_count: usize,
}

impl WorldMesh {
    /// Builds the mesh for every solid voxel in the grid.
    ///
    /// # Arguments
    /// * `grid` - The world state to mesh
    /// * `atlas` - Atlas dimensions for normalizing tile rectangles into UVs
    pub fn build(grid: &VoxelGrid, atlas: &TextureAtlas) -> Self {
        let mut mesh = WorldMesh {
            vertices: Vec::with_capacity((WORLD_VOLUME / 32) as usize),
            face_count: 0,
        };

        for z in 0..WORLD_DIM {
            for y in 0..WORLD_DIM {
                for x in 0..WORLD_DIM {
                    let id = grid.get(x, y, z);
                    if id == AIR {
                        continue;
                    }

                    let visibility = grid.exposed_faces(x, y, z);
                    if visibility.fully_hidden() {
                        continue;
                    }

                    let rect = atlas.texture_rect(id);
                    let uv_min = [
                        rect.left() as f32 / atlas.width() as f32,
                        rect.bottom() as f32 / atlas.height() as f32,
                    ];
                    let uv_max = [
                        rect.right() as f32 / atlas.width() as f32,
                        rect.top() as f32 / atlas.height() as f32,
                    ];

                    for face in VoxelFace::all() {
                        if visibility.is_exposed(face) {
                            mesh.emit_face(x, y, z, face, uv_min, uv_max);
                        }
                    }
                }
            }
        }

        debug!(
            "meshed world: {} faces, {} vertices",
            mesh.face_count,
            mesh.vertices.len()
        );

        mesh
    }

    /// Appends one quad as two triangles.
    ///
    /// Corner order is bottom-left, top-left, top-right then bottom-left,
    /// top-right, bottom-right; the face's bottom-left corner carries
    /// `uv_min` and its top-right corner `uv_max` (the V axis is flipped
    /// relative to the rectangle's pixel rows, so `uv_min.y` comes from the
    /// rectangle's bottom edge).
    fn emit_face(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        face: VoxelFace,
        uv_min: [f32; 2],
        uv_max: [f32; 2],
    ) {
        let [bl, tl, tr, br] = face.corners(x, y, z);
        let normal = face.normal();

        self.vertices.push(Vertex::new(bl, normal, uv_min));
        self.vertices.push(Vertex::new(tl, normal, [uv_min[0], uv_max[1]]));
        self.vertices.push(Vertex::new(tr, normal, uv_max));
        self.vertices.push(Vertex::new(bl, normal, uv_min));
        self.vertices.push(Vertex::new(tr, normal, uv_max));
        self.vertices.push(Vertex::new(br, normal, [uv_max[0], uv_min[1]]));

        self.face_count += 1;
    }

    /// The flat vertex buffer, six vertices per face.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of faces emitted into this mesh.
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Number of triangles to draw from the vertex buffer.
    pub fn triangle_count(&self) -> usize {
        self.face_count * 2
    }
}
