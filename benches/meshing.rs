/// Benchmark suite for the full-rebuild mesher across world shapes:
/// best case (all air), boundary-only (all solid), and the stock terrain.
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use voxel_sandbox::engine_state::voxels::block::BlockKind;
use voxel_sandbox::engine_state::voxels::generation::ScatteredTerrain;
use voxel_sandbox::{TextureAtlas, VoxelGrid, WorldMesh};

fn atlas() -> TextureAtlas {
    TextureAtlas::new(1024, 2048)
}

fn bench_mesh_empty_world(c: &mut Criterion) {
    c.bench_function("mesh_empty_world", |b| {
        let grid = VoxelGrid::empty();
        let atlas = atlas();
        b.iter(|| WorldMesh::build(black_box(&grid), black_box(&atlas)));
    });
}

fn bench_mesh_solid_world(c: &mut Criterion) {
    c.bench_function("mesh_solid_world", |b| {
        let grid = VoxelGrid::solid(BlockKind::Stone.id());
        let atlas = atlas();
        b.iter(|| WorldMesh::build(black_box(&grid), black_box(&atlas)));
    });
}

fn bench_mesh_scattered_terrain(c: &mut Criterion) {
    c.bench_function("mesh_scattered_terrain", |b| {
        let grid = VoxelGrid::from_generator(&ScatteredTerrain::default());
        let atlas = atlas();
        b.iter(|| WorldMesh::build(black_box(&grid), black_box(&atlas)));
    });
}

criterion_group!(
    benches,
    bench_mesh_empty_world,
    bench_mesh_solid_world,
    bench_mesh_scattered_terrain
);
criterion_main!(benches);
