// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use reticle_cast::{
    Aabb3, Broadphase, Bvh, Collider, ColliderWorld, EntityId, FlatVec, Ray, RaycastBackend, Shape,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

/// An `n`×`n`×`n` lattice of unit boxes spaced `cell` apart, centered on the
/// origin.
fn gen_lattice(n: usize, cell: f32) -> Vec<Shape> {
    let mut out = Vec::with_capacity(n * n * n);
    let offset = (n as f32 - 1.0) * cell * 0.5;
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                let c = Vec3::new(x as f32, y as f32, z as f32) * cell - Vec3::splat(offset);
                out.push(Shape::Aabb(Aabb3::from_center_size(c, Vec3::ONE)));
            }
        }
    }
    out
}

/// `count` spheres scattered through a cube of side `extent`.
fn gen_scattered(count: usize, extent: f32) -> Vec<Shape> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let center = Vec3::new(rng.next_f32(), rng.next_f32(), rng.next_f32()) * extent
                - Vec3::splat(extent * 0.5);
            Shape::Sphere {
                center,
                radius: 0.25 + rng.next_f32(),
            }
        })
        .collect()
}

fn gen_rays(count: usize, extent: f32) -> Vec<Ray> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let origin = Vec3::new(0.0, 0.0, extent);
            let target = Vec3::new(rng.next_f32() - 0.5, rng.next_f32() - 0.5, 0.0) * extent;
            Ray::new(origin, target - origin)
        })
        .collect()
}

fn build<B: Broadphase + Default>(shapes: &[Shape]) -> ColliderWorld<B> {
    let mut world = ColliderWorld::<B>::new();
    for (i, s) in shapes.iter().copied().enumerate() {
        world.insert(Collider::new(EntityId::new(i as u32, 1), s));
    }
    world
}

fn bench_insert<B: Broadphase + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for &n in &[8usize, 16, 24] {
        let shapes = gen_lattice(n, 2.0);
        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_function(format!("insert_lattice_n{}", n), |b| {
            b.iter_batched(
                ColliderWorld::<B>::new,
                |mut world| {
                    for (i, s) in shapes.iter().copied().enumerate() {
                        let _ = world.insert(Collider::new(EntityId::new(i as u32, 1), s));
                    }
                    black_box(world.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_cast<B: Broadphase + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    let rays = gen_rays(256, 60.0);
    group.throughput(Throughput::Elements(rays.len() as u64));

    for &n in &[8usize, 16, 24] {
        let world = build::<B>(&gen_lattice(n, 2.0));
        group.bench_function(format!("cast_lattice_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0;
                for ray in &rays {
                    hits += world.cast(ray).len();
                }
                black_box(hits)
            })
        });
    }

    let world = build::<B>(&gen_scattered(4096, 60.0));
    group.bench_function("cast_scattered_4096", |b| {
        b.iter(|| {
            let mut nearest = 0.0;
            for ray in &rays {
                if let Some(h) = world.cast(ray).nearest() {
                    nearest += h.distance;
                }
            }
            black_box(nearest)
        })
    });
    group.finish();
}

fn bench_flatvec(c: &mut Criterion) {
    bench_insert::<FlatVec>(c, "flatvec_insert");
    bench_cast::<FlatVec>(c, "flatvec_cast");
}

fn bench_bvh(c: &mut Criterion) {
    bench_insert::<Bvh>(c, "bvh_insert");
    bench_cast::<Bvh>(c, "bvh_cast");
}

criterion_group!(benches, bench_flatvec, bench_bvh);
criterion_main!(benches);
