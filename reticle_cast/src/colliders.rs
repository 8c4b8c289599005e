// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collider worlds: the raycast backends used by the cursor.
//!
//! A [`ColliderWorld`] stores world-space collider shapes, each owned by a
//! scene entity and tagged with a [`CollisionMask`]. It answers ray queries
//! through a pluggable [`Broadphase`]:
//!
//! - [`CollisionWorld`]: linear scan, the lightweight collider query.
//! - [`PhysicsWorld`]: BVH broadphase, the accelerated physics query.
//!
//! Both return identical hits for identical contents.
//!
//! ```
//! use glam::Vec3;
//! use reticle_cast::{Aabb3, Collider, CollisionWorld, EntityId, Ray, RaycastBackend, Shape};
//!
//! let mut world = CollisionWorld::new();
//! let button = EntityId::new(0, 1);
//! world.insert(Collider::new(
//!     button,
//!     Shape::Aabb(Aabb3::from_center_size(Vec3::new(0.0, 0.0, -3.0), Vec3::ONE)),
//! ));
//! let hits = world.cast(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
//! assert_eq!(hits.nearest().map(|h| h.entity), Some(button));
//! ```

use glam::Vec3;

use crate::backend::RaycastBackend;
use crate::broadphase::Broadphase;
use crate::broadphase::bvh::Bvh;
use crate::broadphase::flatvec::FlatVec;
use crate::types::{Aabb3, CollisionMask, EntityId, HitResult, Ray, RayHit};

/// Generational handle for a collider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColliderKey(u32, u32);

impl ColliderKey {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// World-space collider geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned box.
    Aabb(Aabb3),
    /// Sphere.
    Sphere {
        /// Center.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
}

impl Shape {
    /// Conservative bounds for the broadphase.
    pub fn bounds(&self) -> Aabb3 {
        match *self {
            Self::Aabb(aabb) => aabb,
            Self::Sphere { center, radius } => {
                Aabb3::from_center_size(center, Vec3::splat(radius.abs() * 2.0))
            }
        }
    }

    /// Distance along `ray` to the first surface crossed, within the ray's
    /// max distance.
    pub fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Self::Aabb(aabb) => aabb.ray_distance(ray),
            Self::Sphere { center, radius } => {
                let oc = ray.origin - center;
                let b = oc.dot(ray.direction);
                let c = oc.length_squared() - radius * radius;
                let disc = b * b - c;
                if disc < 0.0 {
                    return None;
                }
                let root = disc.sqrt();
                let near = -b - root;
                let t = if near >= 0.0 { near } else { -b + root };
                ray.within(t).then_some(t)
            }
        }
    }
}

/// A collider attached to an entity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider {
    /// Entity reported in hits.
    pub entity: EntityId,
    /// Groups this collider belongs to.
    pub mask: CollisionMask,
    /// World-space geometry.
    pub shape: Shape,
}

impl Collider {
    /// A collider in every group.
    pub fn new(entity: EntityId, shape: Shape) -> Self {
        Self {
            entity,
            mask: CollisionMask::all(),
            shape,
        }
    }

    /// Builder: restrict to `mask`.
    pub fn with_mask(mut self, mask: CollisionMask) -> Self {
        self.mask = mask;
        self
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    collider: Option<Collider>,
}

/// Colliders indexed by a broadphase `B`.
#[derive(Clone, Default)]
pub struct ColliderWorld<B: Broadphase> {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
    broadphase: B,
}

/// Linear-scan collider world.
pub type CollisionWorld = ColliderWorld<FlatVec>;

/// BVH-accelerated collider world.
pub type PhysicsWorld = ColliderWorld<Bvh>;

impl<B: Broadphase + core::fmt::Debug> core::fmt::Debug for ColliderWorld<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColliderWorld")
            .field("colliders", &self.len())
            .field("free_list", &self.free_list.len())
            .field("broadphase", &self.broadphase)
            .finish_non_exhaustive()
    }
}

impl<B: Broadphase + Default> ColliderWorld<B> {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            broadphase: B::default(),
        }
    }
}

impl<B: Broadphase> ColliderWorld<B> {
    /// Create an empty world around a configured broadphase.
    pub fn with_broadphase(broadphase: B) -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            broadphase,
        }
    }

    /// Add a collider. Returns a stable handle.
    pub fn insert(&mut self, collider: Collider) -> ColliderKey {
        let idx = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation += 1;
            slot.collider = Some(collider);
            idx
        } else {
            self.slots.push(Slot {
                generation: 1,
                collider: Some(collider),
            });
            self.slots.len() - 1
        };
        self.broadphase.insert(idx, collider.shape.bounds());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ColliderKey uses 32-bit indices by design."
        )]
        let index = idx as u32;
        ColliderKey(index, self.slots[idx].generation)
    }

    /// Replace the shape of a collider.
    pub fn set_shape(&mut self, key: ColliderKey, shape: Shape) {
        if let Some(c) = self.collider_mut(key) {
            c.shape = shape;
            self.broadphase.update(key.idx(), shape.bounds());
        }
    }

    /// Replace the group mask of a collider.
    pub fn set_mask(&mut self, key: ColliderKey, mask: CollisionMask) {
        if let Some(c) = self.collider_mut(key) {
            c.mask = mask;
        }
    }

    /// Remove a collider. Stale keys are ignored.
    pub fn remove(&mut self, key: ColliderKey) {
        if self.collider_mut(key).is_some() {
            self.slots[key.idx()].collider = None;
            self.free_list.push(key.idx());
            self.broadphase.remove(key.idx());
        }
    }

    /// Remove every collider owned by `entity`.
    pub fn remove_entity(&mut self, entity: EntityId) {
        for idx in 0..self.slots.len() {
            if self.slots[idx]
                .collider
                .is_some_and(|c| c.entity == entity)
            {
                self.slots[idx].collider = None;
                self.free_list.push(idx);
                self.broadphase.remove(idx);
            }
        }
    }

    /// Look up a collider.
    pub fn get(&self, key: ColliderKey) -> Option<&Collider> {
        let slot = self.slots.get(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        slot.collider.as_ref()
    }

    /// Number of live colliders.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.collider.is_some()).count()
    }

    /// True when there are no colliders.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every collider.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.broadphase.clear();
    }

    fn collider_mut(&mut self, key: ColliderKey) -> Option<&mut Collider> {
        let slot = self.slots.get_mut(key.idx())?;
        if slot.generation != key.1 {
            return None;
        }
        slot.collider.as_mut()
    }
}

impl<B: Broadphase> RaycastBackend for ColliderWorld<B> {
    fn cast(&self, ray: &Ray) -> HitResult {
        let mut hits = Vec::new();
        for idx in self.broadphase.query_ray(ray) {
            let Some(collider) = self.slots.get(idx).and_then(|s| s.collider.as_ref()) else {
                continue;
            };
            if !collider.mask.intersects(ray.mask) {
                continue;
            }
            if let Some(distance) = collider.shape.ray_distance(ray) {
                hits.push(RayHit {
                    entity: collider.entity,
                    distance,
                    point: ray.at(distance),
                });
            }
        }
        tracing::trace!(hits = hits.len(), "collider raycast");
        HitResult::from_unsorted(hits)
    }
}
