// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: entity identity, collision masks, boxes, rays and hits.

use core::cmp::Ordering;

use glam::Vec3;

/// Generational identity of a scene entity.
///
/// Two ids compare equal only if both the slot and the generation match, so a
/// stale id never aliases an entity spawned later into the same slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32, u32);

impl EntityId {
    /// Build an id from a slot index and generation.
    ///
    /// Scenes other than [`SceneTree`](crate::SceneTree) use this to expose
    /// their own handles.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self(index, generation)
    }

    /// Slot index.
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Slot generation.
    pub const fn generation(self) -> u32 {
        self.1
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Collision groups a collider belongs to, or a ray tests against.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionMask: u32 {
        const _ = !0;
    }
}

impl Default for CollisionMask {
    fn default() -> Self {
        Self::all()
    }
}

impl CollisionMask {
    /// Mask with only bit `group` set. Groups past 31 yield an empty mask.
    pub fn from_group(group: u32) -> Self {
        Self::from_bits_retain(1_u32.checked_shl(group).unwrap_or(0))
    }
}

/// Axis-aligned box in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb3 {
    /// Create a box from two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from its center and full extents.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Whether the boxes overlap or touch.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Surface area, used as the split cost metric.
    pub fn surface_area(&self) -> f32 {
        let d = (self.max - self.min).max(Vec3::ZERO);
        2.0 * (d.x * d.y + d.y * d.z + d.z * d.x)
    }

    /// Slab test. Returns the entry and exit distances along `ray`, clipped
    /// to the ray's max distance. An origin inside the box enters at 0.
    pub fn ray_interval(&self, ray: &Ray) -> Option<(f32, f32)> {
        let inv = ray.direction.recip();
        let t1 = (self.min - ray.origin) * inv;
        let t2 = (self.max - ray.origin) * inv;
        let tmin = t1.min(t2).max_element();
        let tmax = t1.max(t2).min_element();

        // Entirely behind the origin, or missed.
        if tmax < 0.0 || tmin > tmax {
            return None;
        }
        let enter = tmin.max(0.0);
        if ray.max_distance.is_some_and(|max| enter > max) {
            return None;
        }
        Some((enter, tmax))
    }

    /// Distance to the first surface crossed by `ray`.
    ///
    /// From inside the box this is the exit distance.
    pub fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        let (enter, exit) = self.ray_interval(ray)?;
        let inside = self.min.cmple(ray.origin).all() && ray.origin.cmple(self.max).all();
        let t = if inside { exit } else { enter };
        ray.within(t).then_some(t)
    }
}

/// A query ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// World-space origin.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
    /// Only colliders sharing a bit with this mask are tested.
    pub mask: CollisionMask,
    /// Hits farther than this are dropped. `None` is unbounded.
    pub max_distance: Option<f32>,
}

impl Ray {
    /// Create an unbounded ray against every group. `direction` is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            mask: CollisionMask::all(),
            max_distance: None,
        }
    }

    /// Builder: restrict to `mask`.
    pub fn with_mask(mut self, mask: CollisionMask) -> Self {
        self.mask = mask;
        self
    }

    /// Builder: drop hits beyond `max`.
    pub fn with_max_distance(mut self, max: f32) -> Self {
        self.max_distance = Some(max);
        self
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Whether `t` lies within `[0, max_distance]`.
    pub fn within(&self, t: f32) -> bool {
        t >= 0.0 && self.max_distance.is_none_or(|max| t <= max)
    }
}

/// A single ray/entity intersection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Entity owning the collider that was hit.
    pub entity: EntityId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit location.
    pub point: Vec3,
}

/// Hits of one raycast query, nearest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HitResult {
    hits: Vec<RayHit>,
}

impl HitResult {
    /// No hits.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sort `hits` nearest first.
    ///
    /// NaN distances compare equal to everything, so the sort stays stable
    /// rather than panicking; such hits keep their relative order.
    pub fn from_unsorted(mut hits: Vec<RayHit>) -> Self {
        hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
        Self { hits }
    }

    /// Nearest hit.
    pub fn nearest(&self) -> Option<&RayHit> {
        self.hits.first()
    }

    /// All hits, nearest first.
    pub fn as_slice(&self) -> &[RayHit] {
        &self.hits
    }

    /// Iterate hits, nearest first.
    pub fn iter(&self) -> core::slice::Iter<'_, RayHit> {
        self.hits.iter()
    }

    /// Number of hits.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// True when nothing was hit.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl<'a> IntoIterator for &'a HitResult {
    type Item = &'a RayHit;
    type IntoIter = core::slice::Iter<'a, RayHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

/// Opaque host data attached to a reality hit (for example a hit-test
/// result handle).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HitTestPayload(pub u64);

/// A hit on a non-entity surface such as an AR passthrough plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RealityHit {
    /// World-space location.
    pub point: Vec3,
    /// Host payload.
    pub payload: HitTestPayload,
}
