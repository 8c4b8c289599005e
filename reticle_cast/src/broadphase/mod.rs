// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadphase structures for ray queries over collider bounds.

pub mod bvh;
pub mod flatvec;

use crate::types::{Aabb3, Ray};

/// Spatial acceleration abstraction used by
/// [`ColliderWorld`](crate::ColliderWorld).
///
/// Slots are dense indices owned by the world; the broadphase only stores
/// their bounds and returns candidate slots whose bounds the ray crosses.
pub trait Broadphase {
    /// Insert a new slot.
    fn insert(&mut self, slot: usize, aabb: Aabb3);

    /// Update an existing slot's bounds.
    fn update(&mut self, slot: usize, aabb: Aabb3);

    /// Remove a slot.
    fn remove(&mut self, slot: usize);

    /// Drop every slot.
    fn clear(&mut self);

    /// Slots whose bounds intersect `ray` within its max distance.
    fn query_ray<'a>(&'a self, ray: &Ray) -> Box<dyn Iterator<Item = usize> + 'a>;
}
