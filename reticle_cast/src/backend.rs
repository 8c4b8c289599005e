// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query traits consumed by the cursor.

use glam::{Quat, Vec3};

use crate::types::{EntityId, HitResult, Ray, RealityHit};

/// A raycast query over scene colliders.
///
/// Implementations must return hits nearest first and honor the ray's mask
/// and max distance.
pub trait RaycastBackend {
    /// Cast `ray` and collect every hit.
    fn cast(&self, ray: &Ray) -> HitResult;
}

/// A source of hits against real-world surfaces, refreshed by the host once
/// per frame.
pub trait RealityHitTest {
    /// The current hit, if the source sees a surface.
    fn current_result(&self) -> Option<RealityHit>;
}

/// Entity transform capability of the host scene.
pub trait SceneGraph {
    /// World-space position, or `None` for a dead entity.
    fn world_position(&self, entity: EntityId) -> Option<Vec3>;

    /// World-space rotation, or `None` for a dead entity.
    fn world_rotation(&self, entity: EntityId) -> Option<Quat>;

    /// Transform a world-space point into `entity`'s local space.
    fn inverse_transform_point(&self, entity: EntityId, point: Vec3) -> Option<Vec3>;

    /// Parent of `entity`, if any.
    fn parent(&self, entity: EntityId) -> Option<EntityId>;

    /// Spawn an auxiliary child under `parent`.
    fn spawn_child(&mut self, parent: EntityId) -> Option<EntityId>;

    /// Remove `entity` and its descendants. Dead ids are ignored.
    fn despawn(&mut self, entity: EntityId);

    /// Replace the rotation of `entity` relative to its parent.
    fn set_local_rotation(&mut self, entity: EntityId, rotation: Quat);

    /// Replace the translation of `entity` relative to its parent.
    fn set_local_translation(&mut self, entity: EntityId, translation: Vec3);
}

impl<T: RaycastBackend + ?Sized> RaycastBackend for &T {
    fn cast(&self, ray: &Ray) -> HitResult {
        (**self).cast(ray)
    }
}

impl<T: RealityHitTest + ?Sized> RealityHitTest for &T {
    fn current_result(&self) -> Option<RealityHit> {
        (**self).current_result()
    }
}
