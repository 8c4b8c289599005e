// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Cast: the geometric side of 3D pointer input.
//!
//! ## Overview
//!
//! This crate holds the data model a ray cursor works with and the backends it
//! queries:
//!
//! - [`Ray`], [`RayHit`], [`HitResult`] (nearest first) and [`RealityHit`].
//! - [`RaycastBackend`]: `cast(ray) -> HitResult`.
//! - [`RealityHitTest`]: an optional competing hit on a real-world surface.
//! - [`SceneGraph`]: world position/rotation, inverse point transform, parent
//!   lookup and auxiliary entity spawning for the cursor's owning entity.
//!
//! ## Reference implementations
//!
//! - [`SceneTree`]: a generational arena with a transform hierarchy.
//! - [`ColliderWorld`]: boxes and spheres behind a pluggable [`Broadphase`].
//!   [`CollisionWorld`] scans linearly; [`PhysicsWorld`] uses a BVH.
//! - [`FixedRealityHitTest`]: a reality hit the host refreshes each frame.
//!
//! Hosts with their own engine implement the traits directly instead.

pub mod backend;
pub mod broadphase;
pub mod colliders;
pub mod reality;
pub mod scene;
pub mod types;

pub use backend::{RaycastBackend, RealityHitTest, SceneGraph};
pub use broadphase::Broadphase;
pub use broadphase::bvh::Bvh;
pub use broadphase::flatvec::FlatVec;
pub use colliders::{Collider, ColliderKey, ColliderWorld, CollisionWorld, PhysicsWorld, Shape};
pub use reality::FixedRealityHitTest;
pub use scene::{SceneTree, Transform};
pub use types::{
    Aabb3, CollisionMask, EntityId, HitResult, HitTestPayload, Ray, RayHit, RealityHit,
};
