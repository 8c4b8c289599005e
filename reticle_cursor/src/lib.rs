// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Cursor: a ray-casting pointer for 3D scenes.
//!
//! ## Overview
//!
//! A [`RayCursor`] is bound to one scene entity (a camera for mouse and touch,
//! an XR controller, or an AR viewer). It turns pointer and controller input
//! into a world-space ray, asks a raycast backend what the ray hits, and
//! emits `hover`, `unhover`, `down`, `up`, `click` and `move` events to the
//! hovered entity's [`InteractionTarget`] and to the cursor's own targets.
//!
//! While an entity is hovered the cursor requests the `pointer` style from a
//! shared [`reticle_style::StyleStack`]; the request is withdrawn when nothing
//! is hovered.
//!
//! ## Inputs
//!
//! - Discrete [`InputEvent`]s through [`RayCursor::handle_input`].
//! - One [`RayCursor::update`] per frame, with an [`XrFrameState`] while an XR
//!   session runs.
//! - Platform callbacks: [`RayCursor::on_viewport_resize`] and
//!   [`RayCursor::on_xr_session_start`].
//!
//! The scene, backends and entity targets are passed in through a
//! [`CursorContext`] on each call, so the cursor holds no references.
//!
//! ## Reality hits
//!
//! With `use_hit_test` enabled, a [`reticle_cast::RealityHitTest`] source
//! competes with object hits. The object wins ties; a strictly nearer reality
//! hit suppresses object hover and is reported on the cursor's reality target.
//!
//! ## Example
//!
//! ```
//! use glam::{Mat4, Vec2, Vec3};
//! use reticle_cast::{
//!     Aabb3, Collider, CollisionMask, CollisionWorld, SceneTree, Shape, Transform,
//! };
//! use reticle_cursor::{
//!     CursorConfig, CursorContext, EventKind, InputEvent, PointerInput, RayCursor,
//!     TargetRegistry,
//! };
//! use reticle_style::SharedStyleStack;
//!
//! let mut scene = SceneTree::new();
//! let camera = scene.spawn(None, Transform::IDENTITY);
//! let button = scene.spawn(None, Transform::from_translation(Vec3::new(0.0, 0.0, -3.0)));
//!
//! let mut colliders = CollisionWorld::new();
//! colliders.insert(
//!     Collider::new(
//!         button,
//!         Shape::Aabb(Aabb3::from_center_size(Vec3::new(0.0, 0.0, -3.0), Vec3::ONE)),
//!     )
//!     .with_mask(CollisionMask::from_group(1)),
//! );
//!
//! let mut targets = TargetRegistry::new();
//! targets.attach(button).on(EventKind::Hover, |_, _, _| println!("hover"));
//!
//! let styles = SharedStyleStack::default();
//! let projection = Mat4::perspective_rh_gl(1.2, 16.0 / 9.0, 0.1, 100.0);
//! let mut cursor = RayCursor::new(camera, CursorConfig::default(), styles.clone())
//!     .with_view(projection, Vec2::new(1280.0, 720.0));
//! cursor.activate(&mut scene);
//!
//! let mut ctx = CursorContext::new(&mut scene, &colliders, &mut targets);
//! let center = PointerInput::primary(Vec2::new(640.0, 360.0));
//! cursor.handle_input(&InputEvent::PointerMove(center), &mut ctx);
//!
//! assert_eq!(cursor.hovered(), Some(button));
//! assert_eq!(styles.effective_style(), "pointer");
//! ```

pub mod config;
pub mod cursor;
pub mod emitter;
pub mod hover;
pub mod input;
pub mod target;

pub use config::{CursorConfig, HandednessSetting, RaycastMode};
pub use cursor::{Channels, CursorContext, CursorIndicator, RayCursor, ViewProjection};
pub use emitter::{
    CursorSnapshot, CursorTarget, Emitter, EventKind, InteractionTarget, Listener, ListenerId,
};
pub use hover::{HoverEvent, HoverState};
pub use input::{Handedness, InputEvent, PointerInput, XrFrameState, XrInput};
pub use target::TargetRegistry;
