// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ray cursor.
//!
//! ## Resolution pass
//!
//! Every frame ([`RayCursor::update`]) and every accepted input event
//! ([`RayCursor::handle_input`]) runs one pass:
//!
//! 1) Ray construction. The first applicable mode wins:
//!    - AR tap and hold: direction `(x, -y, -1)` from the screen axes, through
//!      the inverse projection, then rotated by the cursor entity.
//!    - VR controller: local forward `(0, 0, -1)` rotated by the cursor entity.
//!    - Desktop/touch: the last pointer position in device coordinates,
//!      through the inverse projection, then rotated.
//!
//!    If no mode applies the previous direction is kept.
//! 2) Raycast through the configured backend, plus the optional reality
//!    hit-test source.
//! 3) Tie-break: the object hit wins unless the reality hit is strictly
//!    nearer.
//! 4) Reality hover toggles, then object hover transitions, press edges,
//!    click, and move.
//!
//! ## Notification order
//!
//! Each event goes to the hovered entity's [`InteractionTarget`] (if it has
//! one) and then to the cursor's global target. Events about a reality
//! surface go to the cursor's reality target only. Within a target, listeners
//! run in registration order.
//!
//! ## Lifecycle
//!
//! [`RayCursor::activate`] acquires event channels and, with hit testing
//! enabled, spawns an anchor entity under the cursor. The anchor is moved to
//! the latest reality hit on every pass. [`RayCursor::deactivate`]
//! releases every channel, synthesizes the final unhover, clears the hover
//! style request and despawns the anchor. Input on a channel the cursor does
//! not hold is dropped.

use glam::{Mat4, Vec2, Vec3};
use reticle_cast::{
    EntityId, HitResult, Ray, RaycastBackend, RealityHit, RealityHitTest, SceneGraph,
};
use reticle_style::{SharedStyleStack, StyleKey};
use tracing::{debug, trace, warn};

use crate::config::{CursorConfig, HandednessSetting, RaycastMode};
use crate::emitter::{CursorSnapshot, CursorTarget, EventKind, InteractionTarget};
use crate::hover::{HoverEvent, HoverState};
use crate::input::{Handedness, InputEvent, XrFrameState};
use crate::target::TargetRegistry;

bitflags::bitflags! {
    /// Platform event channels a cursor is subscribed to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Channels: u8 {
        /// Pointer move, down, up and click.
        const POINTER          = 0b0001;
        /// Viewport resize.
        const RESIZE           = 0b0010;
        /// XR session start.
        const XR_SESSION_START = 0b0100;
        /// XR controller select, select start and select end.
        const XR_SELECT        = 0b1000;
    }
}

/// Collaborators for one resolution pass.
pub struct CursorContext<'a> {
    /// Transform source for the cursor entity and hovered entities; the
    /// hit-test anchor is moved through it.
    pub scene: &'a mut dyn SceneGraph,
    /// Backend for [`RaycastMode::Collision`].
    pub colliders: &'a dyn RaycastBackend,
    /// Backend for [`RaycastMode::Physics`].
    pub physics: Option<&'a dyn RaycastBackend>,
    /// Reality hit-test source, consulted when enabled in the config.
    pub reality: Option<&'a dyn RealityHitTest>,
    /// Entity interaction targets.
    pub targets: &'a mut TargetRegistry,
    /// XR pose state, present while an XR session runs.
    pub xr: Option<XrFrameState>,
}

impl core::fmt::Debug for CursorContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CursorContext")
            .field("has_physics", &self.physics.is_some())
            .field("has_reality", &self.reality.is_some())
            .field("targets", &self.targets.len())
            .field("xr", &self.xr)
            .finish_non_exhaustive()
    }
}

impl<'a> CursorContext<'a> {
    /// Context with a collider backend and nothing optional.
    pub fn new(
        scene: &'a mut dyn SceneGraph,
        colliders: &'a dyn RaycastBackend,
        targets: &'a mut TargetRegistry,
    ) -> Self {
        Self {
            scene,
            colliders,
            physics: None,
            reality: None,
            targets,
            xr: None,
        }
    }

    /// Builder: provide the physics backend.
    pub fn with_physics(mut self, physics: &'a dyn RaycastBackend) -> Self {
        self.physics = Some(physics);
        self
    }

    /// Builder: provide a reality hit-test source.
    pub fn with_reality(mut self, reality: &'a dyn RealityHitTest) -> Self {
        self.reality = Some(reality);
        self
    }

    /// Builder: provide this frame's XR state.
    pub fn with_xr(mut self, xr: XrFrameState) -> Self {
        self.xr = Some(xr);
        self
    }
}

/// Camera projection and viewport used for pointer rays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewProjection {
    /// Projection matrix of the view the pointer is over.
    pub projection: Mat4,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

/// Where the host should draw the cursor visuals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorIndicator {
    /// World-space hit location.
    pub position: Vec3,
    /// Distance from the ray origin to the hit.
    pub ray_length: f32,
}

/// A ray-casting pointer bound to one scene entity.
pub struct RayCursor {
    entity: EntityId,
    config: CursorConfig,
    styles: SharedStyleStack,
    style_key: StyleKey,
    hover_style: Option<String>,
    input_device: Option<Handedness>,
    view: Option<ViewProjection>,
    inverse_projection: Mat4,

    active: bool,
    channels: Channels,
    hit_test_anchor: Option<EntityId>,

    origin: Vec3,
    direction: Option<Vec3>,
    last_pointer: Option<Vec2>,
    position: Vec3,
    indicator: Option<CursorIndicator>,

    hover: HoverState<EntityId>,
    hovering_reality: bool,
    reality_payload: Option<RealityHit>,
    is_down: bool,
    last_is_down: bool,
    ar_touch_down: bool,
    last_move_point: Vec3,
    warned_missing_physics: bool,

    global: InteractionTarget,
    reality: InteractionTarget,
}

impl core::fmt::Debug for RayCursor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RayCursor")
            .field("entity", &self.entity)
            .field("config", &self.config)
            .field("active", &self.active)
            .field("channels", &self.channels)
            .field("hovered", &self.hover.current())
            .field("hovering_reality", &self.hovering_reality)
            .field("is_down", &self.is_down)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl RayCursor {
    /// Create an inactive cursor owned by `entity`, sharing `styles` with the
    /// rest of the scene.
    pub fn new(entity: EntityId, config: CursorConfig, styles: SharedStyleStack) -> Self {
        let style_key = styles.register_key();
        let hover_style = config.style_cursor.then(|| config.hover_style.clone());
        let known = hover_style
            .as_deref()
            .is_none_or(|s| styles.with(|stack| stack.table().contains(s)));
        if !known {
            warn!(
                style = %config.hover_style,
                "hover style is not in the priority table, hover requests disabled"
            );
        }
        Self {
            entity,
            config,
            styles,
            style_key,
            hover_style: hover_style.filter(|_| known),
            input_device: None,
            view: None,
            inverse_projection: Mat4::IDENTITY,
            active: false,
            channels: Channels::empty(),
            hit_test_anchor: None,
            origin: Vec3::ZERO,
            direction: None,
            last_pointer: None,
            position: Vec3::ZERO,
            indicator: None,
            hover: HoverState::new(),
            hovering_reality: false,
            reality_payload: None,
            is_down: false,
            last_is_down: false,
            ar_touch_down: false,
            last_move_point: Vec3::ZERO,
            warned_missing_physics: false,
            global: InteractionTarget::new(),
            reality: InteractionTarget::new(),
        }
    }

    /// Builder: the cursor entity carries an input device (an XR controller
    /// or screen input source) with this handedness. Needed for XR rays and
    /// for [`HandednessSetting::InputDevice`].
    pub fn with_input_device(mut self, handedness: Handedness) -> Self {
        self.input_device = Some(handedness);
        self
    }

    /// Builder: the cursor entity has a view, enabling pointer input.
    pub fn with_view(mut self, projection: Mat4, viewport: Vec2) -> Self {
        self.view = Some(ViewProjection {
            projection,
            viewport,
        });
        self.refresh_inverse_projection();
        self
    }

    // --- lifecycle ---

    /// Subscribe to platform channels and spawn the hit-test anchor.
    pub fn activate(&mut self, scene: &mut dyn SceneGraph) {
        if self.active {
            return;
        }
        self.channels = Channels::RESIZE | Channels::XR_SESSION_START;
        if self.view.is_some() {
            self.channels |= Channels::POINTER;
        }
        if self.config.handedness == HandednessSetting::InputDevice && self.input_device.is_none()
        {
            warn!(
                entity = ?self.entity,
                "cursor configured with input-device handedness, but entity has no input device"
            );
        }
        if self.config.use_hit_test && self.hit_test_anchor.is_none() {
            self.hit_test_anchor = scene.spawn_child(self.entity);
            if self.hit_test_anchor.is_none() {
                warn!(entity = ?self.entity, "could not spawn hit-test anchor");
            }
        }
        self.refresh_inverse_projection();
        self.active = true;
        debug!(entity = ?self.entity, channels = ?self.channels, "cursor activated");
    }

    /// Release every channel and retract everything the cursor put into the
    /// scene.
    pub fn deactivate(&mut self, scene: &mut dyn SceneGraph, targets: &mut TargetRegistry) {
        if !self.active {
            return;
        }
        debug!(entity = ?self.entity, channels = ?self.channels, "cursor deactivated");
        self.channels = Channels::empty();
        self.active = false;
        self.indicator = None;

        if let Some(HoverEvent::Leave(prev)) = self.hover.clear() {
            self.notify_entity(targets, EventKind::Unhover, prev, None);
        }
        if self.hovering_reality {
            self.hovering_reality = false;
            let payload = self.reality_payload.map(|r| r.payload);
            let snapshot = self.snapshot();
            self.reality
                .notify(EventKind::Unhover, CursorTarget::Reality(payload), &snapshot, None);
        }
        if self.hover_style.is_some() {
            self.styles.clear_style(self.style_key);
        }

        self.is_down = false;
        self.last_is_down = false;
        self.ar_touch_down = false;

        if let Some(anchor) = self.hit_test_anchor.take() {
            scene.despawn(anchor);
        }
    }

    // --- platform callbacks ---

    /// The viewport was resized; `projection` is the view's new projection.
    pub fn on_viewport_resize(&mut self, projection: Mat4, viewport: Vec2) {
        if !self.channels.contains(Channels::RESIZE) {
            return;
        }
        if let Some(view) = self.view.as_mut() {
            view.projection = projection;
            view.viewport = viewport;
            self.refresh_inverse_projection();
        }
    }

    /// An XR session started. Subscribes to select events and adopts the
    /// session's projection.
    pub fn on_xr_session_start(&mut self, projection: Mat4) {
        if !self.channels.contains(Channels::XR_SESSION_START) {
            return;
        }
        self.channels |= Channels::XR_SELECT;
        if let Some(view) = self.view.as_mut() {
            view.projection = projection;
            self.refresh_inverse_projection();
        }
        debug!(entity = ?self.entity, "cursor subscribed to XR select events");
    }

    /// Per-frame pass.
    pub fn update(&mut self, ctx: &mut CursorContext<'_>) {
        if !self.active {
            return;
        }
        self.construct_frame_ray(ctx);
        self.resolve(ctx, None, false);

        self.indicator = (self.hover.current().is_some() && self.position != Vec3::ZERO).then(|| {
            CursorIndicator {
                position: self.position,
                ray_length: self.origin.distance(self.position),
            }
        });
    }

    /// Feed one platform input event. Returns whether it was accepted.
    pub fn handle_input(&mut self, event: &InputEvent, ctx: &mut CursorContext<'_>) -> bool {
        let channel = if event.is_xr() {
            Channels::XR_SELECT
        } else {
            Channels::POINTER
        };
        if !self.active || !self.channels.contains(channel) {
            trace!(?event, "input on unsubscribed channel dropped");
            return false;
        }

        match *event {
            InputEvent::PointerMove(p) => {
                if !p.primary {
                    return false;
                }
                self.set_pointer(p.position, &*ctx.scene);
                self.resolve(ctx, Some(event), false);
            }
            InputEvent::PointerDown(p) | InputEvent::PointerUp(p) => {
                if !p.primary || p.button != 0 {
                    return false;
                }
                self.set_pointer(p.position, &*ctx.scene);
                self.is_down = matches!(event, InputEvent::PointerDown(_));
                self.resolve(ctx, Some(event), false);
            }
            InputEvent::Click(p) => {
                self.set_pointer(p.position, &*ctx.scene);
                self.resolve(ctx, Some(event), true);
            }
            InputEvent::Select(x) => {
                if !self.accepts(x.handedness) {
                    return false;
                }
                self.resolve(ctx, Some(event), true);
            }
            InputEvent::SelectStart(x) | InputEvent::SelectEnd(x) => {
                if !self.accepts(x.handedness) {
                    return false;
                }
                let down = matches!(event, InputEvent::SelectStart(_));
                self.ar_touch_down = down;
                self.is_down = down;
                self.resolve(ctx, Some(event), false);
            }
        }
        true
    }

    // --- queries ---

    /// Entity owning the cursor.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Configuration.
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Key under which the cursor requests its hover style.
    pub fn style_key(&self) -> StyleKey {
        self.style_key
    }

    /// Whether the cursor is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Channels currently held.
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Controller handedness select events must match. `None` when the
    /// setting defers to an input device the entity does not have; such a
    /// cursor ignores every XR event.
    pub fn handedness(&self) -> Option<Handedness> {
        match self.config.handedness {
            HandednessSetting::InputDevice => self.input_device,
            HandednessSetting::Left => Some(Handedness::Left),
            HandednessSetting::Right => Some(Handedness::Right),
            HandednessSetting::None => Some(Handedness::None),
        }
    }

    /// Hovered entity.
    pub fn hovered(&self) -> Option<EntityId> {
        self.hover.current()
    }

    /// Whether a reality surface is hovered.
    pub fn hovering_reality(&self) -> bool {
        self.hovering_reality
    }

    /// Whether the cursor is pressed.
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// World-space cursor position after the last pass.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The ray used by the last pass, if a direction was resolved.
    pub fn ray(&self) -> Option<Ray> {
        self.direction.map(|d| self.build_ray(d))
    }

    /// Visual indicator after the last frame pass.
    pub fn indicator(&self) -> Option<CursorIndicator> {
        self.indicator
    }

    /// Auxiliary entity spawned for hit testing, placed at the latest reality
    /// hit.
    pub fn hit_test_anchor(&self) -> Option<EntityId> {
        self.hit_test_anchor
    }

    /// Target receiving every entity event.
    pub fn global_target(&self) -> &InteractionTarget {
        &self.global
    }

    /// Mutable access to the global target, for subscribing.
    pub fn global_target_mut(&mut self) -> &mut InteractionTarget {
        &mut self.global
    }

    /// Target receiving events about reality surfaces.
    pub fn reality_target(&self) -> &InteractionTarget {
        &self.reality
    }

    /// Mutable access to the reality target, for subscribing.
    pub fn reality_target_mut(&mut self) -> &mut InteractionTarget {
        &mut self.reality
    }

    /// Current state as handed to listeners.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            cursor: self.entity,
            handedness: self.handedness(),
            origin: self.origin,
            direction: self.direction,
            position: self.position,
            hovered: self.hover.current(),
            hovering_reality: self.hovering_reality,
            is_down: self.is_down,
        }
    }

    // --- ray construction ---

    fn accepts(&self, handedness: Handedness) -> bool {
        let ok = self.handedness() == Some(handedness);
        if !ok {
            trace!(?handedness, expected = ?self.handedness(), "select from other controller ignored");
        }
        ok
    }

    fn refresh_inverse_projection(&mut self) {
        let Some(view) = self.view else {
            return;
        };
        let det = view.projection.determinant();
        if det == 0.0 || !det.is_finite() {
            warn!(entity = ?self.entity, "projection matrix is not invertible");
            return;
        }
        self.inverse_projection = view.projection.inverse();
    }

    fn construct_frame_ray(&mut self, ctx: &CursorContext<'_>) {
        let has_device = self.input_device.is_some();
        if let Some(xr) = ctx.xr
            && has_device
        {
            if self.ar_touch_down
                && let Some(axes) = xr.screen_axes
            {
                self.apply_projected(Vec3::new(axes.x, -axes.y, -1.0), &*ctx.scene);
                return;
            }
            if xr.controller_tracked {
                self.apply_rotation(Vec3::NEG_Z, &*ctx.scene);
                return;
            }
        }
        self.update_pointer_direction(&*ctx.scene);
    }

    fn set_pointer(&mut self, position: Vec2, scene: &dyn SceneGraph) {
        self.last_pointer = Some(position);
        self.update_pointer_direction(scene);
    }

    fn update_pointer_direction(&mut self, scene: &dyn SceneGraph) {
        let (Some(view), Some(pointer)) = (self.view, self.last_pointer) else {
            return;
        };
        if view.viewport.x <= 0.0 || view.viewport.y <= 0.0 {
            return;
        }
        let uv = pointer / view.viewport;
        let ndc = Vec3::new(uv.x * 2.0 - 1.0, -uv.y * 2.0 + 1.0, -1.0);
        self.apply_projected(ndc, scene);
    }

    fn apply_projected(&mut self, dir: Vec3, scene: &dyn SceneGraph) {
        let view_dir = self.inverse_projection.project_point3(dir).normalize_or_zero();
        self.apply_rotation(view_dir, scene);
    }

    fn apply_rotation(&mut self, local: Vec3, scene: &dyn SceneGraph) {
        let (Some(rotation), Some(origin)) = (
            scene.world_rotation(self.entity),
            scene.world_position(self.entity),
        ) else {
            trace!(entity = ?self.entity, "cursor entity has no transform");
            return;
        };
        self.direction = Some(rotation * local);
        self.origin = origin;
        trace!(origin = ?self.origin, direction = ?self.direction, "cursor ray");
    }

    fn build_ray(&self, direction: Vec3) -> Ray {
        let ray = Ray::new(self.origin, direction).with_mask(self.config.collision_mask());
        match self.config.raycast_mode {
            RaycastMode::Physics => ray.with_max_distance(self.config.max_distance),
            RaycastMode::Collision => ray,
        }
    }

    fn cast(&mut self, ctx: &CursorContext<'_>) -> HitResult {
        let Some(direction) = self.direction else {
            return HitResult::empty();
        };
        if direction == Vec3::ZERO {
            return HitResult::empty();
        }
        let ray = self.build_ray(direction);
        match self.config.raycast_mode {
            RaycastMode::Collision => ctx.colliders.cast(&ray),
            RaycastMode::Physics => match ctx.physics {
                Some(physics) => physics.cast(&ray),
                None => {
                    if !self.warned_missing_physics {
                        warn!(entity = ?self.entity, "physics raycast mode without a physics backend");
                        self.warned_missing_physics = true;
                    }
                    HitResult::empty()
                }
            },
        }
    }

    // --- resolution ---

    fn resolve(&mut self, ctx: &mut CursorContext<'_>, original: Option<&InputEvent>, click: bool) {
        let hits = self.cast(ctx);

        let reality = if self.config.use_hit_test {
            ctx.reality.and_then(|r| r.current_result())
        } else {
            None
        };
        let reality_distance = reality.map_or(f32::INFINITY, |r| {
            let from = ctx.scene.world_position(self.entity).unwrap_or(self.origin);
            from.distance(r.point)
        });

        // Ties go to the object.
        let hovering_reality = match (hits.nearest(), reality) {
            (Some(nearest), _) if reality_distance >= nearest.distance => {
                self.position = nearest.point;
                false
            }
            (_, Some(r)) => {
                self.position = r.point;
                true
            }
            (nearest, None) => {
                self.position = nearest.map_or(Vec3::ZERO, |n| n.point);
                false
            }
        };
        trace!(hits = hits.len(), hovering_reality, position = ?self.position, "cursor resolved");

        self.reality_payload = reality;
        let payload = reality.map(|r| r.payload);
        if let (Some(anchor), Some(r)) = (self.hit_test_anchor, reality)
            && let Some(local) = ctx.scene.inverse_transform_point(self.entity, r.point)
        {
            ctx.scene.set_local_translation(anchor, local);
        }
        if hovering_reality != self.hovering_reality {
            self.hovering_reality = hovering_reality;
            let kind = if hovering_reality {
                EventKind::Hover
            } else {
                EventKind::Unhover
            };
            debug!(?kind, "reality hover toggled");
            let snapshot = self.snapshot();
            self.reality
                .notify(kind, CursorTarget::Reality(payload), &snapshot, None);
        }

        let hit = if self.hovering_reality {
            None
        } else {
            hits.nearest().map(|h| h.entity)
        };
        self.transition_hover(ctx.targets, hit, original);

        let edge = (self.is_down != self.last_is_down).then_some(if self.is_down {
            EventKind::Down
        } else {
            EventKind::Up
        });
        if let Some(entity) = self.hover.current() {
            if let Some(kind) = edge {
                self.notify_entity(ctx.targets, kind, entity, original);
            }
            if click {
                self.notify_entity(ctx.targets, EventKind::Click, entity, original);
            }
        } else if self.hovering_reality {
            let snapshot = self.snapshot();
            let target = CursorTarget::Reality(payload);
            if let Some(kind) = edge {
                self.reality.notify(kind, target, &snapshot, original);
            }
            if click {
                self.reality
                    .notify(EventKind::Click, target, &snapshot, original);
            }
        }

        if let Some(entity) = self.hover.current() {
            let local = ctx
                .scene
                .inverse_transform_point(entity, self.position)
                .unwrap_or(self.position);
            if local != self.last_move_point {
                self.notify_entity(ctx.targets, EventKind::Move, entity, original);
                self.last_move_point = local;
            }
        } else if self.hovering_reality {
            if self.position != self.last_move_point {
                let snapshot = self.snapshot();
                self.reality.notify(
                    EventKind::Move,
                    CursorTarget::Reality(payload),
                    &snapshot,
                    original,
                );
                self.last_move_point = self.position;
            }
        } else {
            self.last_move_point = self.position;
        }

        self.last_is_down = self.is_down;
    }

    fn transition_hover(
        &mut self,
        targets: &mut TargetRegistry,
        hit: Option<EntityId>,
        original: Option<&InputEvent>,
    ) {
        for transition in self.hover.update(hit) {
            match transition {
                HoverEvent::Leave(prev) => {
                    debug!(entity = ?prev, "unhover");
                    if hit.is_none() && self.hover_style.is_some() {
                        self.styles.clear_style(self.style_key);
                    }
                    self.notify_entity(targets, EventKind::Unhover, prev, original);
                }
                HoverEvent::Enter(next) => {
                    debug!(entity = ?next, "hover");
                    if let Some(style) = &self.hover_style {
                        // A rejection is already logged by the stack.
                        let _ = self.styles.set_style(self.style_key, style);
                    }
                    self.notify_entity(targets, EventKind::Hover, next, original);
                }
            }
        }
    }

    fn notify_entity(
        &mut self,
        targets: &mut TargetRegistry,
        kind: EventKind,
        entity: EntityId,
        original: Option<&InputEvent>,
    ) {
        let snapshot = self.snapshot();
        let target = CursorTarget::Entity(entity);
        if let Some(t) = targets.get_mut(entity) {
            t.notify(kind, target, &snapshot, original);
        }
        self.global.notify(kind, target, &snapshot, original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::f32::consts::FRAC_PI_2;
    use std::rc::Rc;

    use glam::Quat;
    use reticle_cast::{
        Aabb3, Collider, CollisionMask, CollisionWorld, FixedRealityHitTest, HitTestPayload,
        RayHit, SceneTree, Shape, Transform,
    };
    use reticle_style::{PriorityTable, StyleStack};

    use crate::input::{PointerInput, XrInput};

    type Log = Rc<RefCell<Vec<String>>>;

    const CENTER: Vec2 = Vec2::new(50.0, 50.0);

    #[derive(Default)]
    struct Scripted {
        hits: HitResult,
        rays: RefCell<Vec<Ray>>,
    }

    impl Scripted {
        fn set(&mut self, hits: Vec<RayHit>) {
            self.hits = HitResult::from_unsorted(hits);
        }
    }

    impl RaycastBackend for Scripted {
        fn cast(&self, ray: &Ray) -> HitResult {
            self.rays.borrow_mut().push(*ray);
            self.hits.clone()
        }
    }

    fn hit(entity: EntityId, distance: f32) -> RayHit {
        RayHit {
            entity,
            distance,
            point: Vec3::new(0.0, 0.0, -distance),
        }
    }

    fn projection() -> Mat4 {
        Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 0.1, 100.0)
    }

    fn record(target: &mut InteractionTarget, tag: &'static str, log: &Log) {
        for kind in EventKind::ALL {
            let log = log.clone();
            target.on(kind, move |_, _, _| {
                log.borrow_mut().push(format!("{tag}:{kind:?}"));
            });
        }
    }

    fn move_to(position: Vec2) -> InputEvent {
        InputEvent::PointerMove(PointerInput::primary(position))
    }

    struct Rig {
        scene: SceneTree,
        backend: Scripted,
        physics: Option<Scripted>,
        reality: FixedRealityHitTest,
        targets: TargetRegistry,
        styles: SharedStyleStack,
        cursor: RayCursor,
        xr: Option<XrFrameState>,
        log: Log,
    }

    impl Rig {
        fn new(config: CursorConfig) -> Self {
            Self::with(config, |c| c)
        }

        fn with(config: CursorConfig, f: impl FnOnce(RayCursor) -> RayCursor) -> Self {
            let mut scene = SceneTree::new();
            let entity = scene.spawn(None, Transform::IDENTITY);
            let styles = SharedStyleStack::default();
            let mut cursor = f(RayCursor::new(entity, config, styles.clone())
                .with_view(projection(), Vec2::splat(100.0)));
            cursor.activate(&mut scene);
            let log = Log::default();
            record(cursor.global_target_mut(), "global", &log);
            record(cursor.reality_target_mut(), "reality", &log);
            Self {
                scene,
                backend: Scripted::default(),
                physics: None,
                reality: FixedRealityHitTest::new(),
                targets: TargetRegistry::new(),
                styles,
                cursor,
                xr: None,
                log,
            }
        }

        fn entity(&mut self, tag: &'static str) -> EntityId {
            let e = self.scene.spawn(None, Transform::IDENTITY);
            record(self.targets.attach(e), tag, &self.log);
            e
        }

        fn split(&mut self) -> (&mut RayCursor, CursorContext<'_>) {
            let mut ctx = CursorContext::new(&mut self.scene, &self.backend, &mut self.targets)
                .with_reality(&self.reality);
            if let Some(physics) = &self.physics {
                ctx = ctx.with_physics(physics);
            }
            if let Some(xr) = self.xr {
                ctx = ctx.with_xr(xr);
            }
            (&mut self.cursor, ctx)
        }

        fn input(&mut self, event: InputEvent) -> bool {
            let (cursor, mut ctx) = self.split();
            cursor.handle_input(&event, &mut ctx)
        }

        fn update(&mut self) {
            let (cursor, mut ctx) = self.split();
            cursor.update(&mut ctx);
        }

        fn take(&self) -> Vec<String> {
            self.log.borrow_mut().drain(..).collect()
        }
    }

    #[test]
    fn tie_with_reality_hovers_the_object_once() {
        let mut rig = Rig::new(CursorConfig::default().with_hit_test(true));
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        rig.reality.set_result(Some(RealityHit {
            point: Vec3::new(0.0, 0.0, -2.0),
            payload: HitTestPayload(9),
        }));

        assert!(rig.input(move_to(CENTER)));
        assert_eq!(rig.take(), ["a:Hover", "global:Hover", "a:Move", "global:Move"]);
        assert_eq!(rig.cursor.hovered(), Some(a));
        assert!(!rig.cursor.hovering_reality());
        assert_eq!(rig.styles.effective_style(), "pointer");

        // Same hit again: no hover, no move.
        assert!(rig.input(move_to(CENTER)));
        assert!(rig.take().is_empty());
    }

    #[test]
    fn empty_pass_unhovers_once_and_clears_style() {
        let mut rig = Rig::new(CursorConfig::default());
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        rig.input(move_to(CENTER));
        rig.take();

        rig.backend.set(Vec::new());
        rig.input(move_to(CENTER));
        assert_eq!(rig.take(), ["a:Unhover", "global:Unhover"]);
        assert_eq!(rig.cursor.hovered(), None);
        assert_eq!(rig.cursor.position(), Vec3::ZERO);
        assert_eq!(rig.styles.effective_style(), "default");

        rig.input(move_to(CENTER));
        assert!(rig.take().is_empty());
    }

    #[test]
    fn switching_entities_leaves_before_entering() {
        let mut rig = Rig::new(CursorConfig::default());
        let a = rig.entity("a");
        let b = rig.entity("b");
        rig.backend.set(vec![hit(a, 2.0), hit(b, 3.0)]);
        rig.input(move_to(CENTER));
        rig.take();

        rig.backend.set(vec![hit(b, 3.0)]);
        rig.input(move_to(CENTER));
        assert_eq!(
            rig.take(),
            [
                "a:Unhover",
                "global:Unhover",
                "b:Hover",
                "global:Hover",
                "b:Move",
                "global:Move"
            ]
        );
        assert_eq!(rig.styles.effective_style(), "pointer");
    }

    #[test]
    fn nearer_reality_excludes_object_hover() {
        let mut rig = Rig::new(CursorConfig::default().with_hit_test(true));
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 5.0)]);
        let surface = Vec3::new(0.0, 0.0, -2.0);
        rig.reality.set_result(Some(RealityHit {
            point: surface,
            payload: HitTestPayload(1),
        }));

        rig.input(move_to(CENTER));
        assert_eq!(rig.take(), ["reality:Hover", "reality:Move"]);
        assert!(rig.cursor.hovering_reality());
        assert_eq!(rig.cursor.hovered(), None);
        assert_eq!(rig.cursor.position(), surface);

        rig.input(InputEvent::Click(PointerInput::primary(CENTER)));
        assert_eq!(rig.take(), ["reality:Click"]);

        rig.reality.set_result(None);
        rig.input(move_to(CENTER));
        assert_eq!(
            rig.take(),
            [
                "reality:Unhover",
                "a:Hover",
                "global:Hover",
                "a:Move",
                "global:Move"
            ]
        );
        assert!(!rig.cursor.hovering_reality());
    }

    #[test]
    fn reality_ignored_unless_enabled() {
        let mut rig = Rig::new(CursorConfig::default());
        rig.reality.set_result(Some(RealityHit {
            point: Vec3::new(0.0, 0.0, -1.0),
            payload: HitTestPayload(1),
        }));
        rig.input(move_to(CENTER));
        assert!(!rig.cursor.hovering_reality());
        assert!(rig.take().is_empty());
    }

    #[test]
    fn press_edges_and_click_go_to_hovered_entity() {
        let mut rig = Rig::new(CursorConfig::default());
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        rig.input(move_to(CENTER));
        rig.take();

        assert!(rig.input(InputEvent::PointerDown(PointerInput::primary(CENTER))));
        assert!(rig.cursor.is_down());
        assert_eq!(rig.take(), ["a:Down", "global:Down"]);

        assert!(rig.input(InputEvent::PointerUp(PointerInput::primary(CENTER))));
        assert_eq!(rig.take(), ["a:Up", "global:Up"]);

        assert!(rig.input(InputEvent::Click(PointerInput::primary(CENTER))));
        assert_eq!(rig.take(), ["a:Click", "global:Click"]);
    }

    #[test]
    fn listeners_see_the_triggering_event() {
        let mut rig = Rig::new(CursorConfig::default());
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        rig.targets
            .attach(a)
            .on(EventKind::Hover, move |target, cursor, original| {
                s.borrow_mut().push((target, cursor.hovered, original.copied()));
            });

        let event = move_to(CENTER);
        rig.input(event);
        assert_eq!(
            *seen.borrow(),
            vec![(CursorTarget::Entity(a), Some(a), Some(event))]
        );
    }

    #[test]
    fn non_primary_and_secondary_button_input_is_ignored() {
        let mut rig = Rig::new(CursorConfig::default());
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);

        let mut secondary = PointerInput::primary(CENTER);
        secondary.primary = false;
        assert!(!rig.input(InputEvent::PointerMove(secondary)));
        assert_eq!(rig.cursor.hovered(), None);

        let mut right = PointerInput::primary(CENTER);
        right.button = 2;
        assert!(!rig.input(InputEvent::PointerDown(right)));
        assert!(!rig.cursor.is_down());
        assert!(rig.backend.rays.borrow().is_empty());
        assert!(rig.take().is_empty());
    }

    #[test]
    fn select_requires_session_and_matching_controller() {
        let mut rig = Rig::new(CursorConfig::default().with_handedness(HandednessSetting::Left));
        let left = XrInput {
            handedness: Handedness::Left,
        };
        let right = XrInput {
            handedness: Handedness::Right,
        };
        assert!(!rig.input(InputEvent::SelectStart(left)), "no session yet");

        rig.cursor.on_xr_session_start(projection());
        assert!(rig.cursor.channels().contains(Channels::XR_SELECT));

        assert!(!rig.input(InputEvent::SelectStart(right)));
        assert!(!rig.cursor.is_down());

        assert!(rig.input(InputEvent::SelectStart(left)));
        assert!(rig.cursor.is_down());

        assert!(!rig.input(InputEvent::SelectEnd(right)));
        assert!(rig.cursor.is_down(), "other controller cannot release");

        assert!(rig.input(InputEvent::SelectEnd(left)));
        assert!(!rig.cursor.is_down());
    }

    #[test]
    fn select_clicks_hovered_entity_only_from_matching_controller() {
        let mut rig = Rig::new(CursorConfig::default().with_handedness(HandednessSetting::Left));
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        rig.input(move_to(CENTER));
        rig.cursor.on_xr_session_start(projection());
        rig.take();

        let right = XrInput {
            handedness: Handedness::Right,
        };
        assert!(!rig.input(InputEvent::Select(right)));
        assert!(rig.take().is_empty());
        assert_eq!(rig.cursor.hovered(), Some(a));
        assert!(!rig.cursor.is_down());

        let left = XrInput {
            handedness: Handedness::Left,
        };
        assert!(rig.input(InputEvent::Select(left)));
        assert_eq!(rig.take(), ["a:Click", "global:Click"]);
        assert_eq!(rig.cursor.hovered(), Some(a));
    }

    #[test]
    fn input_device_handedness_needs_a_device() {
        let mut rig = Rig::new(CursorConfig::default());
        rig.cursor.on_xr_session_start(projection());
        assert_eq!(rig.cursor.handedness(), None);
        for h in [Handedness::Left, Handedness::Right, Handedness::None] {
            assert!(!rig.input(InputEvent::Select(XrInput { handedness: h })));
        }

        let rig = Rig::with(CursorConfig::default(), |c| {
            c.with_input_device(Handedness::Right)
        });
        assert_eq!(rig.cursor.handedness(), Some(Handedness::Right));
    }

    #[test]
    fn ar_tap_casts_through_screen_axes() {
        let config = CursorConfig::default().with_handedness(HandednessSetting::None);
        let mut rig = Rig::with(config, |c| c.with_input_device(Handedness::None));
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        rig.cursor.on_xr_session_start(projection());
        rig.xr = Some(XrFrameState {
            screen_axes: Some(Vec2::ZERO),
            controller_tracked: false,
        });

        rig.update();
        assert_eq!(rig.cursor.hovered(), None, "no ray before the tap");

        let tap = XrInput {
            handedness: Handedness::None,
        };
        assert!(rig.input(InputEvent::SelectStart(tap)));
        rig.update();
        assert_eq!(rig.cursor.hovered(), Some(a));
        let ray = rig.cursor.ray().unwrap();
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn physics_mode_bounds_the_ray() {
        let config = CursorConfig::default()
            .with_raycast_mode(RaycastMode::Physics)
            .with_max_distance(5.0);
        let mut rig = Rig::new(config);
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);

        // No physics backend: nothing is hit and the collider world is not asked.
        rig.input(move_to(CENTER));
        assert_eq!(rig.cursor.hovered(), None);
        assert!(rig.backend.rays.borrow().is_empty());

        let mut physics = Scripted::default();
        physics.set(vec![hit(a, 2.0)]);
        rig.physics = Some(physics);
        rig.input(move_to(CENTER));
        assert_eq!(rig.cursor.hovered(), Some(a));

        let rays = rig.physics.as_ref().unwrap().rays.borrow().clone();
        assert_eq!(rays[0].max_distance, Some(5.0));
        assert_eq!(rays[0].mask, CollisionMask::from_group(1));
    }

    #[test]
    fn collision_mode_ray_is_unbounded() {
        let mut rig = Rig::new(CursorConfig::default().with_collision_group(3));
        rig.input(move_to(CENTER));
        let ray = rig.backend.rays.borrow()[0];
        assert_eq!(ray.max_distance, None);
        assert_eq!(ray.mask.bits(), 0b1000);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn frame_update_reuses_pointer_and_places_indicator() {
        let mut rig = Rig::new(CursorConfig::default());
        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);

        rig.update();
        assert!(rig.backend.rays.borrow().is_empty(), "no pointer yet");
        assert_eq!(rig.cursor.indicator(), None);

        rig.input(move_to(CENTER));
        rig.update();
        let indicator = rig.cursor.indicator().unwrap();
        assert_eq!(indicator.position, Vec3::new(0.0, 0.0, -2.0));
        assert!((indicator.ray_length - 2.0).abs() < 1e-5);

        rig.backend.set(Vec::new());
        rig.update();
        assert_eq!(rig.cursor.indicator(), None);
    }

    #[test]
    fn singular_projection_keeps_previous_inverse() {
        let mut rig = Rig::new(CursorConfig::default());
        rig.cursor.on_viewport_resize(Mat4::ZERO, Vec2::splat(100.0));
        rig.input(move_to(CENTER));
        let ray = rig.backend.rays.borrow()[0];
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn anchor_follows_reality_hit() {
        let mut rig = Rig::new(CursorConfig::default().with_hit_test(true));
        let anchor = rig.cursor.hit_test_anchor().unwrap();
        rig.scene.set_local_transform(
            rig.cursor.entity(),
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
        );
        let surface = Vec3::new(1.0, -1.0, -3.0);
        rig.reality.set_result(Some(RealityHit {
            point: surface,
            payload: HitTestPayload(4),
        }));

        rig.input(move_to(CENTER));
        let at = rig.scene.world_position(anchor).unwrap();
        assert!((at - surface).length() < 1e-5, "anchor at {at}");
        assert_eq!(
            rig.scene.local_transform(anchor).unwrap().translation,
            Vec3::new(0.0, -1.0, -3.0)
        );

        // No result this pass: the anchor stays where it was.
        rig.reality.set_result(None);
        rig.input(move_to(CENTER));
        assert!((rig.scene.world_position(anchor).unwrap() - surface).length() < 1e-5);
    }

    #[test]
    fn reality_unhover_carries_current_payload() {
        let mut rig = Rig::new(CursorConfig::default().with_hit_test(true));
        let seen = Rc::new(RefCell::new(Vec::new()));
        for kind in [EventKind::Hover, EventKind::Unhover] {
            let seen = seen.clone();
            rig.cursor
                .reality_target_mut()
                .on(kind, move |target, _, _| seen.borrow_mut().push((kind, target)));
        }
        rig.reality.set_result(Some(RealityHit {
            point: Vec3::new(0.0, 0.0, -2.0),
            payload: HitTestPayload(1),
        }));
        rig.input(move_to(CENTER));
        assert!(rig.cursor.hovering_reality());

        rig.reality.set_result(None);
        rig.input(move_to(CENTER));
        assert!(!rig.cursor.hovering_reality());
        assert_eq!(
            *seen.borrow(),
            vec![
                (
                    EventKind::Hover,
                    CursorTarget::Reality(Some(HitTestPayload(1)))
                ),
                (EventKind::Unhover, CursorTarget::Reality(None)),
            ]
        );
    }

    #[test]
    fn idle_passes_leave_the_style_stack_alone() {
        let mut rig = Rig::new(CursorConfig::default());
        let fired = Rc::new(RefCell::new(0));
        let count = fired.clone();
        rig.styles.set_change_handler(move |_| *count.borrow_mut() += 1);
        // A host request filed under the cursor's key survives idle passes.
        rig.styles.set_style(rig.cursor.style_key(), "progress").unwrap();
        assert_eq!(*fired.borrow(), 1);

        rig.input(move_to(CENTER));
        rig.update();
        assert_eq!(rig.styles.effective_style(), "progress");
        assert_eq!(*fired.borrow(), 1);

        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        rig.input(move_to(CENTER));
        rig.backend.set(Vec::new());
        rig.input(move_to(CENTER));
        assert_eq!(rig.styles.effective_style(), "default");
        assert_eq!(*fired.borrow(), 3);
    }

    #[test]
    fn hover_style_follows_the_stack_table() {
        let table = PriorityTable::new(["grab", "default"]).unwrap();
        let styles = SharedStyleStack::new(StyleStack::with_table(table));
        let mut scene = SceneTree::new();
        let entity = scene.spawn(None, Transform::IDENTITY);
        let a = scene.spawn(None, Transform::IDENTITY);
        let mut backend = Scripted::default();
        backend.set(vec![hit(a, 2.0)]);
        let mut targets = TargetRegistry::new();
        targets.attach(a);

        let mut unknown = RayCursor::new(entity, CursorConfig::default(), styles.clone())
            .with_view(projection(), Vec2::splat(100.0));
        unknown.activate(&mut scene);
        let mut ctx = CursorContext::new(&mut scene, &backend, &mut targets);
        unknown.handle_input(&move_to(CENTER), &mut ctx);
        assert_eq!(unknown.hovered(), Some(a));
        assert_eq!(styles.effective_style(), "default");
        assert_eq!(styles.get_style(unknown.style_key()), None);

        let mut grab = RayCursor::new(
            entity,
            CursorConfig::default().with_hover_style("grab"),
            styles.clone(),
        )
        .with_view(projection(), Vec2::splat(100.0));
        grab.activate(&mut scene);
        let mut ctx = CursorContext::new(&mut scene, &backend, &mut targets);
        grab.handle_input(&move_to(CENTER), &mut ctx);
        assert_eq!(styles.effective_style(), "grab");
    }

    #[test]
    fn deactivate_retracts_hover_style_and_anchor() {
        let mut rig = Rig::new(CursorConfig::default().with_hit_test(true));
        let anchor = rig.cursor.hit_test_anchor().unwrap();
        assert_eq!(rig.scene.parent(anchor), Some(rig.cursor.entity()));

        let a = rig.entity("a");
        rig.backend.set(vec![hit(a, 2.0)]);
        rig.input(InputEvent::PointerDown(PointerInput::primary(CENTER)));
        rig.take();
        assert_eq!(rig.styles.effective_style(), "pointer");

        rig.cursor.deactivate(&mut rig.scene, &mut rig.targets);
        assert_eq!(rig.take(), ["a:Unhover", "global:Unhover"]);
        assert_eq!(rig.styles.effective_style(), "default");
        assert!(!rig.cursor.is_active());
        assert!(!rig.cursor.is_down());
        assert_eq!(rig.cursor.channels(), Channels::empty());
        assert_eq!(rig.cursor.hit_test_anchor(), None);
        assert!(!rig.scene.is_alive(anchor));

        assert!(!rig.input(move_to(CENTER)), "inactive cursor drops input");
        rig.update();
        assert!(rig.take().is_empty());
    }

    #[test]
    fn controller_ray_hits_collider_world() {
        let mut scene = SceneTree::new();
        // Facing -X.
        let cursor_entity = scene.spawn(
            None,
            Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_2)),
        );
        let target = scene.spawn(None, Transform::from_translation(Vec3::new(-5.0, 0.0, 0.0)));
        let other_group = scene.spawn(None, Transform::IDENTITY);

        let mut world = CollisionWorld::new();
        world.insert(
            Collider::new(
                target,
                Shape::Aabb(Aabb3::from_center_size(Vec3::new(-5.0, 0.0, 0.0), Vec3::ONE)),
            )
            .with_mask(CollisionMask::from_group(1)),
        );
        world.insert(
            Collider::new(
                other_group,
                Shape::Sphere {
                    center: Vec3::new(-2.0, 0.0, 0.0),
                    radius: 0.5,
                },
            )
            .with_mask(CollisionMask::from_group(3)),
        );

        let mut targets = TargetRegistry::new();
        let mut cursor = RayCursor::new(
            cursor_entity,
            CursorConfig::default().with_style_cursor(false),
            SharedStyleStack::default(),
        )
        .with_input_device(Handedness::Right);
        cursor.activate(&mut scene);
        assert!(!cursor.channels().contains(Channels::POINTER), "no view");

        let mut ctx = CursorContext::new(&mut scene, &world, &mut targets).with_xr(XrFrameState {
            screen_axes: None,
            controller_tracked: true,
        });
        cursor.update(&mut ctx);

        assert_eq!(cursor.hovered(), Some(target));
        assert!((cursor.position() - Vec3::new(-4.5, 0.0, 0.0)).length() < 1e-4);
        let indicator = cursor.indicator().unwrap();
        assert!((indicator.ray_length - 4.5).abs() < 1e-4);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn object_and_reality_hover_are_exclusive(
                passes in prop::collection::vec(
                    (prop::option::of(0.5f32..50.0), prop::option::of(0.5f32..50.0)),
                    1..24,
                )
            ) {
                let mut rig = Rig::new(CursorConfig::default().with_hit_test(true));
                let a = rig.entity("a");
                let h = Rc::new(RefCell::new(0_i32));
                let (enter, leave) = (h.clone(), h.clone());
                rig.cursor.global_target_mut().on(EventKind::Hover, move |_, _, _| {
                    *enter.borrow_mut() += 1;
                });
                rig.cursor.global_target_mut().on(EventKind::Unhover, move |_, _, _| {
                    *leave.borrow_mut() -= 1;
                });

                for (object, surface) in passes {
                    rig.backend.set(object.map(|d| hit(a, d)).into_iter().collect());
                    rig.reality.set_result(surface.map(|d| RealityHit {
                        point: Vec3::new(0.0, 0.0, -d),
                        payload: HitTestPayload(0),
                    }));
                    rig.input(move_to(CENTER));

                    let hovered = rig.cursor.hovered();
                    prop_assert!(!(hovered.is_some() && rig.cursor.hovering_reality()));
                    let object_wins = match (object, surface) {
                        (Some(o), Some(r)) => r >= o,
                        (Some(_), None) => true,
                        (None, _) => false,
                    };
                    prop_assert_eq!(hovered.is_some(), object_wins);
                    prop_assert_eq!(rig.cursor.hovering_reality(), surface.is_some() && !object_wins);

                    // Net hover count on the global target.
                    prop_assert_eq!(*h.borrow(), i32::from(hovered.is_some()));
                }
            }
        }
    }
}
