// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse look: rotate an entity by relative mouse movement.
//!
//! Pitch and yaw accumulate in degrees. Each movement sample adds
//! `-sensitivity * delta * 180 / π / 100` degrees, pitch is clamped to ±89°
//! so the view never flips over the pole, and the entity's local rotation is
//! replaced by yaw about Y followed by pitch about the rotated X axis.
//!
//! With `require_mouse_down` the view only follows the mouse while the
//! configured button is held; during that drag the `grabbing` style is
//! requested.

use glam::{EulerRot, Quat, Vec2};
use reticle_cast::{EntityId, SceneGraph};
use reticle_style::SharedStyleStack;
use tracing::trace;

use crate::requester::StyleRequester;

const ROT_MUL: f32 = 180.0 / core::f32::consts::PI / 100.0;
const PITCH_LIMIT: f32 = 89.0;

/// Mouse look options.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MouseLookConfig {
    /// Movement scale.
    pub sensitivity: f32,
    /// Only follow the mouse while `mouse_button` is held.
    pub require_mouse_down: bool,
    /// Button that drags the view.
    pub mouse_button: u16,
    /// Ask the host for pointer lock on mouse down.
    pub pointer_lock_on_click: bool,
}

impl Default for MouseLookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.25,
            require_mouse_down: true,
            mouse_button: 0,
            pointer_lock_on_click: false,
        }
    }
}

impl MouseLookConfig {
    /// Builder: set the sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builder: follow the mouse only while `button` is held, or always when
    /// `None`.
    pub fn with_drag_button(mut self, button: Option<u16>) -> Self {
        self.require_mouse_down = button.is_some();
        if let Some(button) = button {
            self.mouse_button = button;
        }
        self
    }

    /// Builder: request pointer lock on mouse down.
    pub fn with_pointer_lock(mut self, enabled: bool) -> Self {
        self.pointer_lock_on_click = enabled;
        self
    }
}

/// What the host should do with a mouse-down it forwarded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MouseDownResponse {
    /// Request pointer lock on the canvas.
    pub request_pointer_lock: bool,
    /// Suppress the platform default (middle-button autoscroll).
    pub prevent_default: bool,
}

/// Mouse-look controller for one entity.
#[derive(Debug)]
pub struct MouseLook {
    entity: EntityId,
    config: MouseLookConfig,
    requester: StyleRequester,
    pitch: f32,
    yaw: f32,
    mouse_down: bool,
    active: bool,
}

impl MouseLook {
    /// An active controller for `entity` with zero pitch and yaw.
    pub fn new(entity: EntityId, config: MouseLookConfig, styles: &SharedStyleStack) -> Self {
        Self {
            entity,
            config,
            requester: StyleRequester::new(styles),
            pitch: 0.0,
            yaw: 0.0,
            mouse_down: false,
            active: true,
        }
    }

    /// Options.
    pub fn config(&self) -> &MouseLookConfig {
        &self.config
    }

    /// Accumulated pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Accumulated yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.mouse_down
    }

    /// Whether the controller reacts to input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the host should suppress the context menu, because the
    /// secondary button drags the view.
    pub fn suppresses_context_menu(&self) -> bool {
        self.config.require_mouse_down && self.config.mouse_button == 2
    }

    /// Resume reacting to input.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop reacting to input and end any drag.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.mouse_up();
    }

    /// Relative mouse movement in pixels. Returns the new local rotation when
    /// it was applied to the entity.
    pub fn on_mouse_move(&mut self, movement: Vec2, scene: &mut dyn SceneGraph) -> Option<Quat> {
        let following = self.mouse_down || !self.config.require_mouse_down;
        if !self.active || !following {
            return None;
        }
        self.pitch += -self.config.sensitivity * movement.y * ROT_MUL;
        self.yaw += -self.config.sensitivity * movement.x * ROT_MUL;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        );
        scene.set_local_rotation(self.entity, rotation);
        trace!(pitch = self.pitch, yaw = self.yaw, "mouse look");
        Some(rotation)
    }

    /// A mouse button was pressed over the canvas.
    pub fn on_mouse_down(&mut self, button: u16) -> MouseDownResponse {
        let mut response = MouseDownResponse {
            request_pointer_lock: self.config.pointer_lock_on_click,
            prevent_default: false,
        };
        if self.config.require_mouse_down && self.active && button == self.config.mouse_button {
            self.mouse_down = true;
            // Rejections are logged by the stack.
            let _ = self.requester.request("grabbing");
            response.prevent_default = button == 1;
        }
        response
    }

    /// A mouse button was released.
    pub fn on_mouse_up(&mut self, button: u16) {
        if self.config.require_mouse_down && button == self.config.mouse_button {
            self.mouse_up();
        }
    }

    /// The pointer left the canvas.
    pub fn on_mouse_leave(&mut self) {
        if self.config.require_mouse_down {
            self.mouse_up();
        }
    }

    fn mouse_up(&mut self) {
        if !self.mouse_down {
            return;
        }
        self.mouse_down = false;
        if self.config.require_mouse_down {
            self.requester.clear();
        }
    }
}
