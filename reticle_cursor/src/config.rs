// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor configuration.

use reticle_cast::CollisionMask;

/// Which controller's select events a cursor reacts to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HandednessSetting {
    /// Use the handedness of the input device attached to the cursor entity.
    #[default]
    InputDevice,
    /// Left controller.
    Left,
    /// Right controller.
    Right,
    /// Sources without handedness, such as screen taps.
    None,
}

/// Which raycast backend answers the cursor's queries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RaycastMode {
    /// Lightweight collider query.
    #[default]
    Collision,
    /// Full physics query, bounded by `max_distance`.
    Physics,
}

/// Recognized cursor options.
///
/// With the `serde` feature every field is optional in the serialized form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorConfig {
    /// Collision group index; the ray mask is `1 << collision_group`.
    pub collision_group: u32,
    /// Maximum raycast distance for physics queries.
    pub max_distance: f32,
    /// Controller filter for XR select events.
    pub handedness: HandednessSetting,
    /// Backend used for object hits.
    pub raycast_mode: RaycastMode,
    /// Request `hover_style` while an entity is hovered.
    pub style_cursor: bool,
    /// Style requested on hover.
    pub hover_style: String,
    /// Let a reality hit-test source compete with object hits.
    pub use_hit_test: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            collision_group: 1,
            max_distance: 100.0,
            handedness: HandednessSetting::InputDevice,
            raycast_mode: RaycastMode::Collision,
            style_cursor: true,
            hover_style: "pointer".to_owned(),
            use_hit_test: false,
        }
    }
}

impl CursorConfig {
    /// Ray mask derived from the collision group.
    pub fn collision_mask(&self) -> CollisionMask {
        CollisionMask::from_group(self.collision_group)
    }

    /// Builder: set the collision group.
    pub fn with_collision_group(mut self, group: u32) -> Self {
        self.collision_group = group;
        self
    }

    /// Builder: set the handedness filter.
    pub fn with_handedness(mut self, handedness: HandednessSetting) -> Self {
        self.handedness = handedness;
        self
    }

    /// Builder: select the raycast backend.
    pub fn with_raycast_mode(mut self, mode: RaycastMode) -> Self {
        self.raycast_mode = mode;
        self
    }

    /// Builder: set the physics query range.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Builder: toggle the hover style request.
    pub fn with_style_cursor(mut self, enabled: bool) -> Self {
        self.style_cursor = enabled;
        self
    }

    /// Builder: style requested on hover.
    pub fn with_hover_style(mut self, style: impl Into<String>) -> Self {
        self.hover_style = style.into();
        self
    }

    /// Builder: toggle the reality hit-test fallback.
    pub fn with_hit_test(mut self, enabled: bool) -> Self {
        self.use_hit_test = enabled;
        self
    }
}
