// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform input delivered to a cursor.

use glam::Vec2;

/// Handedness of an XR input source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Handedness {
    /// Left controller.
    Left,
    /// Right controller.
    Right,
    /// No handedness, such as a screen tap.
    None,
}

/// A desktop or touch pointer sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Position in viewport pixels, origin top-left.
    pub position: Vec2,
    /// Whether this is the primary pointer.
    pub primary: bool,
    /// Button index; 0 is the main button.
    pub button: u16,
}

impl PointerInput {
    /// A primary main-button sample at `position`.
    pub fn primary(position: Vec2) -> Self {
        Self {
            position,
            primary: true,
            button: 0,
        }
    }
}

/// An XR controller select sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct XrInput {
    /// Handedness of the originating input source.
    pub handedness: Handedness,
}

/// A discrete input event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved.
    PointerMove(PointerInput),
    /// Pointer button pressed.
    PointerDown(PointerInput),
    /// Pointer button released.
    PointerUp(PointerInput),
    /// Desktop click.
    Click(PointerInput),
    /// Controller select (a full press and release).
    Select(XrInput),
    /// Controller select began.
    SelectStart(XrInput),
    /// Controller select ended.
    SelectEnd(XrInput),
}

impl InputEvent {
    /// Whether this event comes from an XR controller.
    pub fn is_xr(&self) -> bool {
        matches!(
            self,
            Self::Select(_) | Self::SelectStart(_) | Self::SelectEnd(_)
        )
    }
}

/// Per-frame XR pose state, supplied while an XR session runs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct XrFrameState {
    /// Analog axes of a screen-space input source (AR tap and hold).
    pub screen_axes: Option<Vec2>,
    /// Whether the cursor's controller has a tracked pose this frame.
    pub controller_tracked: bool,
}
