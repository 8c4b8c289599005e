// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Behaviors: building blocks that consume cursor events and style
//! requests.
//!
//! - [`StyleRequester`]: one key in a shared style stack, held by composition.
//! - [`ButtonBehavior`]: released / hovering / pressing states and a click
//!   callback, wired to an entity's interaction target.
//! - [`MouseLook`]: drag-to-look camera control that shows `grabbing` while
//!   dragging.
//!
//! ```
//! use reticle_behaviors::{ButtonBehavior, ButtonState};
//! use reticle_cast::EntityId;
//! use reticle_cursor::TargetRegistry;
//! use reticle_style::SharedStyleStack;
//!
//! let styles = SharedStyleStack::default();
//! let mut targets = TargetRegistry::new();
//! let entity = EntityId::new(0, 1);
//! targets.attach(entity);
//!
//! let mut button = ButtonBehavior::new(entity, &styles).with_on_click(|| println!("clicked"));
//! assert!(button.activate(&mut targets));
//! assert_eq!(button.state(), ButtonState::Released);
//! ```

pub mod button;
pub mod mouse_look;
pub mod requester;

pub use button::{ButtonBehavior, ButtonState};
pub use mouse_look::{MouseDownResponse, MouseLook, MouseLookConfig};
pub use requester::StyleRequester;
