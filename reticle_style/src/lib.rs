// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reticle Style: arbitration of competing cursor style requests.
//!
//! ## Overview
//!
//! Several parts of a scene may want to change the cursor at once: a hovered
//! button asks for `pointer`, a drag in progress asks for `grabbing`, a busy
//! loader asks for `wait`. A [`StyleStack`] collects these requests, keyed by
//! requester, and decides which one is shown.
//!
//! ## Priority
//!
//! Styles are ranked by a fixed [`PriorityTable`]. The built-in table is
//! [`CSS_CURSOR_STYLES`], strongest first. The stack keeps requests sorted by
//! that rank; the front request wins, and an empty stack shows the default
//! style.
//!
//! ## Side effect
//!
//! Install a change handler with [`StyleStack::set_change_handler`] to apply
//! the effective style, for example by setting the canvas cursor. The handler
//! receives the new effective style and only runs when it actually changed.
//!
//! ## Sharing
//!
//! [`SharedStyleStack`] is a clonable single-threaded handle so a cursor and
//! any number of widgets can use one stack.
//!
//! ```
//! use reticle_style::{SharedStyleStack, StyleStack};
//!
//! let stack = SharedStyleStack::new(StyleStack::new());
//! let widget = stack.clone();
//! let key = widget.register_key();
//! widget.set_style(key, "pointer").unwrap();
//! assert_eq!(stack.effective_style(), "pointer");
//! ```

pub mod config;
pub mod error;
pub mod priority;
pub mod shared;
pub mod stack;

pub use config::StyleConfig;
pub use error::StyleError;
pub use priority::{CSS_CURSOR_STYLES, Priority, PriorityTable};
pub use shared::SharedStyleStack;
pub use stack::{DEFAULT_STYLE, StyleChangeHandler, StyleEntry, StyleKey, StyleStack};
