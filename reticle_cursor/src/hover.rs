// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions for a single target.
//!
//! ## Minimal example
//!
//! ```
//! use reticle_cursor::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert_eq!(h.update(Some(1)), vec![]);
//! assert_eq!(h.update(Some(2)), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(None), vec![HoverEvent::Leave(2)]);
//! ```

/// Tracks the single hovered target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Option<K>,
}

/// A hover transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The target became hovered.
    Enter(K),
    /// The target stopped being hovered.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Currently hovered target.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Clear the hovered target, returning its leave event.
    pub fn clear(&mut self) -> Option<HoverEvent<K>> {
        self.current.take().map(HoverEvent::Leave)
    }

    /// Move hover to `next` and return the transitions, leave first.
    ///
    /// Re-hovering the current target yields nothing.
    pub fn update(&mut self, next: Option<K>) -> Vec<HoverEvent<K>> {
        if self.current == next {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(2);
        if let Some(old) = self.current {
            out.push(HoverEvent::Leave(old));
        }
        if let Some(new) = next {
            out.push(HoverEvent::Enter(new));
        }
        self.current = next;
        out
    }
}
