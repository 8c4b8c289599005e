// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener collections for cursor events.
//!
//! An [`Emitter`] keeps its listeners in registration order and notifies them
//! in that order. Adding the same closure twice registers it twice; removing
//! an id that is not registered is a no-op.

use core::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;
use reticle_cast::{EntityId, HitTestPayload};

use crate::input::{Handedness, InputEvent};

/// The six cursor event kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Cursor started hovering.
    Hover,
    /// Cursor stopped hovering.
    Unhover,
    /// Press began.
    Down,
    /// Press ended.
    Up,
    /// Explicit click.
    Click,
    /// Hit point moved on the hovered target.
    Move,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Hover,
        Self::Unhover,
        Self::Down,
        Self::Up,
        Self::Click,
        Self::Move,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Hover => 0,
            Self::Unhover => 1,
            Self::Down => 2,
            Self::Up => 3,
            Self::Click => 4,
            Self::Move => 5,
        }
    }
}

/// What an event is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CursorTarget {
    /// A scene entity.
    Entity(EntityId),
    /// A reality surface, with the host's hit-test payload when one exists.
    Reality(Option<HitTestPayload>),
}

/// Cursor state handed to listeners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorSnapshot {
    /// Entity owning the cursor.
    pub cursor: EntityId,
    /// Resolved controller filter.
    pub handedness: Option<Handedness>,
    /// World-space ray origin.
    pub origin: Vec3,
    /// World-space ray direction, once one has been resolved.
    pub direction: Option<Vec3>,
    /// World-space cursor position.
    pub position: Vec3,
    /// Hovered entity.
    pub hovered: Option<EntityId>,
    /// Whether a reality surface is hovered.
    pub hovering_reality: bool,
    /// Whether the cursor is pressed.
    pub is_down: bool,
}

/// Callback invoked with the target, the cursor and the triggering input.
pub type Listener = Box<dyn FnMut(CursorTarget, &CursorSnapshot, Option<&InputEvent>)>;

/// Handle of a registered listener. Unique across all emitters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

static NEXT_LISTENER: AtomicU64 = AtomicU64::new(1);

/// Ordered listener collection for one event kind.
#[derive(Default)]
pub struct Emitter {
    listeners: Vec<(ListenerId, Listener)>,
}

impl core::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Emitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` after all current ones.
    pub fn add(
        &mut self,
        listener: impl FnMut(CursorTarget, &CursorSnapshot, Option<&InputEvent>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(NEXT_LISTENER.fetch_add(1, Ordering::Relaxed));
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister `id`. Returns whether it was registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    /// Invoke every listener in registration order.
    pub fn notify(
        &mut self,
        target: CursorTarget,
        cursor: &CursorSnapshot,
        original: Option<&InputEvent>,
    ) {
        for (_, listener) in &mut self.listeners {
            listener(target, cursor, original);
        }
    }

    /// Number of listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// One emitter per event kind.
///
/// Used for entity targets, for a cursor's global target and for its reality
/// target.
pub struct InteractionTarget {
    emitters: [Emitter; 6],
}

impl Default for InteractionTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for InteractionTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let counts: Vec<(EventKind, usize)> = EventKind::ALL
            .iter()
            .map(|k| (*k, self.emitter(*k).len()))
            .collect();
        f.debug_struct("InteractionTarget")
            .field("listeners", &counts)
            .finish()
    }
}

impl InteractionTarget {
    /// A target with no listeners.
    pub fn new() -> Self {
        Self {
            emitters: core::array::from_fn(|_| Emitter::new()),
        }
    }

    /// Emitter for `kind`.
    pub fn emitter(&self, kind: EventKind) -> &Emitter {
        &self.emitters[kind.index()]
    }

    /// Mutable emitter for `kind`.
    pub fn emitter_mut(&mut self, kind: EventKind) -> &mut Emitter {
        &mut self.emitters[kind.index()]
    }

    /// Subscribe `listener` to `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(CursorTarget, &CursorSnapshot, Option<&InputEvent>) + 'static,
    ) -> ListenerId {
        self.emitter_mut(kind).add(listener)
    }

    /// Unsubscribe `id` from `kind`.
    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.emitter_mut(kind).remove(id)
    }

    /// Notify the `kind` emitter.
    pub fn notify(
        &mut self,
        kind: EventKind,
        target: CursorTarget,
        cursor: &CursorSnapshot,
        original: Option<&InputEvent>,
    ) {
        self.emitter_mut(kind).notify(target, cursor, original);
    }
}
