// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A clickable element driven by cursor events.
//!
//! [`ButtonBehavior`] subscribes to the `hover`, `unhover`, `down` and `up`
//! emitters of its entity's [`InteractionTarget`](reticle_cursor::InteractionTarget):
//!
//! | Event     | State       | Style request |
//! |-----------|-------------|---------------|
//! | `hover`   | `Hovering`  | `pointer`     |
//! | `unhover` | `Released`  | cleared       |
//! | `down`    | `Pressing`  | `pointer`     |
//! | `up`      | `Hovering`  | `pointer`, then the click callback runs |

use core::cell::RefCell;
use std::rc::Rc;

use reticle_cast::EntityId;
use reticle_cursor::{EventKind, ListenerId, TargetRegistry};
use reticle_style::SharedStyleStack;
use tracing::{debug, warn};

use crate::requester::StyleRequester;

/// Visual state of a button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Not hovered.
    #[default]
    Released,
    /// Hovered, not pressed.
    Hovering,
    /// Pressed.
    Pressing,
}

type Callback<T> = Option<Box<dyn FnMut(T)>>;

struct Inner {
    state: ButtonState,
    requester: StyleRequester,
    on_click: Callback<()>,
    on_state_change: Callback<ButtonState>,
}

impl Inner {
    fn enter(this: &RefCell<Self>, next: ButtonState, click: bool) {
        let (changed, mut on_state_change, mut on_click) = {
            let mut inner = this.borrow_mut();
            let style = match next {
                ButtonState::Hovering | ButtonState::Pressing => Some("pointer"),
                ButtonState::Released => None,
            };
            match style {
                // Rejections are logged by the stack.
                Some(style) => {
                    let _ = inner.requester.request(style);
                }
                None => inner.requester.clear(),
            }
            let changed = inner.state != next;
            inner.state = next;
            (
                changed,
                inner.on_state_change.take(),
                if click { inner.on_click.take() } else { None },
            )
        };

        // Callbacks run unborrowed so they may query the button.
        if changed && let Some(f) = on_state_change.as_mut() {
            f(next);
        }
        if let Some(f) = on_click.as_mut() {
            f(());
        }

        let mut inner = this.borrow_mut();
        if inner.on_state_change.is_none() {
            inner.on_state_change = on_state_change;
        }
        if inner.on_click.is_none() {
            inner.on_click = on_click;
        }
    }
}

/// Button semantics for one entity.
pub struct ButtonBehavior {
    entity: EntityId,
    inner: Rc<RefCell<Inner>>,
    listeners: Vec<(EventKind, ListenerId)>,
}

impl core::fmt::Debug for ButtonBehavior {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonBehavior")
            .field("entity", &self.entity)
            .field("state", &self.state())
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl ButtonBehavior {
    /// An inactive button on `entity` that requests styles from `styles`.
    pub fn new(entity: EntityId, styles: &SharedStyleStack) -> Self {
        Self {
            entity,
            inner: Rc::new(RefCell::new(Inner {
                state: ButtonState::Released,
                requester: StyleRequester::new(styles),
                on_click: None,
                on_state_change: None,
            })),
            listeners: Vec::new(),
        }
    }

    /// Builder: run `f` on every click.
    pub fn with_on_click(self, mut f: impl FnMut() + 'static) -> Self {
        self.inner.borrow_mut().on_click = Some(Box::new(move |()| f()));
        self
    }

    /// Builder: run `f` whenever the state changes.
    pub fn with_on_state_change(self, f: impl FnMut(ButtonState) + 'static) -> Self {
        self.inner.borrow_mut().on_state_change = Some(Box::new(f));
        self
    }

    /// Entity the button is attached to.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Current state.
    pub fn state(&self) -> ButtonState {
        self.inner.borrow().state
    }

    /// Whether the button is subscribed to its target.
    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Subscribe to the entity's interaction target.
    ///
    /// Returns `false` (and logs a warning) when the entity has no target.
    pub fn activate(&mut self, targets: &mut TargetRegistry) -> bool {
        if self.is_active() {
            return true;
        }
        let Some(target) = targets.get_mut(self.entity) else {
            warn!(entity = ?self.entity, "button entity has no interaction target");
            return false;
        };

        let transitions = [
            (EventKind::Hover, ButtonState::Hovering, false),
            (EventKind::Unhover, ButtonState::Released, false),
            (EventKind::Down, ButtonState::Pressing, false),
            (EventKind::Up, ButtonState::Hovering, true),
        ];
        for (kind, next, click) in transitions {
            let inner = Rc::clone(&self.inner);
            let id = target.on(kind, move |_, _, _| Inner::enter(&inner, next, click));
            self.listeners.push((kind, id));
        }
        debug!(entity = ?self.entity, "button activated");
        true
    }

    /// Unsubscribe and withdraw any style request.
    pub fn deactivate(&mut self, targets: &mut TargetRegistry) {
        if let Some(target) = targets.get_mut(self.entity) {
            for (kind, id) in self.listeners.drain(..) {
                target.off(kind, id);
            }
        } else {
            self.listeners.clear();
        }
        let mut inner = self.inner.borrow_mut();
        inner.requester.clear();
        inner.state = ButtonState::Released;
    }
}
