// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-threaded shared handle to one [`StyleStack`].
//!
//! The cursor and any number of widgets in the same scene need to talk to the
//! same stack. Cloning a [`SharedStyleStack`] hands out another reference to
//! it; every method borrows for the duration of the call only.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StyleError;
use crate::stack::{StyleChangeHandler, StyleKey, StyleStack};

/// Clonable reference to a scene's style stack.
///
/// The change handler lives outside the stack and runs after the stack is
/// released, so it may read or write the stack through any handle. Changes
/// made from inside the handler are not reported back to it.
#[derive(Clone, Default)]
pub struct SharedStyleStack {
    stack: Rc<RefCell<StyleStack>>,
    on_change: Rc<RefCell<Option<StyleChangeHandler>>>,
}

impl core::fmt::Debug for SharedStyleStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedStyleStack")
            .field("stack", &self.stack)
            .field(
                "has_handler",
                &self.on_change.try_borrow().is_ok_and(|h| h.is_some()),
            )
            .finish()
    }
}

impl From<StyleStack> for SharedStyleStack {
    fn from(stack: StyleStack) -> Self {
        Self::new(stack)
    }
}

impl SharedStyleStack {
    /// Share `stack`. A change handler already installed on it moves to the
    /// shared handle.
    pub fn new(mut stack: StyleStack) -> Self {
        let handler = stack.take_change_handler();
        Self {
            stack: Rc::new(RefCell::new(stack)),
            on_change: Rc::new(RefCell::new(handler)),
        }
    }

    /// See [`StyleStack::register_key`].
    pub fn register_key(&self) -> StyleKey {
        self.stack.borrow_mut().register_key()
    }

    /// See [`StyleStack::set_style`].
    pub fn set_style(&self, key: StyleKey, style: &str) -> Result<(), StyleError> {
        let (result, changed) = self.stack.borrow_mut().upsert(key, style);
        self.notify(changed);
        result
    }

    /// See [`StyleStack::get_style`].
    pub fn get_style(&self, key: StyleKey) -> Option<String> {
        self.stack.borrow().get_style(key).map(str::to_owned)
    }

    /// See [`StyleStack::clear_style`].
    pub fn clear_style(&self, key: StyleKey) {
        let changed = self.stack.borrow_mut().remove(key);
        self.notify(changed);
    }

    /// See [`StyleStack::effective_style`].
    pub fn effective_style(&self) -> String {
        self.stack.borrow().effective_style().to_owned()
    }

    /// Install the effective-style side effect, replacing any previous one.
    pub fn set_change_handler(&self, handler: impl FnMut(&str) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(handler));
    }

    /// Run `f` with read access to the stack.
    pub fn with<R>(&self, f: impl FnOnce(&StyleStack) -> R) -> R {
        f(&self.stack.borrow())
    }

    /// Whether both handles point at the same stack.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stack, &other.stack)
    }

    fn notify(&self, changed: Option<String>) {
        let Some(style) = changed else {
            return;
        };
        // Taken out while it runs so it may call back into this handle.
        let handler = self.on_change.borrow_mut().take();
        if let Some(mut handler) = handler {
            handler(&style);
            let mut slot = self.on_change.borrow_mut();
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
    }
}
