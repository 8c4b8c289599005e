// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style stack: keyed, priority-ordered style requests.
//!
//! ## Semantics
//!
//! - Each [`StyleKey`] holds at most one request at a time (upsert).
//! - Entries are kept sorted by priority, strongest first; a new request is
//!   inserted after every entry whose priority is ≤ its own, so equal styles
//!   keep request order.
//! - The effective style is the front entry's style, or the default style
//!   when the stack is empty.
//! - The change handler runs exactly once for every call that changes the
//!   effective style, and never otherwise.
//!
//! ## Minimal example
//!
//! ```
//! use reticle_style::StyleStack;
//!
//! let mut stack = StyleStack::new();
//! let hover = stack.register_key();
//! let drag = stack.register_key();
//!
//! stack.set_style(hover, "pointer").unwrap();
//! stack.set_style(drag, "grabbing").unwrap();
//! assert_eq!(stack.effective_style(), "grabbing");
//!
//! stack.clear_style(drag);
//! assert_eq!(stack.effective_style(), "pointer");
//!
//! stack.clear_style(hover);
//! assert_eq!(stack.effective_style(), "default");
//! ```

use tracing::{debug, warn};

use crate::error::StyleError;
use crate::priority::{Priority, PriorityTable};

/// Style applied when no request is active, unless configured otherwise.
pub const DEFAULT_STYLE: &str = "default";

/// Opaque identity of a style requester.
///
/// Obtain fresh keys from [`StyleStack::register_key`]; hosts that already
/// have stable identities may wrap them with [`StyleKey::from_raw`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey(u64);

impl StyleKey {
    /// Wrap a caller-chosen identity.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The underlying identity.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One active request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleEntry {
    key: StyleKey,
    style: String,
    priority: Priority,
}

impl StyleEntry {
    /// Requester.
    pub fn key(&self) -> StyleKey {
        self.key
    }

    /// Requested style identifier.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Priority of the requested style in the stack's table.
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// Callback receiving the new effective style.
pub type StyleChangeHandler = Box<dyn FnMut(&str)>;

/// Priority-ordered arbitration of style requests.
pub struct StyleStack {
    entries: Vec<StyleEntry>,
    table: PriorityTable,
    default_style: String,
    on_change: Option<StyleChangeHandler>,
    next_key: u64,
}

impl core::fmt::Debug for StyleStack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StyleStack")
            .field("entries", &self.entries)
            .field("default_style", &self.default_style)
            .field("table_len", &self.table.len())
            .field("has_handler", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleStack {
    /// Create an empty stack over the CSS cursor table.
    pub fn new() -> Self {
        Self::with_table(PriorityTable::css())
    }

    /// Create an empty stack over a custom priority table.
    pub fn with_table(table: PriorityTable) -> Self {
        Self {
            entries: Vec::new(),
            table,
            default_style: DEFAULT_STYLE.to_owned(),
            on_change: None,
            next_key: 1,
        }
    }

    /// Builder: style reported when the stack is empty.
    pub fn with_default_style(mut self, style: impl Into<String>) -> Self {
        self.default_style = style.into();
        self
    }

    /// Install the effective-style side effect, replacing any previous one.
    ///
    /// The handler runs while the stack is being mutated and must not call
    /// back into it. [`SharedStyleStack`](crate::SharedStyleStack) runs its
    /// handler after the stack is released instead.
    pub fn set_change_handler(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Hand out a key not returned before by this stack.
    pub fn register_key(&mut self) -> StyleKey {
        let key = StyleKey(self.next_key);
        self.next_key += 1;
        key
    }

    /// Request that `key` wants at least `style` to be shown.
    ///
    /// Re-requesting the current style is a no-op. An unrecognized style is
    /// rejected with [`StyleError::UnknownStyle`], but the previous request of
    /// `key` is still withdrawn.
    pub fn set_style(&mut self, key: StyleKey, style: &str) -> Result<(), StyleError> {
        let (result, changed) = self.upsert(key, style);
        self.notify(changed);
        result
    }

    /// Style currently requested by `key`.
    pub fn get_style(&self, key: StyleKey) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].style.as_str())
    }

    /// Withdraw every request of `key`.
    pub fn clear_style(&mut self, key: StyleKey) {
        let changed = self.remove(key);
        self.notify(changed);
    }

    /// Front entry's style, or the default style when empty.
    pub fn effective_style(&self) -> &str {
        self.entries
            .first()
            .map_or(self.default_style.as_str(), |e| e.style.as_str())
    }

    /// Style reported when the stack is empty.
    pub fn default_style(&self) -> &str {
        &self.default_style
    }

    /// Active requests, strongest first.
    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// Number of active requests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The priority table used to rank requests.
    pub fn table(&self) -> &PriorityTable {
        &self.table
    }

    pub(crate) fn take_change_handler(&mut self) -> Option<StyleChangeHandler> {
        self.on_change.take()
    }

    /// Upsert without running the handler; returns the new effective style
    /// when it changed.
    pub(crate) fn upsert(
        &mut self,
        key: StyleKey,
        style: &str,
    ) -> (Result<(), StyleError>, Option<String>) {
        let before = self.effective_style().to_owned();
        if let Some(idx) = self.position(key) {
            if self.entries[idx].style == style {
                return (Ok(()), None);
            }
            self.entries.remove(idx);
        }

        let result = match self.table.priority(style) {
            None => {
                warn!(style, "ignored disallowed/invalid cursor style");
                Err(StyleError::UnknownStyle(style.to_owned()))
            }
            Some(priority) => {
                let at = self
                    .entries
                    .iter()
                    .position(|e| e.priority > priority)
                    .unwrap_or(self.entries.len());
                self.entries.insert(
                    at,
                    StyleEntry {
                        key,
                        style: style.to_owned(),
                        priority,
                    },
                );
                Ok(())
            }
        };
        (result, self.changed_from(&before))
    }

    /// Remove without running the handler; returns the new effective style
    /// when it changed.
    pub(crate) fn remove(&mut self, key: StyleKey) -> Option<String> {
        let before = self.effective_style().to_owned();
        self.entries.retain(|e| e.key != key);
        self.changed_from(&before)
    }

    fn position(&self, key: StyleKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    fn changed_from(&self, before: &str) -> Option<String> {
        let now = self.effective_style();
        if now == before {
            return None;
        }
        debug!(from = before, to = now, "effective cursor style changed");
        Some(now.to_owned())
    }

    fn notify(&mut self, changed: Option<String>) {
        if let Some(style) = changed
            && let Some(handler) = self.on_change.as_mut()
        {
            handler(&style);
        }
    }
}
