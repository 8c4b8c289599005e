// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed precedence of recognized cursor style identifiers.
//!
//! A [`PriorityTable`] totally orders style identifiers: the earlier an
//! identifier appears, the higher its priority. Priority is a bijection over
//! style identity, so two distinct styles never share an index. The
//! [`StyleStack`](crate::StyleStack) relies on this to keep its insertion
//! scan a single "skip while priority ≤ new" walk.

use std::collections::HashMap;

use crate::error::StyleError;

/// CSS cursor identifiers in precedence order (index 0 is the strongest).
pub const CSS_CURSOR_STYLES: [&str; 36] = [
    "wait",
    "not-allowed",
    "no-drop",
    "copy",
    "alias",
    "move",
    "grabbing",
    "pointer",
    "text",
    "vertical-text",
    "cell",
    "crosshair",
    "col-resize",
    "row-resize",
    "grab",
    "nesw-resize",
    "nwse-resize",
    "ne-resize",
    "nw-resize",
    "se-resize",
    "sw-resize",
    "ew-resize",
    "ns-resize",
    "n-resize",
    "e-resize",
    "s-resize",
    "w-resize",
    "progress",
    "context-menu",
    "help",
    "zoom-in",
    "zoom-out",
    "all-scroll",
    "none",
    "default",
    "auto",
];

/// Priority of a style: its index in the table. Lower is stronger.
pub type Priority = usize;

/// Ordered list of recognized style identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriorityTable {
    styles: Vec<String>,
    lookup: HashMap<String, Priority>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::css()
    }
}

impl PriorityTable {
    /// The built-in table of CSS cursor identifiers.
    pub fn css() -> Self {
        let styles: Vec<String> = CSS_CURSOR_STYLES.iter().map(|s| (*s).to_owned()).collect();
        let lookup = styles
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
        Self { styles, lookup }
    }

    /// Build a custom table. Identifiers must be unique.
    pub fn new<I, S>(styles: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let styles: Vec<String> = styles.into_iter().map(Into::into).collect();
        if styles.is_empty() {
            return Err(StyleError::EmptyTable);
        }
        let mut lookup = HashMap::with_capacity(styles.len());
        for (i, style) in styles.iter().enumerate() {
            if lookup.insert(style.clone(), i).is_some() {
                tracing::warn!(style = %style, "duplicate cursor style in priority table");
                return Err(StyleError::DuplicateStyle(style.clone()));
            }
        }
        Ok(Self { styles, lookup })
    }

    /// Priority of `style`, or `None` if it is not recognized.
    pub fn priority(&self, style: &str) -> Option<Priority> {
        self.lookup.get(style).copied()
    }

    /// Whether `style` is recognized.
    pub fn contains(&self, style: &str) -> bool {
        self.lookup.contains_key(style)
    }

    /// Style identifier at `priority`.
    pub fn style_at(&self, priority: Priority) -> Option<&str> {
        self.styles.get(priority).map(String::as_str)
    }

    /// Identifiers from strongest to weakest.
    pub fn styles(&self) -> impl Iterator<Item = &str> + '_ {
        self.styles.iter().map(String::as_str)
    }

    /// Number of recognized identifiers.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
