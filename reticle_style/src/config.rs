// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative construction of a [`StyleStack`].

use crate::error::StyleError;
use crate::priority::PriorityTable;
use crate::stack::{DEFAULT_STYLE, StyleStack};

/// Settings for a scene's style stack.
///
/// With the `serde` feature every field is optional in the serialized form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    /// Style reported when no request is active.
    pub default_style: String,
    /// Custom precedence list, strongest first. `None` uses the CSS table.
    pub priorities: Option<Vec<String>>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_style: DEFAULT_STYLE.to_owned(),
            priorities: None,
        }
    }
}

impl StyleConfig {
    /// Build the table described by this config.
    pub fn table(&self) -> Result<PriorityTable, StyleError> {
        match &self.priorities {
            Some(list) => PriorityTable::new(list.iter().cloned()),
            None => Ok(PriorityTable::css()),
        }
    }

    /// Build an empty stack from this config.
    pub fn build(&self) -> Result<StyleStack, StyleError> {
        Ok(StyleStack::with_table(self.table()?).with_default_style(self.default_style.clone()))
    }
}
