// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-scoped access to a shared style stack.

use reticle_style::{SharedStyleStack, StyleError, StyleKey};

/// One behavior's seat in a [`SharedStyleStack`].
///
/// Each requester owns a fresh [`StyleKey`], so two behaviors never overwrite
/// each other's requests. Behaviors hold one by composition.
#[derive(Debug)]
pub struct StyleRequester {
    styles: SharedStyleStack,
    key: StyleKey,
}

impl StyleRequester {
    /// Register a new key on `styles`.
    pub fn new(styles: &SharedStyleStack) -> Self {
        Self {
            key: styles.register_key(),
            styles: styles.clone(),
        }
    }

    /// The key requests are filed under.
    pub fn key(&self) -> StyleKey {
        self.key
    }

    /// The stack this requester talks to.
    pub fn styles(&self) -> &SharedStyleStack {
        &self.styles
    }

    /// Request `style`, replacing this requester's previous request.
    pub fn request(&self, style: &str) -> Result<(), StyleError> {
        self.styles.set_style(self.key, style)
    }

    /// Withdraw the current request, if any.
    pub fn clear(&self) {
        self.styles.clear_style(self.key);
    }

    /// Style currently requested by this requester.
    pub fn current(&self) -> Option<String> {
        self.styles.get_style(self.key)
    }
}
