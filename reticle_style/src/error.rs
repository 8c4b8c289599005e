// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the style stack and priority table.

/// A rejected style request or an invalid priority table.
///
/// None of these are fatal: the stack stays consistent after every rejection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The requested style identifier is not in the priority table.
    #[error("ignored disallowed/invalid cursor style: {0:?}")]
    UnknownStyle(String),
    /// A priority table listed the same identifier twice.
    #[error("cursor style {0:?} appears more than once in the priority table")]
    DuplicateStyle(String),
    /// A priority table with no entries.
    #[error("priority table must contain at least one style")]
    EmptyTable,
}
