// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-refreshed reality hit-test source.

use crate::backend::RealityHitTest;
use crate::types::RealityHit;

/// Holds the latest reality hit the host reported.
///
/// The host calls [`FixedRealityHitTest::set_result`] once per frame with the
/// platform's hit-test output.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedRealityHitTest {
    result: Option<RealityHit>,
}

impl FixedRealityHitTest {
    /// A source that currently sees nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current result.
    pub fn set_result(&mut self, result: Option<RealityHit>) {
        self.result = result;
    }
}

impl RealityHitTest for FixedRealityHitTest {
    fn current_result(&self) -> Option<RealityHit> {
        self.result
    }
}
