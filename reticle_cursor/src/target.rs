// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of interaction targets keyed by entity.

use std::collections::HashMap;

use reticle_cast::EntityId;

use crate::emitter::InteractionTarget;

/// Interaction targets attached to scene entities.
///
/// Entities without a target can still be hovered; only the cursor's global
/// target hears about them.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: HashMap<EntityId, InteractionTarget>,
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target of `entity`, attaching an empty one if absent.
    pub fn attach(&mut self, entity: EntityId) -> &mut InteractionTarget {
        self.targets.entry(entity).or_default()
    }

    /// Detach and return the target of `entity`.
    pub fn detach(&mut self, entity: EntityId) -> Option<InteractionTarget> {
        self.targets.remove(&entity)
    }

    /// Target of `entity`.
    pub fn get(&self, entity: EntityId) -> Option<&InteractionTarget> {
        self.targets.get(&entity)
    }

    /// Mutable target of `entity`.
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut InteractionTarget> {
        self.targets.get_mut(&entity)
    }

    /// Whether `entity` has a target.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.targets.contains_key(&entity)
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True when no entity has a target.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
