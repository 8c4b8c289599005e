// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference transform hierarchy.
//!
//! [`SceneTree`] is a generational arena of entities with parent/child links
//! and local translation/rotation/scale. World transforms are composed on
//! demand by walking the parent chain, so there is no commit step.
//!
//! ```
//! use glam::{Quat, Vec3};
//! use reticle_cast::{SceneGraph, SceneTree, Transform};
//!
//! let mut scene = SceneTree::new();
//! let player = scene.spawn(None, Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)));
//! let head = scene.spawn(Some(player), Transform::from_translation(Vec3::new(0.0, 0.5, 0.0)));
//! assert_eq!(scene.world_position(head), Some(Vec3::new(0.0, 1.5, 0.0)));
//! ```

use glam::{Affine3A, Quat, Vec3};

use crate::backend::SceneGraph;
use crate::types::EntityId;

/// Local transform relative to the parent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    /// Translation.
    pub translation: Vec3,
    /// Rotation.
    pub rotation: Quat,
    /// Non-uniform scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, rotation or scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Pure rotation.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Builder: replace the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: replace the scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Matrix form.
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local: Transform,
}

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena of entities with a transform hierarchy.
#[derive(Clone, Default)]
pub struct SceneTree {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for SceneTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|s| s.node.is_some()).count();
        f.debug_struct("SceneTree")
            .field("slots_total", &self.slots.len())
            .field("alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl SceneTree {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an entity under `parent` (or as a root). A dead parent spawns a
    /// root.
    pub fn spawn(&mut self, parent: Option<EntityId>, local: Transform) -> EntityId {
        let parent = parent.filter(|p| self.is_alive(*p));
        let node = Node {
            parent,
            children: Vec::new(),
            local,
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation += 1;
            slot.node = Some(node);
            idx
        } else {
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            self.slots.len() - 1
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "EntityId uses 32-bit indices by design."
        )]
        let id = EntityId::new(idx as u32, self.slots[idx].generation);
        if let Some(p) = parent
            && let Some(pn) = self.node_mut(p)
        {
            pn.children.push(id);
        }
        id
    }

    /// Remove `id` and its whole subtree. Dead ids are ignored.
    pub fn remove(&mut self, id: EntityId) {
        let Some(node) = self.node(id) else {
            return;
        };
        let parent = node.parent;
        if let Some(p) = parent
            && let Some(pn) = self.node_mut(p)
        {
            pn.children.retain(|c| *c != id);
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: EntityId) {
        let children = match self.slots[id.idx()].node.take() {
            Some(node) => node.children,
            None => return,
        };
        self.free_list.push(id.idx());
        for child in children {
            self.remove_subtree(child);
        }
    }

    /// Whether `id` refers to a live entity.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    /// True when no entity is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Local transform of `id`.
    pub fn local_transform(&self, id: EntityId) -> Option<Transform> {
        self.node(id).map(|n| n.local)
    }

    /// Replace the local transform of `id`.
    pub fn set_local_transform(&mut self, id: EntityId, local: Transform) {
        if let Some(n) = self.node_mut(id) {
            n.local = local;
        }
    }

    /// Children of `id` in spawn order.
    pub fn children(&self, id: EntityId) -> &[EntityId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Composed local-to-world transform.
    pub fn world_transform(&self, id: EntityId) -> Option<Affine3A> {
        let node = self.node(id)?;
        let local = node.local.to_affine();
        match node.parent {
            Some(p) => Some(self.world_transform(p)? * local),
            None => Some(local),
        }
    }

    fn node(&self, id: EntityId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: EntityId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_mut()
    }
}

impl SceneGraph for SceneTree {
    fn world_position(&self, entity: EntityId) -> Option<Vec3> {
        self.world_transform(entity).map(|t| Vec3::from(t.translation))
    }

    fn world_rotation(&self, entity: EntityId) -> Option<Quat> {
        let node = self.node(entity)?;
        match node.parent {
            Some(p) => Some(self.world_rotation(p)? * node.local.rotation),
            None => Some(node.local.rotation),
        }
    }

    fn inverse_transform_point(&self, entity: EntityId, point: Vec3) -> Option<Vec3> {
        self.world_transform(entity)
            .map(|t| t.inverse().transform_point3(point))
    }

    fn parent(&self, entity: EntityId) -> Option<EntityId> {
        self.node(entity)?.parent
    }

    fn spawn_child(&mut self, parent: EntityId) -> Option<EntityId> {
        self.is_alive(parent)
            .then(|| self.spawn(Some(parent), Transform::IDENTITY))
    }

    fn despawn(&mut self, entity: EntityId) {
        self.remove(entity);
    }

    fn set_local_rotation(&mut self, entity: EntityId, rotation: Quat) {
        if let Some(n) = self.node_mut(entity) {
            n.local.rotation = rotation;
        }
    }

    fn set_local_translation(&mut self, entity: EntityId, translation: Vec3) {
        if let Some(n) = self.node_mut(entity) {
            n.local.translation = translation;
        }
    }
}
