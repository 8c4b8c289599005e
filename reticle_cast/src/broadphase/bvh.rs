// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary bounding volume hierarchy over 3D boxes.

use super::Broadphase;
use crate::types::{Aabb3, Ray};

/// A simple BVH using SAH-like splits.
#[derive(Clone)]
pub struct Bvh {
    max_leaf: usize,
    root: Option<NodeIdx>,
    arena: Vec<Node>,
    slots: Vec<Option<Aabb3>>,
}

#[derive(Clone, Debug)]
enum Kind {
    Leaf(Vec<(usize, Aabb3)>),
    Internal { left: NodeIdx, right: NodeIdx },
}

#[derive(Clone, Debug)]
struct Node {
    bbox: Aabb3,
    kind: Kind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn get(self) -> usize {
        self.0
    }
}

impl Default for Bvh {
    fn default() -> Self {
        Self::with_max_leaf(8)
    }
}

type BvhItems = Vec<(usize, Aabb3)>;

impl Bvh {
    /// Create an empty hierarchy whose leaves split past `max_leaf` items.
    pub fn with_max_leaf(max_leaf: usize) -> Self {
        Self {
            max_leaf: max_leaf.max(2),
            root: None,
            arena: Vec::new(),
            slots: Vec::new(),
        }
    }

    fn ensure_slot(&mut self, slot: usize, bbox: Aabb3) {
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot] = Some(bbox);
    }

    fn bbox_items(items: &[(usize, Aabb3)]) -> Aabb3 {
        let mut it = items.iter();
        match it.next() {
            Some((_, first)) => it.fold(*first, |acc, (_, b)| acc.union(b)),
            None => Aabb3::new(glam::Vec3::ZERO, glam::Vec3::ZERO),
        }
    }

    /// SAH-like split: sort along each axis, precompute prefix/suffix boxes,
    /// and choose `k` minimizing `area(LB_k) * k + area(RB_k) * (n - k)`.
    fn split_sah(mut items: BvhItems, max_leaf: usize) -> (BvhItems, BvhItems) {
        let n = items.len();
        let min_children = (max_leaf / 2).max(1).min(n / 2);
        let mut best: Option<(f32, usize, usize)> = None;
        for axis in 0..3 {
            items.sort_by(|a, b| {
                let ca = a.1.center()[axis];
                let cb = b.1.center()[axis];
                ca.partial_cmp(&cb).unwrap_or(core::cmp::Ordering::Equal)
            });

            let mut prefix: Vec<Aabb3> = Vec::with_capacity(n);
            for (_, bb) in &items {
                let next = prefix.last().map_or(*bb, |p| p.union(bb));
                prefix.push(next);
            }
            let mut suffix: Vec<Aabb3> = Vec::with_capacity(n);
            for (_, bb) in items.iter().rev() {
                let next = suffix.last().map_or(*bb, |s| bb.union(s));
                suffix.push(next);
            }
            suffix.reverse();

            for k in min_children..=(n - min_children) {
                let cost = prefix[k - 1].surface_area() * k as f32
                    + suffix[k].surface_area() * (n - k) as f32;
                if best.is_none_or(|(bc, _, _)| cost < bc) {
                    best = Some((cost, axis, k));
                }
            }
        }

        let (axis, k) = best.map_or((0, n / 2), |(_, axis, k)| (axis, k));
        items.sort_by(|a, b| {
            let ca = a.1.center()[axis];
            let cb = b.1.center()[axis];
            ca.partial_cmp(&cb).unwrap_or(core::cmp::Ordering::Equal)
        });
        let right = items.split_off(k);
        (items, right)
    }

    fn insert_node(arena: &mut Vec<Node>, node_idx: usize, slot: usize, bbox: Aabb3, max_leaf: usize) {
        let kind = core::mem::replace(&mut arena[node_idx].kind, Kind::Leaf(Vec::new()));
        match kind {
            Kind::Leaf(mut items) => {
                let was_empty = items.is_empty();
                items.push((slot, bbox));
                let mut node_bbox = if was_empty {
                    bbox
                } else {
                    arena[node_idx].bbox.union(&bbox)
                };
                let new_kind = if items.len() > max_leaf {
                    let (l, r) = Self::split_sah(items, max_leaf);
                    let l_idx = arena.len();
                    arena.push(Node {
                        bbox: Self::bbox_items(&l),
                        kind: Kind::Leaf(l),
                    });
                    let r_idx = arena.len();
                    arena.push(Node {
                        bbox: Self::bbox_items(&r),
                        kind: Kind::Leaf(r),
                    });
                    node_bbox = arena[l_idx].bbox.union(&arena[r_idx].bbox);
                    Kind::Internal {
                        left: NodeIdx(l_idx),
                        right: NodeIdx(r_idx),
                    }
                } else {
                    Kind::Leaf(items)
                };
                arena[node_idx].kind = new_kind;
                arena[node_idx].bbox = node_bbox;
            }
            Kind::Internal { left, right } => {
                let lb = arena[left.get()].bbox;
                let rb = arena[right.get()].bbox;
                let cost_l = lb.union(&bbox).surface_area() - lb.surface_area();
                let cost_r = rb.union(&bbox).surface_area() - rb.surface_area();
                if cost_l <= cost_r {
                    Self::insert_node(arena, left.get(), slot, bbox, max_leaf);
                } else {
                    Self::insert_node(arena, right.get(), slot, bbox, max_leaf);
                }
                let node_bbox = arena[node_idx].bbox.union(&bbox);
                arena[node_idx].kind = Kind::Internal { left, right };
                arena[node_idx].bbox = node_bbox;
            }
        }
    }

    fn remove_node(arena: &mut Vec<Node>, node_idx: usize, slot: usize, old: &Aabb3) -> bool {
        if !arena[node_idx].bbox.overlaps(old) {
            return false;
        }
        let kind = core::mem::replace(&mut arena[node_idx].kind, Kind::Leaf(Vec::new()));
        let (new_kind, new_bbox, removed) = match kind {
            Kind::Leaf(mut items) => {
                let before = items.len();
                items.retain(|(s, _)| *s != slot);
                let removed = items.len() != before;
                let bbox = Self::bbox_items(&items);
                (Kind::Leaf(items), bbox, removed)
            }
            Kind::Internal { left, right } => {
                let removed = Self::remove_node(arena, left.get(), slot, old)
                    | Self::remove_node(arena, right.get(), slot, old);
                let is_left_empty =
                    matches!(arena[left.get()].kind, Kind::Leaf(ref v) if v.is_empty());
                let is_right_empty =
                    matches!(arena[right.get()].kind, Kind::Leaf(ref v) if v.is_empty());
                if removed && is_left_empty && !is_right_empty {
                    // Collapse into the surviving child.
                    let kind =
                        core::mem::replace(&mut arena[right.get()].kind, Kind::Leaf(Vec::new()));
                    (kind, arena[right.get()].bbox, true)
                } else if removed && is_right_empty && !is_left_empty {
                    let kind =
                        core::mem::replace(&mut arena[left.get()].kind, Kind::Leaf(Vec::new()));
                    (kind, arena[left.get()].bbox, true)
                } else {
                    let bbox = arena[left.get()].bbox.union(&arena[right.get()].bbox);
                    (Kind::Internal { left, right }, bbox, removed)
                }
            }
        };
        arena[node_idx].kind = new_kind;
        arena[node_idx].bbox = new_bbox;
        removed
    }
}

impl Broadphase for Bvh {
    fn insert(&mut self, slot: usize, aabb: Aabb3) {
        self.ensure_slot(slot, aabb);
        match self.root {
            None => {
                let idx = self.arena.len();
                self.arena.push(Node {
                    bbox: aabb,
                    kind: Kind::Leaf(vec![(slot, aabb)]),
                });
                self.root = Some(NodeIdx(idx));
            }
            Some(root_idx) => {
                Self::insert_node(&mut self.arena, root_idx.get(), slot, aabb, self.max_leaf);
            }
        }
    }

    fn update(&mut self, slot: usize, aabb: Aabb3) {
        if let Some(old) = self.slots.get(slot).and_then(|x| *x)
            && let Some(root_idx) = self.root
        {
            let _ = Self::remove_node(&mut self.arena, root_idx.get(), slot, &old);
        }
        self.insert(slot, aabb);
    }

    fn remove(&mut self, slot: usize) {
        if let Some(old) = self.slots.get(slot).and_then(|x| *x)
            && let Some(root_idx) = self.root
        {
            let _ = Self::remove_node(&mut self.arena, root_idx.get(), slot, &old);
            if let Some(s) = self.slots.get_mut(slot) {
                *s = None;
            }
        }
    }

    fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.slots.clear();
    }

    fn query_ray<'a>(&'a self, ray: &Ray) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut out = Vec::new();
        let Some(root_idx) = self.root else {
            return Box::new(out.into_iter());
        };
        let mut stack = vec![root_idx];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if n.bbox.ray_interval(ray).is_none() {
                continue;
            }
            match &n.kind {
                Kind::Leaf(items) => {
                    for (s, b) in items {
                        if b.ray_interval(ray).is_some() {
                            out.push(*s);
                        }
                    }
                }
                Kind::Internal { left, right } => {
                    stack.push(*left);
                    stack.push(*right);
                }
            }
        }
        Box::new(out.into_iter())
    }
}

impl core::fmt::Debug for Bvh {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|e| e.is_some()).count();
        f.debug_struct("Bvh")
            .field("max_leaf", &self.max_leaf)
            .field("arena_nodes", &self.arena.len())
            .field("total_slots", &self.slots.len())
            .field("alive", &alive)
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}
