// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector broadphase with linear scans. Small and simple; good for tiny
//! scenes.

use super::Broadphase;
use crate::types::{Aabb3, Ray};

/// Flat vector broadphase with linear scans.
#[derive(Clone, Default)]
pub struct FlatVec {
    entries: Vec<Option<Aabb3>>,
}

impl core::fmt::Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("FlatVec")
            .field("total_slots", &self.entries.len())
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl Broadphase for FlatVec {
    fn insert(&mut self, slot: usize, aabb: Aabb3) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(aabb);
    }

    fn update(&mut self, slot: usize, aabb: Aabb3) {
        if let Some(e) = self.entries.get_mut(slot) {
            *e = Some(aabb);
        }
    }

    fn remove(&mut self, slot: usize) {
        if let Some(e) = self.entries.get_mut(slot) {
            *e = None;
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn query_ray<'a>(&'a self, ray: &Ray) -> Box<dyn Iterator<Item = usize> + 'a> {
        let ray = *ray;
        Box::new(self.entries.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref()
                .is_some_and(|a| a.ray_interval(&ray).is_some())
                .then_some(i)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn linear_scan_respects_removal() {
        let mut b = FlatVec::default();
        b.insert(0, Aabb3::from_center_size(Vec3::new(0.0, 0.0, -5.0), Vec3::ONE));
        b.insert(3, Aabb3::from_center_size(Vec3::new(0.0, 0.0, -9.0), Vec3::ONE));
        b.insert(1, Aabb3::from_center_size(Vec3::new(5.0, 0.0, -5.0), Vec3::ONE));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(b.query_ray(&ray).collect::<Vec<_>>(), vec![0, 3]);

        b.remove(0);
        assert_eq!(b.query_ray(&ray).collect::<Vec<_>>(), vec![3]);

        b.update(1, Aabb3::from_center_size(Vec3::new(0.0, 0.0, -2.0), Vec3::ONE));
        assert_eq!(b.query_ray(&ray).collect::<Vec<_>>(), vec![1, 3]);

        b.clear();
        assert_eq!(b.query_ray(&ray).count(), 0);
    }
}
