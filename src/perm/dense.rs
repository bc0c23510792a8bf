//! A fixed size array representation of permutations, for the brute force searches where the
//! sparse representation spends most of its time allocating.

use std::collections::BTreeMap;

use super::{lcm, Permutation};

/// A permutation of the points `0..N`, stored as the array of images.
///
/// Points are 1-based everywhere else in the crate, so index 0 is always fixed and acts as a
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DensePermutation<const N: usize>([u8; N]);

impl<const N: usize> Default for DensePermutation<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> DensePermutation<N> {
    /// The identity permutation.
    pub fn identity() -> Self {
        DensePermutation(std::array::from_fn(|i| i as u8))
    }

    /// Convert a sparse permutation. Returns `None` if it moves a point outside of `0..N`.
    pub fn from_sparse(p: &Permutation<u8>) -> Option<Self> {
        let mut images = Self::identity().0;
        for (&point, &image) in p.mapping() {
            if point as usize >= N || image as usize >= N {
                return None;
            }
            images[point as usize] = image;
        }
        Some(DensePermutation(images))
    }

    /// The cycle sending each point to the next. Returns `None` if a point is repeated or out of
    /// range.
    pub fn from_cycle(cycle: &[u8]) -> Option<Self> {
        let mut images = Self::identity().0;
        let mut seen = [false; N];
        for (i, &point) in cycle.iter().enumerate() {
            let slot = seen.get_mut(point as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
            images[point as usize] = cycle[(i + 1) % cycle.len()];
        }
        Some(DensePermutation(images))
    }

    /// Convert to the sparse representation.
    pub fn to_sparse(&self) -> Permutation<u8> {
        let map: BTreeMap<u8, u8> = self
            .0
            .iter()
            .enumerate()
            .filter(|&(point, &image)| point != image as usize)
            .map(|(point, &image)| (point as u8, image))
            .collect();
        Permutation::from_map_unchecked(map)
    }

    /// The image of a point.
    pub fn apply(&self, point: u8) -> u8 {
        self.0[point as usize]
    }

    /// The permutation applying `self` first, then `other`.
    pub fn compose(&self, other: &Self) -> Self {
        DensePermutation(std::array::from_fn(|i| other.0[self.0[i] as usize]))
    }

    /// The number of moved points.
    pub fn support_len(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .filter(|&(point, &image)| point != image as usize)
            .count()
    }

    /// The order of the permutation.
    pub fn degree(&self) -> u64 {
        let mut seen = [false; N];
        let mut degree = 1;

        for start in 0..N {
            if seen[start] {
                continue;
            }
            let mut len = 0;
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                i = self.0[i] as usize;
                len += 1;
            }
            degree = lcm(degree, len);
        }

        degree
    }
}
