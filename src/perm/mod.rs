//! Finite permutations of labelled points.
//!
//! A [`Permutation`] only stores the points it moves, so the same value can be read as a
//! permutation of any set containing its support. Composition is read left to right:
//! `p.compose(&q)` is the permutation which first applies `p` and then applies `q`, matching the
//! order in which a word of moves is read. Every other operation here (powers, transpositions,
//! applying cycles, conjugation) is built on that one convention.

mod dense;

pub use dense::DensePermutation;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use itertools::Itertools;

use crate::error::InvalidPermutationError;

/// A bijection on a finite set of points, storing only the points which are not fixed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation<T> {
    map: BTreeMap<T, T>,
}

impl<T> Default for Permutation<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Permutation<T> {
    /// The permutation fixing every point.
    pub fn identity() -> Self {
        Permutation {
            map: BTreeMap::new(),
        }
    }

    /// The number of points moved by this permutation.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether this permutation moves no points at all.
    pub fn is_identity(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(point, image)` pairs of the moved points, in point order.
    pub fn mapping(&self) -> impl Iterator<Item = (&T, &T)> {
        self.map.iter()
    }

    /// Iterate over the moved points in order.
    pub fn support(&self) -> impl Iterator<Item = &T> {
        self.map.keys()
    }

    // Callers guarantee `map` is a bijection without fixed points.
    pub(crate) fn from_map_unchecked(map: BTreeMap<T, T>) -> Self {
        Permutation { map }
    }
}

impl<T: Ord + Clone + fmt::Debug> Permutation<T> {
    /// Build a permutation from `(point, image)` pairs. Pairs mapping a point to itself are
    /// allowed and dropped.
    ///
    /// Fails if a point is given twice, if two points share an image, or if some image is not
    /// itself one of the given points.
    pub fn new(pairs: impl IntoIterator<Item = (T, T)>) -> Result<Self, InvalidPermutationError> {
        let mut map = BTreeMap::new();
        let mut images = BTreeSet::new();

        for (point, image) in pairs {
            if map.contains_key(&point) {
                return Err(InvalidPermutationError::DuplicatePoint(format!("{point:?}")));
            }
            if !images.insert(image.clone()) {
                return Err(InvalidPermutationError::DuplicateImage(format!("{image:?}")));
            }
            map.insert(point, image);
        }

        if let Some(stray) = images.iter().find(|image| !map.contains_key(*image)) {
            return Err(InvalidPermutationError::ImageNotInDomain(format!("{stray:?}")));
        }

        map.retain(|point, image| point != image);
        Ok(Permutation { map })
    }

    /// The cyclic permutation sending each element of `cycle` to the next one, and the last back
    /// to the first. Cycles of length 0 or 1 give the identity.
    pub fn from_cycle(cycle: &[T]) -> Result<Self, InvalidPermutationError> {
        Self::new(
            cycle
                .iter()
                .cloned()
                .zip(cycle.iter().cycle().skip(1).cloned()),
        )
    }

    /// The product of the given cycles, composed left to right.
    pub fn from_cycles<C: AsRef<[T]>>(
        cycles: impl IntoIterator<Item = C>,
    ) -> Result<Self, InvalidPermutationError> {
        Self::identity().apply_cycles(cycles)
    }

    /// Compose this permutation with the given cycle (the cycle acts second).
    pub fn apply_cycle(&self, cycle: &[T]) -> Result<Self, InvalidPermutationError> {
        Ok(self.compose(&Self::from_cycle(cycle)?))
    }

    /// Compose this permutation with each of the given cycles in turn.
    pub fn apply_cycles<C: AsRef<[T]>>(
        &self,
        cycles: impl IntoIterator<Item = C>,
    ) -> Result<Self, InvalidPermutationError> {
        cycles
            .into_iter()
            .try_fold(self.clone(), |p, cycle| p.apply_cycle(cycle.as_ref()))
    }
}

impl<T: Ord + Clone> Permutation<T> {
    /// The image of a point. Points outside the support are fixed.
    pub fn apply(&self, point: &T) -> T {
        self.map.get(point).unwrap_or(point).clone()
    }

    /// The permutation applying `self` first, then `other`.
    pub fn compose(&self, other: &Self) -> Self {
        let mut map = BTreeMap::new();
        for point in self.map.keys().chain(other.map.keys()) {
            let image = other.apply(&self.apply(point));
            if image != *point {
                map.insert(point.clone(), image);
            }
        }
        Permutation { map }
    }

    /// The inverse permutation, so that `p.compose(&p.inverse())` is the identity.
    pub fn inverse(&self) -> Self {
        Permutation {
            map: self
                .map
                .iter()
                .map(|(point, image)| (image.clone(), point.clone()))
                .collect(),
        }
    }

    /// Conjugate by `by`, giving `by⁻¹ · self · by` (so `by⁻¹` acts first).
    ///
    /// If `self` sends `a` to `b`, the result sends `by(a)` to `by(b)`.
    pub fn conjugate(&self, by: &Self) -> Self {
        by.inverse().compose(self).compose(by)
    }

    /// Raise this permutation to the integer power `k`, using binary exponentiation. Negative
    /// powers are powers of the inverse.
    pub fn power(&self, k: i64) -> Self {
        let mut base = if k < 0 { self.inverse() } else { self.clone() };
        let mut k = k.unsigned_abs();
        let mut acc = Self::identity();

        while k > 0 {
            if k & 1 == 1 {
                acc = acc.compose(&base);
            }
            k >>= 1;
            if k > 0 {
                base = base.compose(&base);
            }
        }

        acc
    }

    /// Split the support into disjoint cycles. Each cycle `[a, b, c]` means `a -> b -> c -> a`.
    ///
    /// Only the set of cycles up to rotation is meaningful; the choice of starting point and the
    /// order of the cycles may change.
    pub fn cycles(&self) -> Vec<Vec<T>> {
        let mut seen = BTreeSet::new();
        let mut cycles = Vec::new();

        for start in self.map.keys() {
            if seen.contains(start) {
                continue;
            }

            seen.insert(start.clone());
            let mut cycle = vec![start.clone()];
            let mut next = self.apply(start);
            while next != *start {
                seen.insert(next.clone());
                let after = self.apply(&next);
                cycle.push(next);
                next = after;
            }

            cycles.push(cycle);
        }

        cycles
    }

    /// Write the permutation as a list of transpositions whose composition, in order, gives the
    /// permutation back. A cycle `(h x1 x2 ...)` contributes `(h, x1), (h, x2), ...`.
    pub fn swaps(&self) -> Vec<(T, T)> {
        self.cycles()
            .into_iter()
            .flat_map(|cycle| {
                let head = cycle[0].clone();
                cycle
                    .into_iter()
                    .skip(1)
                    .map(move |x| (head.clone(), x))
            })
            .collect()
    }

    /// The order of this permutation: the least common multiple of its cycle lengths.
    pub fn degree(&self) -> u64 {
        self.cycles()
            .iter()
            .map(|cycle| cycle.len() as u64)
            .fold(1, lcm)
    }

    /// Whether this permutation is a product of an even number of transpositions.
    pub fn is_even(&self) -> bool {
        (self.len() - self.cycles().len()) % 2 == 0
    }
}

impl<T: Ord + Clone + fmt::Display> fmt::Display for Permutation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("( )");
        }

        let cycles = self.cycles();
        write!(
            f,
            "{}",
            cycles
                .iter()
                .map(|cycle| format!("({})", cycle.iter().join(" ")))
                .join(" ")
        )
    }
}

pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

pub(crate) fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
