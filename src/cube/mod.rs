//! The geometric model of the cube: 20 tracked positions, the six face turns acting on them,
//! and the permutations those turns induce.
//!
//! Face centres never move, so only the 8 corners (the vertex slots, numbered 1 to 8) and 12
//! edges (slots 9 to 20) are tracked. Every [`Permutation`](crate::perm::Permutation) in the crate
//! is written over these slot numbers.

mod axis;
mod color;
mod generators;
mod state;
mod state_file;
mod vector;

pub use axis::Axis;
pub use color::Color;
pub use generators::Generators;
pub use state::{permutation_of, rotate, Coloring, CubeState};
pub use vector::Vector;

use std::ops::RangeInclusive;

/// A 1-based index into [`SLOTS`].
pub type Slot = u8;

/// A transposition of two slots.
pub type Swap = (Slot, Slot);

/// The number of tracked positions.
pub const SLOT_COUNT: usize = 20;

/// Slots holding corner pieces.
pub const VERTEX_SLOTS: RangeInclusive<Slot> = 1..=8;

/// Slots holding edge pieces.
pub const EDGE_SLOTS: RangeInclusive<Slot> = 9..=20;

/// The position of each slot; slot `n` is at index `n - 1`.
pub const SLOTS: [Vector; SLOT_COUNT] = [
    // corners of the O face
    Vector::new(1, 1, 1),
    Vector::new(1, -1, 1),
    Vector::new(-1, -1, 1),
    Vector::new(-1, 1, 1),
    // corners of the R face
    Vector::new(1, 1, -1),
    Vector::new(1, -1, -1),
    Vector::new(-1, -1, -1),
    Vector::new(-1, 1, -1),
    // edges of the O face
    Vector::new(1, 0, 1),
    Vector::new(0, -1, 1),
    Vector::new(-1, 0, 1),
    Vector::new(0, 1, 1),
    // middle layer edges
    Vector::new(1, 1, 0),
    Vector::new(1, -1, 0),
    Vector::new(-1, -1, 0),
    Vector::new(-1, 1, 0),
    // edges of the R face
    Vector::new(1, 0, -1),
    Vector::new(0, -1, -1),
    Vector::new(-1, 0, -1),
    Vector::new(0, 1, -1),
];

/// The slot at a given position, if the position is tracked.
pub fn slot_of(position: Vector) -> Option<Slot> {
    SLOTS
        .iter()
        .position(|&p| p == position)
        .map(|i| i as Slot + 1)
}

/// The position of a slot, if the slot exists.
pub fn slot_position(slot: Slot) -> Option<Vector> {
    (slot as usize).checked_sub(1).and_then(|i| SLOTS.get(i)).copied()
}

/// Which tracked positions a permutation is read over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subgroup {
    /// All 20 slots.
    #[default]
    Whole,
    /// Only the 8 corner slots.
    Vertex,
}

impl Subgroup {
    /// Whether a position belongs to this subgroup.
    pub fn contains(self, position: Vector) -> bool {
        match self {
            Subgroup::Whole => true,
            Subgroup::Vertex => position.rank() == 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_layout() {
        for (i, &position) in SLOTS.iter().enumerate() {
            let slot = i as Slot + 1;
            assert_eq!(slot_of(position), Some(slot));
            assert_eq!(slot_position(slot), Some(position));
            assert_eq!(VERTEX_SLOTS.contains(&slot), position.rank() == 3);
            assert_eq!(EDGE_SLOTS.contains(&slot), position.rank() == 2);
        }
        assert_eq!(slot_position(0), None);
        assert_eq!(slot_position(21), None);
        assert_eq!(slot_of(Vector::new(0, 0, 1)), None);
        assert_eq!(slot_of(Vector::new(0, -1, 1)), Some(10));
    }
}
