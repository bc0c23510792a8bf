//! The state of the cube as a coloring of positions, and the face turns acting on it.

use std::collections::{BTreeMap, BTreeSet};

use super::{slot_of, Color, Slot, Subgroup, Vector, SLOTS, SLOT_COUNT};
use crate::error::UnknownMoveError;
use crate::moves::Word;
use crate::perm::Permutation;

/// Which piece sits at each tracked position. A piece is named by the position it occupies in
/// the solved cube, so the solved coloring maps every position to itself.
///
/// A coloring is always a bijection of the tracked positions which keeps corners in corner
/// positions and edges in edge positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coloring {
    occupants: [Vector; SLOT_COUNT],
}

impl Default for Coloring {
    fn default() -> Self {
        Coloring { occupants: SLOTS }
    }
}

impl Coloring {
    // Callers guarantee `occupants` is a rearrangement of `SLOTS` which keeps every rank.
    pub(crate) fn from_occupants(occupants: [Vector; SLOT_COUNT]) -> Self {
        Coloring { occupants }
    }

    /// The piece at a tracked position, or `None` if the position is not tracked.
    pub fn get(&self, position: Vector) -> Option<Vector> {
        slot_of(position).map(|slot| self.occupant(slot))
    }

    /// The piece in the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not in `1..=20`.
    pub fn occupant(&self, slot: Slot) -> Vector {
        self.occupants[slot as usize - 1]
    }

    /// Iterate over `(position, piece)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        SLOTS.iter().copied().zip(self.occupants.iter().copied())
    }
}

/// Where a face turn sends a position. Positions off the face are left where they are; positions
/// on it turn a quarter turn clockwise, viewed from outside the face.
pub fn rotate(position: Vector, color: Color) -> Vector {
    if position.dot(color.direction()) != 1 {
        return position;
    }
    position.quarter_turn(color.axis())
}

/// The permutation described by a coloring: each piece's home slot maps to the slot it now sits
/// in. Reading permutations this way makes the permutation of a word the composition of its
/// letters' permutations, in order.
pub fn permutation_of(coloring: &Coloring, subgroup: Subgroup) -> Permutation<Slot> {
    let map: BTreeMap<Slot, Slot> = coloring
        .iter()
        .filter(|&(position, piece)| position != piece && subgroup.contains(position))
        .filter_map(|(position, piece)| Some((slot_of(piece)?, slot_of(position)?)))
        .collect();

    // A coloring never moves a piece to a position of another rank, so the restriction to a
    // subgroup is still a bijection.
    debug_assert!(
        map.keys().collect::<BTreeSet<_>>() == map.values().collect::<BTreeSet<_>>(),
        "restriction of a coloring is not a bijection: {map:?}"
    );
    Permutation::from_map_unchecked(map)
}

/// A cube, as a coloring of its tracked positions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    coloring: Coloring,
}

impl CubeState {
    /// The solved cube.
    pub fn solved() -> Self {
        Self::default()
    }

    /// A cube with the given coloring.
    pub fn from_coloring(coloring: Coloring) -> Self {
        CubeState { coloring }
    }

    /// The cube whose [`permutation`](Self::permutation) is `p`. Returns `None` if `p` moves a
    /// point that is not a slot, or sends a corner slot to an edge slot.
    pub fn from_permutation(p: &Permutation<Slot>) -> Option<Self> {
        let mut occupants = SLOTS;
        for (&home, &now) in p.mapping() {
            let piece = super::slot_position(home)?;
            if piece.rank() != super::slot_position(now)?.rank() {
                return None;
            }
            occupants[now as usize - 1] = piece;
        }
        Some(CubeState::from_coloring(Coloring::from_occupants(occupants)))
    }

    /// The current coloring.
    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Whether every piece is in its home position.
    pub fn is_solved(&self) -> bool {
        self.coloring == Coloring::default()
    }

    /// Turn one face a quarter turn clockwise.
    pub fn act(&mut self, color: Color) -> &mut Self {
        let mut occupants = SLOTS;
        for (position, piece) in self.coloring.iter() {
            let slot = slot_of(rotate(position, color)).expect("face turns permute tracked slots");
            occupants[slot as usize - 1] = piece;
        }
        self.coloring = Coloring::from_occupants(occupants);
        self
    }

    /// Perform each turn of a word, left to right.
    pub fn apply_word(&mut self, word: &Word) -> &mut Self {
        word.iter().fold(self, |cube, c| cube.act(c))
    }

    /// Parse a word (ignoring case) and perform it. Nothing is turned if the word does not parse.
    pub fn apply(&mut self, word: &str) -> Result<&mut Self, UnknownMoveError> {
        let word: Word = word.parse()?;
        Ok(self.apply_word(&word))
    }

    /// The permutation taking every piece from its home slot to its current slot, restricted to
    /// the given subgroup.
    pub fn permutation(&self, subgroup: Subgroup) -> Permutation<Slot> {
        permutation_of(&self.coloring, subgroup)
    }
}
