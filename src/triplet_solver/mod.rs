//! A solver for the whole cube, built from words for 3-cycles.
//!
//! The permutation of a cube is split into corner and edge transpositions, the transpositions are
//! paired up into 3-cycles, and the word for each 3-cycle is looked up in a [`Lexica`]. Pairing
//! needs an even number of transpositions on each half. A single face turn is odd on both halves
//! at once, so an odd cube is first made even with one extra turn, which is undone at the end.

mod decompose;
mod lexica;
mod search;

pub use decompose::{permutation_triplets, separate_swaps, swaps_to_triplets};
pub use lexica::{all_triplets, Lexica, UncoveredTriplets};
pub use search::{
    total_words_volume, words_of_length, words_with_exactly, LexicaConfig, LexicaReport,
};

use std::fmt;

use log::{debug, warn};

use crate::cube::{Color, CubeState, Generators, Slot, Subgroup};
use crate::error::{MissingTripletError, SolveError};
use crate::moves::Word;
use crate::perm::Permutation;

/// A 3-cycle `a -> b -> c -> a` of slots.
pub type Triplet = [Slot; 3];

/// The turn used to fix the parity of odd cubes.
pub const PARITY_TURN: Color = Color::O;

/// The letters appended to a solution of an odd cube: the inverse of [`PARITY_TURN`].
pub const PARITY_FIX: [Color; 3] = [PARITY_TURN; 3];

/// The rotation of a triplet starting at its smallest point. All three rotations are the same
/// permutation.
pub fn canonical(triplet: Triplet) -> Triplet {
    let [a, b, c] = triplet;
    [[a, b, c], [b, c, a], [c, a, b]]
        .into_iter()
        .min()
        .unwrap_or(triplet)
}

/// The canonical triplet of `p`, if `p` is a single 3-cycle.
pub fn triplet_of(p: &Permutation<Slot>) -> Option<Triplet> {
    match p.cycles().as_slice() {
        [cycle] if cycle.len() == 3 => Some(canonical([cycle[0], cycle[1], cycle[2]])),
        _ => None,
    }
}

/// A word reproducing a cube state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The whole word, ending with the parity correction if there is one.
    pub word: Word,
    /// The letters appended to undo the parity turn, if the cube was odd.
    pub parity_correction: Option<Word>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Turns cube states into words using a [`Lexica`].
#[derive(Debug, Clone)]
pub struct TripletSolver {
    gens: Generators,
    lexica: Lexica,
}

impl Default for TripletSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TripletSolver {
    /// Build a solver, generating a lexica with the default settings.
    pub fn new() -> Self {
        Self::with_config(&LexicaConfig::default())
    }

    /// Build a solver, generating its lexica with the given settings.
    pub fn with_config(config: &LexicaConfig) -> Self {
        let gens = Generators::new(Subgroup::Whole);
        let (lexica, report) = Lexica::generate(&gens, config);
        if !report.uncovered.is_empty() {
            warn!(
                "lexica is missing {} triplets, some states will not solve",
                report.uncovered.len()
            );
        }
        TripletSolver { gens, lexica }
    }

    /// Build a solver around an existing lexica.
    pub fn with_lexica(lexica: Lexica) -> Self {
        TripletSolver {
            gens: Generators::new(Subgroup::Whole),
            lexica,
        }
    }

    /// The lexica in use.
    pub fn lexica(&self) -> &Lexica {
        &self.lexica
    }

    /// A word reproducing a cube state, starting from solved.
    pub fn solve(&self, state: &CubeState) -> Result<Solution, SolveError> {
        self.solve_permutation(&state.permutation(Subgroup::Whole))
    }

    /// A word performing `p`.
    ///
    /// Fails with [`SolveError::Parity`] if the corners and edges have different parities, which
    /// no sequence of face turns produces, and with [`SolveError::MissingTriplet`] if the lexica
    /// lacks a 3-cycle the decomposition needs.
    pub fn solve_permutation(&self, p: &Permutation<Slot>) -> Result<Solution, SolveError> {
        let (vertex, _) = separate_swaps(p);
        let (target, parity_correction) = if vertex.len() % 2 == 1 {
            let fix = Word(PARITY_FIX.to_vec());
            (p.compose(self.gens.get(PARITY_TURN)), Some(fix))
        } else {
            (p.clone(), None)
        };

        let triplets = permutation_triplets(&target)?;
        let mut word = Word::new();
        for triplet in &triplets {
            let part = self.lexica.get(*triplet).ok_or(MissingTripletError {
                triplet: canonical(*triplet),
            })?;
            word = word.then(part);
        }
        let mut word = word.simplify();
        if let Some(fix) = &parity_correction {
            word = word.then(fix);
        }

        debug!(
            "solved {} triplets in {} turns{}",
            triplets.len(),
            word.len(),
            if parity_correction.is_some() { ", with parity fix" } else { "" }
        );
        Ok(Solution {
            word,
            parity_correction,
        })
    }
}
