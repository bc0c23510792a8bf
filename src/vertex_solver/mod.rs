//! A solver for the corners alone.
//!
//! Any permutation of the corner slots is written as a list of transpositions, and the
//! transpositions are taken off two at a time using a table of words for double swaps. An odd
//! permutation first has one face turn split off so the rest is even.

mod double_swap;

pub use double_swap::{
    all_double_swaps, double_swap, DoubleSwap, DoubleSwapConfig, DoubleSwapReport,
    DoubleSwapTable,
};

use log::{debug, warn};

use crate::cube::{Color, CubeState, Generators, Slot, Subgroup, Swap, VERTEX_SLOTS};
use crate::error::{UnknownMoveError, VertexSolveError};
use crate::moves::Word;
use crate::perm::Permutation;

/// The face turn split off odd permutations.
pub const PARITY_GENERATOR: Color = Color::O;

/// Turns permutations of the corner slots into words.
#[derive(Debug, Clone)]
pub struct VertexSolver {
    gens: Generators,
    table: DoubleSwapTable,
}

impl Default for VertexSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSolver {
    /// Build a solver with the default double swap table.
    pub fn new() -> Self {
        Self::with_config(&DoubleSwapConfig::default())
    }

    /// Build a solver, generating its table with the given settings.
    pub fn with_config(config: &DoubleSwapConfig) -> Self {
        let gens = Generators::new(Subgroup::Vertex);
        let (table, report) = DoubleSwapTable::generate(&gens, config);
        if !report.is_complete() {
            warn!(
                "double swap table is missing {} entries, some permutations will not solve",
                report.uncovered.len()
            );
        }
        VertexSolver { gens, table }
    }

    /// Build a solver around an existing table.
    pub fn from_table(table: DoubleSwapTable) -> Self {
        VertexSolver {
            gens: Generators::new(Subgroup::Vertex),
            table,
        }
    }

    /// The double swap table in use.
    pub fn table(&self) -> &DoubleSwapTable {
        &self.table
    }

    /// The permutation of the corner slots performed by a word.
    pub fn word_to_permutation(&self, word: &Word) -> Permutation<Slot> {
        self.gens.word(word)
    }

    /// Like [`word_to_permutation`](Self::word_to_permutation), reading the word first.
    pub fn parse_word(&self, word: &str) -> Result<Permutation<Slot>, UnknownMoveError> {
        Ok(self.word_to_permutation(&word.parse()?))
    }

    /// A word `W` such that `left`, then `right`, then `W` does nothing.
    ///
    /// Disjoint transpositions are looked up directly. Otherwise both are paired with the
    /// transposition of the two smallest corner slots neither of them touches, and the word is
    /// `right` with that pivot followed by `left` with it.
    pub fn word_eliminating_pair(&self, left: Swap, right: Swap) -> Result<Word, VertexSolveError> {
        let used = [left.0, left.1, right.0, right.1];
        if let Some(&slot) = used.iter().find(|&&s| !VERTEX_SLOTS.contains(&s)) {
            return Err(VertexSolveError::NotACorner(slot));
        }

        if let Some(word) = self.table.get(left, right) {
            return Ok(word.clone());
        }

        let mut free = VERTEX_SLOTS.filter(|s| !used.contains(s));
        let pivot = match (free.next(), free.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => unreachable!("four slots leave at least four corners free"),
        };
        let lookup = |left: Swap, right: Swap| {
            self.table
                .get(left, right)
                .ok_or(VertexSolveError::MissingDoubleSwap { left, right })
        };
        Ok(lookup(right, pivot)?.clone().then(lookup(left, pivot)?))
    }

    /// A word performing `p` on the corner slots.
    ///
    /// Fails if `p` moves a slot which is not a corner, or if the table is missing an entry the
    /// decomposition needs.
    pub fn permutation_to_word(&self, p: &Permutation<Slot>) -> Result<Word, VertexSolveError> {
        if let Some(&slot) = p.support().find(|&&s| !VERTEX_SLOTS.contains(&s)) {
            return Err(VertexSolveError::NotACorner(slot));
        }

        let mut prefix = Word::new();
        let mut rest = p.clone();
        if !p.is_even() {
            prefix = Word::from(PARITY_GENERATOR);
            rest = self.gens.get(PARITY_GENERATOR).inverse().compose(p);
        }

        let mut swaps = rest.swaps();
        let mut body = Word::new();
        while let &[.., left, right] = &swaps[..] {
            swaps.truncate(swaps.len() - 2);
            // `left` then `right` is undone by the eliminating word of `right` then `left`, which
            // is that same product.
            body = self
                .word_eliminating_pair(right, left)?
                .then(&body)
                .simplify();
        }
        debug_assert!(swaps.is_empty());

        let word = prefix.then(&body).simplify();
        debug!("corner permutation {p} solved in {} turns", word.len());
        Ok(word)
    }

    /// A word reproducing the corner positions of a cube, starting from solved.
    pub fn solve(&self, state: &CubeState) -> Result<Word, VertexSolveError> {
        self.permutation_to_word(&state.permutation(Subgroup::Vertex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::tests::any_permutation;

    use std::sync::OnceLock;

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn solver() -> &'static VertexSolver {
        static SOLVER: OnceLock<VertexSolver> = OnceLock::new();
        SOLVER.get_or_init(VertexSolver::new)
    }

    fn swap_perm((a, b): Swap) -> Permutation<Slot> {
        Permutation::from_cycle(&[a, b]).unwrap()
    }

    #[test]
    fn eliminating_pairs() {
        let pairs = [
            ((1, 3), (2, 4)),
            ((2, 3), (2, 4)),
            ((1, 2), (2, 4)),
            ((1, 2), (4, 2)),
            ((1, 4), (1, 4)),
            ((2, 4), (2, 3)),
            ((2, 6), (2, 5)),
        ];

        for (left, right) in pairs {
            let word = solver().word_eliminating_pair(left, right).unwrap();
            let total = swap_perm(left)
                .compose(&swap_perm(right))
                .compose(&solver().word_to_permutation(&word));
            assert!(total.is_identity(), "{left:?} {right:?} gave {word}");
        }

        assert_eq!(
            solver().word_eliminating_pair((1, 9), (2, 3)),
            Err(VertexSolveError::NotACorner(9))
        );
    }

    #[test]
    fn permutations_from_cycles() {
        let cases: [&[&[Slot]]; 6] = [
            &[&[1, 2], &[1, 3], &[2, 3], &[3, 4]],
            &[&[1, 2], &[1, 3], &[2, 3]],
            &[&[1, 2], &[3, 4]],
            &[&[2, 6, 5, 4, 3]],
            &[&[2, 6, 5, 4, 3], &[1, 8]],
            &[],
        ];

        for cycles in cases {
            let p = Permutation::identity()
                .apply_cycles(cycles.iter().copied())
                .unwrap();
            let word = solver().permutation_to_word(&p).unwrap();
            assert_eq!(solver().word_to_permutation(&word), p, "{p} gave {word}");
        }

        assert!(solver()
            .permutation_to_word(&Permutation::identity())
            .unwrap()
            .is_empty());
        assert_eq!(
            solver().permutation_to_word(&Permutation::from_cycle(&[1, 12]).unwrap()),
            Err(VertexSolveError::NotACorner(12))
        );
    }

    #[test]
    fn odd_permutations() {
        let parity = solver().word_to_permutation(&Word::from(PARITY_GENERATOR));
        assert!(!parity.is_even());

        for p in [
            Permutation::from_cycle(&[1, 2]).unwrap(),
            Permutation::from_cycle(&[5, 8, 3, 1]).unwrap(),
            Permutation::from_cycles([vec![1, 2, 3], vec![4, 5]]).unwrap(),
        ] {
            let word = solver().permutation_to_word(&p).unwrap();
            assert_eq!(solver().word_to_permutation(&word), p);
        }
    }

    #[test]
    fn parse_word() {
        assert_eq!(
            solver().parse_word("oo").unwrap(),
            Permutation::from_cycles([[1, 3], [2, 4]]).unwrap()
        );
        assert!(solver().parse_word("OQ").is_err());
    }

    #[test]
    fn starved_table() {
        let solver = VertexSolver::with_config(&DoubleSwapConfig { rounds: 0 });
        assert_eq!(solver.table().len(), 6);
        let p = Permutation::from_cycles([[1, 2], [3, 5]]).unwrap();
        assert!(matches!(
            solver.permutation_to_word(&p),
            Err(VertexSolveError::MissingDoubleSwap { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solves_every_corner_permutation(p in any_permutation(8)) {
            let word = solver().permutation_to_word(&p).unwrap();
            prop_assert_eq!(solver().word_to_permutation(&word), p);
        }

        #[test]
        fn solves_scrambled_corners(mvs in vec(any::<Color>(), 0..30).prop_map(Word)) {
            let mut cube = CubeState::solved();
            cube.apply_word(&mvs);
            let word = solver().solve(&cube).unwrap();

            let mut replay = CubeState::solved();
            replay.apply_word(&word);
            prop_assert_eq!(
                replay.permutation(Subgroup::Vertex),
                cube.permutation(Subgroup::Vertex)
            );
        }
    }
}
