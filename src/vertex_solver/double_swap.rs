//! Words for every pair of disjoint corner transpositions, found by conjugating face turns.

use std::collections::BTreeMap;

use itertools::Itertools;
use log::{debug, info};

use crate::cube::{Generators, Slot, Subgroup, Swap, VERTEX_SLOTS};
use crate::moves::{keep_shortest, Word};
use crate::perm::Permutation;

/// An unordered pair of disjoint transpositions. Each transposition is stored with its smaller
/// point first, and the smaller transposition comes first.
pub type DoubleSwap = (Swap, Swap);

fn sorted((a, b): Swap) -> Swap {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The normal form of a pair of transpositions, or `None` if they share a point.
pub fn double_swap(x: Swap, y: Swap) -> Option<DoubleSwap> {
    let (x, y) = (sorted(x), sorted(y));
    if ![x.0, x.1, y.0, y.1].iter().all_unique() {
        return None;
    }
    Some(if x <= y { (x, y) } else { (y, x) })
}

/// Every double swap of the corner slots, in order. There are 210 of them.
pub fn all_double_swaps() -> Vec<DoubleSwap> {
    let swaps: Vec<Swap> = VERTEX_SLOTS.tuple_combinations().collect();
    swaps
        .into_iter()
        .tuple_combinations::<(Swap, Swap)>()
        .filter_map(|(x, y)| double_swap(x, y))
        .collect()
}

fn as_double_swap(p: &Permutation<Slot>) -> Option<DoubleSwap> {
    match p.cycles().as_slice() {
        [a, b] if a.len() == 2 && b.len() == 2 => double_swap((a[0], a[1]), (b[0], b[1])),
        _ => None,
    }
}

/// Transpositions of corner slots avoiding every point in `used`.
fn pivots(used: &[Slot]) -> impl Iterator<Item = Swap> + '_ {
    VERTEX_SLOTS
        .filter(move |s| !used.contains(s))
        .tuple_combinations::<Swap>()
}

/// Settings for [`DoubleSwapTable::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleSwapConfig {
    /// How many times to conjugate every known permutation by every other.
    pub rounds: usize,
}

impl Default for DoubleSwapConfig {
    fn default() -> Self {
        DoubleSwapConfig { rounds: 2 }
    }
}

/// What [`DoubleSwapTable::generate`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoubleSwapReport {
    /// Distinct permutations reached by the conjugation rounds.
    pub known_permutations: usize,
    /// Double swaps read straight off those permutations.
    pub from_conjugation: usize,
    /// Double swaps built by going through a third transposition.
    pub from_pivots: usize,
    /// Double swaps still without a word.
    pub uncovered: Vec<DoubleSwap>,
}

impl DoubleSwapReport {
    /// Whether every double swap got a word.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// A word for each double swap of the corner slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoubleSwapTable {
    words: BTreeMap<DoubleSwap, Word>,
}

impl DoubleSwapTable {
    /// Build the table from the corner generators.
    ///
    /// Starting from the face turns and their inverses, every known permutation `p` (with word
    /// `w`) conjugates every known `q` (with word `v`), giving `p⁻¹ q p` from `w⁻¹ v w` and
    /// `p q p⁻¹` from `w v w⁻¹`. Only the shortest word for each permutation is kept. Double swaps
    /// are then read off the permutations which are double swaps, and off the squares of those
    /// whose square is one (such as the 4-cycles of single face turns).
    ///
    /// Whatever is still missing is filled in through a pivot: `(x)(y)` is `(x)(π)` followed by
    /// `(y)(π)`, for any transposition `π` disjoint from both.
    pub fn generate(gens: &Generators, config: &DoubleSwapConfig) -> (Self, DoubleSwapReport) {
        debug_assert_eq!(gens.subgroup(), Subgroup::Vertex);

        let mut known = BTreeMap::new();
        for (c, g) in gens.iter() {
            keep_shortest(&mut known, g.clone(), Word::from(c));
            keep_shortest(&mut known, g.inverse(), Word::from(c).inverse());
        }

        for round in 1..=config.rounds {
            let snapshot: Vec<(Permutation<Slot>, Word)> = known
                .iter()
                .map(|(p, w)| (p.clone(), w.clone()))
                .collect();

            for ((p, w), (q, v)) in snapshot.iter().cartesian_product(&snapshot) {
                let p_inv = p.inverse();
                keep_shortest(
                    &mut known,
                    p_inv.compose(q).compose(p),
                    w.inverse().then(v).then(w).simplify(),
                );
                keep_shortest(
                    &mut known,
                    p.compose(q).compose(&p_inv),
                    w.clone().then(v).then(&w.inverse()).simplify(),
                );
            }
            debug!("conjugation round {round}: {} permutations known", known.len());
        }

        let mut words = BTreeMap::new();
        for (p, w) in &known {
            if let Some(sig) = as_double_swap(p) {
                keep_shortest(&mut words, sig, w.clone());
            }
            if let Some(sig) = as_double_swap(&p.compose(p)) {
                keep_shortest(&mut words, sig, w.repeat(2).simplify());
            }
        }

        let mut report = DoubleSwapReport {
            known_permutations: known.len(),
            from_conjugation: words.len(),
            ..Default::default()
        };

        let mut table = DoubleSwapTable { words };
        loop {
            let filled: Vec<(DoubleSwap, Word)> = all_double_swaps()
                .into_iter()
                .filter(|sig| !table.words.contains_key(sig))
                .filter_map(|sig| Some((sig, table.through_pivot(sig)?)))
                .collect();
            if filled.is_empty() {
                break;
            }
            report.from_pivots += filled.len();
            table.words.extend(filled);
        }

        report.uncovered = all_double_swaps()
            .into_iter()
            .filter(|sig| !table.words.contains_key(sig))
            .collect();

        info!(
            "double swap table: {} of 210 covered, {} through pivots, {} permutations searched",
            table.len(),
            report.from_pivots,
            report.known_permutations
        );

        (table, report)
    }

    /// The shortest word for `(x)(y)` made of two known entries sharing a pivot transposition.
    fn through_pivot(&self, (x, y): DoubleSwap) -> Option<Word> {
        let used = [x.0, x.1, y.0, y.1];
        pivots(&used)
            .filter_map(|pivot| {
                let first = self.words.get(&double_swap(x, pivot)?)?;
                let second = self.words.get(&double_swap(y, pivot)?)?;
                Some(first.clone().then(second).simplify())
            })
            .min_by_key(Word::len)
    }

    /// The word for the product of two disjoint transpositions, given in any order.
    pub fn get(&self, x: Swap, y: Swap) -> Option<&Word> {
        self.words.get(&double_swap(x, y)?)
    }

    /// The number of double swaps with a word.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&DoubleSwap, &Word)> {
        self.words.iter()
    }
}

impl FromIterator<(DoubleSwap, Word)> for DoubleSwapTable {
    fn from_iter<I: IntoIterator<Item = (DoubleSwap, Word)>>(iter: I) -> Self {
        let mut words = BTreeMap::new();
        for (sig, w) in iter {
            keep_shortest(&mut words, sig, w);
        }
        DoubleSwapTable { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_form() {
        assert_eq!(double_swap((4, 2), (3, 1)), Some(((1, 3), (2, 4))));
        assert_eq!(double_swap((1, 3), (2, 4)), Some(((1, 3), (2, 4))));
        assert_eq!(double_swap((1, 3), (3, 4)), None);
        assert_eq!(double_swap((1, 1), (2, 4)), None);
        assert_eq!(all_double_swaps().len(), 210);
        assert!(all_double_swaps().iter().all_unique());
    }

    #[test]
    fn default_table_is_complete() {
        let gens = Generators::new(Subgroup::Vertex);
        let (table, report) = DoubleSwapTable::generate(&gens, &DoubleSwapConfig::default());

        assert!(report.is_complete(), "uncovered: {:?}", report.uncovered);
        assert_eq!(table.len(), 210);
        assert_eq!(report.from_conjugation + report.from_pivots, 210);

        for (&((a, b), (c, d)), word) in table.iter() {
            let expected = Permutation::from_cycles([[a, b], [c, d]]).unwrap();
            assert_eq!(gens.word(word), expected, "word {word} for ({a} {b})({c} {d})");
            assert_eq!(word.clone().simplify(), *word);
        }
        assert_eq!(table.get((4, 2), (3, 1)), table.get((1, 3), (2, 4)));
    }

    #[test]
    fn no_rounds_only_squares_turns() {
        let gens = Generators::new(Subgroup::Vertex);
        let (table, report) = DoubleSwapTable::generate(&gens, &DoubleSwapConfig { rounds: 0 });

        // Each face turn squared is a double swap, and no two of them share a transposition.
        assert_eq!(table.len(), 6);
        assert_eq!(report.known_permutations, 12);
        assert_eq!(report.from_pivots, 0);
        assert_eq!(report.uncovered.len(), 204);
        assert_eq!(table.get((1, 3), (2, 4)), Some(&"OO".parse().unwrap()));
    }

    #[test]
    fn collecting_keeps_shortest() {
        let sig = ((1, 3), (2, 4));
        let table: DoubleSwapTable = [
            (sig, "OOOOOO".parse().unwrap()),
            (sig, "OO".parse().unwrap()),
            (sig, "RRRRRR".parse().unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.get((1, 3), (2, 4)).map(Word::to_string).as_deref(), Some("OO"));
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
