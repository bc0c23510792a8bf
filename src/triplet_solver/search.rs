//! Filling a lexica by brute force.
//!
//! Short words are enumerated and sorted into those whose order is a multiple of 7 and those whose
//! order is a multiple of 5. For `u` of the first kind and `v` of the second, the commutator-like
//! square `(u v)²` often moves only three pieces, since the cycles of other lengths cancel out.
//! Products of the 3-cycles found that way fill in the rest.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use super::{triplet_of, Lexica, Triplet, UncoveredTriplets};
use crate::cube::{Color, Generators, Subgroup, SLOT_COUNT};
use crate::moves::Word;
use crate::perm::DensePermutation;

type Dense = DensePermutation<{ SLOT_COUNT + 1 }>;

/// Settings for [`Lexica::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicaConfig {
    /// The longest word enumerated.
    pub max_word_len: usize,
    /// Words using fewer distinct letters than this are skipped.
    pub min_distinct_letters: usize,
    /// The most rounds of multiplying known 3-cycles together.
    pub closure_rounds: usize,
}

impl Default for LexicaConfig {
    fn default() -> Self {
        LexicaConfig {
            max_word_len: 5,
            min_distinct_letters: 2,
            closure_rounds: 8,
        }
    }
}

/// What [`Lexica::generate`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicaReport {
    /// Words enumerated.
    pub words_searched: usize,
    /// Distinct permutations among them.
    pub distinct_permutations: usize,
    /// Permutations whose order is a multiple of 7.
    pub sevens: usize,
    /// Permutations whose order is a multiple of 5.
    pub fives: usize,
    /// 3-cycles found by the pair search.
    pub search_hits: usize,
    /// Closure rounds run, including the last one that found nothing new.
    pub closure_rounds: usize,
    /// 3-cycles left without a word.
    pub uncovered: UncoveredTriplets,
}

/// Every word of length `n` using at least `min_distinct` different letters, in lexicographic
/// order of [`Color::ALL`].
pub fn words_of_length(n: usize, min_distinct: usize) -> impl Iterator<Item = Word> {
    std::iter::repeat(Color::ALL)
        .take(n)
        .multi_cartesian_product()
        .filter(move |letters| letters.iter().unique().count() >= min_distinct)
        .map(Word)
}

fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Maps from `n` letters onto `k` letters, by inclusion-exclusion.
fn surjections(n: u32, k: u64) -> u64 {
    let total: i64 = (0..=k)
        .map(|i| {
            let term = binomial(k, i) as i64 * ((k - i) as i64).pow(n);
            if i % 2 == 0 {
                term
            } else {
                -term
            }
        })
        .sum();
    total as u64
}

/// The number of words of length `n` using exactly `k` different letters.
pub fn words_with_exactly(n: usize, k: usize) -> u64 {
    let letters = Color::ALL.len() as u64;
    binomial(letters, k as u64) * surjections(n as u32, k as u64)
}

/// The number of words [`words_of_length`] produces, which is how many a search of that length
/// has to replay.
pub fn total_words_volume(n: usize, min_distinct: usize) -> u64 {
    (min_distinct..=Color::ALL.len())
        .map(|k| words_with_exactly(n, k))
        .sum()
}

/// A pair search result: the unsimplified word length, the position in the search, the word.
type Candidate = (usize, usize, Word);

fn keep_earliest(best: &mut BTreeMap<Triplet, Candidate>, triplet: Triplet, candidate: Candidate) {
    match best.entry(triplet) {
        Entry::Vacant(e) => {
            e.insert(candidate);
        }
        Entry::Occupied(mut e) => {
            if candidate < *e.get() {
                e.insert(candidate);
            }
        }
    }
}

fn merge(
    mut best: BTreeMap<Triplet, Candidate>,
    other: BTreeMap<Triplet, Candidate>,
) -> BTreeMap<Triplet, Candidate> {
    for (triplet, candidate) in other {
        keep_earliest(&mut best, triplet, candidate);
    }
    best
}

/// Try `(u v)²` and `(v u)²` for every `u` in `sevens` and `v` in `fives`. Each 3-cycle keeps the
/// candidate which is shortest, then earliest in the search, so the result does not depend on
/// how the work was split between threads.
fn pair_search(sevens: &[(Word, Dense)], fives: &[(Word, Dense)]) -> BTreeMap<Triplet, Candidate> {
    sevens
        .par_iter()
        .enumerate()
        .fold(BTreeMap::new, |mut best, (i, (w7, p7))| {
            for (j, (w5, p5)) in fives.iter().enumerate() {
                let orders = [(p7, p5, w7, w5), (p5, p7, w5, w7)];
                for (k, (p, q, u, v)) in orders.into_iter().enumerate() {
                    let pq = p.compose(q);
                    let square = pq.compose(&pq);
                    if square.support_len() != 3 {
                        continue;
                    }
                    let Some(triplet) = triplet_of(&square.to_sparse()) else {
                        continue;
                    };

                    let word = u.clone().then(v).then(u).then(v);
                    let position = (i * fives.len() + j) * 2 + k;
                    keep_earliest(&mut best, triplet, (word.len(), position, word.simplify()));
                }
            }
            best
        })
        .reduce(BTreeMap::new, merge)
}

impl Lexica {
    /// Search for a word for every 3-cycle of corners and of edges.
    ///
    /// The generators must act on the whole cube. The default settings find all 552.
    pub fn generate(gens: &Generators, config: &LexicaConfig) -> (Lexica, LexicaReport) {
        debug_assert_eq!(gens.subgroup(), Subgroup::Whole);

        let letters: Vec<Dense> = gens
            .iter()
            .map(|(_, g)| Dense::from_sparse(g).expect("generators only move slots"))
            .collect();
        let mut report = LexicaReport::default();

        let mut visited = HashSet::new();
        let mut sevens = Vec::new();
        let mut fives = Vec::new();
        for n in 1..=config.max_word_len {
            for word in words_of_length(n, config.min_distinct_letters) {
                report.words_searched += 1;
                let p = word
                    .iter()
                    .fold(Dense::identity(), |p, c| p.compose(&letters[c as usize]));
                if !visited.insert(p) {
                    continue;
                }

                let degree = p.degree();
                if degree % 7 == 0 {
                    sevens.push((word.clone(), p));
                }
                if degree % 5 == 0 {
                    fives.push((word, p));
                }
            }
        }
        report.distinct_permutations = visited.len();
        report.sevens = sevens.len();
        report.fives = fives.len();
        debug!(
            "searched {} words: {} permutations, {} of order 7k and {} of order 5k",
            report.words_searched, report.distinct_permutations, report.sevens, report.fives
        );

        let mut lexica = Lexica::new();
        for (triplet, (_, _, word)) in pair_search(&sevens, &fives) {
            lexica.offer(triplet, word);
        }
        report.search_hits = lexica.len();
        debug!("pair search found {} triplets", report.search_hits);

        for round in 1..=config.closure_rounds {
            let before = lexica.len();
            let known: Vec<(Word, Dense)> = lexica
                .iter()
                .filter_map(|(t, w)| Some((w.clone(), Dense::from_cycle(t)?)))
                .collect();

            for ((u, p), (v, q)) in known.iter().cartesian_product(&known) {
                let pq = p.compose(q);
                if pq.support_len() != 3 {
                    continue;
                }
                if let Some(triplet) = triplet_of(&pq.to_sparse()) {
                    lexica.offer(triplet, u.clone().then(v).simplify());
                }
            }

            report.closure_rounds = round;
            debug!("closure round {round}: {} triplets", lexica.len());
            if lexica.len() == before {
                break;
            }
        }

        report.uncovered = lexica.uncovered_triplets();
        info!(
            "lexica: {} triplets ({} from pair search), {} missing",
            lexica.len(),
            report.search_hits,
            report.uncovered.len()
        );

        (lexica, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_volumes() {
        let cases = [
            ((4, 0), 1296),
            ((5, 2), 7770),
            ((7, 4), 241920),
            ((7, 2), 279930),
            ((7, 3), 278040),
            ((6, 1), 46656),
            ((6, 8), 0),
        ];
        for ((n, k), expected) in cases {
            assert_eq!(total_words_volume(n, k), expected, "({n}, {k})");
        }
    }

    #[test]
    fn exact_letter_counts() {
        let cases = [
            (0, 0),
            (1, 6),
            (2, 1890),
            (3, 36120),
            (4, 126000),
            (5, 100800),
        ];
        for (k, expected) in cases {
            assert_eq!(words_with_exactly(7, k), expected, "(7, {k})");
        }
        assert_eq!(words_with_exactly(7, 7), 0);
        assert_eq!(
            (0..=6).map(|k| words_with_exactly(7, k)).sum::<u64>(),
            6u64.pow(7)
        );
    }

    #[test]
    fn enumeration_matches_volume() {
        for n in 1..=4 {
            for k in 0..=4 {
                let words = words_of_length(n, k).collect_vec();
                assert_eq!(words.len() as u64, total_words_volume(n, k), "({n}, {k})");
                assert!(words.iter().all(|w| w.len() == n));
                assert!(words.iter().all_unique());
            }
        }
        assert_eq!(
            words_of_length(2, 2).next().map(|w| w.to_string()).as_deref(),
            Some("OB")
        );
    }

    #[test]
    fn merging_is_order_independent() {
        let a = BTreeMap::from([([1, 2, 3], (4, 7, Word::new())), ([1, 3, 2], (8, 0, Word::new()))]);
        let b = BTreeMap::from([([1, 2, 3], (4, 3, Word::new())), ([1, 3, 2], (8, 1, Word::new()))]);
        assert_eq!(merge(a.clone(), b.clone()), merge(b, a));
    }

    #[test]
    fn short_search_is_sound() {
        let gens = Generators::default();
        let config = LexicaConfig {
            max_word_len: 3,
            closure_rounds: 1,
            ..Default::default()
        };
        let (lexica, report) = Lexica::generate(&gens, &config);

        assert_eq!(report.words_searched as u64, (1..=3).map(|n| total_words_volume(n, 2)).sum());
        assert!(report.closure_rounds <= 1);
        assert_eq!(lexica.len() + report.uncovered.len(), 552);
        for (&t, w) in lexica.iter() {
            assert_eq!(gens.word(w), crate::perm::Permutation::from_cycle(&t).unwrap());
        }
    }
}
