//! Words of face turns, and their simplification.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::cube::Color;
use crate::error::UnknownMoveError;

/// The order of every face turn: four equal letters in a row cancel out.
pub const TURN_ORDER: usize = 4;

/// A sequence of quarter turns, read left to right. Each letter names the color at the centre of
/// the face being turned clockwise.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(pub Vec<Color>);

impl Word {
    /// The empty word.
    pub fn new() -> Self {
        Word(Vec::new())
    }

    /// The number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the word has no letters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the letters in order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    /// This word followed by `other`.
    pub fn then(mut self, other: &Word) -> Word {
        self.0.extend_from_slice(&other.0);
        self
    }

    /// This word repeated `n` times.
    pub fn repeat(&self, n: usize) -> Word {
        Word(self.0.repeat(n))
    }

    /// Invert a word: reverse it and replace each letter with three copies of itself.
    ///
    /// If `X` is a word then performing `X` then `X.inverse()` gives back the starting state.
    pub fn inverse(&self) -> Word {
        Word(
            self.0
                .iter()
                .rev()
                .flat_map(|&c| [c; TURN_ORDER - 1])
                .collect(),
        )
    }

    /// Delete every run of four identical letters, including runs that only appear once an inner
    /// run is deleted. The result acts on the cube exactly like the original word.
    pub fn simplify(self) -> Word {
        let mut reduced: Vec<Color> = Vec::with_capacity(self.0.len());

        for c in self.0 {
            reduced.push(c);
            // The reduced prefix never contains a run of four, so only the tail can form one.
            let n = reduced.len();
            if n >= TURN_ORDER && reduced[n - TURN_ORDER..].iter().all(|&d| d == c) {
                reduced.truncate(n - TURN_ORDER);
            }
        }

        Word(reduced)
    }
}

impl From<Color> for Word {
    fn from(c: Color) -> Self {
        Word(vec![c])
    }
}

impl FromIterator<Color> for Word {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl FromStr for Word {
    type Err = UnknownMoveError;

    /// Parse a word, ignoring case. Fails on the first letter which is not a face color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|symbol| {
                Color::from_letter(symbol).ok_or_else(|| UnknownMoveError {
                    symbol,
                    word: s.to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c.letter()))
    }
}

// Words get long, and the derived debug output would list every letter as a separate variant.
impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}

/// Store `word` under `key` unless a word at most as long is already there. Returns whether the
/// table changed.
pub(crate) fn keep_shortest<K: Ord>(table: &mut BTreeMap<K, Word>, key: K, word: Word) -> bool {
    match table.entry(key) {
        Entry::Vacant(e) => {
            e.insert(word);
            true
        }
        Entry::Occupied(mut e) if word.len() < e.get().len() => {
            e.insert(word);
            true
        }
        Entry::Occupied(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(word("rRb"), Word(vec![Color::R, Color::R, Color::B]));
        assert_eq!(word("oBYgwR").to_string(), "OBYGWR");
        assert_eq!(word(""), Word::new());
    }

    #[test]
    fn parse_rejects_unknown_letters() {
        assert_eq!(
            "RXB".parse::<Word>(),
            Err(UnknownMoveError {
                symbol: 'X',
                word: "RXB".to_string(),
            })
        );
        let err = "OO Y".parse::<Word>().unwrap_err();
        assert_eq!(err.to_string(), "unknown move ` ` in word `OO Y`");
    }

    #[test]
    fn simplify_runs() {
        assert_eq!(word("RRRRR").simplify(), word("R"));
        assert_eq!(word("OOBBBBOO").simplify(), Word::new());
        assert_eq!(word("OBBBBBOOO").simplify(), word("B"));
        assert_eq!(word("RRRBR").simplify(), word("RRRBR"));
    }

    #[test]
    fn inverse_and_concat() {
        assert_eq!(word("OB").inverse(), word("BBBOOO"));
        assert_eq!(word("OB").then(&word("Y")), word("OBY"));
        assert_eq!(word("GR").repeat(2), word("GRGR"));
        assert_eq!(word("OB").then(&word("OB").inverse()).simplify(), Word::new());
        assert_eq!(format!("{:?}", word("WG")), "Word(WG)");
    }

    #[test]
    fn shortest_wins_ties_keep_first() {
        let mut table = BTreeMap::new();
        assert!(keep_shortest(&mut table, 1, word("OBY")));
        assert!(!keep_shortest(&mut table, 1, word("GWR")));
        assert!(!keep_shortest(&mut table, 1, word("GWRO")));
        assert!(keep_shortest(&mut table, 1, word("R")));
        assert_eq!(table[&1], word("R"));
    }

    proptest! {
        #[test]
        fn simplify_idempotent(w in vec(any::<Color>(), 0..40).prop_map(Word)) {
            let simplified = w.clone().simplify();
            prop_assert!(simplified.len() <= w.len());
            prop_assert_eq!(simplified.clone().simplify(), simplified.clone());
            prop_assert_eq!((w.len() - simplified.len()) % TURN_ORDER, 0);
        }

        #[test]
        fn display_parse_roundtrip(w in vec(any::<Color>(), 0..40).prop_map(Word)) {
            prop_assert_eq!(w.to_string().to_lowercase().parse::<Word>().unwrap(), w);
        }
    }
}
