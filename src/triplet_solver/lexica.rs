//! The lexica: a dictionary from 3-cycles to words performing them.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use itertools::Itertools;

use super::{canonical, triplet_of, Triplet};
use crate::cube::{Generators, Slot, Subgroup, EDGE_SLOTS, VERTEX_SLOTS};
use crate::error::LexicaFileError;
use crate::moves::{keep_shortest, Word};

/// Both 3-cycles on every three points of `slots`, in canonical form.
pub fn all_triplets(slots: RangeInclusive<Slot>) -> Vec<Triplet> {
    slots
        .tuple_combinations()
        .flat_map(|(a, b, c)| [[a, b, c], [a, c, b]])
        .collect()
}

/// The 3-cycles a lexica has no word for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UncoveredTriplets {
    /// Missing 3-cycles of corner slots.
    pub vertex: Vec<Triplet>,
    /// Missing 3-cycles of edge slots.
    pub edge: Vec<Triplet>,
}

impl UncoveredTriplets {
    /// The total number missing.
    pub fn len(&self) -> usize {
        self.vertex.len() + self.edge.len()
    }

    /// Whether nothing is missing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A word for each known 3-cycle, keyed by the canonical form of the cycle.
///
/// Every stored word performs exactly its 3-cycle on the whole cube, which is checked whenever a
/// word is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexica {
    gens: Generators,
    words: BTreeMap<Triplet, Word>,
}

impl Default for Lexica {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexica {
    /// An empty lexica.
    pub fn new() -> Self {
        Lexica {
            gens: Generators::new(Subgroup::Whole),
            words: BTreeMap::new(),
        }
    }

    /// The word for a 3-cycle, given in any rotation.
    pub fn get(&self, triplet: Triplet) -> Option<&Word> {
        self.words.get(&canonical(triplet))
    }

    /// Whether there is a word for a 3-cycle.
    pub fn contains(&self, triplet: Triplet) -> bool {
        self.get(triplet).is_some()
    }

    /// Add a word, keyed by the 3-cycle it performs. A word only replaces an existing one if it
    /// is strictly shorter.
    ///
    /// Returns the 3-cycle, or `None` (leaving the lexica unchanged) if the word does not perform a
    /// single 3-cycle.
    pub fn insert(&mut self, word: Word) -> Option<Triplet> {
        let triplet = triplet_of(&self.gens.word(&word))?;
        keep_shortest(&mut self.words, triplet, word);
        Some(triplet)
    }

    // Callers guarantee `word` performs `triplet`, which is canonical.
    pub(crate) fn offer(&mut self, triplet: Triplet, word: Word) -> bool {
        let kept = keep_shortest(&mut self.words, triplet, word);
        debug_assert!(!kept || triplet_of(&self.gens.word(&self.words[&triplet])) == Some(triplet));
        kept
    }

    /// The number of 3-cycles with a word.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Triplet, &Word)> {
        self.words.iter()
    }

    /// The corner and edge 3-cycles with no word. Face turns never mix corners and edges, so
    /// these are the only 3-cycles a solve can ask for.
    pub fn uncovered_triplets(&self) -> UncoveredTriplets {
        let missing = |slots: RangeInclusive<Slot>| -> Vec<Triplet> {
            all_triplets(slots)
                .into_iter()
                .filter(|t| !self.words.contains_key(t))
                .collect()
        };
        UncoveredTriplets {
            vertex: missing(VERTEX_SLOTS),
            edge: missing(EDGE_SLOTS),
        }
    }

    /// Read a lexica file: one word per line, blank lines skipped. Each word is replayed to find
    /// its 3-cycle.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, LexicaFileError> {
        let mut lexica = Lexica::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let word: Word = text.parse()?;
            if lexica.insert(word).is_none() {
                return Err(LexicaFileError::NotATriplet {
                    line: i + 1,
                    word: text.to_string(),
                });
            }
        }

        if lexica.is_empty() {
            return Err(LexicaFileError::Empty);
        }
        Ok(lexica)
    }

    /// Write one word per line, in key order.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for word in self.words.values() {
            writeln!(w, "{word}")?;
        }
        Ok(())
    }

    /// Read a lexica file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexicaFileError> {
        Self::read(BufReader::new(File::open(path)?))
    }

    /// Write a lexica file to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        fs::write(path, buf)
    }
}
