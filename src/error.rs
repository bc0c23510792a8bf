//! This module defines the error types used throughout the crate.

use std::io;

use thiserror::Error;

use crate::cube::{Slot, Swap};
use crate::triplet_solver::Triplet;

/// Error for building a permutation out of a mapping that is not a bijection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPermutationError {
    /// The same point was given two images.
    #[error("point {0} is mapped more than once")]
    DuplicatePoint(String),
    /// Two points were mapped to the same image.
    #[error("point {0} is the image of more than one point")]
    DuplicateImage(String),
    /// A point was mapped outside of the set of mapped points.
    #[error("image {0} is not itself mapped anywhere")]
    ImageNotInDomain(String),
}

/// A word contained a letter which is not one of the six face colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move `{symbol}` in word `{word}`")]
pub struct UnknownMoveError {
    /// The offending character.
    pub symbol: char,
    /// The whole word that was being read.
    pub word: String,
}

/// The lexica has no word for a 3-cycle that a solve needed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("triplet {triplet:?} is not in the lexica")]
pub struct MissingTripletError {
    /// The canonical form of the missing 3-cycle.
    pub triplet: Triplet,
}

/// A list of transpositions of odd length cannot be split into 3-cycles.
///
/// Face turns always act evenly on the corners and the edges once the parity fix is applied, so
/// this only shows up for states that no sequence of face turns reaches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot split {swaps} transpositions into 3-cycles")]
pub struct ParityError {
    /// Length of the offending transposition list.
    pub swaps: usize,
}

/// What exactly was wrong with a line of a state file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum StateFileProblem {
    #[error("expected `x y z colors`, found {0} fields")]
    FieldCount(usize),
    #[error("`{0}` is not a coordinate in -1, 0, 1")]
    BadCoordinate(String),
    #[error("unknown color letter `{0}`")]
    UnknownColor(char),
    #[error("position {0:?} is not a tracked slot")]
    UntrackedPosition([i8; 3]),
    #[error("colors `{0}` do not name a tracked slot")]
    UntrackedOccupant(String),
    #[error("position {0:?} is given twice")]
    RepeatedPosition([i8; 3]),
    #[error("slot {0} is occupied twice")]
    RepeatedOccupant(Slot),
    #[error("position {position:?} cannot hold the piece `{colors}`")]
    RankMismatch { position: [i8; 3], colors: String },
}

/// A state file could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed state file at line {line}: {problem}")]
pub struct MalformedStateFileError {
    /// The 1-based line number, or 0 when the problem concerns the whole file.
    pub line: usize,
    /// The problem found.
    pub problem: StateFileProblem,
}

/// Error for loading a state file from disk.
#[derive(Debug, Error)]
pub enum StateFileError {
    /// Reading the file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The file contents were malformed.
    #[error(transparent)]
    Malformed(#[from] MalformedStateFileError),
}

/// Error for loading a lexica file.
#[derive(Debug, Error)]
pub enum LexicaFileError {
    /// Reading the file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A line was not a valid word.
    #[error(transparent)]
    UnknownMove(#[from] UnknownMoveError),
    /// A word did not produce a single 3-cycle.
    #[error("line {line}: word `{word}` is not a 3-cycle")]
    NotATriplet {
        /// The 1-based line number.
        line: usize,
        /// The word on that line.
        word: String,
    },
    /// The file contained no words at all.
    #[error("lexica file has no words")]
    Empty,
}

/// Error for writing a permutation of the corners as a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VertexSolveError {
    /// The permutation moves a slot which is not a corner.
    #[error("slot {0} is not a corner slot")]
    NotACorner(Slot),
    /// The double swap table has no word for a pair of transpositions.
    #[error("double swap table has no word for {left:?} and {right:?}")]
    MissingDoubleSwap {
        /// The transposition done first.
        left: Swap,
        /// The transposition done second.
        right: Swap,
    },
}

/// Error for solving a cube state into a word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The lexica is missing a 3-cycle.
    #[error(transparent)]
    MissingTriplet(#[from] MissingTripletError),
    /// The state is not reachable by face turns.
    #[error("state is not reachable by face turns: {0}")]
    Parity(#[from] ParityError),
}
