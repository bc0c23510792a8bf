//! A library which models the Rubik's cube as a permutation group, and turns permutations of
//! the cube back into words of face turns.
//!
//! Only the 8 corners and 12 edges are tracked, as slots `1..=20`. Face turns are named by the
//! color of the face's centre: `O`, `B`, `Y`, `G`, `W` and `R`. Two solvers are provided:
//! [`vertex_solver`] for the corners alone, and [`triplet_solver`] for the whole cube.

#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod moves;
pub mod perm;
pub mod solver;
pub mod triplet_solver;
pub mod vertex_solver;

pub use cube::{Color, CubeState, Generators, Slot, Subgroup};
pub use moves::Word;
pub use perm::Permutation;
pub use solver::Solver;
