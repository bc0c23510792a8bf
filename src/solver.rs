//! One entry point holding both solvers.

use crate::cube::CubeState;
use crate::error::{SolveError, VertexSolveError};
use crate::moves::Word;
use crate::triplet_solver::{Lexica, Solution, TripletSolver};
use crate::vertex_solver::{DoubleSwapTable, VertexSolver};

/// Solves cube states, building both lookup tables up front.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    vertex: VertexSolver,
    triplet: TripletSolver,
}

impl Solver {
    /// Build both tables with their default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use tables built elsewhere, for example a lexica loaded from disk.
    pub fn from_parts(table: DoubleSwapTable, lexica: Lexica) -> Self {
        Solver {
            vertex: VertexSolver::from_table(table),
            triplet: TripletSolver::with_lexica(lexica),
        }
    }

    /// A word reproducing the whole cube.
    pub fn solve(&self, state: &CubeState) -> Result<Solution, SolveError> {
        self.triplet.solve(state)
    }

    /// A word reproducing the corners only. Fails if the double swap table is incomplete.
    pub fn solve_vertices(&self, state: &CubeState) -> Result<Word, VertexSolveError> {
        self.vertex.solve(state)
    }

    /// The corner solver.
    pub fn vertex_solver(&self) -> &VertexSolver {
        &self.vertex
    }

    /// The whole cube solver.
    pub fn triplet_solver(&self) -> &TripletSolver {
        &self.triplet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{Generators, Subgroup};
    use crate::triplet_solver::tests::default_lexica;
    use crate::vertex_solver::DoubleSwapConfig;

    #[test]
    fn both_solvers_agree_with_the_cube() {
        let gens = Generators::new(Subgroup::Vertex);
        let (table, _) = DoubleSwapTable::generate(&gens, &DoubleSwapConfig::default());
        let solver = Solver::from_parts(table, default_lexica().0.clone());

        let mut cube = CubeState::solved();
        cube.apply("RBGWOYYRBRWO").unwrap();

        let whole = solver.solve(&cube).unwrap();
        let mut replay = CubeState::solved();
        replay.apply_word(&whole.word);
        assert_eq!(replay, cube);

        let corners = solver.solve_vertices(&cube).unwrap();
        let mut replay = CubeState::solved();
        replay.apply_word(&corners);
        assert_eq!(
            replay.permutation(Subgroup::Vertex),
            cube.permutation(Subgroup::Vertex)
        );

        assert_eq!(solver.vertex_solver().table().len(), 210);
        assert_eq!(solver.triplet_solver().lexica().len(), 552);
    }
}
