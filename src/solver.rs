//! This module contains the logic for solving Sudoku boards.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation,
//! which interleaves a depth-first search with the constraint propagation
//! from the [inference](crate::inference) module. The [strategy] submodule
//! provides the heuristics that decide where the search branches.

pub mod strategy;

use crate::{BLOCK_SIZE, Board, GRID_SIZE};
use crate::inference;
use crate::solver::strategy::VariableSelector;
use crate::util::DigitSet;

/// An enumeration of the possible outcomes of solving a board. Note that the
/// search stops at the first complete grid it finds. For a puzzle with more
/// than one solution, which grid that is depends on the heuristic, while for
/// a proper puzzle with a unique solution, every heuristic arrives at the
/// same grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the board is not solvable at all, either because its
    /// clues contradict each other outright or because the search exhausted
    /// all candidates without completing the grid.
    Unsolvable,

    /// Indicates that a solution was found, which is wrapped in this
    /// instance. The wrapped board is fully fixed and satisfies the Sudoku
    /// rules.
    Solved(Board)
}

/// A trait for structs which have the ability to solve Sudoku boards. An
/// implementation must find a solution whenever one exists. If several
/// exist, it is free to return any one of them.
pub trait Solver {

    /// Solves the provided board. The board itself is not modified; the
    /// solution, if one was found, is wrapped in the returned [Solution].
    fn solve(&self, board: &Board) -> Solution;
}

/// Checks whether fixing the given cell to `digit` would clash with a fixed
/// cell in the same row, column, or block. Cheaper than cloning the board
/// and propagating, so the search uses it to discard hopeless digits early.
fn conflicts(board: &Board, column: usize, row: usize, digit: usize) -> bool {
    for other_column in 0..GRID_SIZE {
        if other_column != column &&
                board.digit(other_column, row) == Some(digit) {
            return true;
        }
    }

    for other_row in 0..GRID_SIZE {
        if other_row != row && board.digit(column, other_row) == Some(digit) {
            return true;
        }
    }

    let start_column = column / BLOCK_SIZE * BLOCK_SIZE;
    let start_row = row / BLOCK_SIZE * BLOCK_SIZE;

    for other_row in start_row..(start_row + BLOCK_SIZE) {
        for other_column in start_column..(start_column + BLOCK_SIZE) {
            if (other_column, other_row) != (column, row) &&
                    board.digit(other_column, other_row) == Some(digit) {
                return true;
            }
        }
    }

    false
}

/// A [Solver] which performs a depth-first search over the open cells of a
/// board, interleaved with constraint propagation. In each step, a cell to
/// branch on is chosen by the [VariableSelector] given at construction.
/// Every candidate digit of that cell is tried in ascending order: the digit
/// is entered into a clone of the board, its consequences are propagated
/// with [inference::propagate], and the search recurses into the result.
/// Branches whose propagation uncovers a contradiction are abandoned
/// immediately, which prunes the bulk of the search tree. The first complete
/// grid found is returned.
///
/// Each branch works on its own clone, so backtracking is simply returning
/// from the recursion; no undo log is needed.
pub struct BacktrackingSolver<S: VariableSelector> {
    strategy: S
}

impl<S: VariableSelector> BacktrackingSolver<S> {

    /// Creates a new backtracking solver that branches on the cells chosen
    /// by the given `strategy`.
    pub fn new(strategy: S) -> BacktrackingSolver<S> {
        BacktrackingSolver { strategy }
    }

    /// Searches for a solution of a board that is already arc consistent,
    /// which is the state that [inference::initial_sweep] establishes.
    /// [Solver::solve] performs that sweep itself and should be preferred;
    /// this method is useful when the caller has already swept the board and
    /// wants to avoid repeating the work. On a board that is not arc
    /// consistent, the search explores needless branches.
    pub fn search(&self, board: &Board) -> Solution {
        let (column, row) = match self.strategy.select_variable(board) {
            Some(cell) => cell,
            None => return Solution::Solved(board.clone())
        };

        for digit in board.candidates(column, row).iter() {
            if conflicts(board, column, row, digit) {
                continue;
            }

            let mut next = board.clone();
            next.set_candidates(column, row, DigitSet::singleton(digit));

            if inference::propagate(&mut next, vec![(column, row)]).is_err() {
                continue;
            }

            if let Solution::Solved(grid) = self.search(&next) {
                return Solution::Solved(grid);
            }
        }

        Solution::Unsolvable
    }
}

impl<S: VariableSelector> Solver for BacktrackingSolver<S> {
    fn solve(&self, board: &Board) -> Solution {
        let mut root = board.clone();

        if inference::initial_sweep(&mut root).is_err() {
            return Solution::Unsolvable;
        }

        self.search(&root)
    }
}

impl<S: VariableSelector + Clone> Clone for BacktrackingSolver<S> {
    fn clone(&self) -> Self {
        BacktrackingSolver::new(self.strategy.clone())
    }
}
