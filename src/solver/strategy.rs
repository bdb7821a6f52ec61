//! This module contains the variable selection heuristics that steer the
//! [BacktrackingSolver](crate::solver::BacktrackingSolver).
//!
//! A heuristic only decides *which* open cell the search branches on next; it
//! never decides which digit to try, nor does it alter the board. Candidate
//! digits are always explored in ascending order, so two correct heuristics
//! can differ in how many branches they visit, but on a board with a unique
//! solution they arrive at the same answer.
//!
//! Two heuristics are provided: [FirstAvailable] is the simplest possible
//! choice, while [MinimumRemainingValues] branches on a most constrained
//! cell, which tends to shrink the search tree considerably on hard boards.

use crate::{Board, GRID_SIZE};

/// A trait for heuristics which choose the open cell that the
/// [BacktrackingSolver](crate::solver::BacktrackingSolver) branches on next.
///
/// Implementations must be deterministic, i.e. always return the same cell
/// for equal boards, and must never return a fixed cell. They do not need to
/// handle boards containing a cell without candidates, since the solver
/// discards such boards before consulting the heuristic.
pub trait VariableSelector {

    /// Selects the open cell on which the search branches next, in the form
    /// `(column, row)`. If every cell of the given board is fixed, there is
    /// nothing left to branch on and `None` is returned, which the solver
    /// takes as proof that the board is solved.
    fn select_variable(&self, board: &Board) -> Option<(usize, usize)>;
}

/// A [VariableSelector] which selects the first open cell in reading order,
/// that is, scanning each row left to right, top row first. It invests no
/// effort in choosing a good branching point, which makes individual steps
/// cheap, but tends to produce deeper searches than
/// [MinimumRemainingValues].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FirstAvailable;

impl VariableSelector for FirstAvailable {
    fn select_variable(&self, board: &Board) -> Option<(usize, usize)> {
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if board.candidates(column, row).len() > 1 {
                    return Some((column, row));
                }
            }
        }

        None
    }
}

/// A [VariableSelector] which selects an open cell with the fewest remaining
/// candidates, commonly known as the minimum remaining values rule. Ties are
/// broken towards the first such cell in reading order, which keeps the
/// heuristic deterministic.
///
/// Branching on a most constrained cell keeps the branching factor low and
/// surfaces contradictions early. A cell with two candidates, for example,
/// has at least a fifty percent chance that the first digit tried is the
/// right one, whereas a cell with eight candidates almost always sends the
/// search down several dead ends first.
///
/// ```
/// use sudoku_inference::Board;
/// use sudoku_inference::digits;
/// use sudoku_inference::solver::strategy::{
///     MinimumRemainingValues,
///     VariableSelector
/// };
///
/// let mut board = Board::parse(&".".repeat(81)).unwrap();
/// board.set_candidates(3, 5, digits!(2, 9));
///
/// assert_eq!(Some((3, 5)), MinimumRemainingValues.select_variable(&board));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MinimumRemainingValues;

impl VariableSelector for MinimumRemainingValues {
    fn select_variable(&self, board: &Board) -> Option<(usize, usize)> {
        let mut min_candidates_cell = None;
        let mut min_candidates = GRID_SIZE + 1;

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                let candidates = board.candidates(column, row).len();

                if candidates > 1 && candidates < min_candidates {
                    min_candidates_cell = Some((column, row));
                    min_candidates = candidates;
                }
            }
        }

        min_candidates_cell
    }
}
