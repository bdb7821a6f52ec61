//! This module contains the constraint propagation machinery of the crate.
//! It maintains arc consistency over the standard Sudoku constraints: once a
//! cell is fixed to a digit, that digit cannot appear in any other cell of
//! the same row, column, or block, so it is removed from their candidate
//! sets. Removals that reduce a peer to a single candidate are fed back into
//! the worklist, which lets long chains of forced cells resolve in one call.
//!
//! Propagation has two outcomes. Either the board reaches a fixed point at
//! which no constraint can eliminate anything further, or some cell runs out
//! of candidates entirely, which proves the board unsolvable and is reported
//! as a [Contradiction]. A board on which a contradiction was found is in an
//! unspecified intermediate state and must be discarded; the
//! [solver](crate::solver) does this naturally by working on clones.
//!
//! ```
//! use sudoku_inference::Board;
//! use sudoku_inference::inference;
//!
//! // Two 5s in the top row cannot be reconciled.
//! let mut board = Board::parse(&format!("55{}", ".".repeat(79))).unwrap();
//!
//! assert!(inference::initial_sweep(&mut board).is_err());
//! ```

use crate::{BLOCK_SIZE, Board, GRID_SIZE};
use crate::error::{Contradiction, InferenceResult};

fn eliminate(board: &mut Board, column: usize, row: usize, digit: usize,
        frontier: &mut Vec<(usize, usize)>) -> InferenceResult<()> {
    let mut candidates = board.candidates(column, row);

    if candidates.remove(digit) {
        if candidates.is_empty() {
            return Err(Contradiction);
        }

        board.set_candidates(column, row, candidates);

        if candidates.len() == 1 {
            frontier.push((column, row));
        }
    }

    Ok(())
}

fn eliminate_from_peers(board: &mut Board, column: usize, row: usize,
        digit: usize, frontier: &mut Vec<(usize, usize)>)
        -> InferenceResult<()> {
    for other_column in 0..GRID_SIZE {
        if other_column != column {
            eliminate(board, other_column, row, digit, frontier)?;
        }
    }

    for other_row in 0..GRID_SIZE {
        if other_row != row {
            eliminate(board, column, other_row, digit, frontier)?;
        }
    }

    let start_column = column / BLOCK_SIZE * BLOCK_SIZE;
    let start_row = row / BLOCK_SIZE * BLOCK_SIZE;

    for other_row in start_row..(start_row + BLOCK_SIZE) {
        for other_column in start_column..(start_column + BLOCK_SIZE) {
            if (other_column, other_row) != (column, row) {
                eliminate(board, other_column, other_row, digit, frontier)?;
            }
        }
    }

    Ok(())
}

/// Propagates the consequences of the fixed cells listed in `frontier`
/// through the board until a fixed point is reached. For each frontier cell,
/// its digit is removed from the candidate sets of all other cells in the
/// same row, column, and block. Whenever such a removal leaves a peer with
/// exactly one candidate, that peer has become fixed as well and is appended
/// to the frontier, so its consequences are propagated in turn. Frontier
/// entries that refer to open cells are skipped.
///
/// Candidate sets only ever shrink here. In particular, the digits of cells
/// that were already fixed are never touched, so clues always survive
/// propagation.
///
/// ```
/// use sudoku_inference::Board;
/// use sudoku_inference::inference;
/// use sudoku_inference::util::DigitSet;
///
/// let mut board = Board::parse(&".".repeat(81)).unwrap();
/// board.set_candidates(4, 2, DigitSet::singleton(5));
/// inference::propagate(&mut board, vec![(4, 2)]).unwrap();
///
/// assert!(!board.candidates(8, 2).contains(5));
/// assert!(!board.candidates(4, 7).contains(5));
/// assert!(!board.candidates(3, 0).contains(5));
/// assert!(board.candidates(0, 8).contains(5));
/// ```
///
/// # Arguments
///
/// * `board`: The board on which to propagate. If an error is returned, it
/// is left in an unspecified intermediate state and must be discarded.
/// * `frontier`: The cells, given as `(column, row)` pairs, whose fixed
/// digits have not had their consequences drawn yet.
///
/// # Errors
///
/// If some cell runs out of candidates, which proves that the board cannot
/// be completed into a solution.
pub fn propagate(board: &mut Board, mut frontier: Vec<(usize, usize)>)
        -> InferenceResult<()> {
    while let Some((column, row)) = frontier.pop() {
        let digit = match board.digit(column, row) {
            Some(digit) => digit,
            None => continue
        };

        eliminate_from_peers(board, column, row, digit, &mut frontier)?;
    }

    Ok(())
}

/// Propagates the consequences of all cells that are already fixed, which
/// for a freshly parsed board are exactly the clues. This establishes the
/// arc consistency that [propagate] later maintains incrementally, and it is
/// the point at which contradictory clues surface.
///
/// ```
/// use sudoku_inference::Board;
/// use sudoku_inference::inference;
///
/// // The open cell at the end of the row is forced to hold the 9.
/// let mut board =
///     Board::parse(&format!("12345678.{}", ".".repeat(72))).unwrap();
/// inference::initial_sweep(&mut board).unwrap();
///
/// assert_eq!(Some(9), board.digit(8, 0));
/// ```
///
/// # Errors
///
/// If some cell runs out of candidates, which proves that the board cannot
/// be completed into a solution. The board is then in an unspecified
/// intermediate state and must be discarded.
pub fn initial_sweep(board: &mut Board) -> InferenceResult<()> {
    let mut frontier = Vec::new();

    for row in 0..GRID_SIZE {
        for column in 0..GRID_SIZE {
            if board.digit(column, row).is_some() {
                frontier.push((column, row));
            }
        }
    }

    propagate(board, frontier)
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;
    use crate::util::DigitSet;

    const EXAMPLE_PUZZLE: &str =
        "53..7....\
         6..195...\
         .98....6.\
         8...6...3\
         4..8.3..1\
         7...2...6\
         .6....28.\
         ...419..5\
         ....8..79";

    fn swept(line: &str) -> Board {
        let mut board = Board::parse(line).unwrap();
        initial_sweep(&mut board).unwrap();
        board
    }

    #[test]
    fn sweep_keeps_clues() {
        let board = swept(EXAMPLE_PUZZLE);

        assert_eq!(Some(5), board.digit(0, 0));
        assert_eq!(Some(3), board.digit(1, 0));
        assert_eq!(Some(7), board.digit(4, 0));
        assert_eq!(Some(9), board.digit(8, 8));
    }

    #[test]
    fn sweep_eliminates_clashing_candidates() {
        let board = swept(EXAMPLE_PUZZLE);
        let candidates = board.candidates(2, 0);

        // Row clues 5, 3, and 7, the 8 in the column below, and the 6, 9,
        // and 8 elsewhere in the block are all excluded. The 4 belongs to
        // the unique solution, so it must survive.
        assert!(candidates.contains(4));
        assert!(!candidates.contains(3));
        assert!(!candidates.contains(5));
        assert!(!candidates.contains(6));
        assert!(!candidates.contains(7));
        assert!(!candidates.contains(8));
        assert!(!candidates.contains(9));
    }

    #[test]
    fn sweep_is_idempotent() {
        let mut board = Board::parse(EXAMPLE_PUZZLE).unwrap();
        initial_sweep(&mut board).unwrap();
        let once = board.clone();
        initial_sweep(&mut board).unwrap();

        assert_eq!(once, board);
    }

    #[test]
    fn sweep_reaches_fixed_point() {
        let board = swept(EXAMPLE_PUZZLE);

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                let digit = match board.digit(column, row) {
                    Some(digit) => digit,
                    None => continue
                };

                for other_column in 0..GRID_SIZE {
                    assert!(other_column == column ||
                        !board.candidates(other_column, row).contains(digit));
                }

                for other_row in 0..GRID_SIZE {
                    assert!(other_row == row ||
                        !board.candidates(column, other_row).contains(digit));
                }

                let start_column = column / BLOCK_SIZE * BLOCK_SIZE;
                let start_row = row / BLOCK_SIZE * BLOCK_SIZE;

                for other_row in start_row..(start_row + BLOCK_SIZE) {
                    for other_column in start_column..(start_column + BLOCK_SIZE) {
                        assert!((other_column, other_row) == (column, row) ||
                            !board.candidates(other_column, other_row)
                                .contains(digit));
                    }
                }
            }
        }
    }

    #[test]
    fn sweep_completes_forced_chain() {
        let line = format!("12345678.{}", ".".repeat(72));
        let board = swept(&line);

        assert_eq!(Some(9), board.digit(8, 0));

        // The forced 9 is propagated in turn.
        assert!(!board.candidates(8, 4).contains(9));
        assert!(!board.candidates(6, 2).contains(9));
    }

    #[test]
    fn sweep_detects_row_contradiction() {
        let mut board =
            Board::parse(&format!("55{}", ".".repeat(79))).unwrap();

        assert_eq!(Err(Contradiction), initial_sweep(&mut board));
    }

    #[test]
    fn sweep_detects_column_contradiction() {
        let line = format!("5{}5{}", ".".repeat(8), ".".repeat(71));
        let mut board = Board::parse(&line).unwrap();

        assert_eq!(Err(Contradiction), initial_sweep(&mut board));
    }

    #[test]
    fn sweep_detects_block_contradiction() {
        let line = format!("5{}.5{}", ".".repeat(9), ".".repeat(69));
        let mut board = Board::parse(&line).unwrap();

        assert_eq!(Err(Contradiction), initial_sweep(&mut board));
    }

    #[test]
    fn sweep_of_empty_board_changes_nothing() {
        let board = swept(&".".repeat(81));

        assert_eq!(Board::parse(&".".repeat(81)).unwrap(), board);
    }

    #[test]
    fn propagation_is_contained_to_peers() {
        let mut board = Board::parse(&".".repeat(81)).unwrap();
        board.set_candidates(0, 0, DigitSet::singleton(7));
        propagate(&mut board, vec![(0, 0)]).unwrap();

        assert!(!board.candidates(5, 0).contains(7));
        assert!(!board.candidates(0, 5).contains(7));
        assert!(!board.candidates(1, 1).contains(7));
        assert_eq!(DigitSet::ALL, board.candidates(4, 4));
        assert_eq!(DigitSet::ALL, board.candidates(8, 8));
    }

    #[test]
    fn propagation_detects_emptied_domain() {
        let mut board = Board::parse(&".".repeat(81)).unwrap();
        board.set_candidates(3, 3, digits!(6));
        board.set_candidates(3, 4, digits!(6));

        assert_eq!(Err(Contradiction),
            propagate(&mut board, vec![(3, 3), (3, 4)]));
    }

    #[test]
    fn propagation_skips_open_frontier_cells() {
        let mut board = Board::parse(&".".repeat(81)).unwrap();
        propagate(&mut board, vec![(4, 4)]).unwrap();

        assert_eq!(Board::parse(&".".repeat(81)).unwrap(), board);
    }
}
