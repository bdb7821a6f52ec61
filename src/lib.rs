// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a Sudoku solving engine built around constraint
//! propagation. A [Board] stores the set of remaining candidate digits for
//! every cell, the [inference] module eliminates candidates that clash with
//! fixed cells in the same row, column, or block until a fixed point is
//! reached, and the [solver] module runs a backtracking search that fills in
//! whatever propagation alone cannot decide. It supports the following key
//! features:
//!
//! * Parsing and printing boards in the common 81-character line format
//! * Arc-consistency propagation over the row, column, and block constraints
//! * Solving boards by backtracking search interleaved with propagation
//! * Exchangeable variable selection heuristics that steer the search
//!
//! # Parsing and printing boards
//!
//! See [Board::parse] for the exact format of a puzzle line.
//!
//! Puzzle lines can be used to exchange boards, while pretty prints can be
//! used to display a board in a clearer manner. An example of how to parse
//! and display a board is provided below.
//!
//! ```
//! use sudoku_inference::Board;
//!
//! let board = Board::parse(
//!     "53..7....\
//!      6..195...\
//!      .98....6.\
//!      8...6...3\
//!      4..8.3..1\
//!      7...2...6\
//!      .6....28.\
//!      ...419..5\
//!      ....8..79").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Solving boards
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve Sudoku boards. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided. It
//! propagates the consequences of the given clues first and then searches,
//! re-running propagation after every trial assignment, which keeps the
//! search tree small. The order in which open cells are tried is decided by a
//! [VariableSelector](solver::strategy::VariableSelector) provided at
//! construction.
//!
//! ```
//! use sudoku_inference::Board;
//! use sudoku_inference::solver::{BacktrackingSolver, Solution, Solver};
//! use sudoku_inference::solver::strategy::MinimumRemainingValues;
//!
//! let puzzle = Board::parse(
//!     "53..7....\
//!      6..195...\
//!      .98....6.\
//!      8...6...3\
//!      4..8.3..1\
//!      7...2...6\
//!      .6....28.\
//!      ...419..5\
//!      ....8..79").unwrap();
//! let solver = BacktrackingSolver::new(MinimumRemainingValues);
//!
//! match solver.solve(&puzzle) {
//!     Solution::Solved(grid) => {
//!         assert!(grid.is_solved());
//!         assert!(grid.is_valid());
//!     },
//!     Solution::Unsolvable => panic!("this puzzle has a solution")
//! }
//! ```
//!
//! If the given clues contradict each other, or the search exhausts all
//! candidates without completing the grid, the solver returns
//! [Solution::Unsolvable](solver::Solution::Unsolvable).
//!
//! # Choosing a heuristic
//!
//! Two heuristics are provided:
//! [FirstAvailable](solver::strategy::FirstAvailable) branches on the first
//! open cell in reading order, while
//! [MinimumRemainingValues](solver::strategy::MinimumRemainingValues)
//! branches on an open cell with the fewest remaining candidates, which
//! usually shrinks the search tree considerably on hard puzzles. Both
//! explore candidate digits in ascending order, so on a puzzle with a unique
//! solution they are interchangeable.
//!
//! ```
//! use sudoku_inference::Board;
//! use sudoku_inference::solver::{BacktrackingSolver, Solver};
//! use sudoku_inference::solver::strategy::{
//!     FirstAvailable,
//!     MinimumRemainingValues
//! };
//!
//! let puzzle = Board::parse(
//!     "53..7....\
//!      6..195...\
//!      .98....6.\
//!      8...6...3\
//!      4..8.3..1\
//!      7...2...6\
//!      .6....28.\
//!      ...419..5\
//!      ....8..79").unwrap();
//! let first_available = BacktrackingSolver::new(FirstAvailable);
//! let minimum_remaining = BacktrackingSolver::new(MinimumRemainingValues);
//!
//! assert_eq!(first_available.solve(&puzzle),
//!     minimum_remaining.solve(&puzzle));
//! ```
//!
//! # Note regarding performance
//!
//! Solving a single board is fast even for hard puzzles, since propagation
//! prunes most of the search tree. When solving large batches, for example
//! in tests that solve many derived puzzles, it is still recommended to use
//! at least `opt-level = 2`.

pub mod error;
pub mod inference;
pub mod solver;
pub mod util;



use error::{ParseResult, PuzzleParseError};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of columns and rows of a board, as well as the number of cells
/// in each row, column, and block.
pub const GRID_SIZE: usize = 9;

/// The number of columns and rows of a single block, i.e. one of the nine
/// 3x3 squares into which the board is divided.
pub const BLOCK_SIZE: usize = 3;

const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

fn index(column: usize, row: usize) -> usize {
    assert!(column < GRID_SIZE && row < GRID_SIZE,
        "cell ({}, {}) is outside the grid", column, row);
    row * GRID_SIZE + column
}

/// A Sudoku board that tracks, for every cell, the set of digits the cell
/// can still hold. A cell with exactly one candidate is called *fixed*; it
/// either held a clue from the start or has since been decided. A cell with
/// more than one candidate is *open*. Boards are cheap to clone, which the
/// [solver](crate::solver) relies on to keep each branch of its search
/// independent.
///
/// A board is created from an 81-character puzzle line with [Board::parse]
/// and can be written back with [Board::to_line]. `Board` also implements
/// `Display`, rendering the grid with box-drawing characters:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 5 │ 3 │ . ║ . │ 7 │ . ║ . │ . │ . ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 6 │ . │ . ║ 1 │ 9 │ 5 ║ . │ . │ . ║
/// ...
/// ```
///
/// Serde support serializes a board as its puzzle line, so a JSON document
/// holding puzzles is simply an array of strings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Board {
    cells: [DigitSet; CELL_COUNT]
}

fn to_char(cell: DigitSet) -> char {
    if let Some(digit) = cell.only() {
        (b'0' + digit as u8) as char
    }
    else {
        '.'
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..GRID_SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, row: usize) -> String {
    line('║', '║', '│', |column| to_char(board.candidates(column, row)), ' ',
        '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for row in 0..GRID_SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl Board {

    /// Parses a puzzle line into a board. The line has to consist of exactly
    /// 81 characters, one per cell, assigned left-to-right, top-to-bottom,
    /// where each row is completed before the next one is started. The
    /// characters `'1'` to `'9'` specify a clue, fixing the cell to that
    /// digit, while `'.'` and `'0'` both mark an open cell, whose candidate
    /// set starts out containing all nine digits.
    ///
    /// Parsing only records the clues. It does not check whether they
    /// contradict each other, nor does it draw any conclusions from them;
    /// that is the job of [inference::initial_sweep](crate::inference).
    ///
    /// ```
    /// use sudoku_inference::Board;
    ///
    /// let board = Board::parse(
    ///     "53..7....\
    ///      6..195...\
    ///      .98....6.\
    ///      8...6...3\
    ///      4..8.3..1\
    ///      7...2...6\
    ///      .6....28.\
    ///      ...419..5\
    ///      ....8..79").unwrap();
    ///
    /// assert_eq!(Some(5), board.digit(0, 0));
    /// assert_eq!(None, board.digit(2, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// * `PuzzleParseError::WrongLength` if the input does not consist of
    /// exactly 81 characters.
    /// * `PuzzleParseError::InvalidCharacter` if the input contains a
    /// character other than `'1'` to `'9'`, `'.'`, and `'0'`.
    pub fn parse(line: &str) -> ParseResult<Board> {
        let length = line.chars().count();

        if length != CELL_COUNT {
            return Err(PuzzleParseError::WrongLength(length));
        }

        let mut cells = [DigitSet::ALL; CELL_COUNT];

        for (i, symbol) in line.chars().enumerate() {
            cells[i] = match symbol {
                '.' | '0' => DigitSet::ALL,
                '1'..='9' => DigitSet::singleton(symbol as usize - '0' as usize),
                _ => return Err(PuzzleParseError::InvalidCharacter(symbol))
            };
        }

        Ok(Board {
            cells
        })
    }

    /// Converts the board into a puzzle line in a way that is consistent
    /// with [Board::parse]. Fixed cells are written as their digit and open
    /// cells as `'.'`, so a parsed line that used `'0'` for open cells comes
    /// back in the canonical dotted form. Candidate sets that have been
    /// narrowed, but not to a single digit, also come back as `'.'`; the
    /// line format has no way of expressing partial knowledge.
    ///
    /// ```
    /// use sudoku_inference::Board;
    ///
    /// let line =
    ///     "53..7....\
    ///      6..195...\
    ///      .98....6.\
    ///      8...6...3\
    ///      4..8.3..1\
    ///      7...2...6\
    ///      .6....28.\
    ///      ...419..5\
    ///      ....8..79";
    /// let board = Board::parse(line).unwrap();
    ///
    /// assert_eq!(line, board.to_line());
    /// ```
    pub fn to_line(&self) -> String {
        self.cells.iter().map(|&cell| to_char(cell)).collect()
    }

    /// Gets the set of candidate digits the cell in the given column and row
    /// can still hold. For a fixed cell this is a singleton set.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is not less than [GRID_SIZE].
    pub fn candidates(&self, column: usize, row: usize) -> DigitSet {
        self.cells[index(column, row)]
    }

    /// Replaces the set of candidate digits of the cell in the given column
    /// and row. This is a plain overwrite; no propagation of any kind takes
    /// place.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is not less than [GRID_SIZE], or if `candidates`
    /// is empty. A cell without candidates means the board as a whole is
    /// contradictory, which callers must handle by discarding the board, not
    /// by storing the empty domain.
    pub fn set_candidates(&mut self, column: usize, row: usize,
            candidates: DigitSet) {
        assert!(!candidates.is_empty(),
            "cannot assign an empty domain to cell ({}, {})", column, row);
        self.cells[index(column, row)] = candidates;
    }

    /// If the cell in the given column and row is fixed, returns its digit,
    /// and `None` if the cell is still open.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is not less than [GRID_SIZE].
    pub fn digit(&self, column: usize, row: usize) -> Option<usize> {
        self.candidates(column, row).only()
    }

    /// Indicates whether every cell of this board is fixed. Note that this
    /// does not check the Sudoku rules; use [Board::is_valid] for that.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.only().is_some())
    }

    /// Indicates whether the fixed cells of this board are consistent with
    /// the Sudoku rules, that is, no digit appears more than once in any
    /// row, column, or block. Open cells are ignored, so a partially solved
    /// board can be valid. To check for a complete solution, combine this
    /// method with [Board::is_solved].
    ///
    /// ```
    /// use sudoku_inference::Board;
    ///
    /// let board = Board::parse(
    ///     &format!("55{}", ".".repeat(79))).unwrap();
    ///
    /// assert!(!board.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        for row in 0..GRID_SIZE {
            let mut seen = DigitSet::EMPTY;

            for column in 0..GRID_SIZE {
                if let Some(digit) = self.digit(column, row) {
                    if !seen.insert(digit) {
                        return false;
                    }
                }
            }
        }

        for column in 0..GRID_SIZE {
            let mut seen = DigitSet::EMPTY;

            for row in 0..GRID_SIZE {
                if let Some(digit) = self.digit(column, row) {
                    if !seen.insert(digit) {
                        return false;
                    }
                }
            }
        }

        for block_row in 0..BLOCK_SIZE {
            for block_column in 0..BLOCK_SIZE {
                let start_column = block_column * BLOCK_SIZE;
                let start_row = block_row * BLOCK_SIZE;
                let mut seen = DigitSet::EMPTY;

                for row in start_row..(start_row + BLOCK_SIZE) {
                    for column in start_column..(start_column + BLOCK_SIZE) {
                        if let Some(digit) = self.digit(column, row) {
                            if !seen.insert(digit) {
                                return false;
                            }
                        }
                    }
                }
            }
        }

        true
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.to_line()
    }
}

impl TryFrom<String> for Board {
    type Error = PuzzleParseError;

    fn try_from(line: String) -> ParseResult<Board> {
        Board::parse(&line)
    }
}
