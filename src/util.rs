//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! the candidate digits of each cell.

use std::fmt::{self, Debug, Formatter};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, Sub};

/// The bit pattern of a [DigitSet] that contains all nine digits.
const ALL_BITS: u16 = 0x01ff;

fn mask(digit: usize) -> u16 {
    assert!(digit >= 1 && digit <= 9,
        "digit must be between 1 and 9, got {}", digit);
    1u16 << (digit - 1)
}

/// A set of Sudoku digits, that is, of the numbers 1 to 9. It is implemented
/// as a bit mask in a single `u16`, where bit `d - 1` represents the digit
/// `d`. This makes the set a small `Copy` type, which keeps cloning a board
/// of 81 such sets cheap.
///
/// All operations that take a digit panic if it is outside the range
/// `[1, 9]`. Such a digit does not exist on a Sudoku board, so passing one is
/// considered a programming error rather than a recoverable condition.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct DigitSet(u16);

impl DigitSet {

    /// The set that contains no digit at all. Note that this state is never
    /// stored in a [Board](crate::Board) cell; it only arises transiently
    /// while the propagator decides whether an elimination is contradictory.
    pub const EMPTY: DigitSet = DigitSet(0);

    /// The set that contains every digit from 1 to 9. This is the domain of
    /// a cell about which nothing is known yet.
    pub const ALL: DigitSet = DigitSet(ALL_BITS);

    /// Creates a new `DigitSet` that contains exactly the given digit.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn singleton(digit: usize) -> DigitSet {
        DigitSet(mask(digit))
    }

    /// Indicates whether this set contains the given digit.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn contains(&self, digit: usize) -> bool {
        self.0 & mask(digit) != 0
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed, i.e. the digit was
    /// not present before, and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn insert(&mut self, digit: usize) -> bool {
        let mask = mask(digit);
        let changed = self.0 & mask == 0;
        self.0 |= mask;
        changed
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed, i.e. the digit was
    /// present before, and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is not in the range `[1, 9]`.
    pub fn remove(&mut self, digit: usize) -> bool {
        let mask = mask(digit);
        let changed = self.0 & mask != 0;
        self.0 &= !mask;
        changed
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no digit.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// If this set contains exactly one digit, returns that digit, and `None`
    /// otherwise. A cell whose domain answers with `Some(...)` here is what
    /// we call fixed.
    pub fn only(&self) -> Option<usize> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as usize + 1)
        }
        else {
            None
        }
    }

    /// Returns an iterator over the digits contained in this set in ascending
    /// order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            remaining: self.0
        }
    }
}

/// An iterator over the digits of a [DigitSet], in ascending order.
pub struct DigitSetIter {
    remaining: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            None
        }
        else {
            let bit_index = self.remaining.trailing_zeros() as usize;
            self.remaining &= self.remaining - 1;
            Some(bit_index + 1)
        }
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for DigitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> DigitSet {
        let mut set = DigitSet::EMPTY;

        for digit in iter {
            set.insert(digit);
        }

        set
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    /// Computes the set intersection of the two operands.
    fn bitand(self, rhs: DigitSet) -> DigitSet {
        DigitSet(self.0 & rhs.0)
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    /// Computes the set union of the two operands.
    fn bitor(self, rhs: DigitSet) -> DigitSet {
        DigitSet(self.0 | rhs.0)
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    /// Computes the set difference of the two operands, that is, the digits
    /// of the left-hand side which are not in the right-hand side.
    fn sub(self, rhs: DigitSet) -> DigitSet {
        DigitSet(self.0 & !rhs.0)
    }
}

/// Creates a new [DigitSet](crate::util::DigitSet) that contains the listed
/// digits. For empty sets, [DigitSet::EMPTY](crate::util::DigitSet::EMPTY)
/// can be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_inference::digits;
///
/// let set = digits!(2, 4, 7);
/// assert_eq!(3, set.len());
/// assert!(set.contains(4));
/// assert!(!set.contains(5));
/// ```
#[macro_export]
macro_rules! digits {
    ($($digit:expr),+ $(,)?) => {
        {
            let mut set = $crate::util::DigitSet::EMPTY;
            $(set.insert($digit);)+
            set
        }
    };
}
