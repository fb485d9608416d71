use std::fmt;
use std::num::NonZeroU8;

use itertools::iproduct;

use crate::candidates::Candidates;
use crate::groups::Groups;

pub(crate) const WIDTH: usize = 9;
pub(crate) const HEIGHT: usize = 9;
pub(crate) const NUM_CELLS: usize = WIDTH * HEIGHT;
pub(crate) const MAX_VALUE: u8 = 9;
pub(crate) const NUM_VALUES: usize = MAX_VALUE as usize;

/// Iterates over all cell coordinates in row-major order, i.e. the order
/// the scan cursor moves in.
pub(crate) fn cells() -> impl Iterator<Item = (usize, usize)> {
    iproduct!(0..HEIGHT, 0..WIDTH).map(|(y, x)| (x, y))
}

/// A [Board] is a 9x9 sudoku board.
/// Each cell either holds a value in 1..=9 or is empty. While a cell is empty,
/// [Candidates] tracks which values it could still legally take; once a cell is
/// assigned, its candidate set is cleared and stays cleared.
pub struct Board {
    // Cells are ordered by rows, first left-to-right, then top-to-bottom.
    values: [Option<NonZeroU8>; NUM_CELLS],
    candidates: Candidates,
    groups: Groups,
    // Flat index of the last empty cell handed out by [Self::next_empty_cell].
    // Never shared between boards, see [Self::clone].
    cursor: Option<usize>,
}

impl Board {
    pub fn new_empty() -> Self {
        Self::from_values([None; NUM_CELLS])
    }

    pub(crate) fn from_values(values: [Option<NonZeroU8>; NUM_CELLS]) -> Self {
        let mut groups = Groups::new_all_legal();
        for (x, y) in cells() {
            if values[Self::index(x, y)].is_some() {
                groups.record_fill(x, y);
            }
        }
        Board {
            values,
            candidates: Candidates::new_none_possible(),
            groups,
            cursor: None,
        }
    }

    /// Parses a board from a fixture string, ignoring all whitespace.
    /// `.` and `_` mean an empty cell. Panics on malformed input; the
    /// validating entry point for untrusted data is [crate::loader::parse_board].
    pub fn from_str(s: &str) -> Self {
        let mut values = [None; NUM_CELLS];
        let mut index = 0;
        for character in s.chars().filter(|c| !c.is_whitespace()) {
            assert!(index < NUM_CELLS, "board string has more than {NUM_CELLS} cells");
            match character {
                '.' | '_' => {}
                '1'..='9' => values[index] = NonZeroU8::new(character as u8 - b'0'),
                other => panic!("invalid cell character {other:?}"),
            }
            index += 1;
        }
        assert_eq!(NUM_CELLS, index, "board string must have {NUM_CELLS} cells");
        Self::from_values(values)
    }

    #[inline]
    pub(crate) fn index(x: usize, y: usize) -> usize {
        assert!(x < WIDTH && y < HEIGHT);
        y * WIDTH + x
    }

    #[inline]
    fn coordinates(index: usize) -> (usize, usize) {
        (index % WIDTH, index / WIDTH)
    }

    #[inline]
    pub fn value(&self, x: usize, y: usize) -> Option<NonZeroU8> {
        self.values[Self::index(x, y)]
    }

    /// The values the empty cell at (x, y) could still legally take.
    /// Empty until [Self::initialize_candidates] has run.
    pub fn candidates_for(&self, x: usize, y: usize) -> impl Iterator<Item = NonZeroU8> + '_ {
        self.candidates.iter_cell(x, y)
    }

    pub fn candidate_count(&self, x: usize, y: usize) -> usize {
        self.candidates.count(x, y)
    }

    pub fn num_empty(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }

    /// True iff every region reports all 9 of its cells filled.
    pub fn is_complete(&self) -> bool {
        self.groups.all_regions_full()
    }

    /// Percentage of assigned cells, rounded down to an integer.
    pub fn fill_rate(&self) -> u32 {
        (self.groups.num_filled() * 100 / NUM_CELLS) as u32
    }

    /// True iff some empty cell has no candidate left, i.e. the board cannot
    /// be completed. Only meaningful after [Self::initialize_candidates].
    pub fn has_dead_end(&self) -> bool {
        cells().any(|(x, y)| self.value(x, y).is_none() && self.candidates.count(x, y) == 0)
    }

    /// Returns the next empty cell strictly after the cursor in row-major
    /// order, or scans from (0, 0) if the cursor is unset. Stores the cursor
    /// on success so repeated calls on the same board don't rescan from the
    /// origin. Returns `None` once the scan runs off the end of the grid;
    /// this is not a completeness check, use [Self::is_complete] for that.
    pub fn next_empty_cell(&mut self) -> Option<(usize, usize)> {
        let start = self.cursor.map_or(0, |cursor| cursor + 1);
        for index in start..NUM_CELLS {
            if self.values[index].is_none() {
                self.cursor = Some(index);
                return Some(Self::coordinates(index));
            }
        }
        None
    }

    /// Upper bound on the number of remaining completions: the product of the
    /// candidate-set sizes of all empty cells, kept in normalized scientific
    /// notation while accumulating.
    pub fn solution_space_estimate(&self) -> SolutionSpaceEstimate {
        let mut mantissa = 1.0f64;
        let mut exponent = 0u32;
        for (x, y) in cells() {
            if self.value(x, y).is_some() {
                continue;
            }
            mantissa *= self.candidates.count(x, y) as f64;
            if mantissa == 0.0 {
                return SolutionSpaceEstimate {
                    mantissa: 0.0,
                    exponent: 0,
                };
            }
            while mantissa >= 10.0 {
                mantissa /= 10.0;
                exponent += 1;
            }
        }
        SolutionSpaceEstimate { mantissa, exponent }
    }

    /// Writes `value` into the empty cell at (x, y) without any legality
    /// bookkeeping. The assignment protocol lives in [Self::assign].
    pub(crate) fn place(&mut self, x: usize, y: usize, value: NonZeroU8) {
        debug_assert!(self.value(x, y).is_none());
        self.values[Self::index(x, y)] = Some(value);
        self.candidates.clear_cell(x, y);
        self.groups.record_fill(x, y);
    }

    pub(crate) fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    pub(crate) fn candidates_mut(&mut self) -> &mut Candidates {
        &mut self.candidates
    }

    pub(crate) fn groups(&self) -> &Groups {
        &self.groups
    }

    pub(crate) fn groups_mut(&mut self) -> &mut Groups {
        &mut self.groups
    }
}

impl Clone for Board {
    /// Deep, shared-nothing copy. The scan cursor is deliberately not copied:
    /// a clone made at a branch point starts its empty-cell scan fresh.
    fn clone(&self) -> Self {
        Board {
            values: self.values,
            candidates: self.candidates,
            groups: self.groups,
            cursor: None,
        }
    }
}

/// Two boards are equal when every cell holds the same value.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                match self.value(x, y) {
                    Some(value) => write!(f, "{value}")?,
                    None => f.write_str(".")?,
                }
            }
            if y + 1 < HEIGHT {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

/// Solution-space size in normalized scientific notation, `mantissa * 10^exponent`
/// with the mantissa in [1, 10) unless the product collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionSpaceEstimate {
    mantissa: f64,
    exponent: u32,
}

impl SolutionSpaceEstimate {
    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }
}

impl fmt::Display for SolutionSpaceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            f.write_str("0")
        } else {
            write!(f, "{:.3}*10^{}", self.mantissa, self.exponent)
        }
    }
}
