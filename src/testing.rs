//! Shared board fixtures for the unit tests.

use std::num::NonZeroU8;

use itertools::iproduct;

use crate::board::{cells, Board, NUM_CELLS};

/// A fully solved, constraint-consistent grid most fixtures are derived from.
pub(crate) const SOLVED: &str = "
    274 685 319
    183 749 265
    965 123 874

    618 534 792
    492 817 653
    357 962 481

    839 256 147
    541 378 926
    726 491 538
";

/// A puzzle with exactly one completion.
pub(crate) const PUZZLE_UNIQUE: &str = "
    __4 68_ _19
    __3 __9 2_5
    _6_ ___ __4

    6__ ___ 7_2
    ___ __7 ___
    ___ 9__ __1

    8__ _5_ __7
    _41 3_8 ___
    _2_ _91 ___
";

/// [PUZZLE_UNIQUE] with the 8 in the first row removed, which makes several
/// completions legal.
pub(crate) const PUZZLE_AMBIGUOUS: &str = "
    __4 6__ _19
    __3 __9 2_5
    _6_ ___ __4

    6__ ___ 7_2
    ___ __7 ___
    ___ 9__ __1

    8__ _5_ __7
    _41 3_8 ___
    _2_ _91 ___
";

/// Row 0 forbids 1..=8 at the cell (8, 0) while its column and region forbid
/// the 9: an empty cell with zero candidates after initialization.
pub(crate) const DEAD_END: &str = "
    12345678.
    ........9
    .........
    .........
    .........
    .........
    .........
    .........
    .........
";

/// Four cells of [SOLVED] forming an unavoidable rectangle over the values
/// {2, 7}: rows 0 and 8 each lose both values, columns 0 and 1 each lose
/// both values, and the cells pair up inside regions 0 and 6. Blanking them
/// leaves exactly two completions, the original grid and the swap.
pub(crate) const RECTANGLE_BLANKS: [(usize, usize); 4] = [(0, 0), (1, 0), (0, 8), (1, 8)];

/// The nine cells of the top-left region. With the rest of [SOLVED] intact,
/// each of them is forced to a single value by its row and column.
pub(crate) fn region_blanks() -> Vec<(usize, usize)> {
    iproduct!(0..3, 0..3).collect()
}

pub(crate) fn solved_board() -> Board {
    Board::from_str(SOLVED)
}

/// [SOLVED] with the given cells blanked out.
pub(crate) fn board_with_blanks(blanks: &[(usize, usize)]) -> Board {
    let solved = solved_board();
    let mut values: [Option<NonZeroU8>; NUM_CELLS] = [None; NUM_CELLS];
    for (x, y) in cells() {
        values[Board::index(x, y)] = solved.value(x, y);
    }
    for &(x, y) in blanks {
        values[Board::index(x, y)] = None;
    }
    Board::from_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_solved_fixture_is_consistent() {
        let mut board = solved_board();
        assert!(board.is_complete());
        board.initialize_candidates();
        assert!(!board.has_dead_end());
    }

    #[test]
    fn blanking_produces_empty_cells() {
        let board = board_with_blanks(&RECTANGLE_BLANKS);
        assert_eq!(4, board.num_empty());
        assert_eq!(None, board.value(0, 0));
        assert_eq!(NonZeroU8::new(4), board.value(2, 0));
    }
}
