use std::num::NonZeroU8;

use crate::board::Board;

/// Counts all legal completions of `board` by depth-first recursion.
///
/// Every branch point clones the board for each candidate except the last
/// one, which reuses the current board: no remaining sibling needs the
/// pre-assignment state, so mutating in place is safe there.
pub fn count_solutions(board: &Board) -> u64 {
    log::debug!(
        "sequential search over {} empty cells",
        board.num_empty()
    );
    count_branches(board.clone())
}

fn count_branches(mut board: Board) -> u64 {
    if board.is_complete() {
        return 1;
    }
    let Some((x, y)) = board.next_empty_cell() else {
        return 0;
    };
    let candidates: Vec<NonZeroU8> = board.candidates_for(x, y).collect();
    let Some((&last, rest)) = candidates.split_last() else {
        // No candidate left for this cell: the branch is infeasible.
        return 0;
    };

    let mut total = 0;
    for &value in rest {
        let mut branch = board.clone();
        let assigned = branch.assign(x, y, value);
        debug_assert!(assigned);
        if !branch.has_dead_end() {
            total += count_branches(branch);
        }
    }

    let assigned = board.assign(x, y, last);
    debug_assert!(assigned);
    if !board.has_dead_end() {
        total += count_branches(board);
    }
    total
}
