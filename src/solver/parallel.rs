use std::num::NonZeroU8;

use rayon::prelude::*;

use crate::board::Board;

/// Counts all legal completions of `board` as a fork-join task tree on
/// rayon's work-stealing pool.
///
/// Branching and pruning are identical to the sequential engine; only the
/// execution differs. Each surviving branch owns an independent board, so no
/// search state is ever shared between tasks and the contributions are
/// combined by plain addition at the join points. The sum is deterministic
/// regardless of how the pool schedules the tasks.
///
/// There is no cancellation: every spawned task runs to completion. A panic
/// inside a forked task propagates out of the join instead of being lost.
pub fn count_solutions(board: &Board) -> u64 {
    log::debug!("parallel search over {} empty cells", board.num_empty());
    count_task(board.clone())
}

fn count_task(mut board: Board) -> u64 {
    if board.is_complete() {
        return 1;
    }
    let Some((x, y)) = board.next_empty_cell() else {
        return 0;
    };
    let candidates: Vec<NonZeroU8> = board.candidates_for(x, y).collect();
    let Some((&last, rest)) = candidates.split_last() else {
        return 0;
    };

    // Build one child board per candidate whose post-assignment re-check
    // survives; candidates that die in the re-check never become tasks.
    let mut branches = Vec::with_capacity(candidates.len());
    for &value in rest {
        let mut branch = board.clone();
        let assigned = branch.assign(x, y, value);
        debug_assert!(assigned);
        if !branch.has_dead_end() {
            branches.push(branch);
        }
    }
    let assigned = board.assign(x, y, last);
    debug_assert!(assigned);
    if !board.has_dead_end() {
        branches.push(board);
    }

    let Some(inline) = branches.pop() else {
        return 0;
    };
    if branches.is_empty() {
        return count_task(inline);
    }

    // Fork: the remaining branches are left up for stealing while this
    // thread descends into one branch itself. The join blocks only after
    // the inline branch is done.
    let (own, stolen) = rayon::join(
        || count_task(inline),
        || branches.into_par_iter().map(count_task).sum::<u64>(),
    );
    own + stolen
}
