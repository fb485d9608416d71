//! Search engines that count every legal completion of a board.
//!
//! Both engines walk the same branch space with the same pruning rules and
//! return the same count; they differ only in execution. The board handed to
//! either engine must have had [Board::initialize_candidates] run on it
//! (running [Board::cascade_singletons] first as well is optional, it does
//! not change the count).
//!
//! An infeasible branch is not an error. It contributes zero to the sum,
//! every operation in here is total.
//!
//! [Board::initialize_candidates]: crate::Board::initialize_candidates
//! [Board::cascade_singletons]: crate::Board::cascade_singletons

pub mod parallel;
pub mod sequential;
