use std::collections::VecDeque;
use std::num::NonZeroU8;

use itertools::iproduct;

use crate::board::{cells, Board, HEIGHT, MAX_VALUE, WIDTH};

/// The cells sharing a row, column or region with (x, y), excluding (x, y)
/// itself. Cells in the region overlap of the row/column appear twice; the
/// cascade tolerates duplicates.
fn peers(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    let row = (0..WIDTH).map(move |px| (px, y));
    let column = (0..HEIGHT).map(move |py| (x, py));
    let (region_x, region_y) = (x / 3 * 3, y / 3 * 3);
    let region = iproduct!(region_x..region_x + 3, region_y..region_y + 3);
    row.chain(column)
        .chain(region)
        .filter(move |&peer| peer != (x, y))
}

impl Board {
    /// Derives every group's forbidden set from its already-assigned member
    /// cells, then computes each empty cell's candidate set as {1..9} minus
    /// the union of its row/column/region forbidden sets.
    ///
    /// Must run once before [Self::cascade_singletons] or any search.
    pub fn initialize_candidates(&mut self) {
        for (x, y) in cells() {
            if let Some(value) = self.value(x, y) {
                self.groups_mut().forbid_at(x, y, value);
            }
        }
        for (x, y) in cells() {
            if self.value(x, y).is_some() {
                continue;
            }
            self.candidates_mut().clear_cell(x, y);
            for value in 1..=MAX_VALUE {
                let value = NonZeroU8::new(value).unwrap();
                if self.groups().value_fits(x, y, value) {
                    self.candidates_mut().insert(x, y, value);
                }
            }
        }
    }

    /// Repeatedly scans the whole grid and assigns every cell whose candidate
    /// set has exactly one member, until a full scan finds nothing left to
    /// assign. Calling it again after the fixpoint is a no-op.
    pub fn cascade_singletons(&mut self) {
        let mut passes = 0;
        loop {
            passes += 1;
            let mut assigned_any = false;
            for (x, y) in cells() {
                if self.value(x, y).is_some() {
                    continue;
                }
                if let Some(value) = self.candidates().sole(x, y) {
                    assigned_any |= self.assign(x, y, value);
                }
            }
            if !assigned_any {
                break;
            }
        }
        log::trace!("singleton cascade reached its fixpoint after {passes} passes");
    }

    /// Assigns `value` to the empty cell at (x, y) and propagates:
    ///
    /// 1. `value` becomes forbidden in the cell's row, column and region.
    /// 2. `value` is removed from the candidate set of every other empty cell
    ///    in those three groups.
    /// 3. The cell's value is set, its candidate set cleared, its region's
    ///    filled counter incremented.
    /// 4. The affected neighbourhood is re-checked for cells left with a
    ///    single candidate; each one is assigned the same way, which can
    ///    chain transitively through its own neighbourhood.
    ///
    /// Step 4 runs on an explicit worklist instead of recursing through the
    /// grid, so cascade depth is bounded by queue length, not stack size.
    ///
    /// Returns `false` without touching anything if the cell is already
    /// filled or `value` is illegal in one of the cell's groups; callers must
    /// not assume a state change occurred.
    pub fn assign(&mut self, x: usize, y: usize, value: NonZeroU8) -> bool {
        let mut pending = VecDeque::new();
        let assigned = self.assign_and_enqueue(x, y, value, &mut pending);
        while let Some((px, py)) = pending.pop_front() {
            if self.value(px, py).is_some() {
                continue;
            }
            if let Some(forced) = self.candidates().sole(px, py) {
                self.assign_and_enqueue(px, py, forced, &mut pending);
            }
        }
        assigned
    }

    /// One assignment step: updates groups, strips the value from peer
    /// candidate sets and queues those peers for the singleton re-check.
    fn assign_and_enqueue(
        &mut self,
        x: usize,
        y: usize,
        value: NonZeroU8,
        pending: &mut VecDeque<(usize, usize)>,
    ) -> bool {
        if self.value(x, y).is_some() || !self.groups().value_fits(x, y, value) {
            return false;
        }
        self.groups_mut().forbid_at(x, y, value);
        for (px, py) in peers(x, y) {
            if self.value(px, py).is_none() {
                self.candidates_mut().remove(px, py, value);
                pending.push_back((px, py));
            }
        }
        self.place(x, y, value);
        true
    }
}
