use std::num::NonZeroU8;

use bitvec::prelude::*;

use crate::board::{HEIGHT, MAX_VALUE, NUM_VALUES, WIDTH};

pub(crate) const NUM_REGIONS: usize = 9;
// 9 rows, then 9 columns, then 9 regions.
pub(crate) const NUM_GROUPS: usize = 27;

const COLUMN_BASE: usize = 9;
const REGION_BASE: usize = 18;

/// Index of the 3x3 region containing (x, y), counted left to right, top to
/// bottom.
#[inline]
pub(crate) fn region_index(x: usize, y: usize) -> usize {
    (y / 3) * 3 + x / 3
}

/// The three groups the cell at (x, y) belongs to: its row, its column and
/// its region. Membership is pure coordinate arithmetic, no group stores its
/// member cells.
#[inline]
pub(crate) fn groups_at(x: usize, y: usize) -> [usize; 3] {
    assert!(x < WIDTH && y < HEIGHT);
    [y, COLUMN_BASE + x, REGION_BASE + region_index(x, y)]
}

/// Forbidden-value bitsets for all 27 groups, plus the filled-cell counter
/// per region.
///
/// A set bit means some assigned cell in the group already holds the value.
/// Bits are only ever set, never cleared, within one board's lifetime; a
/// clone with different history simply carries different bits.
#[derive(Clone, Copy)]
pub(crate) struct Groups {
    illegal: BitArr!(for NUM_GROUPS * NUM_VALUES),
    region_filled: [u8; NUM_REGIONS],
}

impl Groups {
    pub const fn new_all_legal() -> Self {
        Self {
            illegal: bitarr![const 0; NUM_GROUPS * NUM_VALUES],
            region_filled: [0; NUM_REGIONS],
        }
    }

    fn index(group: usize, value: NonZeroU8) -> usize {
        assert!(group < NUM_GROUPS && value.get() <= MAX_VALUE);
        NUM_VALUES * group + usize::from(value.get()) - 1
    }

    pub fn is_legal(&self, group: usize, value: NonZeroU8) -> bool {
        !self.illegal[Self::index(group, value)]
    }

    /// Idempotent: forbidding an already-forbidden value changes nothing.
    pub fn set_illegal(&mut self, group: usize, value: NonZeroU8) {
        self.illegal.set(Self::index(group, value), true);
    }

    /// True iff `value` is legal in the row, the column and the region of
    /// the cell at (x, y) simultaneously.
    pub fn value_fits(&self, x: usize, y: usize, value: NonZeroU8) -> bool {
        groups_at(x, y)
            .into_iter()
            .all(|group| self.is_legal(group, value))
    }

    /// Forbids `value` in all three groups of the cell at (x, y).
    pub fn forbid_at(&mut self, x: usize, y: usize, value: NonZeroU8) {
        for group in groups_at(x, y) {
            self.set_illegal(group, value);
        }
    }

    pub fn record_fill(&mut self, x: usize, y: usize) {
        self.region_filled[region_index(x, y)] += 1;
    }

    pub fn region_filled(&self, region: usize) -> u8 {
        self.region_filled[region]
    }

    pub fn region_is_full(&self, region: usize) -> bool {
        self.region_filled[region] >= 9
    }

    pub fn all_regions_full(&self) -> bool {
        (0..NUM_REGIONS).all(|region| self.region_is_full(region))
    }

    pub fn num_filled(&self) -> usize {
        self.region_filled.iter().map(|&filled| usize::from(filled)).sum()
    }
}
