//! Bays–Durham decorrelation stage
//!
//! Holds a small table of raw outputs plus one "current result" register.
//! Each output selects the table slot that supplies the next output, using
//! its own low bits as the index, and that slot is refilled from the raw
//! stream. This breaks up the short-range regularity of LCG low-order bits
//! and stretches the effective period, at the cost of one table read/write
//! per output.

use super::algorithm::RawState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorrelator {
    table: Vec<u32>,
    current: u32,
}

impl Decorrelator {
    /// Fill a `2^bd_bits` table from `raw`, then prime the current register
    /// with one more raw output
    pub fn prime(raw: &mut RawState, mask: u32, bd_bits: u32) -> Self {
        let size = 1usize << bd_bits;
        let table: Vec<u32> = (0..size).map(|_| raw.next(mask)).collect();
        let current = raw.next(mask);
        Self { table, current }
    }

    /// Return the current result and advance the table by one slot
    #[inline]
    pub fn next(&mut self, raw: &mut RawState, mask: u32) -> u32 {
        let result = self.current;
        let index = result as usize & (self.table.len() - 1);
        self.current = self.table[index];
        self.table[index] = raw.next(mask);
        result
    }

    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// True if every table entry and the current register fit in `mask`
    /// and the table length is a power of two
    pub(crate) fn is_consistent_with(&self, mask: u32, table_size: usize) -> bool {
        self.table.len() == table_size
            && table_size.is_power_of_two()
            && self.current & !mask == 0
            && self.table.iter().all(|&v| v & !mask == 0)
    }
}
