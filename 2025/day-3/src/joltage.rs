use miette::Result;
use rayon::prelude::*;

use crate::error::JoltageError;
use crate::parser;
use crate::sparse_table::{Peak, SparseTable};

/// Batteries turned on per bank in part one.
pub const PART1_LEN: usize = 2;
/// Batteries turned on per bank in part two.
pub const PART2_LEN: usize = 12;

/// The batteries picked for the largest joltage, in bank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subsequence {
    peaks: Vec<Peak>,
}

impl Subsequence {
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.peaks.iter().map(|peak| peak.digit)
    }

    /// The picked digits read as a decimal number, `0` when nothing was picked.
    pub fn value(&self) -> Result<u64, JoltageError> {
        self.digits()
            .try_fold(0u64, |acc, digit| {
                acc.checked_mul(10)?.checked_add(u64::from(digit))
            })
            .ok_or(JoltageError::JoltageOverflow { len: self.len() })
    }
}

impl SparseTable {
    /// Greedily picks the largest subsequence of `len` ratings.
    ///
    /// Each pick takes the leftmost maximum among the positions that still
    /// leave enough batteries to fill the remaining slots. When the bank is
    /// shorter than `len` nothing is picked.
    pub fn max_subsequence(&self, len: usize) -> Subsequence {
        let n = self.len();
        let mut peaks = Vec::with_capacity(len.min(n));
        let mut start = 0;

        for remaining in (1..=len).rev() {
            if start >= n || n < remaining {
                break;
            }
            let end = n - remaining;
            if end < start {
                break;
            }

            let peak = self.query(start, end);
            tracing::trace!(remaining, start, end, ?peak, "picked battery");
            peaks.push(peak);
            start = peak.index + 1;
        }

        Subsequence { peaks }
    }

    /// Largest joltage made of exactly `len` batteries, `0` if the bank is too short.
    pub fn max_joltage(&self, len: usize) -> Result<u64, JoltageError> {
        self.max_subsequence(len).value()
    }
}

/// Running totals for both parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub part1: u64,
    pub part2: u64,
}

impl Totals {
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            part1: self.part1.checked_add(other.part1)?,
            part2: self.part2.checked_add(other.part2)?,
        })
    }

    fn try_add(self, other: Self) -> Result<Self, JoltageError> {
        self.checked_add(other).ok_or(JoltageError::TotalOverflow)
    }
}

/// Both joltages of a single bank, sharing one table.
pub fn bank_joltages(bank: &str) -> Result<Totals, JoltageError> {
    let table = SparseTable::build(bank)?;
    Ok(Totals {
        part1: table.max_joltage(PART1_LEN)?,
        part2: table.max_joltage(PART2_LEN)?,
    })
}

pub fn sum_joltages(banks: &[&str], len: usize) -> Result<u64, JoltageError> {
    banks.iter().try_fold(0u64, |total, bank| {
        let joltage = SparseTable::build(bank)?.max_joltage(len)?;
        total
            .checked_add(joltage)
            .ok_or(JoltageError::TotalOverflow)
    })
}

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn solve(input: &str) -> Result<Totals> {
    let banks = parser::banks(input)?;

    let totals = banks
        .iter()
        .try_fold(Totals::default(), |totals, bank| {
            totals.try_add(bank_joltages(bank)?)
        })?;

    tracing::debug!(banks = banks.len(), ?totals, "solved");
    Ok(totals)
}

/// Same as [`solve`], with banks spread over the rayon pool.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn solve_par(input: &str) -> Result<Totals> {
    let banks = parser::banks(input)?;

    let totals = banks
        .par_iter()
        .map(|bank| bank_joltages(bank))
        .try_reduce(Totals::default, Totals::try_add)?;

    Ok(totals)
}
