use crate::error::JoltageError;

/// The largest rating in a range together with its leftmost position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    pub digit: u8,
    pub index: usize,
}

/// Packs a `(digit, index)` pair into one `u64` so that a plain numeric
/// maximum prefers the larger digit and, among equal digits, the smaller index.
///
/// A key is `digit * (len + 1) + (len - index)`. The index band never reaches
/// `len + 1`, so it can't carry into the digit band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packing {
    len: usize,
    multiplier: u64,
}

impl Packing {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            multiplier: len as u64 + 1,
        }
    }

    #[inline(always)]
    pub fn encode(&self, digit: u8, index: usize) -> u64 {
        debug_assert!(index < self.len);
        u64::from(digit) * self.multiplier + (self.len - index) as u64
    }

    #[inline(always)]
    pub fn decode(&self, key: u64) -> Peak {
        Peak {
            digit: (key / self.multiplier) as u8,
            index: self.len - (key % self.multiplier) as usize,
        }
    }
}

/// Static range-maximum index over a bank of battery ratings.
///
/// `levels[j][i]` holds the packed maximum of the window `i..i + 2^j`. Only
/// windows that fit inside the bank are stored, so level `j` has
/// `len - 2^j + 1` cells.
#[derive(Debug, Clone)]
pub struct SparseTable {
    packing: Packing,
    levels: Vec<Vec<u64>>,
}

impl SparseTable {
    #[tracing::instrument(level = "debug", skip_all, fields(len = bank.len()))]
    pub fn build(bank: &str) -> Result<Self, JoltageError> {
        if bank.is_empty() {
            return Err(JoltageError::EmptyBank);
        }

        let len = bank.len();
        let packing = Packing::new(len);

        let base = bank
            .char_indices()
            .map(|(i, c)| match c.to_digit(10) {
                Some(digit) => Ok(packing.encode(digit as u8, i)),
                None => Err(JoltageError::invalid_digit(bank, i, c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let level_count = len.ilog2() as usize + 1;
        let mut levels = Vec::with_capacity(level_count);
        levels.push(base);

        for level in 1..level_count {
            let half = 1 << (level - 1);
            let prev = &levels[level - 1];
            // Two adjacent half windows tile the full one exactly.
            let next: Vec<u64> = prev
                .iter()
                .zip(&prev[half..])
                .map(|(&left, &right)| left.max(right))
                .collect();
            levels.push(next);
        }

        Ok(Self { packing, levels })
    }

    /// Number of ratings in the bank.
    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Largest rating in `start..=end`, leftmost on ties.
    ///
    /// # Panics
    ///
    /// If `start > end` or `end` lies past the end of the bank.
    #[inline]
    pub fn query(&self, start: usize, end: usize) -> Peak {
        assert!(
            start <= end && end < self.len(),
            "range {start}..={end} is outside a bank of {} batteries",
            self.len()
        );

        let level = (end - start + 1).ilog2() as usize;
        let cells = &self.levels[level];
        // Overlapping windows are fine, max is idempotent.
        let key = cells[start].max(cells[end + 1 - (1 << level)]);
        self.packing.decode(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case((9, 0), (9, 3))]
    #[case((9, 3), (8, 0))]
    #[case((1, 0), (0, 0))]
    #[case((5, 1), (5, 2))]
    fn test_packing_prefers_digit_then_earliest(
        #[case] better: (u8, usize),
        #[case] worse: (u8, usize),
    ) {
        let packing = Packing::new(4);
        assert!(packing.encode(better.0, better.1) > packing.encode(worse.0, worse.1));
    }

    #[test]
    fn test_packing_decodes_every_cell() {
        let packing = Packing::new(7);
        for digit in 0..=9 {
            for index in 0..7 {
                let peak = packing.decode(packing.encode(digit, index));
                assert_eq!(peak, Peak { digit, index });
            }
        }
    }

    #[rstest]
    #[case("7", 1)]
    #[case("39", 2)]
    #[case("392", 2)]
    #[case("3925", 3)]
    #[case("987654321111111", 4)]
    #[case("1234567890123456", 5)]
    fn test_level_count(#[case] bank: &str, #[case] expected: usize) {
        let table = SparseTable::build(bank).unwrap();
        assert_eq!(table.level_count(), expected);
        assert_eq!(table.len(), bank.len());
    }

    #[rstest]
    #[case(0, 3, Peak { digit: 9, index: 1 })]
    #[case(0, 0, Peak { digit: 3, index: 0 })]
    #[case(2, 3, Peak { digit: 5, index: 3 })]
    #[case(2, 2, Peak { digit: 2, index: 2 })]
    #[case(0, 2, Peak { digit: 9, index: 1 })]
    fn test_query(#[case] start: usize, #[case] end: usize, #[case] expected: Peak) {
        let table = SparseTable::build("3925").unwrap();
        assert_eq!(table.query(start, end), expected);
    }

    #[test]
    fn test_query_ties_pick_leftmost() {
        let table = SparseTable::build("1919191").unwrap();
        assert_eq!(table.query(0, 6), Peak { digit: 9, index: 1 });
        assert_eq!(table.query(2, 6), Peak { digit: 9, index: 3 });
        assert_eq!(table.query(4, 4), Peak { digit: 1, index: 4 });

        let table = SparseTable::build("111").unwrap();
        assert_eq!(table.query(0, 2), Peak { digit: 1, index: 0 });
        assert_eq!(table.query(1, 2), Peak { digit: 1, index: 1 });
    }

    #[test]
    fn test_build_rejects_empty_bank() {
        assert!(matches!(
            SparseTable::build(""),
            Err(JoltageError::EmptyBank)
        ));
    }

    #[test]
    fn test_build_rejects_non_digit() {
        let err = SparseTable::build("12x4").unwrap_err();
        match err {
            JoltageError::InvalidDigit { span, found, .. } => {
                assert_eq!(found, 'x');
                assert_eq!(span.offset(), 2);
                assert_eq!(span.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "outside a bank")]
    fn test_query_past_end_panics() {
        let table = SparseTable::build("3925").unwrap();
        table.query(1, 4);
    }

    #[test]
    #[should_panic(expected = "outside a bank")]
    fn test_query_reversed_range_panics() {
        let table = SparseTable::build("3925").unwrap();
        table.query(3, 2);
    }
}
