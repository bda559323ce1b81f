pub mod error;
pub mod joltage;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod sparse_table;

pub use error::JoltageError;
pub use joltage::{
    bank_joltages, solve, solve_par, sum_joltages, Subsequence, Totals, PART1_LEN, PART2_LEN,
};
pub use sparse_table::{Packing, Peak, SparseTable};
