use miette::*;

use crate::joltage::{sum_joltages, PART2_LEN};
use crate::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser::banks(input)?;
    let total_joltage = sum_joltages(&banks, PART2_LEN)?;
    Ok(total_joltage.to_string())
}
