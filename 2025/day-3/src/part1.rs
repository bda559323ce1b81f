use miette::*;

use crate::joltage::{sum_joltages, PART1_LEN};
use crate::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser::banks(input)?;
    let total_joltage = sum_joltages(&banks, PART1_LEN)?;
    Ok(total_joltage.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("357", process(input)?);
        Ok(())
    }

    #[test]
    fn test_short_banks_count_as_zero() -> Result<()> {
        assert_eq!("95", process("3925\n9\n")?);
        Ok(())
    }
}
