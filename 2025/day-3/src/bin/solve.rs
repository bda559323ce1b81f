use miette::*;

use aoc2025_day_3_rmq::solve;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("input1.txt"));
    let input = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {path}"))?;
    let totals = solve(&input)?;
    println!("Part 1 Result: {}", totals.part1);
    println!("Part 2 Result: {}", totals.part2);
    Ok(())
}
