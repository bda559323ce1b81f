use chumsky::prelude::*;
use miette::*;

/// One bank per line. Surrounding spaces are ignored and blank lines skipped.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .or_not()
        .padded_by(text::inline_whitespace())
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|banks| banks.into_iter().flatten().collect())
}

pub fn banks(input: &str) -> Result<Vec<&str>> {
    parser().parse(input).into_result().map_err(|errors| {
        let labels = errors
            .iter()
            .map(|e| LabeledSpan::at(e.span().into_range(), e.to_string()))
            .collect::<Vec<_>>();
        miette!(
            code = "joltage::parse",
            labels = labels,
            "Parse failed: {} error(s)",
            errors.len()
        )
        .with_source_code(input.to_owned())
    })
}
