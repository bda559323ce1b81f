use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum JoltageError {
    #[error("battery bank is empty")]
    #[diagnostic(
        code(joltage::empty_bank),
        help("blank lines are skipped by the parser, so this only happens through the library API")
    )]
    EmptyBank,

    #[error("battery rating {found:?} is not a digit")]
    #[diagnostic(code(joltage::invalid_digit))]
    InvalidDigit {
        #[source_code]
        bank: String,
        #[label("expected 0-9")]
        span: SourceSpan,
        found: char,
    },

    #[error("a joltage of {len} digits does not fit in 64 bits")]
    #[diagnostic(code(joltage::joltage_overflow))]
    JoltageOverflow { len: usize },

    #[error("total joltage does not fit in 64 bits")]
    #[diagnostic(code(joltage::total_overflow))]
    TotalOverflow,
}

impl JoltageError {
    pub(crate) fn invalid_digit(bank: &str, offset: usize, found: char) -> Self {
        Self::InvalidDigit {
            bank: bank.to_owned(),
            span: (offset, found.len_utf8()).into(),
            found,
        }
    }
}
