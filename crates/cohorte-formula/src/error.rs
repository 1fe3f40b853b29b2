use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number literal '{literal}' at offset {offset}")]
    InvalidNumber { literal: String, offset: usize },

    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of formula")]
    UnexpectedEnd,

    #[error("empty formula")]
    Empty,

    #[error("no value for variable: {0}")]
    UnknownVariable(String),

    #[error("value of {0} is not a number")]
    NotANumber(String),

    #[error("result is not a finite number")]
    NonFinite,
}
