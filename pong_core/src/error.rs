use thiserror::Error;

/// Failure to interpret a string handed over by the presentation layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unmapped key: {0:?}")]
    UnknownKey(String),

    #[error("unknown mode: {0:?}")]
    UnknownMode(String),

    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
}
