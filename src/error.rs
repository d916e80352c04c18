use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The platform entropy source could not seed the engine. Not retried;
    /// masking this with a weaker source would be worse than failing loudly.
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(#[source] rand::Error),

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),
}

pub type Result<T> = std::result::Result<T, Error>;
