use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityError {
    /// one of the inputs is absent, empty or consists only of whitespace
    #[error("the inputs could not be null or blank")]
    InvalidInput,
}
