use thiserror::Error;

/// Failures raised while classifying an already loaded catalog.
///
/// Shape problems inside a record never end up here: a missing or malformed
/// field is a plain non-match. These variants abort the whole job.
#[derive(Debug, Error, PartialEq)]
pub enum ClassifyError {
    /// A multiplier that cannot be read as a float.
    #[error("unsig {id}: multiplier #{index} ({value}) is not a number")]
    MalformedMultiplier {
        id: String,
        index: usize,
        value: String,
    },

    /// A catalog key that is not a non-negative decimal integer.
    #[error("catalog key '{0}' is not a numeric identifier")]
    InvalidIdentifier(String),
}
