use thiserror::Error;

/// Errors raised by the JSON helpers of the sets.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a JSON array of elements of the expected type.
    #[error("malformed input: cannot parse element sequence: {0}")]
    Decode(#[from] serde_json::Error),

    /// An element could not be represented as JSON.
    #[error("cannot encode element sequence: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
