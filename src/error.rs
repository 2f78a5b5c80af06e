use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The Jaeger query API could not be reached, answered with a
    /// non-success status, or returned a body that did not parse.
    #[error("jaeger backend unavailable: {0}")]
    Backend(String),

    /// A trace document is shorter than the shape this deployment emits.
    #[error("malformed trace {trace_id}: missing {field}")]
    MalformedTrace { trace_id: String, field: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
