use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The value has no SQL literal representation. Permanent input
    /// error; callers must not retry.
    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(String),

    /// The match spec is structurally invalid. Permanent input error.
    #[error("Malformed match spec: {0}")]
    MalformedSpec(String),
}
