use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvokerError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("assertion failed on `{field}`: expected {expected}, got {actual}")]
    Assertion {
        field: &'static str,
        expected: Value,
        actual: Value,
    },

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response uses the legacy {{statusCode, body}} envelope, expected the bare health object")]
    LegacyEnvelope,

    #[error("function returned an empty payload")]
    EmptyPayload,

    #[error("function error ({kind}): {payload}")]
    FunctionError { kind: String, payload: String },

    #[error(transparent)]
    Transport(#[from] aws_sdk_lambda::Error),
}

pub type IResult<T> = Result<T, InvokerError>;
