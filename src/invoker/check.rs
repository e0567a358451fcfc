use serde_json::{json, Value};

use crate::structures::{HealthResponse, IResult, InvokerError, HEALTH_CODE, HEALTH_STATUS};

/// Decodes a raw invocation payload and asserts it matches the running health contract.
pub fn check_health_payload(bytes: &[u8]) -> IResult<HealthResponse> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(InvokerError::EmptyPayload);
    }

    let value: Value = serde_json::from_slice(bytes)?;
    if is_legacy_envelope(&value) {
        return Err(InvokerError::LegacyEnvelope);
    }

    expect_field(&value, "code", json!(HEALTH_CODE))?;
    expect_field(&value, "status", json!(HEALTH_STATUS))?;

    Ok(serde_json::from_value(value)?)
}

fn is_legacy_envelope(value: &Value) -> bool {
    value.get("statusCode").is_some() && value.get("body").is_some_and(Value::is_string)
}

fn expect_field(value: &Value, field: &'static str, expected: Value) -> IResult<()> {
    let actual = value.get(field).cloned().unwrap_or(Value::Null);
    if actual == expected {
        Ok(())
    } else {
        Err(InvokerError::Assertion { field, expected, actual })
    }
}
