use serde::{Deserialize, Serialize};

pub const HEALTH_CODE: u16 = 200;
pub const HEALTH_STATUS: &str = "running";

/// Version of the response contract. Version 1 wrapped the body in a
/// `{statusCode, body}` envelope; version 2 returns the bare object.
pub const HEALTH_CONTRACT_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub code: u16,
    pub status: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self { code: HEALTH_CODE, status: HEALTH_STATUS.to_string() }
    }
}
