pub mod health;
pub mod error;

pub use health::{HealthResponse, HEALTH_CODE, HEALTH_CONTRACT_VERSION, HEALTH_STATUS};
pub use error::{InvokerError, IResult};
