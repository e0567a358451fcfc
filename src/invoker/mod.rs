pub mod check;
pub mod cli;
pub mod client;

use tracing::{error, info};

use crate::common::logging::events;
use crate::common::FunctionArn;
use crate::structures::{HealthResponse, IResult, HEALTH_CONTRACT_VERSION};

pub use check::check_health_payload;
pub use cli::Args;
pub use client::{AwsLambdaInvoker, HealthInvoke};

/// Invokes the health function once and asserts the response contract.
pub async fn run_health_check<I>(
    invoker: &I,
    arn: &FunctionArn,
    event: &serde_json::Value,
    run_id: &str,
) -> IResult<HealthResponse>
where
    I: HealthInvoke + Sync,
{
    let payload = serde_json::to_vec(event)?;
    info!(event = events::INVOKE_START, run_id = %run_id, function = %arn, contract_version = HEALTH_CONTRACT_VERSION, msg = "Invoking health function");

    let bytes = invoker.invoke(arn, &payload).await?;
    info!(event = events::INVOKE_RESPONSE, run_id = %run_id, bytes = bytes.len(), msg = "Response received");

    match check_health_payload(&bytes) {
        Ok(health) => {
            info!(event = events::HEALTH_CHECK_PASSED, run_id = %run_id, code = health.code, status = %health.status, msg = "Health check passed");
            Ok(health)
        }
        Err(e) => {
            error!(event = events::HEALTH_CHECK_FAILED, run_id = %run_id, error = %e, msg = "Health check failed");
            Err(e)
        }
    }
}
