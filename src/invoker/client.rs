use async_trait::async_trait;
use aws_sdk_lambda::config::Region;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use aws_sdk_lambda::Client;
use tracing::debug;

use crate::common::FunctionArn;
use crate::structures::{IResult, InvokerError};

/// One synchronous request/response invocation.
#[async_trait]
pub trait HealthInvoke {
    async fn invoke(&self, arn: &FunctionArn, payload: &[u8]) -> IResult<Vec<u8>>;
}

pub struct AwsLambdaInvoker {
    client: Client,
}

impl AwsLambdaInvoker {
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self { client: Client::new(&config) }
    }
}

#[async_trait]
impl HealthInvoke for AwsLambdaInvoker {
    async fn invoke(&self, arn: &FunctionArn, payload: &[u8]) -> IResult<Vec<u8>> {
        let output = self
            .client
            .invoke()
            .function_name(arn.to_string())
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(aws_sdk_lambda::Error::from)?;

        debug!(status_code = output.status_code(), executed_version = ?output.executed_version(), msg = "Invoke returned");

        let body = output.payload().map(|b| b.as_ref().to_vec()).unwrap_or_default();
        if let Some(kind) = output.function_error() {
            return Err(InvokerError::FunctionError {
                kind: kind.to_string(),
                payload: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body)
    }
}
