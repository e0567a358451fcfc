// Round trip against a deployed function. Needs AWS credentials and HEALTH_ACCOUNT_ID.
// Run with: HEALTH_ACCOUNT_ID=123456789012 cargo test --test deployed_health -- --ignored
use charging_stations_health::common::FunctionArn;
use charging_stations_health::invoker::cli::{DEFAULT_FUNCTION_NAME, DEFAULT_PARTITION, DEFAULT_REGION};
use charging_stations_health::invoker::{run_health_check, AwsLambdaInvoker};
use charging_stations_health::structures::HealthResponse;
use serde_json::json;

#[tokio::test]
#[ignore]
async fn deployed_function_reports_running() {
    let account_id = std::env::var("HEALTH_ACCOUNT_ID").expect("HEALTH_ACCOUNT_ID must be set");
    let arn = FunctionArn::new(DEFAULT_PARTITION, DEFAULT_REGION, &account_id, DEFAULT_FUNCTION_NAME)
        .expect("valid function arn");

    let invoker = AwsLambdaInvoker::new(arn.region()).await;
    let health = run_health_check(&invoker, &arn, &json!({}), "deployed")
        .await
        .expect("health check");

    assert_eq!(health, HealthResponse::running());
}
