use clap::Parser;
use serde_json::Value;

use crate::common::FunctionArn;
use crate::structures::{IResult, InvokerError};

pub const DEFAULT_REGION: &str = "il-central-1";
pub const DEFAULT_PARTITION: &str = "aws";
pub const DEFAULT_FUNCTION_NAME: &str = "charging-stations-health";

pub const MISSING_ACCOUNT: &str =
    "AWS account ID required: pass it as argument or use --account option";

/// Invoke the charging-stations-health Lambda and check its response
#[derive(Parser, Debug)]
#[command(name = "health-invoker", version, about)]
pub struct Args {
    /// AWS account ID where the Lambda is deployed
    pub account_id: Option<String>,

    /// AWS account ID (alternative to positional)
    #[arg(short = 'a', long = "account", env = "AWS_ACCOUNT_ID")]
    pub account: Option<String>,

    /// Region the function is deployed in
    #[arg(long, env = "HEALTH_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// ARN partition (aws, aws-cn, aws-us-gov)
    #[arg(long, default_value = DEFAULT_PARTITION)]
    pub partition: String,

    /// Deployed function name
    #[arg(long, env = "HEALTH_FUNCTION_NAME", default_value = DEFAULT_FUNCTION_NAME)]
    pub function_name: String,

    /// JSON event sent to the function
    #[arg(long, default_value = "{}", value_parser = parse_payload)]
    pub payload: Value,
}

impl Args {
    /// Positional wins over the option; a blank value counts as absent.
    pub fn account_id(&self) -> IResult<&str> {
        non_blank(&self.account_id)
            .or_else(|| non_blank(&self.account))
            .ok_or_else(|| InvokerError::Usage(MISSING_ACCOUNT.to_string()))
    }

    pub fn function_arn(&self) -> IResult<FunctionArn> {
        FunctionArn::new(&self.partition, &self.region, self.account_id()?, &self.function_name)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|id| !id.trim().is_empty())
}

fn parse_payload(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("payload is not valid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare() -> Args {
        Args {
            account_id: None,
            account: None,
            region: DEFAULT_REGION.to_string(),
            partition: DEFAULT_PARTITION.to_string(),
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            payload: json!({}),
        }
    }

    #[test]
    fn missing_account_is_usage_error() {
        let err = bare().function_arn().unwrap_err();
        match err {
            InvokerError::Usage(msg) => assert_eq!(msg, MISSING_ACCOUNT),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_account_is_usage_error() {
        let args = Args { account: Some("  ".into()), ..bare() };
        assert!(matches!(args.account_id(), Err(InvokerError::Usage(_))));
    }

    #[test]
    fn positional_account() {
        let args = Args::try_parse_from(["health-invoker", "123456789012"]).unwrap();
        assert_eq!(
            args.function_arn().unwrap().to_string(),
            "arn:aws:lambda:il-central-1:123456789012:function:charging-stations-health"
        );
    }

    #[test]
    fn short_and_long_option() {
        let short = Args::try_parse_from(["health-invoker", "-a", "111111111111"]).unwrap();
        assert_eq!(short.account_id().unwrap(), "111111111111");
        let long = Args::try_parse_from(["health-invoker", "--account", "222222222222"]).unwrap();
        assert_eq!(long.account_id().unwrap(), "222222222222");
    }

    #[test]
    fn positional_takes_precedence() {
        let args = Args::try_parse_from(["health-invoker", "111111111111", "-a", "222222222222"]).unwrap();
        assert_eq!(args.account_id().unwrap(), "111111111111");
    }

    #[test]
    fn empty_positional_falls_through_to_option() {
        let args = Args::try_parse_from(["health-invoker", "", "-a", "123456789012"]).unwrap();
        assert_eq!(args.account_id().unwrap(), "123456789012");
    }

    #[test]
    fn payload_defaults_to_empty_object() {
        let args = Args::try_parse_from(["health-invoker", "123456789012"]).unwrap();
        assert_eq!(args.payload, json!({}));
    }

    #[test]
    fn custom_payload_is_parsed() {
        let args = Args::try_parse_from([
            "health-invoker",
            "123456789012",
            "--payload",
            r#"{"action":"health"}"#,
        ])
        .unwrap();
        assert_eq!(args.payload, json!({"action": "health"}));
    }

    #[test]
    fn invalid_payload_is_rejected_by_parser() {
        let res = Args::try_parse_from(["health-invoker", "123456789012", "--payload", "{nope"]);
        assert!(res.is_err());
    }
}
