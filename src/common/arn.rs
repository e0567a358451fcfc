use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structures::InvokerError;

// AWS account ids are exactly twelve decimal digits.
static ACCOUNT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{12}$").expect("account id regex"));

// Partition, region and function name are single ARN segments.
static SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("segment regex"));

/// Fully qualified name of a Lambda function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArn {
    partition: String,
    region: String,
    account_id: String,
    function_name: String,
}

impl FunctionArn {
    pub fn new(
        partition: &str,
        region: &str,
        account_id: &str,
        function_name: &str,
    ) -> Result<Self, InvokerError> {
        let account_id = account_id.trim();
        if !ACCOUNT_ID.is_match(account_id) {
            return Err(InvokerError::Usage(format!(
                "invalid AWS account ID {account_id:?}: expected 12 digits"
            )));
        }
        for (name, value) in [("partition", partition), ("region", region), ("function name", function_name)] {
            if !SEGMENT.is_match(value) {
                return Err(InvokerError::Usage(format!("invalid {name}: {value:?}")));
            }
        }

        Ok(Self {
            partition: partition.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            function_name: function_name.to_string(),
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }
}

impl fmt::Display for FunctionArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:lambda:{}:{}:function:{}",
            self.partition, self.region, self.account_id, self.function_name
        )
    }
}
