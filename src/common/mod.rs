pub mod arn;
pub mod logging;

pub use arn::FunctionArn;
