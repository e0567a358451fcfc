pub mod common;
pub mod handler;
pub mod invoker;
pub mod structures;
