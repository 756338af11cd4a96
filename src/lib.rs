// Library root — exposes the environment record for application bootstrap
// code and integration tests. The CLI entry point is src/main.rs.

pub mod env;
pub mod error;
pub mod logger;
