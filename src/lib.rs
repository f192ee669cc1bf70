// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod client;
pub mod clock;
pub mod config;
pub mod eligibility;
pub mod forgotten;
pub mod import;
pub mod picks;
pub mod schedule;
pub mod store;
