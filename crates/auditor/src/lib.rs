pub mod audit;
pub mod connection;
pub mod error;
pub mod fetcher;
pub mod report;

#[cfg(test)]
pub(crate) mod mock;

pub use audit::{run_audit, AuditOptions};
pub use error::AuditError;
pub use fetcher::{BlockReport, BlockTarget};
