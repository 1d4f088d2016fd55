//! Authentication log.
//!
//! Records at most one entry per employee per business day, no matter how
//! many times or how concurrently a login is reported.

pub mod error;
pub mod ledger;
pub mod store;
pub mod types;

pub use error::AuthLogError;
pub use ledger::AuthLogLedger;
pub use store::AuthLogStore;
pub use types::{AuthLogEntry, NewAuthLogEntry, RecordedLogin};
