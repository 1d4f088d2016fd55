//! Shift login orchestration.
//!
//! Verifies credentials, resolves the store's business day and checks the
//! employee's initial cash declaration, in that order.

pub mod error;
pub mod service;
pub mod types;


pub use error::LoginError;
pub use service::ShiftLoginService;
pub use types::{ShiftLogin, ShiftLoginRequest};
