//! Core shift-login logic for Shiftgate.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage and token minting are reached through traits the outer crates implement.
//!
//! # Modules
//!
//! - `auth` - Roles, password hashing and credential verification
//! - `business_day` - Store calendar, business day resolution and initial cash lookup
//! - `login` - Shift login orchestration
//! - `auth_log` - Once-per-day authentication ledger

pub mod auth;
pub mod auth_log;
pub mod business_day;
pub mod login;

#[cfg(test)]
mod testing;
