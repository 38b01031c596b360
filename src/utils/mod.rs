//! Utility modules for web, DOM, and formatting operations.
//!
//! - [`dom`] - best-effort browser API access
//! - [`fetch`] - Fetch API wrapper with timeout racing
//! - [`format`] - human-readable sizes and modification dates

pub mod dom;
pub mod fetch;
pub mod format;
