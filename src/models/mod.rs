//! Data models and types for the application.
//!
//! - [`FileEntry`] - backend directory listing record

mod entry;

pub use entry::FileEntry;
