//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - top-level view (header, breadcrumb trail, listing)
//! - [`FileList`] - directory listing with loading/error/empty states
//! - [`Breadcrumb`] - clickable path-prefix trail
//! - [`Header`] - title and theme toggle

mod breadcrumb;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;

pub use breadcrumb::Breadcrumb;
pub use explorer::{Explorer, StyleContext};
pub use file_list::FileList;
pub use header::Header;
