//! Cursor over a [`Tree`](crate::filesystem::Tree) plus the size formatting
//! shared by every listing.

#[allow(clippy::module_inception)]
mod navigator;
mod size_format;

pub use navigator::{Listing, ListingEntry, NavigationError, Navigator};
pub use size_format::format_size;
