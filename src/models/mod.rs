//! Data models for the masjid display backend.
//!
//! These mirror the JSON files on disk and the request bodies the admin pages send.

mod credentials;
mod theme;
mod timing;

pub use credentials::*;
pub use theme::*;
pub use timing::*;
