//! Storage module for attachment previews
//!
//! Local stand-in for the browser object-URL facility: creates and revokes
//! the preview references bound to user-selected files.

mod preview;

pub use preview::{PreviewHandle, PreviewStore};
