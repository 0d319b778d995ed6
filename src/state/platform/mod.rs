//! Platform-specific helpers.
//!
//! - [`clipboard`] - Clipboard access with Linux CLI fallbacks
//! - [`paths`] - Configuration and log locations

pub mod clipboard;
pub mod paths;

pub use clipboard::ClipboardManager;
pub use paths::AppPaths;
