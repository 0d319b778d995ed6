//! Popup UI components.
//!
//! Modal overlays drawn on top of the flow card: messages, help and the
//! quit confirmation.

pub mod confirm;
pub mod help;
pub mod message;
