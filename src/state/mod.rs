//! State management for the galaxy-swap TUI.
//!
//! The state is split by concern:
//!
//! - [`FlowController`] - The swap session: stage, inputs, wallet calls
//! - [`UiState`] - UI presentation concerns (popups, toasts, editors)
//! - [`AppConfig`] - Configuration file plus command line overrides
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                   App                    │
//! ├─────────────────────┬────────────────────┤
//! │   FlowController    │      UiState       │
//! │  - stage, loading   │  - popups          │
//! │  - amount, invite   │  - toasts          │
//! │  - wallet gateway   │  - invite editor   │
//! └─────────────────────┴────────────────────┘
//! ```
//!
//! Wallet calls run on spawned tasks and report back through
//! [`AppMessage`], so the event loop never blocks on the wallet.

use tokio::sync::mpsc;

use crate::flow::{CallOutcome, FlowController};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, ConfigOverrides};
pub use ui_state::{PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A wallet call finished.
    Flow(CallOutcome),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Swap session and wallet access.
    pub flow: FlowController,

    /// UI state - popups, toasts, editors.
    pub ui: UiState,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver only disappears
    // while the app shuts down.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Outcome processing, notice routing
mod app_messages;

// Command execution, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================
