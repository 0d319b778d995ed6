//! Cross-platform clipboard access.
//!
//! On Linux the external tools are tried first, in this order:
//! 1. `wl-copy` (Wayland)
//! 2. `xclip` (X11)
//! 3. `xsel` (X11 alternative)
//!
//! They keep the copied text after the TUI exits. Everything else, and Linux
//! without any of the tools, goes through `arboard`.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// The clipboard refused the text.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Copies text to the system clipboard.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardManager {
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// Clipboard that prefers the Linux CLI tools.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Clipboard that only uses `arboard`.
    #[cfg(test)]
    #[must_use]
    pub const fn arboard_only() -> Self {
        Self {
            prefer_external_tools: false,
        }
    }

    /// Copies `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is reachable or the copy fails.
    pub fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text) {
            return Ok(());
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];
        TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
