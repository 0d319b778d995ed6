//! UI rendering module for the galaxy-swap TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of the flow card, bars, popups and overlays.
//!
//! # Module Structure
//!
//! - `screens` - One card per flow stage (connect, approve, swap, gratitude)
//! - `popups` - Modal dialogs (messages, help, quit confirmation)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;
pub mod screens;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
};

use crate::constants::MIN_TERMINAL_WIDTH;
use crate::state::{App, PopupState};
use crate::theme::WARNING_COLOR;

use layout::calculate_app_layout;

/// Notice drawn instead of the flow on terminals that are too narrow.
pub const NARROW_TERMINAL_NOTICE: &str = "Please enlarge your terminal to use galaxy-swap";

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws, in order:
/// 1. Header, the current flow card and footer
/// 2. Popup overlays based on current popup state
/// 3. The help overlay
/// 4. Toast notifications as non-blocking overlays
///
/// Terminals narrower than [`MIN_TERMINAL_WIDTH`] only get a notice.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_narrow_notice(frame, size);
        return;
    }

    let app_layout = calculate_app_layout(size);
    header::render(frame, app_layout.header, app);
    screens::render(app, frame, app_layout.main);
    footer::render(frame, app_layout.footer, app);

    render_popups(app, frame, size);

    if app.ui.show_help {
        popups::help::render(frame, size);
    }

    if let Some(message) = app.ui.toast_text() {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

/// Render popup overlays based on current popup state
fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::Message(message) => {
            popups::message::render(frame, area, message);
        }
        PopupState::ConfirmQuit => {
            popups::confirm::render(frame, area, app.flow.flow().loading());
        }
        PopupState::None => {}
    }
}

fn render_narrow_notice(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    let notice = Paragraph::new(NARROW_TERMINAL_NOTICE)
        .style(Style::default().fg(WARNING_COLOR))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(
        notice,
        Rect::new(area.x, y, area.width, area.height - (y - area.y)),
    );
}

// ============================================================================
// Tests
// ============================================================================
