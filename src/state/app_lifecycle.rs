//! Application lifecycle management.
//!
//! - `new()` - Builds the app from a config and an optional wallet
//! - `run()` - Main event loop
//! - `spawn_call()` - Runs a wallet call on a background task

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::client::WalletGateway;
use crate::constants::TICK_RATE;
use crate::flow::{FlowController, PendingCall, SwapFlow};
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates the app. `gateway == None` means no wallet is installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured canister ids are missing or
    /// invalid.
    pub fn new(config: &AppConfig, gateway: Option<Arc<dyn WalletGateway>>) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let settings = config.flow_settings()?;
        let flow = SwapFlow::new(config.spend_amount, &config.invite_code);
        tracing::info!(
            "starting with backend {} and {} wallet",
            settings.backend,
            if gateway.is_some() { "a" } else { "no" }
        );

        Ok(Self {
            flow: FlowController::new(flow, settings, gateway),
            ui: UiState::new(),
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_connection_check();

        let tick_rate = TICK_RATE;
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        tracing::info!("exiting at stage {:?}", self.flow.flow().stage());
        Ok(())
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    /// Probes for an existing wallet session once at startup.
    pub(crate) fn start_connection_check(&mut self) {
        match self.flow.prepare_check_connection() {
            Ok(call) => self.spawn_call(call),
            Err(e) => tracing::debug!("skipping session check: {e}"),
        }
    }

    /// Runs `call` on a background task; the outcome arrives as an
    /// [`AppMessage::Flow`].
    pub(crate) fn spawn_call(&self, call: PendingCall) {
        let message_tx = self.message_tx.clone();
        tracing::debug!("spawning {}", call.name());
        tokio::spawn(async move {
            let outcome = call.run().await;
            let _ = message_tx.send(AppMessage::Flow(outcome));
        });
    }
}
