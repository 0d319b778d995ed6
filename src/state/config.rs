//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure, loaded from disk at
//! startup and layered with command line overrides.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/galaxy-swap/config.json`
//! - macOS: `~/Library/Application Support/galaxy-swap/config.json`
//! - Windows: `%APPDATA%/galaxy-swap/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let config = AppConfig::try_load()?.with_overrides(&overrides);
//! let settings = config.flow_settings()?;
//! ```

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::HttpConfig;
use crate::constants::{
    DEFAULT_BRIDGE_URL, DEFAULT_INVITE_CODE, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SPEND_ICP,
    NNS_LEDGER_CANISTER_ID, TOKEN_CANISTER_ID, TOKEN_LOGO_URL, TOKEN_STANDARD, TOKEN_SYMBOL,
};
use crate::domain::{CanisterId, TokenImport};
use crate::flow::FlowSettings;

use super::platform::AppPaths;

// ============================================================================
// Sections
// ============================================================================

/// Canister ids in textual form; validated by [`AppConfig::flow_settings`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanisterConfig {
    /// ICP ledger.
    pub ledger: String,
    /// Swap backend. Has no default.
    pub backend: Option<String>,
    /// Token paid out by the swap.
    pub token: String,
}

impl Default for CanisterConfig {
    fn default() -> Self {
        Self {
            ledger: NNS_LEDGER_CANISTER_ID.to_string(),
            backend: None,
            token: TOKEN_CANISTER_ID.to_string(),
        }
    }
}

/// How the swap token is registered in the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenConfig {
    pub symbol: String,
    pub standard: String,
    pub logo: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            symbol: TOKEN_SYMBOL.to_string(),
            standard: TOKEN_STANDARD.to_string(),
            logo: TOKEN_LOGO_URL.to_string(),
        }
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Missing fields fall back to their defaults, so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet bridge address; `null` runs without a wallet.
    pub bridge_url: Option<String>,
    /// Timeout for wallet and canister calls, in seconds.
    pub request_timeout_secs: u64,
    /// Canisters the frontend talks to.
    pub canisters: CanisterConfig,
    /// Token registration details.
    pub token: TokenConfig,
    /// Invite code preselected on the approve screen.
    pub invite_code: String,
    /// Amount preselected on the approve screen, in whole ICP.
    pub spend_amount: u64,
    /// Show swap failures instead of only logging them.
    pub surface_swap_failures: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bridge_url: Some(DEFAULT_BRIDGE_URL.to_string()),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            canisters: CanisterConfig::default(),
            token: TokenConfig::default(),
            invite_code: DEFAULT_INVITE_CODE.to_string(),
            spend_amount: DEFAULT_SPEND_ICP,
            surface_swap_failures: true,
        }
    }
}

/// Command line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub bridge_url: Option<String>,
    pub no_wallet: bool,
    pub invite_code: Option<String>,
    pub spend_amount: Option<u64>,
    pub backend: Option<String>,
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from the default location.
    ///
    /// A missing file is not an error and yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file exists but cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_load`], minus the path lookup.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Applies command line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(url) = &overrides.bridge_url {
            self.bridge_url = Some(url.clone());
        }
        if overrides.no_wallet {
            self.bridge_url = None;
        }
        if let Some(code) = &overrides.invite_code {
            self.invite_code.clone_from(code);
        }
        if let Some(amount) = overrides.spend_amount {
            self.spend_amount = amount;
        }
        if let Some(backend) = &overrides.backend {
            self.canisters.backend = Some(backend.clone());
        }
        self
    }

    /// HTTP settings for the wallet bridge.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.request_timeout_secs))
    }

    /// Validates the canister ids and builds the controller settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend id is missing or any id is not a
    /// valid textual principal.
    pub fn flow_settings(&self) -> Result<FlowSettings> {
        let backend = self.canisters.backend.as_deref().ok_or_else(|| {
            eyre!("No swap backend canister configured. Pass --backend <ID> or set canisters.backend in the config file")
        })?;

        Ok(FlowSettings {
            ledger: parse_canister("ledger", &self.canisters.ledger)?,
            backend: parse_canister("backend", backend)?,
            token: TokenImport {
                canister_id: parse_canister("token", &self.canisters.token)?,
                symbol: self.token.symbol.clone(),
                standard: self.token.standard.clone(),
                logo: self.token.logo.clone(),
            },
            surface_swap_failures: self.surface_swap_failures,
        })
    }
}

fn parse_canister(role: &str, text: &str) -> Result<CanisterId> {
    text.parse::<CanisterId>()
        .wrap_err_with(|| format!("invalid {role} canister id '{text}'"))
}

// ============================================================================
// Tests
// ============================================================================
