//! Wallet access for the swap flow.
//!
//! This module provides:
//! - [`WalletGateway`] and the actor traits in [`gateway`] - the capabilities
//!   the flow is handed
//! - [`BridgeGateway`] - the production gateway talking to a local wallet
//!   bridge over HTTP
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{BridgeGateway, HttpConfig};
//!
//! let gateway = BridgeGateway::new("http://127.0.0.1:7590", HttpConfig::default())?;
//! let connected = gateway.is_connected().await?;
//! ```

pub mod bridge;
pub mod gateway;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use bridge::BridgeGateway;
pub use gateway::WalletGateway;
pub use http::HttpConfig;
