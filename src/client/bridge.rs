//! Wallet gateway backed by a local wallet bridge.
//!
//! The bridge holds the user's wallet session and signs canister calls. It
//! speaks a small JSON protocol:
//!
//! | Request | Body | Reply |
//! |---|---|---|
//! | `GET /api/v1/session` | - | `{"connected": bool}` |
//! | `POST /api/v1/connect` | `{"whitelist": [id]}` | `{"publicKey": "..."}` |
//! | `POST /api/v1/call` | `{"canisterId", "method", "args": [..]}` | `{"reply": ..}` |
//! | `POST /api/v1/tokens` | [`TokenImport`] | any 2xx |
//!
//! Errors come back as non-2xx with `{"error": "...", "kind": "..."}` where
//! `kind` is one of `rejected`, `unavailable` or `call`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::gateway::{BackendActor, ICRC2_APPROVE, LedgerActor, SWAP_ICP_TO_TOKEN, WalletGateway};
use super::http::{HttpClient, HttpConfig};
use crate::domain::{
    ApproveArgs, ApproveReply, ApproveResult, CanisterId, GatewayError, PublicKey, SwapReceipt,
    TokenImport,
};

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SessionReply {
    connected: bool,
}

#[derive(Debug, Serialize)]
struct ConnectRequest<'a> {
    whitelist: &'a [CanisterId],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectReply {
    public_key: PublicKey,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CallRequest<'a> {
    canister_id: &'a CanisterId,
    method: &'a str,
    args: Value,
}

#[derive(Debug, Deserialize)]
struct CallReply {
    reply: Value,
}

/// Error body returned by the bridge with any non-2xx status.
#[derive(Debug, Default, Deserialize)]
struct ErrorReply {
    #[serde(default)]
    error: String,
    #[serde(default)]
    kind: String,
}

// ============================================================================
// Bridge Gateway
// ============================================================================

/// [`WalletGateway`] that forwards every request to the wallet bridge.
#[derive(Debug, Clone)]
pub struct BridgeGateway {
    http: HttpClient,
    base_url: String,
}

impl BridgeGateway {
    /// Creates a gateway for the bridge at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, GatewayError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: HttpClient::with_config(config)?,
            base_url,
        })
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    /// Performs a signed canister call through the bridge and returns the
    /// raw candid-as-JSON reply.
    async fn call(
        &self,
        canister: &CanisterId,
        method: &str,
        args: Value,
    ) -> Result<Value, GatewayError> {
        tracing::debug!("bridge call {canister}.{method}({args})");
        let body = CallRequest {
            canister_id: canister,
            method,
            args,
        };

        let response = self
            .http
            .post(&self.endpoint("call"))
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let reply: CallReply = read_json(response, Some(method)).await?;
        tracing::debug!("bridge reply {canister}.{method} -> {}", reply.reply);
        Ok(reply.reply)
    }
}

#[async_trait]
impl WalletGateway for BridgeGateway {
    async fn is_connected(&self) -> Result<bool, GatewayError> {
        let response = self
            .http
            .get(&self.endpoint("session"))
            .send()
            .await
            .map_err(map_send_error)?;

        let session: SessionReply = read_json(response, None).await?;
        Ok(session.connected)
    }

    async fn request_connect(&self, whitelist: &[CanisterId]) -> Result<PublicKey, GatewayError> {
        let response = self
            .http
            .post(&self.endpoint("connect"))
            .json(&ConnectRequest { whitelist })
            .send()
            .await
            .map_err(map_send_error)?;

        let reply: ConnectReply = read_json(response, None).await?;
        Ok(reply.public_key)
    }

    async fn ledger_actor(
        &self,
        canister: &CanisterId,
    ) -> Result<Arc<dyn LedgerActor>, GatewayError> {
        Ok(Arc::new(BridgeLedgerActor {
            bridge: self.clone(),
            canister: canister.clone(),
        }))
    }

    async fn backend_actor(
        &self,
        canister: &CanisterId,
    ) -> Result<Arc<dyn BackendActor>, GatewayError> {
        Ok(Arc::new(BridgeBackendActor {
            bridge: self.clone(),
            canister: canister.clone(),
        }))
    }

    async fn request_import_token(&self, token: &TokenImport) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(&self.endpoint("tokens"))
            .json(token)
            .send()
            .await
            .map_err(map_send_error)?;

        check_status(response, None).await.map(|_| ())
    }
}

// ============================================================================
// Actors
// ============================================================================

/// Ledger actor whose calls are signed by the bridge.
#[derive(Debug, Clone)]
pub struct BridgeLedgerActor {
    bridge: BridgeGateway,
    canister: CanisterId,
}

#[async_trait]
impl LedgerActor for BridgeLedgerActor {
    async fn icrc2_approve(&self, args: &ApproveArgs) -> Result<ApproveResult, GatewayError> {
        let args = serde_json::to_value(args)
            .map_err(|e| GatewayError::parse(format!("cannot encode approve args: {e}")))?;
        let reply = self
            .bridge
            .call(&self.canister, ICRC2_APPROVE, Value::Array(vec![args]))
            .await?;
        parse_approve_reply(reply)
    }
}

/// Swap backend actor whose calls are signed by the bridge.
#[derive(Debug, Clone)]
pub struct BridgeBackendActor {
    bridge: BridgeGateway,
    canister: CanisterId,
}

#[async_trait]
impl BackendActor for BridgeBackendActor {
    async fn swap_icp_to_token(
        &self,
        amount_e8s: u64,
        invite_code: Option<&str>,
    ) -> Result<SwapReceipt, GatewayError> {
        let reply = self
            .bridge
            .call(&self.canister, SWAP_ICP_TO_TOKEN, swap_args(amount_e8s, invite_code))
            .await?;
        Ok(SwapReceipt { reply })
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Positional arguments of `swapIcpToToken`.
fn swap_args(amount_e8s: u64, invite_code: Option<&str>) -> Value {
    json!([amount_e8s, invite_code])
}

fn parse_approve_reply(reply: Value) -> Result<ApproveResult, GatewayError> {
    serde_json::from_value::<ApproveReply>(reply)
        .map(ApproveResult::from)
        .map_err(|e| GatewayError::parse(format!("unexpected icrc2_approve reply: {e}")))
}

fn map_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_connect() {
        GatewayError::Unavailable(format!("wallet bridge is not reachable: {err}"))
    } else {
        GatewayError::Network(err)
    }
}

/// Maps a bridge error status and body to a [`GatewayError`].
fn classify_error(status: u16, body: ErrorReply, method: Option<&str>) -> GatewayError {
    let message = if body.error.is_empty() {
        format!("HTTP {status}")
    } else {
        body.error
    };

    match (body.kind.as_str(), status) {
        ("rejected", _) | (_, 401 | 403) => GatewayError::Rejected(message),
        ("unavailable", _) | (_, 503) => GatewayError::Unavailable(message),
        ("call", _) => GatewayError::call(method.unwrap_or("unknown"), message),
        _ => GatewayError::Bridge { status, message },
    }
}

async fn check_status(
    response: reqwest::Response,
    method: Option<&str>,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.json::<ErrorReply>().await.unwrap_or_default();
    Err(classify_error(status.as_u16(), body, method))
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    method: Option<&str>,
) -> Result<T, GatewayError> {
    let response = check_status(response, method).await?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| GatewayError::parse(format!("{e}: {text}")))
}

// ============================================================================
// Tests
// ============================================================================
