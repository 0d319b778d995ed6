//! Shared test utilities and Mother pattern factories.
//!
//! [`MockGateway`] stands in for the wallet: it records every request and
//! answers from a script set up by the test. Mothers build the canister ids,
//! settings and configs most tests need.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;
use serde_json::{Value, json};

use crate::client::WalletGateway;
use crate::client::gateway::{BackendActor, LedgerActor};
use crate::constants::{TOKEN_LOGO_URL, TOKEN_STANDARD, TOKEN_SYMBOL};
use crate::domain::ledger::Nat;
use crate::domain::{
    ApproveArgs, ApproveResult, CanisterId, GatewayError, PublicKey, SwapReceipt, TokenImport,
};
use crate::flow::FlowSettings;
use crate::state::{App, AppConfig};

// ============================================================================
// Mock Gateway
// ============================================================================

/// A request seen by [`MockGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    IsConnected,
    Connect(Vec<CanisterId>),
    Approve(ApproveArgs),
    Swap {
        amount_e8s: u64,
        invite_code: Option<String>,
    },
    ImportToken(TokenImport),
}

/// Kind of failure a scripted request answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Wallet missing or bridge down.
    Unavailable,
    /// User declined.
    Rejected,
    /// Canister call trapped.
    Call,
}

impl MockFailure {
    fn to_error(self, method: &str) -> GatewayError {
        match self {
            Self::Unavailable => GatewayError::Unavailable("mock wallet is offline".into()),
            Self::Rejected => GatewayError::Rejected("mock user declined".into()),
            Self::Call => GatewayError::call(method, "mock canister trapped"),
        }
    }
}

#[derive(Debug)]
struct Script {
    session: Result<bool, MockFailure>,
    connect: Result<PublicKey, MockFailure>,
    approve: Result<ApproveResult, MockFailure>,
    swap: Result<Value, MockFailure>,
    import: Result<(), MockFailure>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            session: Ok(false),
            connect: Ok(PublicKey("302a300506032b6570032100mockkey".to_string())),
            approve: Ok(Ok(Nat::from(1u64))),
            swap: Ok(json!({ "Ok": 1 })),
            import: Ok(()),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    script: Mutex<Script>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockState {
    fn record(&self, call: MockCall) {
        lock(&self.calls).push(call);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Scriptable in-memory wallet.
///
/// Clones share the same script and call log, so a test can keep one handle
/// and give another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    state: Arc<MockState>,
}

impl MockGateway {
    /// A wallet where every request succeeds and no session exists yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for injection into a controller or app.
    #[must_use]
    pub fn shared(&self) -> Arc<dyn WalletGateway> {
        Arc::new(self.clone())
    }

    #[must_use]
    pub fn with_session(self, connected: bool) -> Self {
        lock(&self.state.script).session = Ok(connected);
        self
    }

    #[must_use]
    pub fn failing_session(self, failure: MockFailure) -> Self {
        lock(&self.state.script).session = Err(failure);
        self
    }

    #[must_use]
    pub fn failing_connect(self, failure: MockFailure) -> Self {
        lock(&self.state.script).connect = Err(failure);
        self
    }

    #[must_use]
    pub fn with_approve(self, reply: ApproveResult) -> Self {
        lock(&self.state.script).approve = Ok(reply);
        self
    }

    #[must_use]
    pub fn failing_approve(self, failure: MockFailure) -> Self {
        lock(&self.state.script).approve = Err(failure);
        self
    }

    #[must_use]
    pub fn with_swap_reply(self, reply: Value) -> Self {
        lock(&self.state.script).swap = Ok(reply);
        self
    }

    #[must_use]
    pub fn failing_swap(self, failure: MockFailure) -> Self {
        lock(&self.state.script).swap = Err(failure);
        self
    }

    #[must_use]
    pub fn failing_import(self, failure: MockFailure) -> Self {
        lock(&self.state.script).import = Err(failure);
        self
    }

    /// Every request seen so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.state.calls).clone()
    }

    /// Arguments of every approval seen so far.
    #[must_use]
    pub fn approve_calls(&self) -> Vec<ApproveArgs> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Approve(args) => Some(args),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl WalletGateway for MockGateway {
    async fn is_connected(&self) -> Result<bool, GatewayError> {
        self.state.record(MockCall::IsConnected);
        lock(&self.state.script)
            .session
            .map_err(|f| f.to_error("isConnected"))
    }

    async fn request_connect(&self, whitelist: &[CanisterId]) -> Result<PublicKey, GatewayError> {
        self.state.record(MockCall::Connect(whitelist.to_vec()));
        lock(&self.state.script)
            .connect
            .clone()
            .map_err(|f| f.to_error("requestConnect"))
    }

    async fn ledger_actor(
        &self,
        _canister: &CanisterId,
    ) -> Result<Arc<dyn LedgerActor>, GatewayError> {
        Ok(Arc::new(MockActor {
            state: Arc::clone(&self.state),
        }))
    }

    async fn backend_actor(
        &self,
        _canister: &CanisterId,
    ) -> Result<Arc<dyn BackendActor>, GatewayError> {
        Ok(Arc::new(MockActor {
            state: Arc::clone(&self.state),
        }))
    }

    async fn request_import_token(&self, token: &TokenImport) -> Result<(), GatewayError> {
        self.state.record(MockCall::ImportToken(token.clone()));
        lock(&self.state.script)
            .import
            .map_err(|f| f.to_error("requestImportToken"))
    }
}

/// Ledger and backend actor sharing the gateway's script.
#[derive(Debug)]
struct MockActor {
    state: Arc<MockState>,
}

#[async_trait]
impl LedgerActor for MockActor {
    async fn icrc2_approve(&self, args: &ApproveArgs) -> Result<ApproveResult, GatewayError> {
        self.state.record(MockCall::Approve(args.clone()));
        lock(&self.state.script)
            .approve
            .clone()
            .map_err(|f| f.to_error("icrc2_approve"))
    }
}

#[async_trait]
impl BackendActor for MockActor {
    async fn swap_icp_to_token(
        &self,
        amount_e8s: u64,
        invite_code: Option<&str>,
    ) -> Result<SwapReceipt, GatewayError> {
        self.state.record(MockCall::Swap {
            amount_e8s,
            invite_code: invite_code.map(str::to_string),
        });
        lock(&self.state.script)
            .swap
            .clone()
            .map(|reply| SwapReceipt { reply })
            .map_err(|f| f.to_error("swapIcpToToken"))
    }
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct CanisterMother;

impl CanisterMother {
    #[must_use]
    pub fn ledger() -> CanisterId {
        id("ryjl3-tyaaa-aaaaa-aaaba-cai")
    }

    #[must_use]
    pub fn backend() -> CanisterId {
        id("rrkah-fqaaa-aaaaa-aaaaq-cai")
    }

    #[must_use]
    pub fn token() -> CanisterId {
        id("wexwn-tyaaa-aaaap-ag72a-cai")
    }
}

fn id(text: &str) -> CanisterId {
    text.parse().expect("fixture canister id is valid")
}

pub struct SettingsMother;

impl SettingsMother {
    /// Mainnet ledger and token with a fixed backend; failures surfaced.
    #[must_use]
    pub fn mainnet() -> FlowSettings {
        FlowSettings {
            ledger: CanisterMother::ledger(),
            backend: CanisterMother::backend(),
            token: TokenImport {
                canister_id: CanisterMother::token(),
                symbol: TOKEN_SYMBOL.to_string(),
                standard: TOKEN_STANDARD.to_string(),
                logo: TOKEN_LOGO_URL.to_string(),
            },
            surface_swap_failures: true,
        }
    }
}

pub struct ConfigMother;

impl ConfigMother {
    /// Default config with the backend filled in.
    #[must_use]
    pub fn with_backend() -> AppConfig {
        let mut config = AppConfig::default();
        config.canisters.backend = Some(CanisterMother::backend().to_string());
        config
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Standard test terminal (120x40).
#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(120, 40)).expect("terminal creation should succeed")
}

/// Small terminal (80x24) for compact layouts.
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// App wired to `gateway` with the default config.
#[must_use]
pub fn mock_app(gateway: &MockGateway) -> App {
    App::new(&ConfigMother::with_backend(), Some(gateway.shared()))
        .expect("app creation should succeed")
}

/// App without any wallet installed.
#[must_use]
pub fn walletless_app() -> App {
    App::new(&ConfigMother::with_backend(), None).expect("app creation should succeed")
}

/// Collects the text of a rendered buffer, one line per row.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
