use std::sync::Arc;

use payout_core::payout::PayoutService;
use payout_core::store::{AccountStore, RecipientStore, RoleDirectory};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Payout transitions, lookups and reports.
    pub payouts: PayoutService,
    /// Role lookups for display (authorization goes through `payouts`).
    pub roles: Arc<dyn RoleDirectory>,
    /// Login credentials.
    pub accounts: Arc<dyn AccountStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the state from one backend implementing every store port.
    pub fn new<S>(store: Arc<S>, config: ServerConfig) -> Self
    where
        S: RecipientStore + RoleDirectory + AccountStore + 'static,
    {
        Self {
            payouts: PayoutService::new(store.clone(), store.clone()),
            roles: store.clone(),
            accounts: store,
            config: Arc::new(config),
        }
    }
}
