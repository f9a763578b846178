use std::sync::Arc;

use goofycoin::LedgerService;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state.
///
/// The ledger service sits behind one mutex, which is the single writer
/// for identity creation and every append.
pub struct AppState {
    pub service: Mutex<LedgerService>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let service = LedgerService::new(config.ledger_config());
        Arc::new(Self {
            service: Mutex::new(service),
            config,
        })
    }
}
