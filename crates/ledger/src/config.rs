use std::time::Duration;

use serde::{Deserialize, Serialize};
use tee_identity::Address;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for one ledger endpoint, injected at client
/// construction. Nothing in this crate falls back to an ambient default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint of the ledger node.
    pub endpoint: Url,

    /// Contract exposing `getAccountBalance(address)`.
    pub contract: Address,

    /// Per-request timeout.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl LedgerConfig {
    pub fn new(endpoint: Url, contract: Address) -> Self {
        Self {
            endpoint,
            contract,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
