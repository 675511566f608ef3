use num_bigint::BigUint;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use tee_identity::Address;

use crate::call;
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::models::{RpcRequest, RpcResponse};

/// Read-only JSON-RPC client for the external ledger. Holds an HTTP
/// connection pool and the injected [`LedgerConfig`]; never touches key
/// material.
pub struct LedgerClient {
    http: Client,
    config: LedgerConfig,
}

impl LedgerClient {
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(http, config))
    }

    /// Builds the adapter around a caller-supplied HTTP client.
    pub fn with_client(http: Client, config: LedgerConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    async fn rpc(&self, method: &'static str, params: Value) -> Result<Value, LedgerError> {
        debug!(endpoint = %self.config.endpoint, method, "ledger rpc request");
        let request = RpcRequest::new(1, method, params);

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let response: RpcResponse = response
            .json()
            .await
            .map_err(|err| LedgerError::invalid_response(err.to_string()))?;

        if let Some(error) = response.error {
            return Err(LedgerError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response
            .result
            .ok_or_else(|| LedgerError::invalid_response("missing result field"))
    }

    /// Liveness probe of the configured endpoint. Boolean by design;
    /// callers branch, they do not catch.
    pub async fn is_connected(&self) -> bool {
        self.rpc("eth_chainId", json!([])).await.is_ok()
    }

    /// Balance of `account` per the ledger contract, via a read-only
    /// `eth_call` of [`BALANCE_FUNCTION`](crate::BALANCE_FUNCTION).
    pub async fn get_account_balance(&self, account: &Address) -> Result<BigUint, LedgerError> {
        let data = call::balance_call_data(account);
        let params = json!([
            {
                "to": self.config.contract.to_string(),
                "data": format!("0x{}", hex::encode(&data)),
            },
            "latest",
        ]);

        let result = self.rpc("eth_call", params).await?;
        let text = result
            .as_str()
            .ok_or_else(|| LedgerError::invalid_response("eth_call result is not a string"))?;
        let word = hex::decode(text.strip_prefix("0x").unwrap_or(text))
            .map_err(|_| LedgerError::invalid_response("eth_call result is not hex"))?;

        let balance = call::decode_uint256(&word)?;
        debug!(account = %account, %balance, "ledger balance");
        Ok(balance)
    }
}
