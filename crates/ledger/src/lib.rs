//! REE-side ledger query adapter.
//!
//! The rich execution environment holds no keys. It takes the address a
//! [`tee_identity::TeeIdentity`] derived and asks the external ledger for
//! that account's balance, through one read-only contract entry point:
//! `getAccountBalance(address) -> uint256`.
//!
//! Connection settings are injected through [`LedgerConfig`]; there is no
//! ambient default endpoint.

mod call;
mod client;
mod config;
mod error;
mod models;

pub use call::{balance_call_data, decode_uint256, BALANCE_FUNCTION};
pub use client::LedgerClient;
pub use config::{LedgerConfig, DEFAULT_TIMEOUT};
pub use error::LedgerError;
pub use models::{RpcRequest, RpcResponse, RpcResponseError};
