use thiserror::Error;

/// Adapter-layer failures. These stay on the REE side; nothing here ever
/// crosses into the identity module's contract.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger: transport: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ledger: rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("ledger: invalid response: {0}")]
    InvalidResponse(String),
}

impl LedgerError {
    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
