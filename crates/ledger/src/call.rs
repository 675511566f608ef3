//! Call-data layout for the ledger's balance entry point.

use num_bigint::BigUint;
use tee_identity::{Address, Keccak256, ADDRESS_SIZE};

use crate::error::LedgerError;

/// ABI signature of the ledger's read-only balance function.
pub const BALANCE_FUNCTION: &str = "getAccountBalance(address)";

const SELECTOR_SIZE: usize = 4;
const WORD_SIZE: usize = 32;

/// `selector || address left-padded to one 32-byte word`.
pub fn balance_call_data(account: &Address) -> Vec<u8> {
    let selector = BALANCE_FUNCTION.keccak256();
    let mut data = Vec::with_capacity(SELECTOR_SIZE + WORD_SIZE);
    data.extend_from_slice(&selector[..SELECTOR_SIZE]);
    data.extend_from_slice(&[0u8; WORD_SIZE - ADDRESS_SIZE]);
    data.extend_from_slice(account.as_bytes());
    data
}

/// Decodes one big-endian `uint256` return word.
pub fn decode_uint256(word: &[u8]) -> Result<BigUint, LedgerError> {
    if word.len() != WORD_SIZE {
        return Err(LedgerError::invalid_response(format!(
            "expected a 32-byte uint256 word, got {} bytes",
            word.len()
        )));
    }
    Ok(BigUint::from_bytes_be(word))
}
