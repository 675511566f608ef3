// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::Keccak256;
use crate::keys::PublicKey;

pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte ledger account identifier: the low-order 20 bytes of
/// `Keccak-256(uncompressed public key)`. Public, derived, immutable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    #[inline]
    pub fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_public_key(key: &PublicKey) -> Self {
        let digest = key.to_uncompressed().keccak256();
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&digest[32 - ADDRESS_SIZE..]);
        Self(bytes)
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != ADDRESS_SIZE {
            return Err(AddressError::InvalidLength);
        }
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address: expected 20 bytes")]
    InvalidLength,

    #[error("address: invalid hex encoding")]
    InvalidHex,
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.to_string()).finish()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw).map_err(|_| AddressError::InvalidHex)?;
        Self::from_slice(&bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Keypair;
    use rand::{rngs::StdRng, SeedableRng};

    fn keypair(seed: u64) -> Keypair {
        Keypair::generate(&mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn derivation_is_deterministic() {
        let pair = keypair(1);
        assert_eq!(
            Address::from_public_key(&pair.public_key),
            Address::from_public_key(&pair.public_key)
        );
    }

    #[test]
    fn derivation_keeps_low_twenty_bytes() {
        let pair = keypair(2);
        let digest = pair.public_key.to_uncompressed().keccak256();
        let address = Address::from_public_key(&pair.public_key);
        assert_eq!(address.as_bytes(), &digest[12..]);
    }

    #[test]
    fn distinct_keys_yield_distinct_addresses() {
        let a = Address::from_public_key(&keypair(3).public_key);
        let b = Address::from_public_key(&keypair(4).public_key);
        assert_ne!(a, b);
    }

    #[test]
    fn hex_display_roundtrip() {
        let address = Address::from_public_key(&keypair(5).public_key);
        let rendered = address.to_string();
        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered.len(), 2 + 2 * ADDRESS_SIZE);
        assert_eq!(rendered.parse::<Address>().unwrap(), address);
        // Without the 0x prefix as well.
        assert_eq!(rendered[2..].parse::<Address>().unwrap(), address);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("0x1234".parse::<Address>(), Err(AddressError::InvalidLength));
        assert_eq!(
            "zz".repeat(20).parse::<Address>(),
            Err(AddressError::InvalidHex)
        );
    }

    #[test]
    fn serde_roundtrip() {
        let address = Address::from_public_key(&keypair(6).public_key);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{address}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
