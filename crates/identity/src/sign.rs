// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use p256::ecdsa::signature::{Signer, Verifier as P256Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

use crate::keys::{PrivateKey, PublicKey};

pub const SIGNATURE_SIZE: usize = 32 * 2;

/// Raw `r || s` concatenation, big-endian. The wire encoding for both
/// signing and verification; no ASN.1 framing.
pub type SignatureBytes = [u8; SIGNATURE_SIZE];

/// ECDSA over secp256r1 with SHA-256 as the digest function. Nonces are
/// RFC 6979 deterministic, so signing holds no mutable state and is safe
/// to invoke concurrently.
pub trait Secp256r1Sign {
    fn secp256r1_sign<T: AsRef<[u8]>>(&self, data: T) -> Result<SignatureBytes, SignError>;
}

pub trait Secp256r1Verify {
    fn secp256r1_verify<T: AsRef<[u8]>>(
        &self,
        data: T,
        sign: &SignatureBytes,
    ) -> Result<(), VerifyError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignError {
    #[error("ecdsa: invalid private key")]
    InvalidKey,

    #[error("ecdsa: signing failed")]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("ecdsa: invalid public key")]
    InvalidKey,

    #[error("ecdsa: malformed signature encoding")]
    Malformed,

    #[error("ecdsa: signature does not match")]
    Mismatch,
}

impl Secp256r1Sign for PrivateKey {
    fn secp256r1_sign<T: AsRef<[u8]>>(&self, data: T) -> Result<SignatureBytes, SignError> {
        let sk: SigningKey = p256::SecretKey::from_slice(self.as_be_bytes())
            .map(|key| key.into())
            .map_err(|_err| SignError::InvalidKey)?;

        let sign: Signature = sk.try_sign(data.as_ref()).map_err(|_err| SignError::Failed)?;

        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes.copy_from_slice(&sign.to_bytes()); // big endian r || s
        Ok(bytes)
    }
}

impl Secp256r1Verify for PublicKey {
    #[inline]
    fn secp256r1_verify<T: AsRef<[u8]>>(
        &self,
        data: T,
        sign: &SignatureBytes,
    ) -> Result<(), VerifyError> {
        let sign = Signature::try_from(sign.as_ref()).map_err(|_err| VerifyError::Malformed)?;
        VerifyingKey::from_sec1_bytes(&self.to_uncompressed())
            .map_err(|_err| VerifyError::InvalidKey)?
            .verify(data.as_ref(), &sign)
            .map_err(|_err| VerifyError::Mismatch)
    }
}
