// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::sync::Arc;

use p256::elliptic_curve::rand_core::{CryptoRng, RngCore};
use rand::rngs::OsRng;

use crate::address::Address;
use crate::error::IdentityError;
use crate::hash::Keccak256;
use crate::keys::{Keypair, PrivateKey, PublicKey};
use crate::observer::{NullObserver, VerifyDiagnostic, VerifyObserver};
use crate::sign::{Secp256r1Sign, Secp256r1Verify, SignatureBytes};

/// The simulated TEE: a session identity holding one secp256r1 key pair
/// for the lifetime of the process.
///
/// Signing discipline: the message is hashed with Keccak-256 and the
/// digest is then signed with ECDSA/SHA-256. Verification recomputes the
/// same digest, so both sides of the wire contract agree. All operations
/// take `&self` and the signer is reentrant, so a `TeeIdentity` may be
/// shared across threads without locking.
pub struct TeeIdentity {
    keypair: Keypair,
    address: Address,
    observer: Arc<dyn VerifyObserver>,
}

impl TeeIdentity {
    /// Generates a fresh identity from the OS random source.
    pub fn generate() -> Result<Self, IdentityError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates an identity from a caller-supplied random source.
    pub fn generate_with<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, IdentityError> {
        Ok(Self::from_keypair(Keypair::generate(rng)?))
    }

    /// Rebuilds an identity from externally supplied key material. The
    /// derived address depends only on the public half, so two identities
    /// built from the same key are interchangeable for verification.
    pub fn from_private_key(private_key: PrivateKey) -> Result<Self, IdentityError> {
        Ok(Self::from_keypair(Keypair::from_private(private_key)?))
    }

    fn from_keypair(keypair: Keypair) -> Self {
        let address = Address::from_public_key(&keypair.public_key);
        Self {
            keypair,
            address,
            observer: Arc::new(NullObserver),
        }
    }

    /// Replaces the sink that receives verification-failure diagnostics.
    pub fn with_observer(mut self, observer: Arc<dyn VerifyObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The ledger address derived from the public key. Computed once at
    /// construction; stable for the lifetime of the identity.
    #[inline]
    pub fn address(&self) -> Address {
        self.address
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.keypair.public_key
    }

    /// Signs `message`: Keccak-256 first, then ECDSA/SHA-256 over the
    /// digest.
    pub fn sign(&self, message: &[u8]) -> Result<SignatureBytes, IdentityError> {
        let digest = message.keccak256();
        Ok(self.keypair.private_key.secp256r1_sign(digest)?)
    }

    /// Checks `signature` against this identity's own public key and the
    /// recomputed message digest.
    ///
    /// Rejection is a normal outcome, not an error: any mismatch or
    /// malformed signature yields `false`, with a structured diagnostic
    /// handed to the configured observer.
    pub fn verify(&self, message: &[u8], signature: &SignatureBytes) -> bool {
        let digest = message.keccak256();
        match self.keypair.public_key.secp256r1_verify(digest, signature) {
            Ok(()) => true,
            Err(err) => {
                self.observer.verify_failed(&VerifyDiagnostic {
                    address: self.address,
                    message_len: message.len(),
                    failure: err.into(),
                });
                false
            }
        }
    }

    /// The public key as PEM-armored SubjectPublicKeyInfo, for handing to
    /// a remote verifier.
    pub fn export_public_key(&self) -> String {
        self.keypair.public_key.to_spki_pem()
    }

    /// The public key as SubjectPublicKeyInfo DER.
    pub fn export_public_key_der(&self) -> Vec<u8> {
        self.keypair.public_key.to_spki_der()
    }
}
