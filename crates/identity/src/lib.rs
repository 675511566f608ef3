// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Simulated TEE identity module.
//!
//! A [`TeeIdentity`] owns a secp256r1 key pair for the lifetime of the
//! process, derives a stable 20-byte ledger address from the public key
//! (Keccak-256 over the uncompressed encoding, low 20 bytes kept), signs
//! arbitrary messages, and verifies signatures against its own public key.
//!
//! No real isolation is modeled: "TEE" here means key custody only. There
//! is no attestation, no sealing, and no key rotation.

pub mod address;
pub mod error;
pub mod hash;
pub mod identity;
pub mod keys;
pub mod observer;
pub mod sign;

pub use address::{Address, AddressError, ADDRESS_SIZE};
pub use error::IdentityError;
pub use hash::Keccak256;
pub use identity::TeeIdentity;
pub use keys::{KeyError, Keypair, PrivateKey, PublicKey, KEY_SIZE};
pub use observer::{NullObserver, TracingObserver, VerifyDiagnostic, VerifyFailure, VerifyObserver};
pub use sign::{Secp256r1Sign, Secp256r1Verify, SignError, SignatureBytes, VerifyError, SIGNATURE_SIZE};
