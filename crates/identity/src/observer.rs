// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Verification diagnostics.
//!
//! `TeeIdentity::verify` reports failures as a boolean, never as an error.
//! So that failures are still observable, the identity forwards a structured
//! diagnostic to an injected observer instead of logging directly.

use crate::address::Address;
use crate::sign::VerifyError;

/// Why a signature was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyFailure {
    /// The signature bytes are not a valid `r || s` encoding.
    MalformedSignature,
    /// Well-formed, but does not match this key and message.
    Mismatch,
}

impl From<VerifyError> for VerifyFailure {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Malformed => VerifyFailure::MalformedSignature,
            VerifyError::InvalidKey | VerifyError::Mismatch => VerifyFailure::Mismatch,
        }
    }
}

/// Structured record of one rejected verification.
#[derive(Debug, Clone)]
pub struct VerifyDiagnostic {
    /// Address of the identity that rejected the signature.
    pub address: Address,
    pub message_len: usize,
    pub failure: VerifyFailure,
}

pub trait VerifyObserver: Send + Sync {
    fn verify_failed(&self, diagnostic: &VerifyDiagnostic);
}

/// Drops diagnostics. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl VerifyObserver for NullObserver {
    fn verify_failed(&self, _diagnostic: &VerifyDiagnostic) {}
}

/// Forwards diagnostics to the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl VerifyObserver for TracingObserver {
    fn verify_failed(&self, diagnostic: &VerifyDiagnostic) {
        tracing::debug!(
            address = %diagnostic.address,
            message_len = diagnostic.message_len,
            failure = ?diagnostic.failure,
            "signature verification failed"
        );
    }
}
