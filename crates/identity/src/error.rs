// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::keys::KeyError;
use crate::sign::SignError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    /// Fatal at construction; no identity exists without a key pair.
    #[error("identity: key generation: {0}")]
    KeyGeneration(#[from] KeyError),

    /// Primitive-level signing failure. Surfaced, never mistaken for a
    /// valid signature.
    #[error("identity: signing: {0}")]
    Signing(#[from] SignError),
}
