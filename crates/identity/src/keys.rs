// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::fmt::{self, Debug, Formatter};

use p256::{
    elliptic_curve::{
        rand_core::{CryptoRng, RngCore},
        sec1::{FromEncodedPoint, ToEncodedPoint},
    },
    pkcs8::{EncodePublicKey, LineEnding},
    AffinePoint, EncodedPoint, PublicKey as P256PublicKey, SecretKey as P256SecretKey,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

pub const KEY_SIZE: usize = 32;

/// A secp256r1 scalar. Never leaves this crate in plaintext; the backing
/// buffer is zeroed on drop.
#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(bytes),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != KEY_SIZE {
            return Err(KeyError::InvalidPrivateKeyLength);
        }
        let mut buf = [0u8; KEY_SIZE];
        buf.copy_from_slice(slice);
        Ok(Self::new(buf))
    }

    #[inline]
    pub(crate) fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

/// An affine secp256r1 point, stored as big-endian coordinate bytes.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PublicKey {
    gx: [u8; KEY_SIZE],
    gy: [u8; KEY_SIZE],
}

impl PublicKey {
    #[inline]
    pub fn from_affine(point: AffinePoint) -> Self {
        let encoded = point.to_encoded_point(false);
        let mut gx = [0u8; KEY_SIZE];
        let mut gy = [0u8; KEY_SIZE];
        let x = encoded.x().expect("x coordinate");
        let y = encoded.y().expect("y coordinate");
        gx.copy_from_slice(x.as_ref());
        gy.copy_from_slice(y.as_ref());
        Self { gx, gy }
    }

    #[inline]
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        let point = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or(KeyError::InvalidPublicKey)?;
        Ok(Self::from_affine(point))
    }

    /// SEC1 uncompressed encoding, `0x04 || x || y`. This is the byte form
    /// the ledger address is derived from.
    #[inline]
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut buf = [0u8; 65];
        buf[0] = 0x04;
        buf[1..33].copy_from_slice(&self.gx);
        buf[33..].copy_from_slice(&self.gy);
        buf
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; 33] {
        let mut buf = [0u8; 33];
        buf[0] = 0x02 + (self.gy[KEY_SIZE - 1] & 0x01);
        buf[1..].copy_from_slice(&self.gx);
        buf
    }

    /// SubjectPublicKeyInfo DER, the interoperable export form.
    pub fn to_spki_der(&self) -> Vec<u8> {
        self.to_p256()
            .to_public_key_der()
            .expect("valid p256 point encodes as SubjectPublicKeyInfo")
            .as_bytes()
            .to_vec()
    }

    /// PEM-armored SubjectPublicKeyInfo.
    pub fn to_spki_pem(&self) -> String {
        self.to_p256()
            .to_public_key_pem(LineEnding::LF)
            .expect("valid p256 point encodes as SubjectPublicKeyInfo")
    }

    fn to_p256(&self) -> P256PublicKey {
        P256PublicKey::from_sec1_bytes(&self.to_uncompressed())
            .expect("stored coordinates form a valid curve point")
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &hex::encode(self.to_compressed()))
            .finish()
    }
}

#[derive(Clone)]
pub struct Keypair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    /// Draws key material from `rng`, rejection-sampling until the bytes
    /// land inside the curve order. Fails only if the random source does.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, KeyError> {
        loop {
            let mut seed = Zeroizing::new([0u8; KEY_SIZE]);
            rng.try_fill_bytes(seed.as_mut_slice())
                .map_err(|_| KeyError::RandomSource)?;
            if let Ok(secret) = P256SecretKey::from_slice(seed.as_slice()) {
                let public = p256_public_to_inner(secret.public_key());
                return Ok(Self {
                    private_key: PrivateKey::new(secret.to_bytes().into()),
                    public_key: public,
                });
            }
        }
    }

    #[inline]
    pub fn from_private(private_key: PrivateKey) -> Result<Self, KeyError> {
        let secret = P256SecretKey::from_slice(private_key.as_be_bytes())
            .map_err(|_| KeyError::InvalidPrivateKeyLength)?;
        let public = p256_public_to_inner(secret.public_key());
        Ok(Self {
            public_key: public,
            private_key,
        })
    }
}

#[derive(Debug, Copy, Clone, thiserror::Error)]
pub enum KeyError {
    #[error("keys: random source unavailable")]
    RandomSource,

    #[error("keys: invalid private key length")]
    InvalidPrivateKeyLength,

    #[error("keys: invalid public key encoding")]
    InvalidPublicKey,
}

fn p256_public_to_inner(public: P256PublicKey) -> PublicKey {
    let encoded = public.to_encoded_point(false);
    let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .expect("p256 public key must decode into affine point");
    PublicKey::from_affine(affine)
}
