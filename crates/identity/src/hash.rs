// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use sha3::Digest;

/// Keccak-256, the ledger's addressing hash. Legacy Keccak padding, not
/// NIST SHA-3.
pub trait Keccak256 {
    fn keccak256(&self) -> [u8; 32];
}

impl<T: AsRef<[u8]>> Keccak256 for T {
    #[inline]
    fn keccak256(&self) -> [u8; 32] {
        let mut h = sha3::Keccak256::new();
        h.update(self);
        h.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn keccak256_empty_input() {
        assert_eq!(
            b"".keccak256(),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn keccak256_known_vector() {
        assert_eq!(
            b"hello".keccak256(),
            hex!("1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8")
        );
    }

    #[test]
    fn keccak256_differs_from_repeated_input() {
        assert_ne!(b"hello".keccak256(), b"hellohello".keccak256());
    }
}
