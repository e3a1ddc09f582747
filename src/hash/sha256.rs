//! SHA-256 hash.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use cryptraits::{convert::Len, hash::Hash as HashTrait};
use sha2::Digest;
use zeroize::Zeroize;

/// Incremental SHA-256 session.
#[derive(Clone, Zeroize)]
pub struct Hash(#[zeroize(skip)] sha2::Sha256);

impl HashTrait for Hash {
    fn new() -> Self {
        Self(sha2::Sha256::new())
    }

    fn update(&mut self, data: &[u8]) {
        self.0.update(data)
    }

    fn finalize(self) -> Vec<u8> {
        let mut out = self.0.finalize();
        let digest = out.to_vec();
        out.as_mut_slice().zeroize();

        digest
    }
}

impl Len for Hash {
    const LEN: usize = 32;
}

#[cfg(test)]
mod tests {
    use cryptraits::{convert::Len, hash::Hash as _};
    use hex_literal::hex;

    use super::Hash;

    #[test]
    fn test_sha256_abc() {
        let mut hash = Hash::new();
        hash.update(b"a");
        hash.update(b"bc");

        assert_eq!(
            hash.finalize(),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn test_sha256_len_matches_digest() {
        assert_eq!(Hash::new().finalize().len(), <Hash as Len>::LEN);
    }
}
