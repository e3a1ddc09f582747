//! SHA-512 hash.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use cryptraits::{convert::Len, hash::Hash as HashTrait};
use sha2::Digest;
use zeroize::Zeroize;

/// Incremental SHA-512 session.
#[derive(Clone, Zeroize)]
pub struct Hash(#[zeroize(skip)] sha2::Sha512);

impl HashTrait for Hash {
    fn new() -> Self {
        Self(sha2::Sha512::new())
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
    const LEN: usize = 64;
}

#[cfg(test)]
mod tests {
    use cryptraits::{convert::Len, hash::Hash as _};

    use super::Hash;

    #[test]
    fn test_sha512_abc() {
        let mut hash = Hash::new();
        hash.update(b"abc");

        let expected = hex::decode(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        )
        .unwrap();

        assert_eq!(hash.finalize(), expected);
        assert_eq!(expected.len(), <Hash as Len>::LEN);
    }
}
