//! Concatenation KDF (NIST SP 800-56A, section 5.8).
//!
//! Output is the concatenation of `H(counter || ikm || info)` for
//! `counter = 1, 2, ...` encoded as big-endian `u32`, truncated to the
//! requested length. No salt is used.

use core::{fmt, marker::PhantomData};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use cryptraits::{convert::Len, hash::Hash, kdf::Kdf as KdfTrait};
use zeroize::{Zeroize, Zeroizing};

use super::{Capabilities, KeyDerivationAlgorithm};
use crate::errors::KdfError;

/// Concat KDF over SHA-256.
pub type ConcatKdfSha256 = ConcatKdf<crate::hash::sha256::Hash>;

/// Concat KDF over SHA-512.
pub type ConcatKdfSha512 = ConcatKdf<crate::hash::sha512::Hash>;

/// Longest output for a digest of `digest_len` bytes.
///
/// The standard allows `digest_len * (2^32 - 1)` bytes. Output must also fit
/// in a single allocation, so the result is capped at `isize::MAX`.
pub const fn max_output_len(digest_len: usize) -> usize {
    let standard = digest_len.saturating_mul(u32::MAX as usize);

    if standard < isize::MAX as usize {
        standard
    } else {
        isize::MAX as usize
    }
}

/// Stateless Concat KDF engine.
pub struct ConcatKdf<H>(PhantomData<fn() -> H>);

impl<H> ConcatKdf<H> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<H> Default for ConcatKdf<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for ConcatKdf<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for ConcatKdf<H> {}

impl<H> fmt::Debug for ConcatKdf<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConcatKdf")
    }
}

impl<H> ConcatKdf<H>
where
    H: Hash + Len,
{
    /// Derive `output_len` bytes from `ikm` and `info`.
    pub fn derive(&self, ikm: &[u8], info: &[u8], output_len: usize) -> Result<Vec<u8>, KdfError> {
        self.derive_vec(ikm, None, info, output_len)
    }
}

impl<H> KeyDerivationAlgorithm for ConcatKdf<H>
where
    H: Hash + Len,
{
    const CAPABILITIES: Capabilities = Capabilities {
        supports_salt: false,
        max_output_len: max_output_len(H::LEN),
    };

    fn derive_bytes_core(&self, ikm: &[u8], salt: &[u8], info: &[u8], okm: &mut [u8]) {
        assert!(salt.is_empty(), "concat kdf does not take a salt");

        if okm.is_empty() {
            return;
        }

        tracing::trace!(
            output_len = okm.len(),
            rounds = (okm.len() + H::LEN - 1) / H::LEN,
            "concat kdf derive"
        );

        let mut output = OutputGuard::new(okm);
        let mut counter: u32 = 0;

        for chunk in output.okm.chunks_mut(H::LEN) {
            counter = counter.wrapping_add(1);
            debug_assert_ne!(counter, 0, "round counter wrapped");

            let mut hash = H::new();
            hash.update(&counter.to_be_bytes());
            hash.update(ikm);
            hash.update(info);

            let digest = Zeroizing::new(hash.finalize());
            chunk.copy_from_slice(&digest[..chunk.len()]);
        }

        output.complete();
    }
}

/// Wipes the output buffer unless the derivation ran to completion.
struct OutputGuard<'a> {
    okm: &'a mut [u8],
    complete: bool,
}

impl<'a> OutputGuard<'a> {
    fn new(okm: &'a mut [u8]) -> Self {
        Self {
            okm,
            complete: false,
        }
    }

    fn complete(&mut self) {
        self.complete = true;
    }
}

impl Drop for OutputGuard<'_> {
    fn drop(&mut self) {
        if !self.complete {
            self.okm.zeroize();
        }
    }
}

/// Concat KDF bound to a copy of its input keying material.
pub struct Kdf<H>
where
    H: Hash + Len,
{
    ikm: Vec<u8>,

    _hash: PhantomData<fn() -> H>,
}

impl<H> Zeroize for Kdf<H>
where
    H: Hash + Len,
{
    fn zeroize(&mut self) {
        self.ikm.zeroize();
    }
}

impl<H> Drop for Kdf<H>
where
    H: Hash + Len,
{
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<H> KdfTrait for Kdf<H>
where
    H: Hash + Len,
{
    type E = KdfError;

    /// # Panics
    ///
    /// Panics if `salt` is non-empty. Concat KDF takes no salt.
    fn new(salt: Option<&[u8]>, data: &[u8]) -> Self {
        assert!(
            salt.map_or(true, |salt| salt.is_empty()),
            "concat kdf does not take a salt"
        );

        Self {
            ikm: Vec::from(data),
            _hash: PhantomData,
        }
    }

    fn expand(&self, info: &[u8], okm: &mut [u8]) -> Result<(), Self::E> {
        ConcatKdf::<H>::new().derive_bytes(&self.ikm, None, info, okm)
    }
}
