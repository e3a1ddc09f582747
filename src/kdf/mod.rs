//! Key derivation functions.
//!
//! Every algorithm declares its [`Capabilities`] statically. Requests are
//! checked against them by [`Capabilities::validate`] before the algorithm's
//! core runs, so the core only ever sees well-formed input.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde_derive")]
use serde::{Deserialize, Serialize};

use crate::errors::KdfError;

pub mod concat;

/// Static properties of a key derivation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
pub struct Capabilities {
    /// Whether the algorithm accepts a salt.
    pub supports_salt: bool,

    /// Longest output, in bytes, a single call may request.
    pub max_output_len: usize,
}

impl Capabilities {
    /// Check a request against these capabilities.
    ///
    /// An empty salt counts as no salt.
    pub fn validate(&self, salt: Option<&[u8]>, output_len: usize) -> Result<(), KdfError> {
        let has_salt = salt.map_or(false, |salt| !salt.is_empty());

        if has_salt && !self.supports_salt {
            tracing::debug!("rejected kdf request: salt is not supported");
            return Err(KdfError::SaltNotSupported);
        }

        if output_len > self.max_output_len {
            tracing::debug!(
                output_len,
                max_output_len = self.max_output_len,
                "rejected kdf request: output too long"
            );
            return Err(KdfError::InvalidLength);
        }

        Ok(())
    }
}

/// Caller-facing interface shared by key derivation algorithms.
pub trait KeyDerivationAlgorithm {
    const CAPABILITIES: Capabilities;

    /// Fill `okm` with keying material.
    ///
    /// Callers must have validated `okm.len()` against [`Self::CAPABILITIES`].
    /// Use [`Self::derive_bytes`] instead.
    ///
    /// # Panics
    ///
    /// Panics if `salt` is non-empty and the algorithm does not take one.
    fn derive_bytes_core(&self, ikm: &[u8], salt: &[u8], info: &[u8], okm: &mut [u8]);

    /// Validate the request and fill `okm` with keying material.
    ///
    /// Nothing is written to `okm` if validation fails.
    fn derive_bytes(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<(), KdfError> {
        Self::CAPABILITIES.validate(salt, okm.len())?;
        self.derive_bytes_core(ikm, salt.unwrap_or_default(), info, okm);

        Ok(())
    }

    /// Validate the request and return `output_len` bytes of keying material.
    fn derive_vec(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: &[u8],
        output_len: usize,
    ) -> Result<Vec<u8>, KdfError> {
        Self::CAPABILITIES.validate(salt, output_len)?;

        let mut okm = Vec::new();
        okm.try_reserve_exact(output_len)
            .or(Err(KdfError::AllocationFailed))?;
        okm.resize(output_len, 0);

        self.derive_bytes_core(ikm, salt.unwrap_or_default(), info, &mut okm);

        Ok(okm)
    }
}

#[cfg(test)]
mod tests {
    use super::Capabilities;
    use crate::errors::KdfError;

    const SALTLESS: Capabilities = Capabilities {
        supports_salt: false,
        max_output_len: 64,
    };

    #[test]
    fn it_should_accept_missing_or_empty_salt() {
        assert!(SALTLESS.validate(None, 64).is_ok());
        assert!(SALTLESS.validate(Some(&[]), 0).is_ok());
    }

    #[test]
    fn it_should_reject_salt_when_unsupported() {
        assert_eq!(
            SALTLESS.validate(Some(b"salt"), 32),
            Err(KdfError::SaltNotSupported)
        );

        let salted = Capabilities {
            supports_salt: true,
            ..SALTLESS
        };
        assert!(salted.validate(Some(b"salt"), 32).is_ok());
    }

    #[test]
    fn it_should_reject_long_output() {
        assert_eq!(SALTLESS.validate(None, 65), Err(KdfError::InvalidLength));
    }

    #[test]
    fn it_should_report_salt_before_length() {
        assert_eq!(
            SALTLESS.validate(Some(b"salt"), usize::MAX),
            Err(KdfError::SaltNotSupported)
        );
    }

    #[cfg(feature = "serde_derive")]
    #[test]
    fn test_capabilities_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &SALTLESS,
            &[
                Token::Struct {
                    name: "Capabilities",
                    len: 2,
                },
                Token::Str("supports_salt"),
                Token::Bool(false),
                Token::Str("max_output_len"),
                Token::U64(64),
                Token::StructEnd,
            ],
        );
    }
}
