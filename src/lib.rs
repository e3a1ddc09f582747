//! Concatenation key derivation function (NIST SP 800-56A, section 5.8).
//!
//! ```
//! use concatkdf::kdf::concat::ConcatKdfSha256;
//!
//! let kdf = ConcatKdfSha256::new();
//! let okm = kdf.derive(b"shared secret", b"context", 48).unwrap();
//!
//! assert_eq!(okm.len(), 48);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod errors;
pub mod hash;
pub mod kdf;
