//! Crate custom errors.

use cryptraits_macros::Error;

/// KDF algorithm error.
#[derive(Debug, Error, PartialEq)]
pub enum KdfError {
    /// A salt was supplied to an algorithm that does not take one.
    SaltNotSupported,

    /// Requested output is longer than the algorithm can produce.
    InvalidLength,

    /// Output buffer could not be allocated.
    AllocationFailed,
}
