//! Hash primitives the KDFs are built on.

pub mod sha256;
pub mod sha512;
