//! Hash algorithms exposed by the crate.
//!
//! Includes pure-Rust MD5 and SHA-256 sharing one padding stage, and an
//! [`Algorithm`] catalogue for callers that pick the algorithm at runtime.

mod algorithm;
pub mod md5;
pub mod padding;
pub mod sha256;

pub use algorithm::{Algorithm, ParseAlgorithmError};

/// Re-export of the text-level convenience functions.
pub use md5::core::{md5_hex, md5_utf16};
pub use sha256::core::{sha256_hex, sha256_utf16};
