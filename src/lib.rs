//! Text digests for the cryptography presentation
//!
//! This crate computes the MD5 and SHA-256 digests that the presentation's
//! hashing panel displays next to a text field. Both algorithms are
//! implemented from scratch and are bit-exact with their standards for
//! ASCII input.
//!
//! # Module overview
//!
//! - `encoding`
//!   Turns text into the bytes each engine hashes. SHA-256 reads UTF-8,
//!   MD5 reads the low byte of every UTF-16 code unit.
//!
//! - `hash`
//!   The two digest engines, the padding stage they share, and the
//!   `Algorithm` catalogue.
//!
//! - `primitives`
//!   `Digest<N>`, the fixed-size output value and its hexadecimal form.
//!
//! - `report`
//!   Both digests of one input, and the avalanche comparison of two.
//!
//! # Example
//!
//! ```rust
//! use textdigest::{md5_hex, sha256_hex};
//!
//! assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
//! assert_eq!(
//!     sha256_hex("abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Limits
//!
//! Every input produces a digest; there is no error path. The length field
//! is 32 bits wide for both algorithms, so messages of 2³² bits (512 MiB)
//! or more silently get non-standard digests. Whole messages are hashed at
//! once; there is no incremental interface.

pub mod encoding;
pub mod hash;
pub mod primitives;
pub mod report;

pub use encoding::TextEncoding;
pub use hash::{Algorithm, ParseAlgorithmError, md5_hex, md5_utf16, sha256_hex, sha256_utf16};
pub use primitives::{Digest, Digest128, Digest256, ParseDigestError};
pub use report::{AvalancheReport, DigestReport, avalanche};
