//! Primitive types
//!
//! Fixed-size values produced by the hash engines. `Digest<N>` owns the
//! byte order and hexadecimal serialization of a final hash state, so the
//! engines never format text themselves.

mod digest;

pub use digest::{Digest, Digest128, Digest256, ParseDigestError};
