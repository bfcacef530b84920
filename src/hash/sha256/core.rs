//! SHA-256 core hashing functions
//!
//! This module drives the SHA-256 pipeline: it pads the encoded message,
//! feeds each 512-bit block through the compression function and
//! serializes the final state in big-endian order.

use super::H256_INIT;
use super::computations::{all_rounds, expand};
use crate::encoding::TextEncoding;
use crate::hash::padding::{BLOCK_LEN, LengthOrder, blocks, pad};
use crate::primitives::Digest256;

/// Compresses a single 512-bit message block into `state`.
///
/// Input words are read big-endian and expanded to the full 64-word
/// schedule before the rounds run.
#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut words = [0u32; 16];

    for (slot, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, &expand(&words));
}

/// Computes the SHA-256 digest of a byte message.
///
/// # Notes
/// - The length field only holds the low 32 bits of the bit length, so
///   messages of 512 MiB or more do not produce standard digests.
/// - The message is copied once into the padded buffer.
pub fn sha256(input: &[u8]) -> Digest256 {
    let padded = pad(input.to_vec(), (input.len() as u64) << 3, LengthOrder::BigEndian);
    let mut state = H256_INIT;

    for block in blocks(&padded) {
        compress(block, &mut state);
    }

    log::trace!(
        "sha256: {} message bytes, {} blocks",
        input.len(),
        padded.len() / BLOCK_LEN
    );

    Digest256::from_be_words(state)
}

/// Hashes text with an explicit byte encoding.
pub fn sha256_with_encoding(message: &str, encoding: TextEncoding) -> Digest256 {
    sha256(&encoding.encode_str(message))
}

/// SHA-256 of a string's UTF-8 bytes, as 64 lowercase hex characters.
pub fn sha256_hex(message: &str) -> String {
    sha256(message.as_bytes()).to_hex()
}

/// SHA-256 of UTF-16 code units, re-encoded as UTF-8 without validation.
pub fn sha256_utf16(units: &[u16]) -> String {
    sha256(&TextEncoding::Utf8.encode_utf16(units)).to_hex()
}
