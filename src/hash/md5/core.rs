use super::MD5_INIT;
use super::computations::all_rounds;
use crate::encoding::TextEncoding;
use crate::hash::padding::{BLOCK_LEN, LengthOrder, blocks, pad};
use crate::primitives::Digest128;

/// Compresses a single 512-bit block into `state`.
///
/// The block is read as sixteen little-endian words; there is no message
/// expansion, each step indexes the words directly.
#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 4]) {
    let mut m = [0u32; 16];

    for (slot, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, &m);
}

/// Computes the MD5 digest of a byte message.
///
/// The bit length is stored as a 32-bit little-endian count, which wraps
/// for messages of 512 MiB or more.
pub fn md5(input: &[u8]) -> Digest128 {
    let padded = pad(input.to_vec(), (input.len() as u64) << 3, LengthOrder::LittleEndian);
    let mut state = MD5_INIT;

    for block in blocks(&padded) {
        compress(block, &mut state);
    }

    log::trace!(
        "md5: {} message bytes, {} blocks",
        input.len(),
        padded.len() / BLOCK_LEN
    );

    Digest128::from_le_words(state)
}

/// Hashes text with an explicit byte encoding.
///
/// `TextEncoding::Utf8` gives the digest any conformant MD5 tool prints.
pub fn md5_with_encoding(message: &str, encoding: TextEncoding) -> Digest128 {
    md5(&encoding.encode_str(message))
}

/// MD5 of a string's low-byte encoding, as 32 lowercase hex characters.
///
/// ASCII input yields the standard digest.
pub fn md5_hex(message: &str) -> String {
    md5_with_encoding(message, TextEncoding::LowByte).to_hex()
}

/// MD5 of the low bytes of UTF-16 code units.
pub fn md5_utf16(units: &[u16]) -> String {
    md5(&TextEncoding::LowByte.encode_utf16(units)).to_hex()
}
