//! Merkle–Damgård padding shared by MD5 and SHA-256.
//!
//! Both algorithms pad the same way: a single `0x80` byte, zeros up to
//! 56 mod 64, then an 8-byte length field. They only disagree on the byte
//! order of that field.
//!
//! The length field carries 32 significant bits. Messages of 2³² bits
//! (512 MiB) or more are hashed with a truncated length and do not match
//! standard digests; interactive text never gets close.

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Offset of the length field inside the final block.
const LENGTH_OFFSET: usize = 56;

/// Byte order of the trailing length field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LengthOrder {
    /// SHA-256: low 32 bits in the last four bytes, big-endian.
    BigEndian,
    /// MD5: low 32 bits in the first four bytes, little-endian.
    LittleEndian,
}

/// Pads `bytes` to a multiple of [`BLOCK_LEN`].
///
/// `bit_len` is the length of the message before padding, in bits.
pub fn pad(mut bytes: Vec<u8>, bit_len: u64, order: LengthOrder) -> Vec<u8> {
    bytes.push(0x80);

    let zeros = (BLOCK_LEN + LENGTH_OFFSET - bytes.len() % BLOCK_LEN) % BLOCK_LEN;
    bytes.resize(bytes.len() + zeros, 0);

    let truncated = bit_len as u32;
    let mut field = [0u8; 8];

    match order {
        LengthOrder::BigEndian => field[4..].copy_from_slice(&truncated.to_be_bytes()),
        LengthOrder::LittleEndian => field[..4].copy_from_slice(&truncated.to_le_bytes()),
    }

    bytes.extend_from_slice(&field);
    bytes
}

/// Iterates over the 64-byte blocks of a padded message.
///
/// A trailing partial block is ignored; padded input never has one.
pub fn blocks(padded: &[u8]) -> impl Iterator<Item = &[u8; BLOCK_LEN]> {
    padded
        .chunks_exact(BLOCK_LEN)
        .filter_map(|chunk| <&[u8; BLOCK_LEN]>::try_from(chunk).ok())
}
