//! Fixed-size digest values
//!
//! A `Digest<N>` is the serialized final state of a hash engine: `N` bytes
//! in the order the algorithm emits them. Its textual form is always
//! lowercase hexadecimal, two characters per byte, with no separators.

use std::fmt::{self, Display, Formatter, LowerHex};
use std::str::FromStr;

/// Fixed-size hash output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest<const N: usize>(pub(crate) [u8; N]);

/// 128-bit digest (MD5).
pub type Digest128 = Digest<16>;

/// 256-bit digest (SHA-256).
pub type Digest256 = Digest<32>;

/// Errors returned when parsing a digest from hexadecimal text.
#[derive(Debug, PartialEq)]
pub enum ParseDigestError {
    /// The text does not have exactly two characters per digest byte.
    InvalidLength { expected: usize, found: usize },
    /// The text contains a character outside `[0-9a-fA-F]`.
    InvalidHex(hex::FromHexError),
}

impl<const N: usize> Digest<N> {
    /// Digest size in bytes.
    pub const LEN: usize = N;

    /// Length of the hexadecimal form.
    pub const HEX_LEN: usize = N * 2;

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Returns the lowercase hexadecimal form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Number of bit positions at which the two digests differ.
    pub fn bit_distance(&self, other: &Self) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(l, r)| (l ^ r).count_ones())
            .sum()
    }

    /// Number of hexadecimal characters at which the two digests differ.
    pub fn hex_distance(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(l, r)| {
                let x = l ^ r;
                usize::from(x & 0xf0 != 0) + usize::from(x & 0x0f != 0)
            })
            .sum()
    }
}

impl Digest256 {
    /// Serializes eight state words, each in big-endian order.
    pub fn from_be_words(words: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        Digest(out)
    }
}

impl Digest128 {
    /// Serializes four state words, each in little-endian order.
    pub fn from_le_words(words: [u32; 4]) -> Self {
        let mut out = [0u8; 16];

        for (chunk, v) in out.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }

        Digest(out)
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(value: [u8; N]) -> Self {
        Digest(value)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(value: Digest<N>) -> Self {
        value.0
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Display for Digest<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl<const N: usize> LowerHex for Digest<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const N: usize> FromStr for Digest<N> {
    type Err = ParseDigestError;

    /// Parses `2 * N` hexadecimal characters. Upper case is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != N * 2 {
            return Err(ParseDigestError::InvalidLength {
                expected: N * 2,
                found: s.len(),
            });
        }

        let mut out = [0u8; N];
        hex::decode_to_slice(s, &mut out)?;

        Ok(Digest(out))
    }
}

impl From<hex::FromHexError> for ParseDigestError {
    fn from(err: hex::FromHexError) -> Self {
        ParseDigestError::InvalidHex(err)
    }
}

impl Display for ParseDigestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseDigestError::InvalidLength { expected, found } => {
                write!(f, "expected {} hex characters, found {}", expected, found)
            }
            ParseDigestError::InvalidHex(e) => write!(f, "invalid hex digest: {}", e),
        }
    }
}

impl std::error::Error for ParseDigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseDigestError::InvalidHex(e) => Some(e),
            ParseDigestError::InvalidLength { .. } => None,
        }
    }
}
