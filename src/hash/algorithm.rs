//! Catalogue of the digest algorithms the crate can display.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::encoding::TextEncoding;
use crate::hash::md5::core::md5;
use crate::hash::sha256::core::sha256;

/// A supported digest algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha256,
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAlgorithmError {
    /// The name matches no supported algorithm.
    Unknown(String),
}

impl Algorithm {
    /// Every supported algorithm, weakest first.
    pub const ALL: [Algorithm; 2] = [Algorithm::Md5, Algorithm::Sha256];

    /// Display name, e.g. `SHA-256`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha256 => "SHA-256",
        }
    }

    pub const fn output_bits(self) -> usize {
        match self {
            Algorithm::Md5 => 128,
            Algorithm::Sha256 => 256,
        }
    }

    /// Length of the hexadecimal digest.
    pub const fn hex_len(self) -> usize {
        self.output_bits() / 4
    }

    /// Whether the algorithm is still considered collision resistant.
    pub const fn is_secure(self) -> bool {
        match self {
            Algorithm::Md5 => false,
            Algorithm::Sha256 => true,
        }
    }

    /// Encoding applied to text before hashing.
    pub const fn default_encoding(self) -> TextEncoding {
        match self {
            Algorithm::Md5 => TextEncoding::LowByte,
            Algorithm::Sha256 => TextEncoding::Utf8,
        }
    }

    /// Hashes raw bytes and returns the lowercase hex digest.
    pub fn digest_bytes(self, bytes: &[u8]) -> String {
        match self {
            Algorithm::Md5 => md5(bytes).to_hex(),
            Algorithm::Sha256 => sha256(bytes).to_hex(),
        }
    }

    /// Hashes text with the algorithm's default encoding.
    pub fn digest_text(self, message: &str) -> String {
        self.digest_bytes(&self.default_encoding().encode_str(message))
    }

    /// Hashes UTF-16 code units with the algorithm's default encoding.
    pub fn digest_utf16(self, units: &[u16]) -> String {
        self.digest_bytes(&self.default_encoding().encode_utf16(units))
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `md5`, `sha256` and `sha-256`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            _ => Err(ParseAlgorithmError::Unknown(s.to_string())),
        }
    }
}

impl Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseAlgorithmError::Unknown(name) => write!(f, "unknown hash algorithm: {:?}", name),
        }
    }
}

impl std::error::Error for ParseAlgorithmError {}
