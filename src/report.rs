//! Side-by-side digests for the hashing panel.
//!
//! The panel shows the MD5 and SHA-256 digests of the same input and
//! recomputes both on every change. It also contrasts two inputs to show
//! the avalanche effect.

use crate::hash::Algorithm;
use crate::hash::md5::core::md5_with_encoding;
use crate::hash::sha256::core::sha256_with_encoding;
use crate::primitives::{Digest128, Digest256};

/// Both digests of one message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DigestReport {
    pub md5: Digest128,
    pub sha256: Digest256,
}

impl DigestReport {
    /// Computes both digests, each with its algorithm's default encoding.
    pub fn compute(message: &str) -> Self {
        DigestReport {
            md5: md5_with_encoding(message, Algorithm::Md5.default_encoding()),
            sha256: sha256_with_encoding(message, Algorithm::Sha256.default_encoding()),
        }
    }

    /// Like [`compute`](Self::compute), but an empty message yields `None`:
    /// the panel shows nothing rather than the digests of "".
    pub fn for_text(message: &str) -> Option<Self> {
        if message.is_empty() {
            return None;
        }

        Some(Self::compute(message))
    }

    /// Hex digest for one algorithm.
    pub fn hex(&self, algorithm: Algorithm) -> String {
        match algorithm {
            Algorithm::Md5 => self.md5.to_hex(),
            Algorithm::Sha256 => self.sha256.to_hex(),
        }
    }
}

/// Digests of two messages, compared bit by bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AvalancheReport {
    pub before: DigestReport,
    pub after: DigestReport,
}

impl AvalancheReport {
    /// Number of output bits that differ.
    pub fn changed_bits(&self, algorithm: Algorithm) -> u32 {
        match algorithm {
            Algorithm::Md5 => self.before.md5.bit_distance(&self.after.md5),
            Algorithm::Sha256 => self.before.sha256.bit_distance(&self.after.sha256),
        }
    }

    /// Number of hex characters that differ.
    pub fn changed_hex_chars(&self, algorithm: Algorithm) -> usize {
        match algorithm {
            Algorithm::Md5 => self.before.md5.hex_distance(&self.after.md5),
            Algorithm::Sha256 => self.before.sha256.hex_distance(&self.after.sha256),
        }
    }

    /// Fraction of output bits that differ, in `0.0..=1.0`.
    pub fn bit_fraction(&self, algorithm: Algorithm) -> f64 {
        self.changed_bits(algorithm) as f64 / algorithm.output_bits() as f64
    }

    /// Fraction of hex characters that differ, in `0.0..=1.0`.
    pub fn hex_fraction(&self, algorithm: Algorithm) -> f64 {
        self.changed_hex_chars(algorithm) as f64 / algorithm.hex_len() as f64
    }
}

/// Hashes both messages with both algorithms.
pub fn avalanche(before: &str, after: &str) -> AvalancheReport {
    AvalancheReport {
        before: DigestReport::compute(before),
        after: DigestReport::compute(after),
    }
}
