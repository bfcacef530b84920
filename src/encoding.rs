//! Text-to-byte encoders
//!
//! Both digest engines operate on bytes, but their callers hold text. This
//! module turns text into the exact byte sequence each engine hashes.
//!
//! Text is seen as a sequence of UTF-16 code units, which is how the
//! hashing panel stores its input. Two encodings exist:
//!
//! - `Utf8`: code units are re-assembled into code points and emitted as
//!   UTF-8. This is what SHA-256 hashes.
//! - `LowByte`: every code unit is truncated to its low 8 bits. This is what
//!   MD5 hashes, so non-ASCII text does not match a conformant MD5 tool.
//!
//! For a `&str` (always well-formed) the `Utf8` encoding is exactly the
//! string's own bytes.

/// Byte encoding applied to text before hashing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Standard UTF-8. Surrogate halves are paired without validation.
    Utf8,
    /// Low byte of each UTF-16 code unit.
    LowByte,
}

impl TextEncoding {
    /// Encodes a string.
    pub fn encode_str(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::LowByte => text.encode_utf16().map(|unit| unit as u8).collect(),
        }
    }

    /// Encodes raw UTF-16 code units, which may be ill-formed.
    pub fn encode_utf16(self, units: &[u16]) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => utf8_from_units(units),
            TextEncoding::LowByte => units.iter().map(|&unit| unit as u8).collect(),
        }
    }
}

/// Re-encodes UTF-16 code units as UTF-8.
///
/// Any unit in `0xD800..=0xDFFF` opens a surrogate pair and swallows the
/// following unit, whatever it is. A trailing opener pairs with zero. The
/// output for ill-formed input is therefore not valid UTF-8, but it is the
/// byte sequence the hashing panel digests.
pub fn utf8_from_units(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len() * 3);
    let mut i = 0;

    while i < units.len() {
        let code = units[i] as u32;

        if code < 0x80 {
            out.push(code as u8);
        } else if code < 0x800 {
            out.push(0xc0 | (code >> 6) as u8);
            out.push(0x80 | (code & 0x3f) as u8);
        } else if !(0xd800..0xe000).contains(&code) {
            out.push(0xe0 | (code >> 12) as u8);
            out.push(0x80 | ((code >> 6) & 0x3f) as u8);
            out.push(0x80 | (code & 0x3f) as u8);
        } else {
            i += 1;
            let low = units.get(i).copied().unwrap_or(0) as u32;
            let point = 0x10000 + (((code & 0x3ff) << 10) | (low & 0x3ff));

            out.push(0xf0 | (point >> 18) as u8);
            out.push(0x80 | ((point >> 12) & 0x3f) as u8);
            out.push(0x80 | ((point >> 6) & 0x3f) as u8);
            out.push(0x80 | (point & 0x3f) as u8);
        }

        i += 1;
    }

    out
}
