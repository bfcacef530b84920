use textdigest::TextEncoding;
use textdigest::encoding::utf8_from_units;

fn units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

#[test]
fn utf8_matches_std_for_well_formed_text() {
    for text in ["", "abc", "héllo", "Привет", "日本語", "😀", "a😀b\u{7ff}\u{800}\u{ffff}"] {
        assert_eq!(utf8_from_units(&units(text)), text.as_bytes(), "{:?}", text);
        assert_eq!(TextEncoding::Utf8.encode_str(text), text.as_bytes());
    }
}

#[test]
fn utf8_byte_widths() {
    assert_eq!(utf8_from_units(&[0x7f]), [0x7f]);
    assert_eq!(utf8_from_units(&[0x80]), [0xc2, 0x80]);
    assert_eq!(utf8_from_units(&[0x7ff]), [0xdf, 0xbf]);
    assert_eq!(utf8_from_units(&[0x800]), [0xe0, 0xa0, 0x80]);
    assert_eq!(utf8_from_units(&[0xe000]), [0xee, 0x80, 0x80]);
    assert_eq!(utf8_from_units(&[0xd83d, 0xde00]), [0xf0, 0x9f, 0x98, 0x80]);
}

#[test]
fn utf8_high_surrogate_swallows_next_unit() {
    // 'a' after the opener is consumed as if it were a low surrogate
    assert_eq!(utf8_from_units(&[0xd83d, 0x61]), [0xf0, 0x9f, 0x91, 0xa1]);
}

#[test]
fn utf8_trailing_high_surrogate_pairs_with_zero() {
    assert_eq!(utf8_from_units(&[0x61, 0xd83d]), [0x61, 0xf0, 0x9f, 0x90, 0x80]);
}

#[test]
fn utf8_lone_low_surrogate_opens_a_pair() {
    assert_eq!(utf8_from_units(&[0xde00, 0x61]), [0xf2, 0x90, 0x81, 0xa1]);
}

#[test]
fn low_byte_keeps_one_byte_per_unit() {
    assert_eq!(TextEncoding::LowByte.encode_str("héllo"), [104, 233, 108, 108, 111]);
    assert_eq!(TextEncoding::LowByte.encode_str("Привет"), [31, 64, 56, 50, 53, 66]);
    assert_eq!(TextEncoding::LowByte.encode_str("a😀b"), [97, 61, 0, 98]);
    assert_eq!(TextEncoding::LowByte.encode_utf16(&[0x1234, 0xd800]), [0x34, 0x00]);
}

#[test]
fn empty_text_encodes_to_no_bytes() {
    for encoding in [TextEncoding::Utf8, TextEncoding::LowByte] {
        assert!(encoding.encode_str("").is_empty());
        assert!(encoding.encode_utf16(&[]).is_empty());
    }
}

#[test]
fn encodings_agree_on_ascii() {
    let text = "The quick brown fox jumps over the lazy dog";
    assert_eq!(
        TextEncoding::Utf8.encode_str(text),
        TextEncoding::LowByte.encode_str(text)
    );
}
