use textdigest::hash::md5::core::md5;
use textdigest::hash::sha256::core::sha256;
use textdigest::{Digest128, Digest256, ParseDigestError};

#[test]
fn digest_hex_forms_agree() {
    let digest = sha256(b"abc");
    let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    assert_eq!(digest.to_hex(), expected);
    assert_eq!(digest.to_string(), expected);
    assert_eq!(format!("{:x}", digest), expected);
}

#[test]
fn digest_word_serialization_order() {
    let be = Digest256::from_be_words([0x01020304, 0, 0, 0, 0, 0, 0, 0x0a0b0c0d]);
    assert_eq!(&be.as_bytes()[..4], &[1, 2, 3, 4]);
    assert_eq!(&be.as_bytes()[28..], &[0x0a, 0x0b, 0x0c, 0x0d]);

    let le = Digest128::from_le_words([0x01020304, 0, 0, 0x0a0b0c0d]);
    assert_eq!(&le.as_bytes()[..4], &[4, 3, 2, 1]);
    assert_eq!(&le.as_bytes()[12..], &[0x0d, 0x0c, 0x0b, 0x0a]);
}

#[test]
fn digest_parses_own_output() {
    let digest = md5(b"abc");
    let parsed: Digest128 = digest.to_hex().parse().unwrap();
    assert_eq!(parsed, digest);

    let upper: Digest128 = "900150983CD24FB0D6963F7D28E17F72".parse().unwrap();
    assert_eq!(upper, digest);
}

#[test]
fn digest_rejects_wrong_length() {
    let err = "abcd".parse::<Digest128>().unwrap_err();
    assert_eq!(
        err,
        ParseDigestError::InvalidLength {
            expected: 32,
            found: 4
        }
    );

    // an MD5 digest is not a SHA-256 digest
    assert!(md5(b"").to_hex().parse::<Digest256>().is_err());
}

#[test]
fn digest_rejects_non_hex() {
    let err = "zz0150983cd24fb0d6963f7d28e17f72".parse::<Digest128>().unwrap_err();
    assert!(matches!(err, ParseDigestError::InvalidHex(_)));
    assert!(err.to_string().starts_with("invalid hex digest"));
}

#[test]
fn digest_distances() {
    let zero = Digest128::from([0u8; 16]);
    let mut bytes = [0u8; 16];
    bytes[0] = 0xff;
    bytes[15] = 0x01;
    let other = Digest128::from(bytes);

    assert_eq!(zero.bit_distance(&zero), 0);
    assert_eq!(zero.bit_distance(&other), 9);
    assert_eq!(zero.hex_distance(&other), 3);
}

#[test]
fn digest_sizes() {
    assert_eq!(Digest128::LEN, 16);
    assert_eq!(Digest128::HEX_LEN, 32);
    assert_eq!(Digest256::LEN, 32);
    assert_eq!(Digest256::HEX_LEN, 64);
}
