//! Roundtrip tests (encode then decode)

mod common;

use quickcheck::QuickCheck;
use rstest::rstest;
use streamtext::{Decoder, decode_to_text, encode_text};

use common::random_alphabetic;

#[test]
fn test_roundtrip_text() {
    let original = "The quick brown fox jumps over the lazy dog";

    let encoded = encode_text(original, "utf-8").unwrap();
    let decoded = decode_to_text(&encoded[..], "utf-8").unwrap();

    assert_eq!(decoded, original);
}

#[rstest]
#[case("utf-8", "Ein Bärchen aß 𝔘𝔫𝔦𝔠𝔬𝔡𝔢 €")]
#[case("windows-1252", "Ein Bärchen aß €")]
#[case("iso-8859-7", "Καλημέρα")]
#[case("shift_jis", "こんにちは世界")]
#[case("gbk", "你好世界")]
#[case("big5", "你好世界")]
#[case("euc-jp", "日本語テキスト")]
fn test_roundtrip_encodings(#[case] encoding: &str, #[case] original: &str) {
    let encoded = encode_text(original, encoding).unwrap();

    let decoded = Decoder::for_label(encoding)
        .unwrap()
        .strict()
        .chunk_size(3)
        .decode_to_text(&encoded[..])
        .unwrap();

    assert_eq!(decoded, original);
    assert_eq!(decoded.to_bytes().unwrap(), encoded);
}

#[test]
fn test_roundtrip_bytes_restored() {
    let original: Vec<u8> = (0x20..0x7f).chain(0xa0..=0xff).collect();

    let decoded = decode_to_text(&original[..], "windows-1252").unwrap();

    assert_eq!(decoded.to_bytes().unwrap(), original);
}

#[test]
fn test_roundtrip_random_alphabetic() {
    let original = random_alphabetic(10_000);

    for encoding in ["utf-8", "latin1", "koi8-r", "shift_jis"] {
        let encoded = encode_text(&original, encoding).unwrap();
        assert_eq!(encoded.len(), original.len());

        let decoded = decode_to_text(&encoded[..], encoding).unwrap();
        assert_eq!(decoded, original);
    }
}

#[test]
fn test_roundtrip_utf8_property() {
    fn prop(original: String, chunk_size: u8) -> bool {
        let encoded = encode_text(&original, "utf-8").unwrap();
        let decoded = Decoder::new()
            .strict()
            .chunk_size(usize::from(chunk_size))
            .decode_to_text(&encoded[..])
            .unwrap();
        decoded == original
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(String, u8) -> bool);
}

#[test]
fn test_roundtrip_latin1_property() {
    fn prop(data: Vec<u8>) -> bool {
        // All 256 byte values are mapped in windows-1252
        let decoded = decode_to_text(&data[..], "windows-1252").unwrap();
        decoded.to_bytes().unwrap() == data
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
