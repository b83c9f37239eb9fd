use rstest::rstest;

use super::utils::recording;
use crate::{DecodeError, DecoderOptions, decode_hex_list};

fn invalid(token: &str, index: usize) -> DecodeError {
    DecodeError::InvalidToken {
        token: token.into(),
        index,
    }
}

#[rstest]
#[case("fg", invalid("fg", 0))]
#[case("100", invalid("100", 0))]
#[case("aa,fff", invalid("fff", 1))]
#[case("aa,,bb", invalid("", 1))]
#[case(",aa", invalid("", 0))]
#[case("aa,,", invalid("", 1))]
#[case("", invalid("", 0))]
#[case("aa, bb", invalid(" bb", 1))]
#[case("0x", invalid("0x", 0))]
#[case("-1", invalid("-1", 0))]
#[case("aa;bb", invalid("aa;bb", 0))]
fn rejects_malformed_tokens(#[case] description: &str, #[case] expected: DecodeError) {
    let mut buf = [0u8; 16];
    assert_eq!(decode_hex_list(description, &mut buf), Err(expected));
}

#[test]
fn bytes_before_the_bad_token_stay_written() {
    let mut buf = [0x55u8; 4];
    let err = decode_hex_list("aa,bb,fg,cc", &mut buf).unwrap_err();
    assert_eq!(err, invalid("fg", 2));
    assert_eq!(buf, [0xaa, 0xbb, 0, 0]);
}

#[test]
fn zero_capacity_is_rejected_before_tokenizing() {
    let mut buf = [0u8; 0];
    assert_eq!(
        decode_hex_list("aa", &mut buf),
        Err(DecodeError::ZeroCapacity)
    );
    assert_eq!(
        decode_hex_list("not hex at all", &mut buf),
        Err(DecodeError::ZeroCapacity)
    );
}

#[test]
fn whitespace_only_token_is_still_empty() {
    let decoder = recording(DecoderOptions {
        allow_whitespace: true,
        ..Default::default()
    });
    let mut buf = [0u8; 4];
    assert_eq!(
        decoder.decode_into("aa,  ,bb", &mut buf),
        Err(invalid("  ", 1))
    );
}

#[test]
fn lone_blank_description_is_still_empty() {
    let decoder = recording(DecoderOptions {
        allow_whitespace: true,
        ..Default::default()
    });
    let mut buf = [0u8; 4];
    assert_eq!(decoder.decode_into(" ", &mut buf), Err(invalid(" ", 0)));
}

#[test]
fn error_message_names_the_token() {
    use alloc::string::ToString;

    assert_eq!(
        invalid("100", 3).to_string(),
        "invalid hex byte '100' at token 3"
    );
    assert_eq!(
        DecodeError::ZeroCapacity.to_string(),
        "hex buffer must be larger than zero bytes"
    );
}

#[test]
fn errors_emit_no_warnings() {
    let decoder = recording(DecoderOptions::default());
    let mut buf = [0u8; 4];
    decoder.decode_into("zz", &mut buf).unwrap_err();
    assert!(decoder.diagnostics().take().is_empty());
}

#[test]
#[should_panic(expected = "invalid hex byte 'fg' at token 0")]
fn panic_on_error_panics() {
    let decoder = recording(DecoderOptions {
        panic_on_error: true,
        ..Default::default()
    });
    let mut buf = [0u8; 4];
    let _ = decoder.decode_into("fg", &mut buf);
}
