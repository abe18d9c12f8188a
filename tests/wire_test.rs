//! Wire-format tests for the `info.InfoService` messages.
//!
//! These pin the byte-level contract: proto3 scalar elision, unknown-field
//! preservation, and decode failure (never panic) on malformed input.

use huginn::proto::{GetInfoRequest, InfoResponse};
use prost::Message;

#[test]
fn round_trip_preserves_value() {
    for value in ["", "team-a", "a-rather-long-namespace-name", "ünïcödé-ns"] {
        let msg = InfoResponse {
            managed_namespace: value.to_string(),
            ..Default::default()
        };
        let bytes = msg.encode_to_vec();
        let decoded = InfoResponse::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, msg, "round trip failed for {value:?}");
    }
}

#[test]
fn known_field_encoding_is_tag_length_bytes() {
    let msg = InfoResponse {
        managed_namespace: "abc".to_string(),
        ..Default::default()
    };
    // key = field 1 << 3 | wire type 2, then length 3, then the bytes
    assert_eq!(msg.encode_to_vec(), b"\x0a\x03abc");
    assert_eq!(msg.encoded_len(), 5);
}

#[test]
fn empty_namespace_is_elided() {
    let msg = InfoResponse::default();
    assert_eq!(msg.encoded_len(), 0);
    assert!(msg.encode_to_vec().is_empty());
}

#[test]
fn empty_request_encodes_to_nothing() {
    assert!(GetInfoRequest::default().encode_to_vec().is_empty());
}

#[test]
fn unknown_fields_survive_reencoding() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"\x0a\x04team"); // field 1: "team"
    bytes.extend_from_slice(&[0x10, 0x96, 0x01]); // field 2: varint 150
    bytes.extend_from_slice(b"\x1a\x02xy"); // field 3: bytes "xy"

    let decoded = InfoResponse::decode(bytes.as_slice()).unwrap();
    assert_eq!(decoded.managed_namespace, "team");
    assert!(!decoded.unknown_fields.is_empty());

    assert_eq!(decoded.encode_to_vec(), bytes);
}

#[test]
fn unknown_fields_reencode_after_known_fields() {
    // Unknown field arrives before the known one; on re-encode the known
    // field leads and the unknown bytes follow.
    let mut bytes = vec![0x10, 0x2a]; // field 2: varint 42
    bytes.extend_from_slice(b"\x0a\x02ns"); // field 1: "ns"

    let decoded = InfoResponse::decode(bytes.as_slice()).unwrap();
    assert_eq!(decoded.encode_to_vec(), b"\x0a\x02ns\x10\x2a");
}

#[test]
fn unknown_fields_on_empty_request_survive() {
    let bytes = [0x08, 0x01]; // field 1: varint, unknown to GetInfoRequest
    let decoded = GetInfoRequest::decode(&bytes[..]).unwrap();
    assert!(!decoded.unknown_fields.is_empty());
    assert_eq!(decoded.encode_to_vec(), bytes);
}

#[test]
fn group_fields_are_preserved() {
    // field 2 group wrapping field 3 varint 1
    let bytes = [0x13, 0x18, 0x01, 0x14];
    let decoded = InfoResponse::decode(&bytes[..]).unwrap();
    assert_eq!(decoded.encode_to_vec(), bytes);
}

#[test]
fn truncated_varint_fails() {
    // continuation bit set, no terminator byte
    let bytes = [0x10, 0x96];
    assert!(InfoResponse::decode(&bytes[..]).is_err());
}

#[test]
fn overlong_varint_fails() {
    let mut bytes = vec![0x10];
    bytes.extend_from_slice(&[0x80; 10]);
    bytes.push(0x01);
    assert!(InfoResponse::decode(bytes.as_slice()).is_err());
}

#[test]
fn declared_length_beyond_buffer_fails() {
    // field 1 declares 5 payload bytes, supplies 2
    let bytes = [0x0a, 0x05, b'a', b'b'];
    assert!(InfoResponse::decode(&bytes[..]).is_err());
}

#[test]
fn unknown_field_length_beyond_buffer_fails() {
    // unknown field 3 declares 9 payload bytes, supplies 1
    let bytes = [0x1a, 0x09, b'x'];
    assert!(InfoResponse::decode(&bytes[..]).is_err());
}

#[test]
fn zero_tag_fails() {
    let bytes = [0x00, 0x00];
    assert!(InfoResponse::decode(&bytes[..]).is_err());
}

#[test]
fn wrong_wire_type_for_namespace_fails() {
    // field 1 sent as varint instead of length-delimited
    let bytes = [0x08, 0x01];
    assert!(InfoResponse::decode(&bytes[..]).is_err());
}

#[test]
fn unbalanced_group_fails() {
    let bytes = [0x13, 0x18, 0x01]; // start group, never closed
    assert!(InfoResponse::decode(&bytes[..]).is_err());
}

#[test]
fn invalid_utf8_in_namespace_fails() {
    let bytes = [0x0a, 0x02, 0xff, 0xfe];
    assert!(InfoResponse::decode(&bytes[..]).is_err());
}

#[test]
fn clear_resets_to_default() {
    let bytes = b"\x0a\x02ns\x10\x01";
    let mut msg = InfoResponse::decode(&bytes[..]).unwrap();
    msg.clear();
    assert_eq!(msg, InfoResponse::default());
    assert_eq!(msg.encoded_len(), 0);
}
