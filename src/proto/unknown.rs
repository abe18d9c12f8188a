//! Opaque storage for fields a decoder has no schema entry for.
//!
//! Proto3 forward compatibility: a server built against an older schema must
//! not drop fields a newer peer sent. Every message in this crate carries an
//! [`UnknownFieldSet`] that captures unrecognized fields byte-exactly at
//! decode time and re-emits them verbatim, after the known fields, at encode
//! time.

use std::fmt;

use prost::DecodeError;
use prost::bytes::{Buf, BufMut};
use prost::encoding::{self, WireType};

/// Maximum nesting of group-encoded fields accepted during capture.
///
/// Matches prost's default recursion limit.
const MAX_GROUP_DEPTH: u32 = 100;

/// Unrecognized fields of a single message, stored as raw wire bytes
/// (keys included) in the order they were decoded.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UnknownFieldSet {
    bytes: Vec<u8>,
}

impl UnknownFieldSet {
    /// Whether any unknown fields were captured.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw wire bytes of all captured fields.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Discard all captured fields.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub(crate) fn encoded_len(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn encode_raw(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self.bytes);
    }

    /// Capture one field whose key (`tag`, `wire_type`) has already been read
    /// from `buf`, re-encoding the key so the stored bytes round-trip.
    pub(crate) fn capture(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
    ) -> Result<(), DecodeError> {
        capture_field(tag, wire_type, buf, &mut self.bytes, 0)
    }
}

impl fmt::Debug for UnknownFieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnknownFieldSet")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Copy one field's payload from `buf` into `out`, dispatching on wire type
/// the same way `prost::encoding::skip_field` does. Groups are captured
/// recursively until the matching end-group key.
fn capture_field(
    tag: u32,
    wire_type: WireType,
    buf: &mut impl Buf,
    out: &mut Vec<u8>,
    depth: u32,
) -> Result<(), DecodeError> {
    if depth > MAX_GROUP_DEPTH {
        return Err(DecodeError::new("recursion limit reached"));
    }
    encoding::encode_key(tag, wire_type, out);
    match wire_type {
        WireType::Varint => {
            let value = encoding::decode_varint(buf)?;
            encoding::encode_varint(value, out);
        }
        WireType::SixtyFourBit => copy_bytes(buf, out, 8)?,
        WireType::ThirtyTwoBit => copy_bytes(buf, out, 4)?,
        WireType::LengthDelimited => {
            let len = encoding::decode_varint(buf)?;
            if len > buf.remaining() as u64 {
                return Err(DecodeError::new("buffer underflow"));
            }
            encoding::encode_varint(len, out);
            copy_bytes(buf, out, len as usize)?;
        }
        WireType::StartGroup => loop {
            let (inner_tag, inner_wire_type) = encoding::decode_key(buf)?;
            if inner_wire_type == WireType::EndGroup {
                if inner_tag != tag {
                    return Err(DecodeError::new("unexpected end group tag"));
                }
                encoding::encode_key(inner_tag, inner_wire_type, out);
                break;
            }
            capture_field(inner_tag, inner_wire_type, buf, out, depth + 1)?;
        },
        WireType::EndGroup => return Err(DecodeError::new("unexpected end group tag")),
    }
    Ok(())
}

fn copy_bytes(buf: &mut impl Buf, out: &mut Vec<u8>, len: usize) -> Result<(), DecodeError> {
    if len > buf.remaining() {
        return Err(DecodeError::new("buffer underflow"));
    }
    out.reserve(len);
    let mut remaining = len;
    while remaining > 0 {
        let chunk = buf.chunk();
        let take = chunk.len().min(remaining);
        out.extend_from_slice(&chunk[..take]);
        buf.advance(take);
        remaining -= take;
    }
    Ok(())
}
