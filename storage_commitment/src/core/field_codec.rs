//! # Commitment Field Codec Module
//!
//! A commitment token travels as a flat sequence of length-prefixed fields.
//! Each field is one length byte followed by that many content bytes:
//!
//! ```text
//! [1 byte: L0][L0 bytes: field 0][1 byte: L1][L1 bytes: field 1] ... [1 byte: L7][L7 bytes: field 7]
//! ```
//!
//! The decoder only splits the buffer. It never checks how many fields came
//! out or what they contain; that belongs to the validator.
//!
//! ## Notes
//! - A single length byte limits every field to 255 bytes. The encoder refuses
//!   longer fields instead of truncating them.
//! - Decoded fields borrow from the input buffer, nothing is copied.
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

use super::super::commitment_errors::CommitmentError;
use super::super::constants::MAX_FIELD_SIZE;

/// Splits `buffer` into its length-prefixed fields, in encounter order.
pub fn decode_fields(buffer: &[u8]) -> Result<Vec<&[u8]>, CommitmentError> {
    let mut fields = Vec::new();
    let mut cursor = 0;

    while cursor < buffer.len() {
        let declared = buffer[cursor] as usize;
        let start = cursor + 1;
        let remaining = buffer.len() - start;

        if declared > remaining {
            return Err(CommitmentError::FieldOverrun { offset: cursor, declared, remaining });
        }

        fields.push(&buffer[start..start + declared]);
        cursor = start + declared;
    }

    Ok(fields)
}

/// Length-prefixes every field and concatenates them.
pub fn encode_fields<F: AsRef<[u8]>>(fields: &[F]) -> Result<Vec<u8>, CommitmentError> {
    let total = fields.iter().map(|f| f.as_ref().len() + 1).sum();
    let mut encoded = Vec::with_capacity(total);

    for (index, field) in fields.iter().enumerate() {
        let field = field.as_ref();
        if field.len() > MAX_FIELD_SIZE {
            return Err(CommitmentError::FieldTooLong { index, len: field.len() });
        }
        encoded.push(field.len() as u8);
        encoded.extend_from_slice(field);
    }

    Ok(encoded)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_splits_fields_in_order() {
        let buffer = [3, b'a', b'b', b'c', 0, 2, b'x', b'y'];
        let fields = decode_fields(&buffer).unwrap();

        assert_eq!(fields, vec![&b"abc"[..], &b""[..], &b"xy"[..]]);
    }

    #[test]
    fn decode_empty_buffer_yields_no_fields() {
        let fields = decode_fields(&[]).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn decode_rejects_final_prefix_overrun() {
        let buffer = [1, b'a', 5, b'b', b'c'];
        let err = decode_fields(&buffer).unwrap_err();

        assert_eq!(err, CommitmentError::FieldOverrun { offset: 2, declared: 5, remaining: 2 });
    }

    #[test]
    fn decode_rejects_dangling_length_byte() {
        let err = decode_fields(&[2, b'o', b'k', 1]).unwrap_err();
        assert_eq!(err, CommitmentError::FieldOverrun { offset: 3, declared: 1, remaining: 0 });
    }

    #[test]
    fn encode_accepts_max_size_field() {
        let field = vec![7u8; MAX_FIELD_SIZE];
        let encoded = encode_fields(&[&field]).unwrap();

        assert_eq!(encoded[0], 255);
        assert_eq!(encoded.len(), MAX_FIELD_SIZE + 1);
    }

    #[test]
    fn encode_rejects_oversize_field() {
        let long_url = vec![b'u'; MAX_FIELD_SIZE + 1];
        let err = encode_fields(&[b"ok".to_vec(), long_url]).unwrap_err();

        assert_eq!(err, CommitmentError::FieldTooLong { index: 1, len: 256 });
    }

    proptest! {
        #[test]
        fn eight_fields_survive_encode_then_decode(
            fields in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..=MAX_FIELD_SIZE), 8)
        ) {
            let encoded = encode_fields(&fields).unwrap();
            let decoded = decode_fields(&encoded).unwrap();

            prop_assert_eq!(decoded.len(), 8);
            for (original, decoded) in fields.iter().zip(decoded) {
                prop_assert_eq!(original.as_slice(), decoded);
            }
        }
    }
}
