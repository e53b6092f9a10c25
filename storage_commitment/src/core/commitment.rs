//! # Storage Commitment Module
//!
//! The two shapes a commitment takes in this crate:
//!
//! - [`DecodedCommitment`]: what a successful verification hands back, a typed
//!   view borrowing from the original script bytes.
//! - [`CommitmentDraft`]: what a host fills in before signing, which turns into
//!   a length-prefixed script with [`CommitmentDraft::to_script`].
//!
//! ## Field Layout
//! ```text
//! 0: protocol tag      4: url
//! 1: host identity     5: expiry (decimal unix seconds)
//! 2: content hash      6: file size (decimal bytes)
//! 3: action tag        7: DER signature over fields 0..=6
//! ```
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

use super::super::commitment_errors::CommitmentError;
use super::super::constants::{ADVERTISE_ACTION, CONTENT_HASH_SIZE, DEFAULT_PROTOCOL_TAG, MESSAGE_FIELD_COUNT};
use super::commitment_signature::CommitmentSigner;
use super::field_codec::encode_fields;

/// A commitment that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedCommitment<'a> {
    pub protocol_tag: &'a str,
    pub host_identity: &'a [u8],
    pub content_hash: &'a [u8],
    pub action: &'a [u8],
    pub url: &'a str,
    pub expiry: i64,
    pub file_size: u64,
    pub signature: &'a [u8],
}

impl DecodedCommitment<'_> {
    pub fn action_str(&self) -> Option<&str> {
        std::str::from_utf8(self.action).ok()
    }

    pub fn is_advertisement(&self) -> bool {
        self.action == ADVERTISE_ACTION.as_bytes()
    }
}

/// Unsigned commitment contents as a host prepares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitmentDraft {
    pub protocol_tag: String,
    pub host_identity: Vec<u8>,
    pub content_hash: [u8; CONTENT_HASH_SIZE],
    pub action: String,
    pub url: String,
    pub expiry: u64,
    pub file_size: u64,
}

impl CommitmentDraft {
    /// An `advertise` commitment under the default protocol tag.
    pub fn advertise(host_identity: impl Into<Vec<u8>>, content_hash: [u8; CONTENT_HASH_SIZE], url: impl Into<String>, expiry: u64, file_size: u64) -> Self {
        Self {
            protocol_tag: DEFAULT_PROTOCOL_TAG.to_string(),
            host_identity: host_identity.into(),
            content_hash,
            action: ADVERTISE_ACTION.to_string(),
            url: url.into(),
            expiry,
            file_size,
        }
    }

    pub fn message_fields(&self) -> [Vec<u8>; MESSAGE_FIELD_COUNT] {
        [
            self.protocol_tag.as_bytes().to_vec(),
            self.host_identity.clone(),
            self.content_hash.to_vec(),
            self.action.as_bytes().to_vec(),
            self.url.as_bytes().to_vec(),
            self.expiry.to_string().into_bytes(),
            self.file_size.to_string().into_bytes(),
        ]
    }

    /// All eight fields, the last one being the DER signature.
    pub fn signed_fields(&self, signer: &CommitmentSigner) -> Vec<Vec<u8>> {
        let message_fields = self.message_fields();
        let signature = signer.sign(&message_fields);

        let mut fields = Vec::from(message_fields);
        fields.push(signature);
        fields
    }

    pub fn to_script(&self, signer: &CommitmentSigner) -> Result<Vec<u8>, CommitmentError> {
        encode_fields(&self.signed_fields(signer))
    }
}
