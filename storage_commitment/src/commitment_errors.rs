//! # Commitment Error Definitions Module
//!
//! Every way a commitment token can be rejected, from a truncated wire buffer
//! to a signature that does not verify. Validation never panics: each check
//! produces one of these variants and the pipeline stops at the first one.
//!
//! ## Error Categories
//! - **Wire Errors**: length prefixes overrunning the buffer, too few fields, oversize fields on encode
//! - **Semantic Errors**: protocol tag, content hash, URL, expiry and file size checks
//! - **Cryptographic Errors**: DER decoding, signature verification, key parsing
//!
//! Callers that only branch on "valid or not" can use [`CommitmentError::kind`]
//! to bucket failures without matching on every variant.
//!
//! ## Example
//! ```rust
//! use storage_commitment::{CommitmentError, FailureKind};
//!
//! let err = CommitmentError::MissingFields { expected: 8, found: 3 };
//! assert_eq!(err.kind(), FailureKind::MalformedScript);
//! ```
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    #[error("length prefix at offset {offset} claims {declared} bytes but only {remaining} remain")]
    FieldOverrun { offset: usize, declared: usize, remaining: usize },

    #[error("expected at least {expected} fields, decoded {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("field {index} is {len} bytes, a single length byte holds at most 255")]
    FieldTooLong { index: usize, len: usize },

    #[error("protocol tag does not match the expected tag")]
    ProtocolMismatch,

    #[error("content hash is not 64 lowercase hex characters")]
    InvalidHashFormat,

    #[error("url is not well formed")]
    InvalidUrl,

    #[error("expiry time is not a base-10 integer")]
    UnparsableTimestamp,

    #[error("commitment expired at {expiry}, current time is {now}")]
    Expired { expiry: i64, now: u64 },

    #[error("current time is unavailable")]
    ClockUnavailable,

    #[error("file size is not a strictly positive base-10 integer")]
    InvalidFileSize,

    #[error("signature is not valid DER")]
    SignatureDecode,

    #[error("signature does not verify against the commitment key")]
    SignatureVerification,

    #[error("public key is not a valid SEC1 secp256k1 point")]
    InvalidPublicKey,

    #[error("secret key is not a valid secp256k1 scalar")]
    InvalidSecretKey,
}

/// Coarse failure buckets reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MalformedScript,
    ProtocolMismatch,
    InvalidHashFormat,
    InvalidUrl,
    ExpiredOrUnparsableTimestamp,
    InvalidFileSize,
    SignatureDecodeError,
    SignatureVerificationFailed,
    InvalidCredential,
}

impl CommitmentError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CommitmentError::FieldOverrun { .. } | CommitmentError::MissingFields { .. } | CommitmentError::FieldTooLong { .. } => {
                FailureKind::MalformedScript
            }
            CommitmentError::ProtocolMismatch => FailureKind::ProtocolMismatch,
            CommitmentError::InvalidHashFormat => FailureKind::InvalidHashFormat,
            CommitmentError::InvalidUrl => FailureKind::InvalidUrl,
            CommitmentError::UnparsableTimestamp | CommitmentError::Expired { .. } | CommitmentError::ClockUnavailable => {
                FailureKind::ExpiredOrUnparsableTimestamp
            }
            CommitmentError::InvalidFileSize => FailureKind::InvalidFileSize,
            CommitmentError::SignatureDecode => FailureKind::SignatureDecodeError,
            CommitmentError::SignatureVerification => FailureKind::SignatureVerificationFailed,
            CommitmentError::InvalidPublicKey | CommitmentError::InvalidSecretKey => FailureKind::InvalidCredential,
        }
    }
}
