//! # Commitment Validator Module
//!
//! Decides whether a decoded commitment is acceptable. The checks run in a
//! fixed order and the first failure ends the evaluation:
//!
//! 1. at least eight fields were decoded
//! 2. field 0 equals the configured protocol tag, byte for byte
//! 3. field 2 reads as 64 lowercase hex characters
//! 4. field 4 is a well formed http(s) URL
//! 5. field 5 is a decimal unix time strictly after the clock's "now"
//! 6. field 6 is a decimal file size strictly above zero
//! 7. field 7 is a DER signature over fields 0..=6 made by the given key
//!
//! Every check returns a [`CommitmentError`] instead of panicking, including
//! non-UTF-8 or non-numeric field contents. Each check emits one `debug` event
//! with its field index and outcome; signature and key bytes are never logged.
//!
//! ## Usage
//! ```rust,ignore
//! let validator = CommitmentValidator::new(VerifierConfig::default());
//! if validator.is_valid_script(&script, &key) {
//!     // serve the advertisement
//! }
//! ```
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

use crate::clock::{Clock, SystemClock};
use crate::commitment_errors::CommitmentError;
use crate::config::VerifierConfig;
use crate::constants::{
    ACTION_FIELD, EXPIRY_FIELD, FIELD_COUNT, FILE_SIZE_FIELD, HASH_FIELD, HOST_FIELD, MESSAGE_FIELD_COUNT, PROTOCOL_FIELD, SIGNATURE_FIELD,
    URL_FIELD,
};
use crate::core::commitment::DecodedCommitment;
use crate::core::commitment_signature::{CommitmentKey, verify_signature};
use crate::core::field_codec::decode_fields;
use crate::utils::{content_hash_hex, is_content_hash_hex, is_valid_url};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CommitmentValidator<C = SystemClock> {
    config: VerifierConfig,
    clock: C,
}

impl CommitmentValidator<SystemClock> {
    pub fn new(config: VerifierConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for CommitmentValidator<SystemClock> {
    fn default() -> Self {
        Self::new(VerifierConfig::default())
    }
}

impl<C: Clock> CommitmentValidator<C> {
    pub fn with_clock(config: VerifierConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Runs every check over already decoded fields.
    pub fn evaluate<'a>(&self, fields: &[&'a [u8]], key: &CommitmentKey) -> Result<DecodedCommitment<'a>, CommitmentError> {
        let verdict = self.run_checks(fields, key);
        match &verdict {
            Ok(_) => debug!("commitment accepted"),
            Err(err) => debug!(kind = ?err.kind(), %err, "commitment rejected"),
        }
        verdict
    }

    /// Decodes `script` and evaluates the resulting fields.
    pub fn evaluate_script<'a>(&self, script: &'a [u8], key: &CommitmentKey) -> Result<DecodedCommitment<'a>, CommitmentError> {
        let fields = match decode_fields(script) {
            Ok(fields) => fields,
            Err(err) => {
                debug!(kind = ?err.kind(), %err, "commitment rejected");
                return Err(err);
            }
        };
        self.evaluate(&fields, key)
    }

    pub fn is_valid(&self, fields: &[&[u8]], key: &CommitmentKey) -> bool {
        self.evaluate(fields, key).is_ok()
    }

    pub fn is_valid_script(&self, script: &[u8], key: &CommitmentKey) -> bool {
        self.evaluate_script(script, key).is_ok()
    }

    fn run_checks<'a>(&self, fields: &[&'a [u8]], key: &CommitmentKey) -> Result<DecodedCommitment<'a>, CommitmentError> {
        traced(0, "field_count", check_field_count(fields))?;
        let protocol_tag = traced(PROTOCOL_FIELD, "protocol_tag", check_protocol_tag(fields[PROTOCOL_FIELD], &self.config.protocol_tag))?;
        traced(HASH_FIELD, "content_hash", check_content_hash(fields[HASH_FIELD]))?;
        let url = traced(URL_FIELD, "url", check_url(fields[URL_FIELD]))?;
        let expiry = traced(EXPIRY_FIELD, "expiry", self.check_expiry(fields[EXPIRY_FIELD]))?;
        let file_size = traced(FILE_SIZE_FIELD, "file_size", check_file_size(fields[FILE_SIZE_FIELD]))?;
        traced(
            SIGNATURE_FIELD,
            "signature",
            verify_signature(&fields[..MESSAGE_FIELD_COUNT], fields[SIGNATURE_FIELD], key),
        )?;

        Ok(DecodedCommitment {
            protocol_tag,
            host_identity: fields[HOST_FIELD],
            content_hash: fields[HASH_FIELD],
            action: fields[ACTION_FIELD],
            url,
            expiry,
            file_size,
            signature: fields[SIGNATURE_FIELD],
        })
    }

    fn check_expiry(&self, field: &[u8]) -> Result<i64, CommitmentError> {
        let expiry: i64 = parse_decimal(field).ok_or(CommitmentError::UnparsableTimestamp)?;
        let now = self.clock.now_unix().map_err(|_| CommitmentError::ClockUnavailable)?;

        if !u64::try_from(expiry).is_ok_and(|expiry| expiry > now) {
            return Err(CommitmentError::Expired { expiry, now });
        }
        Ok(expiry)
    }
}

fn traced<T>(index: usize, check: &'static str, result: Result<T, CommitmentError>) -> Result<T, CommitmentError> {
    debug!(index, check, passed = result.is_ok(), "commitment check");
    result
}

fn check_field_count(fields: &[&[u8]]) -> Result<(), CommitmentError> {
    if fields.len() < FIELD_COUNT {
        return Err(CommitmentError::MissingFields {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }
    Ok(())
}

fn check_protocol_tag<'a>(field: &'a [u8], expected: &str) -> Result<&'a str, CommitmentError> {
    match std::str::from_utf8(field) {
        Ok(tag) if tag == expected => Ok(tag),
        _ => Err(CommitmentError::ProtocolMismatch),
    }
}

fn check_content_hash(field: &[u8]) -> Result<(), CommitmentError> {
    match content_hash_hex(field) {
        Some(text) if is_content_hash_hex(&text) => Ok(()),
        _ => Err(CommitmentError::InvalidHashFormat),
    }
}

fn check_url(field: &[u8]) -> Result<&str, CommitmentError> {
    match std::str::from_utf8(field) {
        Ok(url) if is_valid_url(url) => Ok(url),
        _ => Err(CommitmentError::InvalidUrl),
    }
}

fn check_file_size(field: &[u8]) -> Result<u64, CommitmentError> {
    match parse_decimal::<u64>(field) {
        Some(size) if size > 0 => Ok(size),
        _ => Err(CommitmentError::InvalidFileSize),
    }
}

fn parse_decimal<T: FromStr>(field: &[u8]) -> Option<T> {
    std::str::from_utf8(field).ok()?.parse().ok()
}
