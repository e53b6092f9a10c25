//! # Commitment Constants Module
//!
//! Positional layout of a storage commitment token and the fixed sizes of the
//! wire format. Field meaning comes only from position, so every index used by
//! the decoder, validator and signer is named here.
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

/// Protocol address used by UHRP advertisements.
pub const DEFAULT_PROTOCOL_TAG: &str = "1UHRPYnMHPuQ5Tgb3AF8JXqwKkmZVy5hG";

pub const FIELD_COUNT: usize = 8;
pub const MESSAGE_FIELD_COUNT: usize = 7;
pub const MAX_FIELD_SIZE: usize = u8::MAX as usize;

pub const PROTOCOL_FIELD: usize = 0;
pub const HOST_FIELD: usize = 1;
pub const HASH_FIELD: usize = 2;
pub const ACTION_FIELD: usize = 3;
pub const URL_FIELD: usize = 4;
pub const EXPIRY_FIELD: usize = 5;
pub const FILE_SIZE_FIELD: usize = 6;
pub const SIGNATURE_FIELD: usize = 7;

pub const CONTENT_HASH_SIZE: usize = 32;
pub const CONTENT_HASH_HEX_LEN: usize = CONTENT_HASH_SIZE * 2;
pub const DIGEST_SIZE: usize = 32;

pub const ADVERTISE_ACTION: &str = "advertise";

pub type Digest = [u8; DIGEST_SIZE];
