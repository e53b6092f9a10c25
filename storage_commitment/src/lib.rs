//! # Storage Commitment
//!
//! Decoding and verification of storage commitment tokens: signed statements,
//! embedded in a locking script, that a host will serve a file (named by its
//! content hash and URL) until an expiry time.
//!
//! Verification is a straight pipeline:
//!     1. split the script into length-prefixed fields.
//!     2. check protocol tag, content hash, URL, expiry and file size in that order.
//!     3. verify the DER encoded secp256k1 signature over the first seven fields.
//!
//! Nothing is persisted, cached or fetched; the only outside input is the
//! current time, read through a [`Clock`].
//!
//! Hosts mint tokens with the same crate through [`CommitmentDraft`] and
//! [`CommitmentSigner`].
//!
//! Copyrights © 2025, Storage Commitment Contributors

pub mod clock;
pub mod commitment_errors;
pub mod config;
pub mod constants;
pub mod core;
pub mod prelude;
pub mod utils;
pub mod validator;

pub use prelude::*;
