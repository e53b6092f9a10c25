//! # Commitment Signature Module
//!
//! The signature embedded as the last field of a commitment covers the
//! canonical message: the raw content of the first seven fields, concatenated
//! in order with no separators and no length prefixes. The message is hashed
//! with SHA-256 and signed with ECDSA over secp256k1; the signature travels DER
//! encoded.
//!
//! Getting the byte layout of the canonical message wrong does not produce an
//! error anywhere, it just makes every correctly signed token fail to verify.
//!
//! ## Keys
//! [`CommitmentKey`] accepts SEC1 points in compressed (33 bytes) or
//! uncompressed (65 bytes) form and always serializes compressed.
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

use super::super::commitment_errors::CommitmentError;
use super::super::constants::Digest;
use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, SECP256K1, SecretKey};
use sha2::Sha256;

/// Public key a commitment host signs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitmentKey(PublicKey);

impl CommitmentKey {
    pub fn from_sec1(bytes: &[u8]) -> Result<Self, CommitmentError> {
        PublicKey::from_slice(bytes).map(Self).map_err(|_| CommitmentError::InvalidPublicKey)
    }

    pub fn from_hex(text: &str) -> Result<Self, CommitmentError> {
        let bytes = hex::decode(text.trim()).map_err(|_| CommitmentError::InvalidPublicKey)?;
        Self::from_sec1(&bytes)
    }

    pub fn to_bytes(&self) -> [u8; 33] {
        self.0.serialize()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Checks a parsed signature against a 32-byte digest.
    /// High-S signatures are normalized first, so producers that do not
    /// enforce low-S still verify.
    pub fn verify_digest(&self, digest: &Digest, signature: &Signature) -> bool {
        let mut signature = *signature;
        signature.normalize_s();

        let message = Message::from_digest(*digest);
        SECP256K1.verify_ecdsa(&message, &signature, &self.0).is_ok()
    }
}

impl From<PublicKey> for CommitmentKey {
    fn from(key: PublicKey) -> Self {
        Self(key)
    }
}

/// Secret half of a commitment key, used by hosts minting tokens.
#[derive(Debug, Clone)]
pub struct CommitmentSigner {
    secret: SecretKey,
}

impl CommitmentSigner {
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CommitmentError> {
        let secret = SecretKey::from_slice(bytes).map_err(|_| CommitmentError::InvalidSecretKey)?;
        Ok(Self { secret })
    }

    pub fn commitment_key(&self) -> CommitmentKey {
        CommitmentKey(PublicKey::from_secret_key_global(&self.secret))
    }

    /// Signs the canonical message built from `message_fields` and returns the
    /// DER encoded signature.
    pub fn sign<F: AsRef<[u8]>>(&self, message_fields: &[F]) -> Vec<u8> {
        let digest = message_digest(message_fields);
        let message = Message::from_digest(digest);
        SECP256K1.sign_ecdsa(&message, &self.secret).serialize_der().to_vec()
    }
}

/// Concatenates field contents in order, without length prefixes.
pub fn canonical_message<F: AsRef<[u8]>>(message_fields: &[F]) -> Vec<u8> {
    let total = message_fields.iter().map(|f| f.as_ref().len()).sum();
    let mut message = Vec::with_capacity(total);
    for field in message_fields {
        message.extend_from_slice(field.as_ref());
    }
    message
}

pub fn message_digest<F: AsRef<[u8]>>(message_fields: &[F]) -> Digest {
    use sha2::Digest as _;

    Sha256::digest(canonical_message(message_fields)).into()
}

/// Verifies a DER signature over the canonical message of `message_fields`.
pub fn verify_signature<F: AsRef<[u8]>>(message_fields: &[F], der_signature: &[u8], key: &CommitmentKey) -> Result<(), CommitmentError> {
    let digest = message_digest(message_fields);
    let signature = Signature::from_der(der_signature).map_err(|_| CommitmentError::SignatureDecode)?;

    if !key.verify_digest(&digest, &signature) {
        return Err(CommitmentError::SignatureVerification);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn signer(seed: u8) -> CommitmentSigner {
        CommitmentSigner::from_bytes(&[seed; 32]).unwrap()
    }

    #[test]
    fn canonical_message_drops_length_prefixes() {
        let fields: [&[u8]; 3] = [b"ab", b"", b"cde"];
        assert_eq!(canonical_message(&fields), b"abcde".to_vec());
    }

    #[test]
    fn message_digest_is_sha256_of_concatenation() {
        use sha2::Digest as _;

        let fields: [&[u8]; 2] = [b"hello ", b"world"];
        let expected: Digest = Sha256::digest(b"hello world").into();

        assert_eq!(message_digest(&fields), expected);
    }

    #[test]
    fn test_sign_and_verify_valid_signature() {
        let signer = signer(1);
        let fields: [&[u8]; 2] = [b"this is a test", b" message"];

        let signature = signer.sign(&fields);

        assert_eq!(verify_signature(&fields, &signature, &signer.commitment_key()), Ok(()));
    }

    #[test]
    fn test_invalid_signature_fails_verification() {
        let signer = signer(1);
        let fields: [&[u8]; 1] = [b"original message"];
        let tampered: [&[u8]; 1] = [b"tampered message"];

        let signature = signer.sign(&fields);

        assert_eq!(
            verify_signature(&tampered, &signature, &signer.commitment_key()),
            Err(CommitmentError::SignatureVerification)
        );
    }

    #[test]
    fn test_invalid_key_fails_verification() {
        let fields: [&[u8]; 1] = [b"message signed with key1"];
        let signature = signer(1).sign(&fields);

        assert_eq!(
            verify_signature(&fields, &signature, &signer(2).commitment_key()),
            Err(CommitmentError::SignatureVerification)
        );
    }

    #[test]
    fn malformed_der_is_a_decode_failure() {
        let signer = signer(3);
        let fields: [&[u8]; 1] = [b"payload"];
        let signature = signer.sign(&fields);
        let key = signer.commitment_key();

        let truncated = &signature[..signature.len() - 4];
        assert_eq!(verify_signature(&fields, truncated, &key), Err(CommitmentError::SignatureDecode));
        assert_eq!(verify_signature(&fields, &[], &key), Err(CommitmentError::SignatureDecode));

        for _ in 0..32 {
            let garbage: [u8; 70] = std::array::from_fn(|_| rand::random());
            assert!(verify_signature(&fields, &garbage, &key).is_err());
        }
    }

    #[test]
    fn high_s_signature_still_verifies() {
        let signer = signer(4);
        let fields: [&[u8]; 1] = [b"payload"];
        let der = signer.sign(&fields);

        // negate s: (r, n - s) is the high-S twin of a low-S signature
        let compact = Signature::from_der(&der).unwrap().serialize_compact();
        let order: [u8; 32] = secp256k1::constants::CURVE_ORDER;
        let mut high_s = [0u8; 32];
        let mut borrow = 0i16;
        for i in (0..32).rev() {
            let diff = order[i] as i16 - compact[32 + i] as i16 - borrow;
            borrow = if diff < 0 { 1 } else { 0 };
            high_s[i] = (diff + 256 * borrow) as u8;
        }
        let mut twin = [0u8; 64];
        twin[..32].copy_from_slice(&compact[..32]);
        twin[32..].copy_from_slice(&high_s);
        let twin_der = Signature::from_compact(&twin).unwrap().serialize_der().to_vec();

        assert_ne!(twin_der, der);
        assert_eq!(verify_signature(&fields, &twin_der, &signer.commitment_key()), Ok(()));
    }

    #[test]
    fn key_accepts_compressed_and_uncompressed_points() {
        let key = signer(5).commitment_key();
        let compressed = key.to_bytes();
        let uncompressed = key.0.serialize_uncompressed();

        assert_eq!(CommitmentKey::from_sec1(&compressed), Ok(key));
        assert_eq!(CommitmentKey::from_sec1(&uncompressed), Ok(key));
        assert_eq!(CommitmentKey::from_hex(&key.to_hex()), Ok(key));
        assert_eq!(CommitmentKey::from_sec1(&[2u8; 12]), Err(CommitmentError::InvalidPublicKey));
    }

    #[test]
    fn zero_secret_is_rejected() {
        assert!(matches!(CommitmentSigner::from_bytes(&[0u8; 32]), Err(CommitmentError::InvalidSecretKey)));
    }
}
