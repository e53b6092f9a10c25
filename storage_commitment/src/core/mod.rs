pub mod commitment;
pub mod commitment_signature;
pub mod field_codec;
