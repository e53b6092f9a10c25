#![allow(unused_imports)]

pub use crate::clock::*;
pub use crate::commitment_errors::*;
pub use crate::config::*;
pub use crate::constants::*;
pub use crate::core::commitment::*;
pub use crate::core::commitment_signature::*;
pub use crate::core::field_codec::*;
pub use crate::utils::*;
pub use crate::validator::*;
