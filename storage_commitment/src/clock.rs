//! # Clock Module
//!
//! The expiry check is the only part of verification that depends on
//! something other than its inputs. Validators read time through [`Clock`]
//! so tests can pin "now" to an exact second.
//!
//! Copyrights © 2025 Storage Commitment Contributors. All rights reserved.

use super::utils::current_time_as_u64;
use anyhow::Result;

pub trait Clock {
    /// Current time in seconds since the UNIX epoch.
    fn now_unix(&self) -> Result<u64>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> Result<u64> {
        current_time_as_u64()
    }
}

/// A clock stopped at a fixed second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix(&self) -> Result<u64> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_unix(&self) -> Result<u64> {
        (**self).now_unix()
    }
}
