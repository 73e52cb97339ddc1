//! Unified error types for the CO₂ chip.
//!
//! Per-tick sampling is infallible — attribute reads and pin writes are
//! host-handled. The only fallible path is initialisation, where host
//! binding calls can be rejected. All variants are `Copy` so they can be
//! cheaply logged across the ABI boundary without allocation.

use core::fmt;

use crate::app::ports::HostError;

/// Every fallible operation in the chip funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Chip initialisation failed outside of a host binding call.
    Init(&'static str),
    /// A host binding declaration was rejected.
    Host(HostError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Host(e) => write!(f, "host: {e}"),
        }
    }
}

impl From<HostError> for Error {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

/// Chip-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
