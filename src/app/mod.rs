//! Application layer: port traits, outbound events, and the chip service.
//!
//! The domain core never touches the simulator host directly — all I/O
//! flows through the traits in [`ports`].

pub mod events;
pub mod ports;
pub mod service;
