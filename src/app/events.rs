//! Outbound chip events.
//!
//! The [`ChipService`](super::service::ChipService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — write to the log facade, record for test
//! assertions, etc.

use super::ports::{AttrId, PinId};

/// Structured events emitted by the chip core.
#[derive(Debug, Clone, Copy)]
pub enum ChipEvent {
    /// Initialisation finished: pin bound, attribute created, timer armed.
    Initialized { pin: PinId, attr: AttrId },

    /// One sample was taken and written to the analog output.
    SampleWritten {
        /// Slider value read this tick.
        value: f32,
        /// Voltage written to the output pin.
        volts: f32,
        /// Monotonic tick counter (1 = first sample).
        tick: u64,
    },
}
