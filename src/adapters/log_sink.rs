//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured chip events to the `log`
//! facade (whatever logger the embedding host installs, if any). A test
//! recorder implements the same trait.

use log::{debug, info};

use crate::app::events::ChipEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`ChipEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ChipEvent) {
        match event {
            ChipEvent::Initialized { pin, attr } => {
                info!("INIT | pin={:?} attr={:?}", pin, attr);
            }
            ChipEvent::SampleWritten { value, volts, tick } => {
                debug!("SAMPLE | tick={} value={:.1} volts={:.3}", tick, value, volts);
            }
        }
    }
}
