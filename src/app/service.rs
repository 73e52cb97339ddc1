//! Chip service — the hexagonal core.
//!
//! [`ChipService`] owns the transfer curve and the handles to the host
//! objects it declared. It exposes a clean, host-agnostic API. All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  AttributePort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                    │      ChipService        │
//!  AnalogOutPort ◀── │  sample → scale → write │
//!                    └────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::ChipConfig;
use crate::error::Result;
use crate::pins;
use crate::transfer::TransferCurve;

use super::events::ChipEvent;
use super::ports::{AnalogOutPort, AttrId, AttributePort, EventSink, HostBindings, PinId, PinMode, TimerId};

// ───────────────────────────────────────────────────────────────
// ChipService
// ───────────────────────────────────────────────────────────────

/// The chip state block: host object handles plus the sampling logic.
///
/// The host owns this struct's lifetime — it is created once at simulation
/// start and handed back to the timer callback on every tick. There is a
/// single active mode, entered at init and never exited.
pub struct ChipService {
    curve: TransferCurve,
    pin_out: PinId,
    co2_attr: AttrId,
    timer: TimerId,
    tick_count: u64,
}

impl ChipService {
    /// Declare the chip's host-visible objects and arm the sampling timer.
    ///
    /// Binds [`pins::ANALOG_OUT_PIN`] as an analog output, creates the
    /// [`pins::CO2_ATTR`] slider control, and registers the recurring
    /// sampling timer from `config.sample_period_ms`.
    pub fn init(
        config: &ChipConfig,
        host: &mut impl HostBindings,
        sink: &mut impl EventSink,
    ) -> Result<Self> {
        let pin_out = host.pin_init(pins::ANALOG_OUT_PIN, PinMode::Analog)?;
        let co2_attr = host.attr_init_float(pins::CO2_ATTR, config.attr_default)?;
        let timer = host.timer_init(config.sample_period_us(), true)?;

        let service = Self {
            curve: TransferCurve::from_config(config),
            pin_out,
            co2_attr,
            timer,
            tick_count: 0,
        };

        sink.emit(&ChipEvent::Initialized {
            pin: pin_out,
            attr: co2_attr,
        });
        info!(
            "co2chip: '{}' bound, '{}' sampling every {}ms",
            pins::ANALOG_OUT_PIN,
            pins::CO2_ATTR,
            config.sample_period_ms
        );

        Ok(service)
    }

    // ── Per-tick sampling ─────────────────────────────────────

    /// Run one sample cycle: read the slider → scale → write the pin.
    ///
    /// The attribute is read fresh on every invocation — no caching, no
    /// staleness window. Exactly one pin write happens per call, and the
    /// written voltage is a pure function of the value read this tick.
    /// Out-of-range slider values pass through the unclamped curve.
    pub fn on_timer_tick(
        &mut self,
        host: &mut (impl AttributePort + AnalogOutPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Read the slider value via AttributePort
        let value = host.attr_read_float(self.co2_attr);

        // 2. Scale into the output range
        let volts = self.curve.voltage_for(value);

        // 3. Drive the analog output via AnalogOutPort
        host.pin_dac_write(self.pin_out, volts);

        debug!("co2chip: tick={} value={:.1} -> {:.3}V", self.tick_count, value, volts);
        sink.emit(&ChipEvent::SampleWritten {
            value,
            volts,
            tick: self.tick_count,
        });
    }

    // ── Queries ───────────────────────────────────────────────

    /// Handle of the analog output pin.
    pub fn pin(&self) -> PinId {
        self.pin_out
    }

    /// Handle of the CO₂ slider attribute.
    pub fn attr(&self) -> AttrId {
        self.co2_attr
    }

    /// Handle of the sampling timer.
    pub fn timer(&self) -> TimerId {
        self.timer
    }

    /// Samples taken since initialisation.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::HostError;

    /// Minimal inline host: one attribute value, one recorded voltage.
    struct TinyHost {
        attr_value: f32,
        last_volts: Option<f32>,
        writes: u32,
    }

    impl TinyHost {
        fn new() -> Self {
            Self {
                attr_value: 0.0,
                last_volts: None,
                writes: 0,
            }
        }
    }

    impl HostBindings for TinyHost {
        fn pin_init(&mut self, _name: &str, _mode: PinMode) -> core::result::Result<PinId, HostError> {
            Ok(PinId(0))
        }
        fn attr_init_float(
            &mut self,
            _name: &str,
            default: f32,
        ) -> core::result::Result<AttrId, HostError> {
            self.attr_value = default;
            Ok(AttrId(0))
        }
        fn timer_init(
            &mut self,
            _period_us: u64,
            _repeat: bool,
        ) -> core::result::Result<TimerId, HostError> {
            Ok(TimerId(0))
        }
    }

    impl AttributePort for TinyHost {
        fn attr_read_float(&self, _attr: AttrId) -> f32 {
            self.attr_value
        }
    }

    impl AnalogOutPort for TinyHost {
        fn pin_dac_write(&mut self, _pin: PinId, volts: f32) {
            self.last_volts = Some(volts);
            self.writes += 1;
        }
    }

    struct NullSink;
    impl EventSink for NullSink {
        fn emit(&mut self, _event: &ChipEvent) {}
    }

    #[test]
    fn init_does_not_write_the_pin() {
        let mut host = TinyHost::new();
        let mut sink = NullSink;
        let service = ChipService::init(&ChipConfig::default(), &mut host, &mut sink).unwrap();
        assert_eq!(service.tick_count(), 0);
        assert!(host.last_volts.is_none(), "no output before the first tick");
    }

    #[test]
    fn tick_reads_fresh_and_writes_once() {
        let mut host = TinyHost::new();
        let mut sink = NullSink;
        let mut service = ChipService::init(&ChipConfig::default(), &mut host, &mut sink).unwrap();

        host.attr_value = 400.0;
        service.on_timer_tick(&mut host, &mut sink);
        assert_eq!(host.writes, 1, "exactly one pin write per tick");
        assert!((host.last_volts.unwrap() - 1.65).abs() < 1e-6);

        // Value changed between ticks — next tick picks it up, not before.
        host.attr_value = 800.0;
        assert!((host.last_volts.unwrap() - 1.65).abs() < 1e-6);
        service.on_timer_tick(&mut host, &mut sink);
        assert!((host.last_volts.unwrap() - 3.3).abs() < 1e-6);
        assert_eq!(service.tick_count(), 2);
    }
}
