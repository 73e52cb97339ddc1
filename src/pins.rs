//! Host-visible object names and timing for the CO₂ chip.
//!
//! Single source of truth — the service and the host adapters reference this
//! module rather than hard-coding names. Change a name here and it propagates
//! to the pin binding, the attribute binding, and every test.

// ---------------------------------------------------------------------------
// Pins
// ---------------------------------------------------------------------------

/// Analog output terminal carrying the encoded CO₂ voltage.
pub const ANALOG_OUT_PIN: &str = "A0";

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Slider attribute the simulated user drags to set the concentration.
/// Nominally 0–800+ in application-specific units; the host bounds the
/// control, not the chip.
pub const CO2_ATTR: &str = "CarbonDioxide";

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Sampling cadence: one attribute read + one DAC write per period.
pub const SAMPLE_PERIOD_MS: u32 = 100;

/// Longest pin/attribute name the host adapters will bind.
pub const MAX_NAME_LEN: usize = 32;
