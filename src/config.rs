//! Chip configuration parameters
//!
//! All tunable parameters for the virtual CO₂ sensor. Host-visible object
//! names live in [`crate::pins`]; this module holds the numeric knobs.

use serde::{Deserialize, Serialize};

use crate::pins;

/// Core chip configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipConfig {
    // --- Attribute ---
    /// Default slider value reported before the user touches the control
    pub attr_default: f32,

    // --- Transfer curve ---
    /// Slider value that maps to the full-scale output voltage
    pub full_scale: f32,
    /// Output voltage at full scale (rail of the simulated DAC)
    pub full_scale_volts: f32,

    // --- Timing ---
    /// Sampling period (milliseconds)
    pub sample_period_ms: u32,
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self {
            attr_default: 0.0,
            full_scale: 800.0,
            full_scale_volts: 3.3,
            sample_period_ms: pins::SAMPLE_PERIOD_MS,
        }
    }
}

impl ChipConfig {
    /// Sampling period in microseconds, the unit the host timer API speaks.
    pub fn sample_period_us(&self) -> u64 {
        u64::from(self.sample_period_ms) * 1_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = ChipConfig::default();
        assert!(c.full_scale > 0.0);
        assert!(c.full_scale_volts > 0.0);
        assert!(c.sample_period_ms > 0);
        assert_eq!(c.attr_default, 0.0, "slider starts at zero");
    }

    #[test]
    fn period_converts_to_micros() {
        let c = ChipConfig::default();
        assert_eq!(c.sample_period_us(), 100_000);
    }

    #[test]
    fn serde_roundtrip() {
        let c = ChipConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: ChipConfig = serde_json::from_str(&json).unwrap();
        assert!((c.full_scale - c2.full_scale).abs() < 0.001);
        assert!((c.full_scale_volts - c2.full_scale_volts).abs() < 0.001);
        assert_eq!(c.sample_period_ms, c2.sample_period_ms);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = ChipConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: ChipConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(c.sample_period_ms, c2.sample_period_ms);
        assert!((c.full_scale - c2.full_scale).abs() < 0.001);
    }
}
