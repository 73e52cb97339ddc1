//! Linear concentration → voltage transfer curve.
//!
//! The chip encodes the slider value as an analog voltage through a fixed
//! linear scale: `volts = (value / full_scale) * full_scale_volts`.
//!
//! The curve is deliberately **unclamped**. A slider value past full scale
//! (or below zero) maps linearly past the rails, matching an unbuffered
//! sensor output. Downstream consumers see exactly what the user dialed in.

use crate::config::ChipConfig;

/// Fixed linear transfer curve.
#[derive(Debug, Clone, Copy)]
pub struct TransferCurve {
    /// Slider value that maps to the full-scale voltage.
    pub full_scale: f32,
    /// Voltage at full scale.
    pub full_scale_volts: f32,
}

impl TransferCurve {
    pub fn from_config(config: &ChipConfig) -> Self {
        Self {
            full_scale: config.full_scale,
            full_scale_volts: config.full_scale_volts,
        }
    }

    /// Map a slider value to an output voltage. Pure, no clamping.
    pub fn voltage_for(&self, value: f32) -> f32 {
        (value / self.full_scale) * self.full_scale_volts
    }
}

impl Default for TransferCurve {
    fn default() -> Self {
        Self::from_config(&ChipConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn endpoints_map_to_rails() {
        let curve = TransferCurve::default();
        assert!((curve.voltage_for(0.0) - 0.0).abs() < EPS);
        assert!((curve.voltage_for(800.0) - 3.3).abs() < EPS);
    }

    #[test]
    fn midpoint_maps_to_half_rail() {
        let curve = TransferCurve::default();
        assert!((curve.voltage_for(400.0) - 1.65).abs() < EPS);
    }

    #[test]
    fn over_range_passes_through_unclamped() {
        let curve = TransferCurve::default();
        assert!((curve.voltage_for(1600.0) - 6.6).abs() < EPS);
    }

    #[test]
    fn negative_values_produce_negative_volts() {
        let curve = TransferCurve::default();
        let v = curve.voltage_for(-100.0);
        assert!(v < 0.0);
        assert!((v - (-0.4125)).abs() < EPS);
    }
}
