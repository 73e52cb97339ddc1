//! Property tests for the transfer curve and the simulated host timers.
//!
//! Runs on host targets only — proptest is not available inside the wasm
//! sandbox the chip ships in.

#![cfg(not(target_arch = "wasm32"))]

use co2chip::adapters::sim_host::SimHost;
use co2chip::app::ports::HostBindings;
use co2chip::transfer::TransferCurve;
use proptest::prelude::*;

// ── Transfer curve ────────────────────────────────────────────

proptest! {
    /// Over the nominal slider range the output is exactly the fixed
    /// linear scale, within floating-point tolerance.
    #[test]
    fn voltage_is_linear_scale_of_value(value in 0.0f32..=800.0f32) {
        let curve = TransferCurve::default();
        let expected = (value / 800.0) * 3.3;
        prop_assert!((curve.voltage_for(value) - expected).abs() < 1e-5);
    }

    /// Out-of-range values (either sign) follow the same line — the curve
    /// never clamps.
    #[test]
    fn out_of_range_values_follow_the_same_line(value in -1.0e4f32..=1.0e4f32) {
        let curve = TransferCurve::default();
        let expected = (value / 800.0) * 3.3;
        prop_assert!((curve.voltage_for(value) - expected).abs() < 1e-3);
    }

    /// Monotonicity: a larger slider value never produces a smaller voltage.
    #[test]
    fn curve_is_monotonic(a in -1.0e4f32..=1.0e4f32, b in -1.0e4f32..=1.0e4f32) {
        let curve = TransferCurve::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.voltage_for(lo) <= curve.voltage_for(hi));
    }
}

// ── SimHost timer cadence ─────────────────────────────────────

proptest! {
    /// Over any window, a periodic timer fires exactly floor(window/period)
    /// times when starting from t=0.
    #[test]
    fn periodic_fire_count_matches_window(
        period_ms in 1u64..=500u64,
        window_ms in 0u64..=5_000u64,
    ) {
        let mut host = SimHost::new();
        host.timer_init(period_ms * 1_000, true).unwrap();

        let fired = host.advance(window_ms * 1_000);
        let expected = (window_ms / period_ms).min(64) as usize;
        prop_assert_eq!(fired.len(), expected);
    }

    /// Splitting a window into two advances fires the same total as one
    /// advance over the whole window. Ranges keep every advance below the
    /// fire-report capacity so counts stay exact.
    #[test]
    fn advance_is_additive(
        period_ms in 50u64..=200u64,
        first_ms in 0u64..=1_000u64,
        second_ms in 0u64..=1_000u64,
    ) {
        let mut split = SimHost::new();
        split.timer_init(period_ms * 1_000, true).unwrap();
        let n_split = split.advance(first_ms * 1_000).len() + split.advance(second_ms * 1_000).len();

        let mut whole = SimHost::new();
        whole.timer_init(period_ms * 1_000, true).unwrap();
        let n_whole = whole.advance((first_ms + second_ms) * 1_000).len();

        prop_assert_eq!(n_split, n_whole);
    }
}
