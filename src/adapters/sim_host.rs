//! In-process simulated host runtime.
//!
//! Stands in for the real simulator on native targets: fixed-capacity pin,
//! attribute, and timer tables plus a virtual microsecond clock. Tests and
//! harnesses drive time explicitly with [`SimHost::advance`] and dispatch
//! the returned timer fires themselves, which keeps the host decoupled
//! from whatever state block the timers feed (mirrors the serialized
//! callback delivery of the real runtime).
//!
//! ```text
//!   host.advance(dt) ──▶ [TimerId, ...] ──▶ service.on_timer_tick(&mut host, ..)
//! ```

use heapless::{String, Vec};
use log::info;

use crate::app::ports::{
    AnalogOutPort, AttrId, AttributePort, HostBindings, HostError, PinId, PinMode, TimerId,
};
use crate::pins::MAX_NAME_LEN;

/// Slots available for declared pins.
const MAX_PINS: usize = 8;
/// Slots available for declared attributes.
const MAX_ATTRS: usize = 8;
/// Slots available for registered timers.
const MAX_TIMERS: usize = 4;
/// Most timer fires a single `advance()` call reports.
const MAX_FIRES: usize = 64;

#[derive(Debug)]
struct PinSlot {
    name: String<MAX_NAME_LEN>,
    mode: PinMode,
    volts: f32,
    writes: u32,
}

#[derive(Debug)]
struct AttrSlot {
    name: String<MAX_NAME_LEN>,
    value: f32,
}

#[derive(Debug)]
struct TimerSlot {
    period_us: u64,
    repeat: bool,
    next_due_us: u64,
    armed: bool,
}

/// The simulated host runtime.
pub struct SimHost {
    now_us: u64,
    pins: Vec<PinSlot, MAX_PINS>,
    attrs: Vec<AttrSlot, MAX_ATTRS>,
    timers: Vec<TimerSlot, MAX_TIMERS>,
}

impl SimHost {
    pub fn new() -> Self {
        Self {
            now_us: 0,
            pins: Vec::new(),
            attrs: Vec::new(),
            timers: Vec::new(),
        }
    }

    /// Current virtual time in microseconds.
    pub fn now_us(&self) -> u64 {
        self.now_us
    }

    // ── Virtual clock ─────────────────────────────────────────

    /// Advance virtual time by `dt_us` and collect every timer fire that
    /// falls inside the window, in chronological order (ties resolve to
    /// the earliest-registered timer). The caller dispatches each fire to
    /// the owning callback before the next one conceptually runs, exactly
    /// as the real host serialises delivery.
    pub fn advance(&mut self, dt_us: u64) -> Vec<TimerId, MAX_FIRES> {
        let target = self.now_us + dt_us;
        let mut fired: Vec<TimerId, MAX_FIRES> = Vec::new();

        loop {
            let mut next: Option<(usize, u64)> = None;
            for (i, t) in self.timers.iter().enumerate() {
                if t.armed && t.next_due_us <= target {
                    let earlier = next.is_none_or(|(_, due)| t.next_due_us < due);
                    if earlier {
                        next = Some((i, t.next_due_us));
                    }
                }
            }
            let Some((idx, due)) = next else { break };

            self.now_us = due;
            let t = &mut self.timers[idx];
            if t.repeat {
                t.next_due_us = due + t.period_us;
            } else {
                t.armed = false;
            }
            if fired.push(TimerId(idx as u32)).is_err() {
                break; // Window produced more fires than the report can hold.
            }
        }

        self.now_us = target;
        fired
    }

    // ── Test / harness inspection ─────────────────────────────

    /// Set an attribute's value by handle (the "user drags the slider").
    pub fn set_attr(&mut self, attr: AttrId, value: f32) {
        if let Some(slot) = self.attrs.get_mut(attr.0 as usize) {
            slot.value = value;
        }
    }

    /// Set an attribute's value by name. Returns `false` if no such
    /// attribute was declared.
    pub fn set_attr_by_name(&mut self, name: &str, value: f32) -> bool {
        for slot in self.attrs.iter_mut() {
            if slot.name.as_str() == name {
                slot.value = value;
                return true;
            }
        }
        false
    }

    /// Voltage last written to a pin (0.0 before the first write).
    pub fn pin_volts(&self, pin: PinId) -> f32 {
        self.pins.get(pin.0 as usize).map_or(0.0, |s| s.volts)
    }

    /// Number of DAC writes a pin has received.
    pub fn pin_write_count(&self, pin: PinId) -> u32 {
        self.pins.get(pin.0 as usize).map_or(0, |s| s.writes)
    }

    /// Look up a declared pin by name.
    pub fn find_pin(&self, name: &str) -> Option<PinId> {
        self.pins
            .iter()
            .position(|s| s.name.as_str() == name)
            .map(|i| PinId(i as u32))
    }

    fn bounded_name(name: &str) -> Result<String<MAX_NAME_LEN>, HostError> {
        String::try_from(name).map_err(|()| HostError::NameTooLong)
    }
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new()
    }
}

// ── HostBindings implementation ───────────────────────────────

impl HostBindings for SimHost {
    fn pin_init(&mut self, name: &str, mode: PinMode) -> Result<PinId, HostError> {
        let name = Self::bounded_name(name)?;
        let id = PinId(self.pins.len() as u32);
        self.pins
            .push(PinSlot {
                name,
                mode,
                volts: 0.0,
                writes: 0,
            })
            .map_err(|_| HostError::PinTableFull)?;
        info!("sim_host: pin '{}' bound ({:?}) as {:?}", self.pins[id.0 as usize].name, mode, id);
        Ok(id)
    }

    fn attr_init_float(&mut self, name: &str, default: f32) -> Result<AttrId, HostError> {
        // Re-declaring yields the existing control — the host owns it.
        if let Some(i) = self.attrs.iter().position(|s| s.name.as_str() == name) {
            return Ok(AttrId(i as u32));
        }
        let name = Self::bounded_name(name)?;
        let id = AttrId(self.attrs.len() as u32);
        self.attrs
            .push(AttrSlot {
                name,
                value: default,
            })
            .map_err(|_| HostError::AttrTableFull)?;
        info!("sim_host: attr '{}' created (default {})", self.attrs[id.0 as usize].name, default);
        Ok(id)
    }

    fn timer_init(&mut self, period_us: u64, repeat: bool) -> Result<TimerId, HostError> {
        if period_us == 0 {
            return Err(HostError::InvalidPeriod);
        }
        let id = TimerId(self.timers.len() as u32);
        self.timers
            .push(TimerSlot {
                period_us,
                repeat,
                next_due_us: self.now_us + period_us,
                armed: true,
            })
            .map_err(|_| HostError::TimerTableFull)?;
        info!("sim_host: timer {:?} armed ({}us, repeat={})", id, period_us, repeat);
        Ok(id)
    }
}

// ── Per-tick ports ────────────────────────────────────────────

impl AttributePort for SimHost {
    fn attr_read_float(&self, attr: AttrId) -> f32 {
        self.attrs.get(attr.0 as usize).map_or(0.0, |s| s.value)
    }
}

impl AnalogOutPort for SimHost {
    fn pin_dac_write(&mut self, pin: PinId, volts: f32) {
        if let Some(slot) = self.pins.get_mut(pin.0 as usize) {
            slot.volts = volts;
            slot.writes = slot.writes.saturating_add(1);
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
