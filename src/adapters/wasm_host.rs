//! Simulator plugin ABI adapter (wasm32 only).
//!
//! The chip is loaded into the simulator's wasm sandbox and talks to the
//! host runtime through raw `extern "C"` imports. This module is the only
//! place those imports appear; everything above it goes through the port
//! traits.
//!
//! The host invokes the exported [`chip_init`] once at simulation start,
//! owns the chip state block for the whole session (it never requests
//! teardown), and delivers timer callbacks serially on a single thread.

use core::ffi::{c_char, c_void};

use log::error;

use crate::adapters::log_sink::LogEventSink;
use crate::app::ports::{
    AnalogOutPort, AttrId, AttributePort, HostBindings, HostError, PinId, PinMode, TimerId,
};
use crate::app::service::ChipService;
use crate::config::ChipConfig;
use crate::pins::MAX_NAME_LEN;

// ── Raw host imports ──────────────────────────────────────────

/// Timer registration block, laid out exactly as the host header defines it.
#[repr(C)]
struct TimerConfig {
    callback: unsafe extern "C" fn(*mut c_void),
    user_data: *mut c_void,
}

#[allow(non_snake_case)]
mod ffi {
    use super::{TimerConfig, c_char};

    unsafe extern "C" {
        pub fn pinInit(name: *const c_char, mode: u32) -> u32;
        pub fn attrInitFloat(name: *const c_char, default_value: f32) -> u32;
        pub fn attrReadFloat(attr: u32) -> f32;
        pub fn pinDACWrite(pin: u32, voltage: f32);
        pub fn timerInit(config: *const TimerConfig) -> u32;
        pub fn timerStart(timer: u32, micros: u32, repeat: bool);
    }
}

/// Pin mode discriminants from the host header.
fn mode_bits(mode: PinMode) -> u32 {
    match mode {
        PinMode::Input => 0,
        PinMode::Output => 1,
        PinMode::Analog => 4,
    }
}

/// NUL-terminate a name for the C-string host calls.
fn c_name(name: &str) -> Result<heapless::Vec<u8, { MAX_NAME_LEN + 1 }>, HostError> {
    let mut buf = heapless::Vec::new();
    buf.extend_from_slice(name.as_bytes())
        .map_err(|()| HostError::NameTooLong)?;
    buf.push(0).map_err(|_| HostError::NameTooLong)?;
    Ok(buf)
}

// ── WasmHost ──────────────────────────────────────────────────

/// Port implementations backed by the real host runtime.
pub struct WasmHost {
    /// Passed to the host at timer registration; handed back on every tick.
    timer_user_data: *mut c_void,
}

impl WasmHost {
    pub fn new() -> Self {
        Self {
            timer_user_data: core::ptr::null_mut(),
        }
    }

    /// Set the state block the host hands back to the timer callback.
    /// Must happen before [`HostBindings::timer_init`] is called.
    pub fn set_timer_context(&mut self, user_data: *mut c_void) {
        self.timer_user_data = user_data;
    }
}

impl HostBindings for WasmHost {
    fn pin_init(&mut self, name: &str, mode: PinMode) -> Result<PinId, HostError> {
        let name = c_name(name)?;
        // SAFETY: `name` is NUL-terminated and outlives the call; the host
        // copies it before returning.
        let id = unsafe { ffi::pinInit(name.as_ptr().cast::<c_char>(), mode_bits(mode)) };
        Ok(PinId(id))
    }

    fn attr_init_float(&mut self, name: &str, default: f32) -> Result<AttrId, HostError> {
        let name = c_name(name)?;
        // SAFETY: as in `pin_init` — valid NUL-terminated pointer for the
        // duration of the call.
        let id = unsafe { ffi::attrInitFloat(name.as_ptr().cast::<c_char>(), default) };
        Ok(AttrId(id))
    }

    fn timer_init(&mut self, period_us: u64, repeat: bool) -> Result<TimerId, HostError> {
        if period_us == 0 {
            return Err(HostError::InvalidPeriod);
        }
        let config = TimerConfig {
            callback: chip_timer_event,
            user_data: self.timer_user_data,
        };
        // SAFETY: `config` lives across the call; the host copies the
        // registration block. `user_data` points at the leaked ChipRuntime
        // installed by `chip_init`, which is never freed.
        let id = unsafe { ffi::timerInit(&raw const config) };
        unsafe { ffi::timerStart(id, period_us as u32, repeat) };
        Ok(TimerId(id))
    }
}

impl AttributePort for WasmHost {
    fn attr_read_float(&self, attr: AttrId) -> f32 {
        // SAFETY: handle was returned by attrInitFloat; no pointers involved.
        unsafe { ffi::attrReadFloat(attr.0) }
    }
}

impl AnalogOutPort for WasmHost {
    fn pin_dac_write(&mut self, pin: PinId, volts: f32) {
        // SAFETY: handle was returned by pinInit; no pointers involved.
        unsafe { ffi::pinDACWrite(pin.0, volts) }
    }
}

// ── Chip entry point ──────────────────────────────────────────

/// Everything the timer callback needs, allocated once and leaked — the
/// host owns this block for the lifetime of the simulation session.
struct ChipRuntime {
    host: WasmHost,
    sink: LogEventSink,
    service: Option<ChipService>,
}

/// Host timer callback: one sample per fire.
///
/// SAFETY: `user_data` is the leaked [`ChipRuntime`] installed by
/// [`chip_init`] before the timer was armed. The host delivers callbacks
/// serially on a single thread, so the exclusive reference is unique.
unsafe extern "C" fn chip_timer_event(user_data: *mut c_void) {
    let rt = unsafe { &mut *user_data.cast::<ChipRuntime>() };
    if let Some(service) = rt.service.as_mut() {
        service.on_timer_tick(&mut rt.host, &mut rt.sink);
    }
}

/// Plugin entry point, invoked once by the host at simulation start.
///
/// Cannot propagate errors across the ABI: a rejected binding is logged
/// and the chip stays inert (no timer ticks reach a missing service).
#[unsafe(no_mangle)]
pub extern "C" fn chip_init() {
    let config = ChipConfig::default();

    let rt: &'static mut ChipRuntime = Box::leak(Box::new(ChipRuntime {
        host: WasmHost::new(),
        sink: LogEventSink::new(),
        service: None,
    }));
    let user_data: *mut c_void = core::ptr::from_mut(rt).cast();
    rt.host.set_timer_context(user_data);

    match ChipService::init(&config, &mut rt.host, &mut rt.sink) {
        Ok(service) => rt.service = Some(service),
        Err(e) => error!("co2chip: init failed: {e}"),
    }
}
