//! Port traits — the boundary between chip logic and the simulator host.
//!
//! ```text
//!   Host adapter ──▶ Port trait ──▶ ChipService (domain)
//! ```
//!
//! Host adapters (the wasm plugin ABI, the in-process simulated host)
//! implement these traits. The [`ChipService`](super::service::ChipService)
//! consumes them via generics, so the domain core never touches the host
//! ABI directly.
//!
//! The split mirrors the chip lifecycle: [`HostBindings`] is used once at
//! initialisation to declare host-visible objects; [`AttributePort`] and
//! [`AnalogOutPort`] are the per-tick read and write sides. The per-tick
//! calls are infallible — the host owns failure handling for attribute
//! reads and pin writes, and the chip performs no validation or retries.

// ───────────────────────────────────────────────────────────────
// Host object handles
// ───────────────────────────────────────────────────────────────

/// Opaque handle to a declared pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinId(pub u32);

/// Opaque handle to a declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrId(pub u32);

/// Opaque handle to a registered timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(pub u32);

/// Mode a pin is bound to at declaration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Digital input.
    Input,
    /// Digital output.
    Output,
    /// Analog terminal (DAC-writable).
    Analog,
}

// ───────────────────────────────────────────────────────────────
// Binding port (used once, at chip initialisation)
// ───────────────────────────────────────────────────────────────

/// Declaration-side port: the chip calls this at startup to bind its
/// host-visible objects.
pub trait HostBindings {
    /// Bind a named pin in the given mode.
    fn pin_init(&mut self, name: &str, mode: PinMode) -> Result<PinId, HostError>;

    /// Create a named, host-visible floating-point control with a default
    /// value. Declaring the same name twice yields the same handle — the
    /// host owns the control, the chip only references it.
    fn attr_init_float(&mut self, name: &str, default: f32) -> Result<AttrId, HostError>;

    /// Register a timer with the given period. When `repeat` is set the
    /// timer re-arms itself after every fire.
    fn timer_init(&mut self, period_us: u64, repeat: bool) -> Result<TimerId, HostError>;
}

// ───────────────────────────────────────────────────────────────
// Per-tick ports (driven by the host timer callback)
// ───────────────────────────────────────────────────────────────

/// Read-side port: fresh attribute value, no caching on either side.
pub trait AttributePort {
    fn attr_read_float(&self, attr: AttrId) -> f32;
}

/// Write-side port: set the analog output voltage of a pin.
pub trait AnalogOutPort {
    fn pin_dac_write(&mut self, pin: PinId, volts: f32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / inspection)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`ChipEvent`](super::events::ChipEvent)s
/// through this port. Adapters decide where they go (log facade, test
/// recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::ChipEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`HostBindings`] declaration calls.
///
/// The reference host never rejects a declaration, but a generalized
/// binding layer can: fixed-capacity hosts run out of slots, and a zero
/// period would make a recurring timer fire forever at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    /// No free pin slot in the host table.
    PinTableFull,
    /// No free attribute slot in the host table.
    AttrTableFull,
    /// No free timer slot in the host table.
    TimerTableFull,
    /// Pin or attribute name exceeds the host's name length limit.
    NameTooLong,
    /// Timer period of zero microseconds.
    InvalidPeriod,
}

impl core::fmt::Display for HostError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PinTableFull => write!(f, "pin table full"),
            Self::AttrTableFull => write!(f, "attribute table full"),
            Self::TimerTableFull => write!(f, "timer table full"),
            Self::NameTooLong => write!(f, "name too long"),
            Self::InvalidPeriod => write!(f, "invalid timer period"),
        }
    }
}
