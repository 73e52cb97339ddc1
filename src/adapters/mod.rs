//! Host adapters — everything that touches a simulator runtime.
//!
//! [`sim_host`] is the in-process host used on native targets (tests,
//! harnesses). [`wasm_host`] is the real plugin ABI, only meaningful when
//! the chip is compiled for the simulator's wasm sandbox.

pub mod log_sink;
pub mod sim_host;

#[cfg(target_arch = "wasm32")]
pub mod wasm_host;
