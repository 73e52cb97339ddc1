//! Virtual CO₂ sensor chip library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All simulator-host ABI code is guarded by
//! `#[cfg(target_arch = "wasm32")]` within the adapters module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod transfer;

pub mod adapters;
