//! am-modem: analog AM modulator/demodulator core.

/// `version()` is here so dependents can sanity-check linkage.
pub fn version() -> &'static str { env!("CARGO_PKG_VERSION") }

pub mod config;
pub mod core;
pub mod demodulate;
pub mod dsp;
pub mod modulate;
pub mod util;

#[cfg(feature = "python")]
mod python;

pub use config::{ModemConfig, ModemError, SidebandType};
pub use demodulate::AmDemod;
pub use modulate::AmMod;
