// src/dsp/mod.rs

pub mod hilbert;
pub use hilbert::QuadratureFilter;

pub mod nco;
pub use nco::{Nco, wrap_phase};

pub mod pll;
pub use pll::{PhaseLoop, loop_gains};

pub mod window;
pub use window::{bessel_i0, kaiser, kaiser_beta, kaiser_order};
