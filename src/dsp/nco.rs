// src/dsp/nco.rs
use core::f32::consts::{PI, TAU};
use num_complex::Complex32 as C32;

/// Phase accumulator driven by a carrier-tracking loop.
/// Phase is kept in [-π, π); frequency is in radians per sample.
#[derive(Debug, Clone, Default)]
pub struct Nco {
    phase: f32,
    freq: f32,
}

impl Nco {
    pub fn new(freq: f32) -> Self {
        Self { phase: 0.0, freq }
    }

    #[inline]
    pub fn phase(&self) -> f32 { self.phase }

    #[inline]
    pub fn frequency(&self) -> f32 { self.freq }

    #[inline]
    pub fn set_frequency(&mut self, freq: f32) { self.freq = freq; }

    #[inline]
    pub fn adjust_frequency(&mut self, dfreq: f32) { self.freq += dfreq; }

    #[inline]
    pub fn adjust_phase(&mut self, dphi: f32) {
        self.phase = wrap_phase(self.phase + dphi);
    }

    /// Advance the phase by one sample at the current frequency.
    #[inline]
    pub fn step(&mut self) {
        self.phase = wrap_phase(self.phase + self.freq);
    }

    /// Rotate `x` by the conjugate of the current phasor: `x·e^{-jθ}`.
    #[inline]
    pub fn mix_down(&self, x: C32) -> C32 {
        let (s, c) = self.phase.sin_cos();
        C32::new(x.re * c + x.im * s, x.im * c - x.re * s)
    }

    /// Rotate `x` by the current phasor: `x·e^{jθ}`.
    #[inline]
    pub fn mix_up(&self, x: C32) -> C32 {
        let (s, c) = self.phase.sin_cos();
        C32::new(x.re * c - x.im * s, x.re * s + x.im * c)
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.freq = 0.0;
    }
}

/// Wrap to [-π, π).
#[inline]
pub fn wrap_phase(phi: f32) -> f32 {
    (phi + PI).rem_euclid(TAU) - PI
}
