use super::Nco;

/// Largest carrier frequency the loop will follow, in cycles per sample.
pub const PULL_IN_CYCLES: f32 = 0.05;

/// Smoothing factor of the lock metric (moving average of `|error|`).
const LOCK_SMOOTHING: f32 = 0.01;

/// Second-order (proportional + integral) loop filter advancing an [`Nco`].
///
///   freq  += beta * error      (clamped to ±max_freq)
///   phase += freq + alpha * error
#[derive(Debug, Clone)]
pub struct PhaseLoop {
    nco: Nco,
    alpha: f32,
    beta: f32,
    damping: f32,
    max_freq: f32,
    lock_metric: f32,
}

impl PhaseLoop {
    /// `bw`: normalized loop bandwidth; damping is 1/√2.
    pub fn new(bw: f32) -> Self {
        Self::with_damping(bw, core::f32::consts::FRAC_1_SQRT_2)
    }

    pub fn with_damping(bw: f32, damping: f32) -> Self {
        let (alpha, beta) = loop_gains(bw, damping);
        Self {
            nco: Nco::default(),
            alpha,
            beta,
            damping,
            max_freq: core::f32::consts::TAU * PULL_IN_CYCLES,
            lock_metric: 1.0,
        }
    }

    /// Retune the loop filter; phase, frequency and lock metric are kept.
    pub fn set_bandwidth(&mut self, bw: f32) {
        let (alpha, beta) = loop_gains(bw, self.damping);
        self.alpha = alpha;
        self.beta = beta;
    }

    pub fn alpha(&self) -> f32 { self.alpha }
    pub fn beta(&self) -> f32 { self.beta }
    pub fn max_frequency(&self) -> f32 { self.max_freq }

    /// Smoothed `|error|`; low when locked, starts at 1.
    pub fn lock_metric(&self) -> f32 { self.lock_metric }

    #[inline]
    pub fn nco(&self) -> &Nco { &self.nco }

    #[inline]
    pub fn phase(&self) -> f32 { self.nco.phase() }

    #[inline]
    pub fn frequency(&self) -> f32 { self.nco.frequency() }

    /// Feed one phase-error sample and advance by one sample.
    #[inline]
    pub fn advance(&mut self, error: f32) {
        self.lock_metric += LOCK_SMOOTHING * (error.abs() - self.lock_metric);
        let f = (self.nco.frequency() + self.beta * error).clamp(-self.max_freq, self.max_freq);
        self.nco.set_frequency(f);
        self.nco.adjust_phase(self.alpha * error);
        self.nco.step();
    }

    pub fn reset(&mut self) {
        self.nco.reset();
        self.lock_metric = 1.0;
    }
}

/// PI gains from loop bandwidth and damping:
///   denom = 1 + 2ζ·bw + bw²,  alpha = 4ζ·bw / denom,  beta = 4·bw² / denom
pub fn loop_gains(bw: f32, damping: f32) -> (f32, f32) {
    let denom = 1.0 + 2.0 * damping * bw + bw * bw;
    (4.0 * damping * bw / denom, 4.0 * bw * bw / denom)
}
