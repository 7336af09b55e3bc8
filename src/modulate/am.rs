use num_complex::Complex32 as C32;
use tracing::debug;
use crate::config::{ModemConfig, ModemError, SidebandType};
use crate::core::{Block, WorkReport};
use crate::dsp::QuadratureFilter;

/// AM modulator: one real baseband sample in, one complex baseband sample out.
///
/// - DSB: `y = 1 + m·x` with carrier, `y = m·x` suppressed (imaginary part 0).
/// - USB/LSB: analytic signal `I ± jQ` of `m·x` from the quadrature filter,
///   the carrier (when present) riding on the in-phase branch.
///
/// Up-conversion to an RF carrier is left to the caller.
#[derive(Debug, Clone)]
pub struct AmMod {
    config: ModemConfig,
    hilbert: Option<QuadratureFilter>,
    carrier: f32,
    n: u64,
}

impl AmMod {
    pub fn new(config: ModemConfig) -> Result<Self, ModemError> {
        config.validate()?;
        let hilbert = config
            .sideband
            .is_single()
            .then(|| QuadratureFilter::design(config.stopband_db));
        let carrier = if config.suppressed_carrier { 0.0 } else { 1.0 };
        debug!(
            sideband = ?config.sideband,
            suppressed = config.suppressed_carrier,
            m = config.modulation_index,
            delay = hilbert.as_ref().map_or(0, |h| h.delay()),
            "created AM modulator"
        );
        Ok(Self { config, hilbert, carrier, n: 0 })
    }

    pub fn config(&self) -> &ModemConfig { &self.config }

    /// Group delay of the modulator output relative to its input.
    pub fn delay(&self) -> usize {
        self.hilbert.as_ref().map_or(0, |h| h.delay())
    }

    /// Samples modulated since creation or the last reset.
    pub fn samples_processed(&self) -> u64 { self.n }

    #[inline]
    pub fn modulate(&mut self, x: f32) -> C32 {
        self.n += 1;
        let v = self.config.modulation_index * x;
        match self.hilbert.as_mut() {
            None => C32::new(self.carrier + v, 0.0),
            Some(h) => {
                let a = h.process_sample(v);
                let i = a.re + self.carrier;
                match self.config.sideband {
                    SidebandType::Lsb => C32::new(i, -a.im),
                    _ => C32::new(i, a.im),
                }
            }
        }
    }

    pub fn modulate_block(&mut self, input: &[f32], output: &mut [C32]) -> usize {
        let n = input.len().min(output.len());
        for i in 0..n {
            output[i] = self.modulate(input[i]);
        }
        n
    }

    pub fn reset(&mut self) {
        if let Some(h) = self.hilbert.as_mut() { h.reset(); }
        self.n = 0;
    }
}

impl Block for AmMod {
    type In = f32;
    type Out = C32;

    fn process(&mut self, input: &[Self::In], output: &mut [Self::Out]) -> WorkReport {
        WorkReport::one_to_one(self.modulate_block(input, output))
    }

    fn delay(&self) -> usize { AmMod::delay(self) }
}
