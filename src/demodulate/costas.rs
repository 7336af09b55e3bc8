use num_complex::Complex32 as C32;
use crate::core::{Block, WorkReport};
use crate::dsp::PhaseLoop;

/// Coherent DSB-SC detector (Costas loop).
///
/// The received sample is rotated by the loop's phase estimate θ, the real
/// part is the audio, and `sign(Re v)·Im v / |v|` (≈ sin of the phase error)
/// drives the PI loop. Lock is ambiguous by π, which flips the output sign.
#[derive(Debug, Clone)]
pub struct CostasDetector {
    pll: PhaseLoop,
    inv_m: f32,
    last_error: f32,
}

impl CostasDetector {
    pub fn new(modulation_index: f32, loop_bw: f32) -> Self {
        Self {
            pll: PhaseLoop::new(loop_bw),
            inv_m: modulation_index.recip(),
            last_error: 0.0,
        }
    }

    pub fn pll(&self) -> &PhaseLoop { &self.pll }

    /// Phase detector output from the most recent sample.
    pub fn last_error(&self) -> f32 { self.last_error }

    #[inline]
    pub fn detect(&mut self, y: C32) -> f32 {
        let v = self.pll.nco().mix_down(y);
        let mag = v.norm();
        let err = if mag > 0.0 { v.re.signum() * v.im / mag } else { 0.0 };
        self.last_error = err;
        self.pll.advance(err);
        v.re * self.inv_m
    }

    pub fn reset(&mut self) {
        self.pll.reset();
        self.last_error = 0.0;
    }
}

impl Block for CostasDetector {
    type In = C32;
    type Out = f32;

    fn process(&mut self, input: &[Self::In], output: &mut [Self::Out]) -> WorkReport {
        let n = input.len().min(output.len());
        for i in 0..n {
            output[i] = self.detect(input[i]);
        }
        WorkReport::one_to_one(n)
    }
}
