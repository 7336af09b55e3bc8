use num_complex::Complex32 as C32;
use crate::core::{Block, WorkReport};
use crate::dsp::{PhaseLoop, QuadratureFilter};

/// Tracking bandwidth relative to acquisition, so the sideband content leaking
/// into the phase error does not phase-modulate the estimate once locked.
const CARRIER_LOOP_NARROWING: f32 = 0.25;

/// Lock metric below which the carrier loop switches to tracking.
const LOCK_ON: f32 = 0.45;
/// Lock metric above which it falls back to acquisition.
const LOCK_OFF: f32 = 0.55;

/// Two-state carrier loop: acquire at the full loop bandwidth, track narrow.
#[derive(Debug, Clone)]
struct CarrierLoop {
    pll: PhaseLoop,
    wide_bw: f32,
    tracking: bool,
}

impl CarrierLoop {
    fn new(loop_bw: f32) -> Self {
        Self { pll: PhaseLoop::new(loop_bw), wide_bw: loop_bw, tracking: false }
    }

    /// Derotate `y`, update the loop, return the derotated sample.
    #[inline]
    fn derotate(&mut self, y: C32) -> C32 {
        let v = self.pll.nco().mix_down(y);
        let mag = v.norm();
        let err = if mag > 0.0 { v.im / mag } else { 0.0 };
        self.pll.advance(err);
        let metric = self.pll.lock_metric();
        if !self.tracking && metric < LOCK_ON {
            self.tracking = true;
            self.pll.set_bandwidth(self.wide_bw * CARRIER_LOOP_NARROWING);
        } else if self.tracking && metric > LOCK_OFF {
            self.tracking = false;
            self.pll.set_bandwidth(self.wide_bw);
        }
        v
    }

    fn reset(&mut self) {
        self.pll.reset();
        self.pll.set_bandwidth(self.wide_bw);
        self.tracking = false;
    }
}

/// Single-sideband detector (phasing method).
///
/// Both I and Q of the received signal pass through the same quadrature
/// section as the modulator; `½(I[n-h] - H{Q}[n])` keeps the wanted sideband
/// and cancels the image. When a carrier is transmitted, a PLL locks onto it
/// first and the known unit carrier is removed before the phasing stage.
#[derive(Debug, Clone)]
pub struct SidebandDetector {
    lower: bool,
    carrier: Option<CarrierLoop>,
    re_path: QuadratureFilter,
    im_path: QuadratureFilter,
    inv_m: f32,
}

impl SidebandDetector {
    pub fn new(modulation_index: f32, lower: bool, with_carrier: bool, loop_bw: f32, stopband_db: f32) -> Self {
        let re_path = QuadratureFilter::design(stopband_db);
        let im_path = re_path.clone();
        Self {
            lower,
            carrier: with_carrier.then(|| CarrierLoop::new(loop_bw)),
            re_path,
            im_path,
            inv_m: modulation_index.recip(),
        }
    }

    /// Delay this detector adds; the modulator section adds the same.
    pub fn delay(&self) -> usize { self.re_path.delay() }

    pub fn pll(&self) -> Option<&PhaseLoop> { self.carrier.as_ref().map(|c| &c.pll) }

    /// True once the carrier loop has locked and narrowed; false without a carrier.
    pub fn is_tracking(&self) -> bool {
        self.carrier.as_ref().is_some_and(|c| c.tracking)
    }

    #[inline]
    pub fn detect(&mut self, y: C32) -> f32 {
        let mut w = match self.carrier.as_mut() {
            Some(c) => c.derotate(y) - C32::new(1.0, 0.0),
            None => y,
        };
        if self.lower { w = w.conj(); }
        let i = self.re_path.process_sample(w.re);
        let q = self.im_path.process_sample(w.im);
        0.5 * (i.re - q.im) * self.inv_m
    }

    pub fn reset(&mut self) {
        if let Some(c) = self.carrier.as_mut() { c.reset(); }
        self.re_path.reset();
        self.im_path.reset();
    }
}

impl Block for SidebandDetector {
    type In = C32;
    type Out = f32;

    fn process(&mut self, input: &[Self::In], output: &mut [Self::Out]) -> WorkReport {
        let n = input.len().min(output.len());
        for i in 0..n {
            output[i] = self.detect(input[i]);
        }
        WorkReport::one_to_one(n)
    }

    fn delay(&self) -> usize { SidebandDetector::delay(self) }
}
