use num_complex::Complex32 as C32;
use tracing::debug;
use crate::config::{ModemConfig, ModemError, SidebandType};
use crate::core::{Block, WorkReport};
use crate::dsp::PhaseLoop;
use super::{CostasDetector, EnvelopeDetector, SidebandDetector};

#[derive(Debug, Clone)]
enum Detector {
    Envelope(EnvelopeDetector),
    Coherent(CostasDetector),
    Sideband(SidebandDetector),
}

/// AM demodulator: one complex sample in, one real sample out.
///
/// The detector is fixed by the configuration at creation:
/// - DSB with carrier: envelope detection, zero delay.
/// - DSB suppressed carrier: Costas loop; expect an acquisition transient.
/// - USB/LSB: phasing image rejection with a section of the modulator's
///   quadrature filter (delay h, so the round trip is 2h), carrier PLL when
///   the carrier is transmitted.
#[derive(Debug, Clone)]
pub struct AmDemod {
    config: ModemConfig,
    detector: Detector,
}

impl AmDemod {
    pub fn new(config: ModemConfig) -> Result<Self, ModemError> {
        config.validate()?;
        let detector = Self::build_detector(&config);
        let demod = Self { config, detector };
        debug!(
            sideband = ?config.sideband,
            suppressed = config.suppressed_carrier,
            m = config.modulation_index,
            carrier_offset = config.carrier_offset,
            delay = demod.delay(),
            loop_alpha = ?demod.pll().map(|p| p.alpha()),
            loop_beta = ?demod.pll().map(|p| p.beta()),
            "created AM demodulator"
        );
        Ok(demod)
    }

    fn build_detector(c: &ModemConfig) -> Detector {
        let m = c.modulation_index;
        match (c.sideband, c.suppressed_carrier) {
            (SidebandType::Dsb, false) => Detector::Envelope(EnvelopeDetector::new(m)),
            (SidebandType::Dsb, true) => Detector::Coherent(CostasDetector::new(m, c.loop_bandwidth)),
            (sb, suppressed) => Detector::Sideband(SidebandDetector::new(
                m,
                sb == SidebandType::Lsb,
                !suppressed,
                c.loop_bandwidth,
                c.stopband_db,
            )),
        }
    }

    pub fn config(&self) -> &ModemConfig { &self.config }

    /// Group delay of the demodulator output relative to its input.
    pub fn delay(&self) -> usize {
        match &self.detector {
            Detector::Sideband(d) => d.delay(),
            _ => 0,
        }
    }

    /// Carrier-tracking loop, if this configuration uses one.
    pub fn pll(&self) -> Option<&PhaseLoop> {
        match &self.detector {
            Detector::Envelope(_) => None,
            Detector::Coherent(d) => Some(d.pll()),
            Detector::Sideband(d) => d.pll(),
        }
    }

    /// True once a sideband carrier loop has locked and narrowed.
    pub fn carrier_tracking(&self) -> bool {
        matches!(&self.detector, Detector::Sideband(d) if d.is_tracking())
    }

    /// Current carrier phase estimate (radians); 0 without a loop.
    pub fn phase(&self) -> f32 { self.pll().map_or(0.0, |p| p.phase()) }

    /// Current carrier frequency estimate (radians/sample); 0 without a loop.
    pub fn frequency(&self) -> f32 { self.pll().map_or(0.0, |p| p.frequency()) }

    #[inline]
    pub fn demodulate(&mut self, y: C32) -> f32 {
        match &mut self.detector {
            Detector::Envelope(d) => d.detect(y),
            Detector::Coherent(d) => d.detect(y),
            Detector::Sideband(d) => d.detect(y),
        }
    }

    pub fn demodulate_block(&mut self, input: &[C32], output: &mut [f32]) -> usize {
        let n = input.len().min(output.len());
        for i in 0..n {
            output[i] = self.demodulate(input[i]);
        }
        n
    }

    pub fn reset(&mut self) {
        match &mut self.detector {
            Detector::Envelope(_) => {}
            Detector::Coherent(d) => d.reset(),
            Detector::Sideband(d) => d.reset(),
        }
    }
}

impl Block for AmDemod {
    type In = C32;
    type Out = f32;

    fn process(&mut self, input: &[Self::In], output: &mut [Self::Out]) -> WorkReport {
        WorkReport::one_to_one(self.demodulate_block(input, output))
    }

    fn delay(&self) -> usize { AmDemod::delay(self) }
}
