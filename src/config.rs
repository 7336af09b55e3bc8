use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default normalized bandwidth of the carrier-tracking loop.
pub const DEFAULT_LOOP_BANDWIDTH: f32 = 0.02;

/// Default stopband attenuation of the quadrature filter, in dB.
pub const DEFAULT_STOPBAND_DB: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModemError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}

/// Which images of the baseband signal are transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebandType {
    Dsb,
    Usb,
    Lsb,
}

impl SidebandType {
    pub fn is_single(self) -> bool {
        !matches!(self, SidebandType::Dsb)
    }
}

impl std::str::FromStr for SidebandType {
    type Err = ModemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dsb" => Ok(SidebandType::Dsb),
            "usb" => Ok(SidebandType::Usb),
            "lsb" => Ok(SidebandType::Lsb),
            _ => Err(ModemError::InvalidParameter {
                name: "sideband",
                value: f32::NAN,
                reason: "expected one of dsb, usb, lsb",
            }),
        }
    }
}

/// Shared modulator/demodulator configuration.
///
/// `carrier_offset` describes the channel offset (cycles/sample) the receiver
/// is expected to tolerate; the per-sample math does not use it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModemConfig {
    pub modulation_index: f32,
    #[serde(default)]
    pub carrier_offset: f32,
    pub sideband: SidebandType,
    #[serde(default)]
    pub suppressed_carrier: bool,
    #[serde(default = "default_loop_bandwidth")]
    pub loop_bandwidth: f32,
    #[serde(default = "default_stopband_db")]
    pub stopband_db: f32,
}

fn default_loop_bandwidth() -> f32 { DEFAULT_LOOP_BANDWIDTH }
fn default_stopband_db() -> f32 { DEFAULT_STOPBAND_DB }

impl ModemConfig {
    pub fn new(modulation_index: f32, sideband: SidebandType, suppressed_carrier: bool) -> Self {
        Self {
            modulation_index,
            carrier_offset: 0.0,
            sideband,
            suppressed_carrier,
            loop_bandwidth: DEFAULT_LOOP_BANDWIDTH,
            stopband_db: DEFAULT_STOPBAND_DB,
        }
    }

    pub fn with_carrier_offset(mut self, offset: f32) -> Self { self.carrier_offset = offset; self }
    pub fn with_loop_bandwidth(mut self, bw: f32) -> Self { self.loop_bandwidth = bw; self }
    pub fn with_stopband_db(mut self, db: f32) -> Self { self.stopband_db = db; self }

    /// Checks every field; creation of a modulator or demodulator fails on the first violation.
    pub fn validate(&self) -> Result<(), ModemError> {
        let m = self.modulation_index;
        if !(m > 0.0 && m <= 1.0) {
            return Err(ModemError::InvalidParameter {
                name: "modulation_index",
                value: m,
                reason: "must be in (0, 1]",
            });
        }
        let fo = self.carrier_offset;
        if !fo.is_finite() || fo.abs() > 0.5 {
            return Err(ModemError::InvalidParameter {
                name: "carrier_offset",
                value: fo,
                reason: "must be finite and within [-0.5, 0.5]",
            });
        }
        let bw = self.loop_bandwidth;
        if !(bw > 0.0 && bw < 0.5) {
            return Err(ModemError::InvalidParameter {
                name: "loop_bandwidth",
                value: bw,
                reason: "must be in (0, 0.5)",
            });
        }
        let db = self.stopband_db;
        if !(db.is_finite() && db >= 21.0) {
            return Err(ModemError::InvalidParameter {
                name: "stopband_db",
                value: db,
                reason: "must be finite and at least 21 dB",
            });
        }
        Ok(())
    }
}
