
pub mod envelope;
pub use envelope::EnvelopeDetector;

pub mod costas;
pub use costas::CostasDetector;

pub mod ssb;
pub use ssb::SidebandDetector;

pub mod am;
pub use am::AmDemod;
