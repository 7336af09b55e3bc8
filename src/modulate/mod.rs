
pub mod am;
pub use am::AmMod;
