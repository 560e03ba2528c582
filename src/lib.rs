//! Human-readable hashrate strings for Equihash miners.
//!
//! ```
//! use solrate::NumericFormatter;
//!
//! assert_eq!(1500.humanize_hashrate(), "1.50 KSol");
//! assert_eq!(2_500_000.humanize_hashrate(), "2.50 MSol");
//! ```

mod error;
mod numeric_formatter;
mod scale;

pub use error::HashrateError;
pub use numeric_formatter::{format_hashrate, NumericFormatter};
pub use scale::{Scale, SOL_STEP, SOL_UNITS};

#[cfg(target_arch = "wasm32")]
pub mod wasm;
