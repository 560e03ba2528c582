use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HashrateError {
    #[error("Hashrate is not a finite number: {0}")]
    NotFinite(f64),

    #[error("Hashrate is negative: {0}")]
    Negative(f64),

    #[error("Hashrate {0} exceeds the largest unit")]
    OutOfRange(f64),
}
