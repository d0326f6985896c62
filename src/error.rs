use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("number of elements must be positive")]
    InvalidElements,

    #[error("storage (bits) must be positive")]
    InvalidStorage,

    #[error("hash width must be in 1..=64 bits, got {hash_bits}")]
    InvalidHashBits { hash_bits: u32 },

    #[error("quotient width {quotient_bits} must be in 1..{hash_bits}")]
    InvalidQuotientBits { quotient_bits: u32, hash_bits: u32 },

    #[error("load factor must be in (0, 1], got {load_factor}")]
    InvalidLoadFactor { load_factor: f64 },

    #[error("false positive rate {rate} is outside (0, 1)")]
    DegenerateRate { rate: f64 },

    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),
}
