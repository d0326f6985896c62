use num::rational::Ratio;

use super::{checked_rate, FilterParameters};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug)]
pub struct Parameters {
    elements: u64, // number of elements (n)
    storage: u64,  // storage (bits, m)
    hashes: u64,   // optimal number of hash functions (k)
    error: f64,    // false positive rate
}

impl FilterParameters for Parameters {
    fn error(&self) -> f64 {
        self.error
    }

    fn bits_per_element(&self) -> f64 {
        self.storage as f64 / self.elements as f64
    }
}

impl Parameters {
    /// Resolves the optimal Bloom filter for:
    ///
    /// - elements: the number of elements stored (n > 0).
    /// - storage: the size of the bit array (m > 0).
    ///
    /// The number of hash functions is chosen as k = ceil(ln(2) * m/n),
    /// giving a false positive rate of (1 - e^(-kn/m))^k.
    pub fn new(elements: u64, storage: u64) -> Result<Parameters> {
        if elements == 0 {
            return Err(Error::InvalidElements);
        }
        if storage == 0 {
            return Err(Error::InvalidStorage);
        }

        let n = elements as f64;
        let m = storage as f64;

        let hashes = f64::ceil(f64::ln(2.0) * (m / n));
        let error = (1. - f64::exp(-hashes * n / m)).powf(hashes);

        Ok(Parameters {
            elements,
            storage,
            hashes: hashes as u64,
            error: checked_rate(error)?,
        })
    }

    pub fn elements(&self) -> u64 {
        self.elements
    }

    pub fn storage(&self) -> u64 {
        self.storage
    }

    pub fn hashes(&self) -> u64 {
        self.hashes
    }

    /// Bits per element as the exact ratio m/n.
    pub fn bits_per_element_exact(&self) -> Ratio<u64> {
        Ratio::new(self.storage, self.elements)
    }
}
