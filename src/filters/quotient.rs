use super::{checked_rate, FilterParameters};
use crate::error::{Error, Result};

/// Metadata bits stored alongside every remainder
/// (is_occupied, is_continuation, is_shifted).
pub const CONTROL_BITS: u32 = 3;

#[derive(Clone, Copy, Debug)]
pub struct Parameters {
    hash_bits: u32,     // width of the fingerprinting hash (H)
    quotient_bits: u32, // bits addressing the slot (q)
    load_factor: f64,   // fraction of occupied slots, in (0, 1]
    error: f64,         // false positive rate
}

impl FilterParameters for Parameters {
    fn error(&self) -> f64 {
        self.error
    }

    /// Every slot holds a remainder plus the control bits,
    /// and only a load factor's share of the slots is occupied.
    fn bits_per_element(&self) -> f64 {
        (self.remainder_bits() + CONTROL_BITS) as f64 / self.load_factor
    }
}

impl Parameters {
    /// A quotient filter splitting a hash_bits wide hash into
    /// quotient_bits of slot address and the remainder stored in the slot.
    ///
    /// The false positive rate is 1 - e^(-α 2^q / 2^H): the chance that
    /// another of the α 2^q stored hashes collides on all H bits.
    pub fn new(hash_bits: u32, quotient_bits: u32, load_factor: f64) -> Result<Parameters> {
        if hash_bits == 0 || hash_bits > 64 {
            return Err(Error::InvalidHashBits { hash_bits });
        }
        if quotient_bits == 0 || quotient_bits >= hash_bits {
            return Err(Error::InvalidQuotientBits {
                quotient_bits,
                hash_bits,
            });
        }
        if !(load_factor > 0. && load_factor <= 1.) {
            return Err(Error::InvalidLoadFactor { load_factor });
        }

        // 2^q / 2^H, exact in binary floating point
        let occupancy = f64::powi(2.0, quotient_bits as i32 - hash_bits as i32);
        let error = 1. - f64::exp(-load_factor * occupancy);

        Ok(Parameters {
            hash_bits,
            quotient_bits,
            load_factor,
            error: checked_rate(error)?,
        })
    }

    pub fn hash_bits(&self) -> u32 {
        self.hash_bits
    }

    pub fn quotient_bits(&self) -> u32 {
        self.quotient_bits
    }

    pub fn remainder_bits(&self) -> u32 {
        self.hash_bits - self.quotient_bits
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_q50_three_quarters_full() {
        let params = Parameters::new(64, 50, 0.75).unwrap();
        assert_eq!(params.remainder_bits(), 14);
        assert!((params.error() - 4.577e-5).abs() < 1e-8);
        assert!((params.bits_per_element() - 22.667).abs() < 1e-3);
    }

    #[test]
    fn test_invalid() {
        match Parameters::new(65, 40, 0.75) {
            Err(Error::InvalidHashBits { hash_bits: 65 }) => (),
            other => panic!("expected invalid hash bits, got {:?}", other),
        }
        for q in vec![0, 64, 70] {
            match Parameters::new(64, q, 0.75) {
                Err(Error::InvalidQuotientBits { .. }) => (),
                other => panic!("expected invalid quotient bits, got {:?}", other),
            }
        }
        for alpha in vec![0., -0.5, 1.01, f64::NAN, f64::INFINITY] {
            match Parameters::new(64, 40, alpha) {
                Err(Error::InvalidLoadFactor { .. }) => (),
                other => panic!("expected invalid load factor, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_vanishing_rate() {
        // 0.5 * 2^-60 is lost entirely in 1 - e^(-x)
        match Parameters::new(64, 4, 0.5) {
            Err(Error::DegenerateRate { rate }) => assert_eq!(rate, 0.),
            other => panic!("expected degenerate rate, got {:?}", other),
        }
    }

    #[test]
    fn test_full_table() {
        assert_eq!(Parameters::new(64, 40, 1.0).unwrap().load_factor(), 1.0);
    }

    proptest! {
        #[test]
        fn remainder_and_monotone_rate(q in 40u32..63, alpha in prop::sample::select(vec![0.75, 0.9])) {
            let params = Parameters::new(64, q, alpha).unwrap();
            let next = Parameters::new(64, q + 1, alpha).unwrap();
            prop_assert_eq!(params.remainder_bits(), 64 - q);
            prop_assert!(params.error() > 0. && params.error() < 1.);
            prop_assert!(next.error() > params.error());
            prop_assert!(next.bits_per_element() < params.bits_per_element());
        }
    }
}
