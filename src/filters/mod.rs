pub mod bloom;
pub mod quotient;

use crate::error::{Error, Result};

/// Closed-form space/accuracy figures of a filter configuration.
pub trait FilterParameters {
    /// False positive rate, strictly inside (0, 1).
    fn error(&self) -> f64;

    fn bits_per_element(&self) -> f64;

    /// -log10 of the false positive rate: the number of "nines" of accuracy.
    fn neg_log10_error(&self) -> f64 {
        -f64::log10(self.error())
    }
}

/// Rejects rates that would make the log-rate non-finite.
fn checked_rate(rate: f64) -> Result<f64> {
    if rate > 0. && rate < 1. {
        Ok(rate)
    } else {
        Err(Error::DegenerateRate { rate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_rate() {
        assert_eq!(checked_rate(0.5).unwrap(), 0.5);
        for rate in vec![0., 1., -0.1, 1.5, f64::NAN] {
            match checked_rate(rate) {
                Err(Error::DegenerateRate { .. }) => (),
                other => panic!("expected degenerate rate, got {:?}", other),
            }
        }
    }
}
