use log::{debug, trace};
use num::rational::Ratio;

use std::fmt;
use std::io::Write;
use std::ops::{Range, RangeInclusive};

use super::error::Result;
use super::filters::{bloom, quotient, FilterParameters};

/// Separator emitted before each table.
const SEPARATOR: &[u8] = b"\n\n";

/// Bits/element | -log10(false positive rate)
#[derive(Clone, Debug, PartialEq)]
pub struct BloomRow {
    pub bits_per_element: Ratio<u64>,
    pub neg_log10_error: f64,
}

impl From<&bloom::Parameters> for BloomRow {
    fn from(params: &bloom::Parameters) -> BloomRow {
        BloomRow {
            bits_per_element: params.bits_per_element_exact(),
            neg_log10_error: params.neg_log10_error(),
        }
    }
}

impl fmt::Display for BloomRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{:.5}",
            self.bits_per_element.to_integer(),
            self.neg_log10_error
        )
    }
}

/// q | r | false positive rate | Bits/element | -log10(false positive rate)
#[derive(Clone, Debug, PartialEq)]
pub struct QuotientRow {
    pub quotient_bits: u32,
    pub remainder_bits: u32,
    pub error: f64,
    pub bits_per_element: f64,
    pub neg_log10_error: f64,
}

impl From<&quotient::Parameters> for QuotientRow {
    fn from(params: &quotient::Parameters) -> QuotientRow {
        QuotientRow {
            quotient_bits: params.quotient_bits(),
            remainder_bits: params.remainder_bits(),
            error: params.error(),
            bits_per_element: params.bits_per_element(),
            neg_log10_error: params.neg_log10_error(),
        }
    }
}

impl fmt::Display for QuotientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{:.8},{:.1},{:.5}",
            self.quotient_bits,
            self.remainder_bits,
            self.error,
            self.bits_per_element,
            self.neg_log10_error
        )
    }
}

/// One row per bit array size, for a fixed number of elements.
pub fn bloom_rows<I>(elements: u64, storage: I) -> Result<Vec<BloomRow>>
where
    I: IntoIterator<Item = u64>,
{
    storage
        .into_iter()
        .map(|storage| {
            let params = bloom::Parameters::new(elements, storage)?;
            trace!("bloom: {:?}", params);
            Ok(BloomRow::from(&params))
        })
        .collect()
}

/// One row per quotient width, for a fixed hash width and load factor.
pub fn quotient_rows<I>(
    hash_bits: u32,
    quotient_bits: I,
    load_factor: f64,
) -> Result<Vec<QuotientRow>>
where
    I: IntoIterator<Item = u32>,
{
    quotient_bits
        .into_iter()
        .map(|quotient_bits| {
            let params = quotient::Parameters::new(hash_bits, quotient_bits, load_factor)?;
            trace!("quotient: {:?}", params);
            Ok(QuotientRow::from(&params))
        })
        .collect()
}

/// The constants behind the generated tables.
#[derive(Clone, Debug)]
pub struct Report {
    pub elements: u64,
    pub storage: RangeInclusive<u64>,
    pub hash_bits: u32,
    pub min_quotient_bits: u32,
    pub load_factors: Vec<f64>,
}

impl Default for Report {
    fn default() -> Report {
        Report {
            elements: 1,
            storage: 4..=32,
            hash_bits: 64,
            min_quotient_bits: 40,
            load_factors: vec![0.75, 0.9],
        }
    }
}

impl Report {
    /// Quotient widths tabulated: up to, but excluding, the hash width.
    pub fn quotient_bits(&self) -> Range<u32> {
        self.min_quotient_bits..self.hash_bits
    }

    /// Total number of rows across all tables.
    pub fn rows(&self) -> usize {
        let quotient = self.quotient_bits().len() * self.load_factors.len();
        self.storage.clone().count() + quotient
    }

    /// Writes the Bloom filter table followed by a quotient filter table
    /// for every load factor, each preceded by two empty lines.
    pub fn write<W: Write>(&self, mut out: W) -> Result<()> {
        debug!("bloom table: n = {}, m = {:?}", self.elements, self.storage);
        out.write_all(SEPARATOR)?;
        for row in bloom_rows(self.elements, self.storage.clone())? {
            writeln!(out, "{}", row)?;
        }

        for &load_factor in &self.load_factors {
            debug!(
                "quotient table: H = {}, q = {:?}, alpha = {}",
                self.hash_bits,
                self.quotient_bits(),
                load_factor
            );
            out.write_all(SEPARATOR)?;
            for row in quotient_rows(self.hash_bits, self.quotient_bits(), load_factor)? {
                writeln!(out, "{}", row)?;
            }
        }

        out.flush()?;
        Ok(())
    }

    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
