use crate::encoder::Interval;
use biterator::Bit;
use log::debug;
use num::traits::{One, Signed, Zero};
use num::{BigInt, BigRational};

/// Errors that can occur while finding or serializing a dyadic fraction
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DyadicError {
    #[error("interval is empty or inverted; no fraction lies inside it")]
    DegenerateInterval,
    #[error("numerator occupies {required} bytes but the exponent allows {available}")]
    NumeratorOverflow { required: usize, available: usize },
}

/// A fraction numerator/2^exponent in [0, 1), in lowest terms.
///
/// This is the compact form of an encoded interval: the unique shortest
/// fraction with a power-of-two denominator lying inside the interval. Its
/// numerator, read big-endian over `exponent` bits, is the bit string a
/// classical arithmetic coder would emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DyadicFraction {
    numerator: BigInt,
    exponent: u32,
}

impl DyadicFraction {
    /// Find the shortest dyadic fraction inside `interval`.
    ///
    /// Scans denominators 2^k for k = 0, 1, 2, ... and returns the first
    /// grid point that falls inside the interval. The scan is strictly
    /// monotonic in k; skipping denominators would forfeit the shortness
    /// guarantee. At each k the only candidate worth checking is the
    /// smallest numerator with candidate > start, i.e. floor(start * 2^k) + 1.
    pub fn shortest_in(interval: &Interval) -> Result<Self, DyadicError> {
        let width = interval.width();
        if !width.is_positive() {
            return Err(DyadicError::DegenerateInterval);
        }

        // 0/2^0 is the shortest fraction of all and wins whenever the
        // interval contains zero.
        if interval.contains(&BigRational::zero()) {
            return Ok(DyadicFraction {
                numerator: BigInt::zero(),
                exponent: 0,
            });
        }

        // 2^cap exceeds 1/width, so the grid at the cap is guaranteed to
        // land inside the interval. Running past it means the interval was
        // malformed despite the width check.
        let cap = width.denom().bits() as u32 + 1;

        for exponent in 0..=cap {
            let denominator = BigInt::one() << exponent;
            let scaled = &interval.start * BigRational::from_integer(denominator.clone());
            let numerator: BigInt = scaled.floor().to_integer() + 1;
            let candidate = BigRational::new(numerator.clone(), denominator);

            if candidate < interval.end {
                debug!("shortest dyadic fraction {numerator}/2^{exponent}");
                return Ok(DyadicFraction {
                    numerator,
                    exponent,
                });
            }
        }

        Err(DyadicError::DegenerateInterval)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The fraction as an exact rational.
    pub fn value(&self) -> BigRational {
        BigRational::new(self.numerator.clone(), BigInt::one() << self.exponent)
    }

    /// The fraction's binary digits, most significant first: `exponent` bits
    /// of the numerator. Empty for the zero fraction.
    pub fn bits(&self) -> impl Iterator<Item = Bit> + '_ {
        (0..u64::from(self.exponent)).rev().map(|position| {
            if self.numerator.bit(position) {
                Bit::One
            } else {
                Bit::Zero
            }
        })
    }

    /// Serialize the numerator big-endian into exactly ceil(exponent/8)
    /// bytes. The zero fraction serializes to an empty buffer.
    ///
    /// The numerator of a fraction in [0, 1) always fits its exponent's
    /// byte width; the overflow check guards hand-built values.
    pub fn to_be_bytes(&self) -> Result<Vec<u8>, DyadicError> {
        let available = (self.exponent as usize).div_ceil(8);
        let raw = if self.numerator.is_zero() {
            Vec::new()
        } else {
            self.numerator.to_bytes_be().1
        };

        if raw.len() > available {
            return Err(DyadicError::NumeratorOverflow {
                required: raw.len(),
                available,
            });
        }

        let mut bytes = vec![0u8; available - raw.len()];
        bytes.extend_from_slice(&raw);
        Ok(bytes)
    }
}
