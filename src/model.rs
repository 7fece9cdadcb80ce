use log::debug;
use num::{BigInt, BigRational};

/// An integer code identifying one coding unit. Payload units use codes
/// 0..=255; code 256 is reserved for the terminator.
pub type Symbol = u16;

/// Reserved end-of-stream symbol. The caller appends it exactly once, as the
/// last code, before building a model or encoding.
pub const TERMINATOR: Symbol = 256;

/// One row of a probability model: the sub-interval of [0, 1) assigned to a
/// symbol. `width` is the symbol's occurrence count over the input length;
/// `start` is the sum of the widths of every entry ordered before this one.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInterval {
    pub symbol: Symbol,
    pub start: BigRational,
    pub width: BigRational,
}

/// A static frequency model: an ordered partition of [0, 1) into per-symbol
/// sub-intervals proportional to occurrence counts.
///
/// Entry order is part of the encoding contract. Two models built over the
/// same input must agree on it for their encodings to be interchangeable:
/// entries are ordered by descending count, with ties broken by the order in
/// which symbols are first encountered in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityModel {
    entries: Vec<SymbolInterval>,
}

impl ProbabilityModel {
    /// Build a model over a terminator-ended sequence of codes.
    ///
    /// The terminator is always modeled with count 1, even if it occurred
    /// some other number of times in the input. Inputs that follow the
    /// append-once contract are unaffected; inputs that do not will produce
    /// a table whose widths no longer sum to 1.
    ///
    /// # Panics
    ///
    /// Panics if `codes` is empty. An empty sequence has no interval widths
    /// to assign, so this is checked up front rather than surfacing as a
    /// zero denominator.
    pub fn build(codes: &[Symbol]) -> Self {
        assert!(!codes.is_empty(), "cannot model an empty code sequence");

        // Counts in first-encounter order. The alphabet is at most 257
        // symbols, so a linear scan is fine and keeps the order explicit.
        let mut counts: Vec<(Symbol, u64)> = Vec::new();
        for &code in codes {
            match counts.iter_mut().find(|(symbol, _)| *symbol == code) {
                Some((_, count)) => *count += 1,
                None => counts.push((code, 1)),
            }
        }

        match counts.iter_mut().find(|(symbol, _)| *symbol == TERMINATOR) {
            Some((_, count)) => *count = 1,
            None => counts.push((TERMINATOR, 1)),
        }

        // Stable sort, so tied counts keep their encounter order.
        counts.sort_by(|(_, a), (_, b)| b.cmp(a));

        let length = BigInt::from(codes.len());
        let mut cumulative = BigInt::from(0u32);
        let mut entries = Vec::with_capacity(counts.len());

        for (symbol, count) in counts {
            let count = BigInt::from(count);
            entries.push(SymbolInterval {
                symbol,
                start: BigRational::new(cumulative.clone(), length.clone()),
                width: BigRational::new(count.clone(), length.clone()),
            });
            cumulative += count;
        }

        debug!(
            "built model with {} entries over {} codes",
            entries.len(),
            codes.len()
        );

        ProbabilityModel { entries }
    }

    /// Entries in table order (descending count, ties by first encounter).
    pub fn entries(&self) -> impl Iterator<Item = &SymbolInterval> {
        self.entries.iter()
    }

    /// The sub-interval assigned to `symbol`, if it was modeled.
    pub fn interval_of(&self, symbol: Symbol) -> Option<&SymbolInterval> {
        self.entries.iter().find(|entry| entry.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
