use crate::model::{ProbabilityModel, Symbol};
use log::trace;
use num::BigRational;
use num::traits::{One, Zero};

/// A half-open range [start, end) within [0, 1), produced by narrowing the
/// unit interval once per encoded symbol. Width is strictly positive for any
/// sequence of modeled symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub start: BigRational,
    pub end: BigRational,
}

impl Interval {
    pub fn width(&self) -> BigRational {
        &self.end - &self.start
    }

    pub fn contains(&self, value: &BigRational) -> bool {
        &self.start <= value && value < &self.end
    }
}

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("symbol {0} has no entry in the probability model")]
    UnknownSymbol(Symbol),
}

/// Narrow [0, 1) to the sub-interval identifying `codes`.
///
/// Each symbol scales the current interval by its modeled width and shifts
/// it by its modeled start. The model must cover every symbol in `codes`,
/// the terminator included.
pub fn encode(codes: &[Symbol], model: &ProbabilityModel) -> Result<Interval, EncodeError> {
    let mut start = BigRational::zero();
    let mut width = BigRational::one();

    for &code in codes {
        let entry = model
            .interval_of(code)
            .ok_or(EncodeError::UnknownSymbol(code))?;
        start = start + &entry.start * &width;
        width = width * &entry.width;
        trace!("symbol {code}: start={start} width={width}");
    }

    let end = &start + &width;
    Ok(Interval { start, end })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{ProbabilityModel, TERMINATOR};

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(numer.into(), denom.into())
    }

    fn codes_for(text: &str) -> Vec<Symbol> {
        text.bytes()
            .map(Symbol::from)
            .chain(std::iter::once(TERMINATOR))
            .collect()
    }

    #[test_log::test]
    fn encodes_two_symbol_message() {
        // 'a', 'b', terminator each have width 1/3, in that table order, so
        // narrowing goes [0,1) -> [0,1/3) -> [1/9,4/27) -> [5/27,6/27).
        let codes = codes_for("ab");
        let model = ProbabilityModel::build(&codes);
        let interval = encode(&codes, &model).unwrap();

        assert_eq!(interval.start, ratio(5, 27));
        assert_eq!(interval.end, ratio(2, 9));
    }

    #[test]
    fn terminator_only_message_keeps_unit_interval() {
        let codes = vec![TERMINATOR];
        let model = ProbabilityModel::build(&codes);
        let interval = encode(&codes, &model).unwrap();

        assert_eq!(interval.start, ratio(0, 1));
        assert_eq!(interval.end, ratio(1, 1));
    }

    #[test]
    fn interval_width_is_product_of_symbol_widths() {
        let codes = codes_for("banana");
        let model = ProbabilityModel::build(&codes);
        let interval = encode(&codes, &model).unwrap();

        // a=3/7 three times, n=2/7 twice, b=1/7 once, terminator=1/7 once.
        let expected = ratio(3, 7).pow(3) * ratio(2, 7).pow(2) * ratio(1, 7) * ratio(1, 7);
        assert_eq!(interval.width(), expected);
    }

    #[test]
    fn error_on_unmodeled_symbol() {
        let codes = codes_for("ab");
        let model = ProbabilityModel::build(&codes);

        assert_eq!(
            encode(&[u16::from(b'z')], &model),
            Err(EncodeError::UnknownSymbol(u16::from(b'z')))
        );
    }
}
