use crate::model::{ProbabilityModel, Symbol, TERMINATOR};
use log::trace;
use num::BigRational;
use num::traits::Signed;

/// Errors that can occur while decoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("no model entry contains the remaining value {0}")]
    NoContainingInterval(BigRational),
}

/// Reconstruct the payload symbols from a point inside an encoded interval.
///
/// Peels one symbol per step: the model entry whose sub-interval contains
/// the current value is the next symbol, and rescaling the value by that
/// entry undoes one narrowing step of the encoder. Stops once the terminator
/// is peeled; the terminator is consumed but not emitted.
///
/// Exactly one entry contains the value at every step when `value` came
/// from an interval encoded with this same model. A value no entry contains
/// means the table is malformed or the value is out of range, and decoding
/// stops with an error rather than guessing.
pub fn decode(value: &BigRational, model: &ProbabilityModel) -> Result<Vec<Symbol>, DecodeError> {
    let mut value = value.clone();
    let mut output = Vec::new();

    loop {
        let entry = model
            .entries()
            .find(|entry| {
                let offset = &value - &entry.start;
                !offset.is_negative() && offset < entry.width
            })
            .ok_or_else(|| DecodeError::NoContainingInterval(value.clone()))?;

        value = (&value - &entry.start) / &entry.width;
        trace!("peeled symbol {}: remaining value {value}", entry.symbol);

        if entry.symbol == TERMINATOR {
            return Ok(output);
        }
        output.push(entry.symbol);
    }
}
