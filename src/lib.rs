//! Exact arithmetic coding over infinite-precision rationals.
//!
//! A static frequency model partitions [0, 1) into per-symbol sub-intervals
//! proportional to occurrence counts. Encoding narrows the unit interval
//! once per symbol; the result is a sub-interval that uniquely identifies
//! the input. The shortest dyadic fraction inside that sub-interval is the
//! compact form, serializable to a big-endian byte buffer. Decoding peels
//! symbols back out of any point inside the interval until it consumes the
//! terminator.
//!
//! All arithmetic is exact [`num::BigRational`] arithmetic: no floating
//! point, no renormalization, no drift. The trade is throughput, so this is
//! a correctness-first coder, not a fast one.
//!
//! ```
//! use exact_arithmetic_coding::{
//!     DyadicFraction, ProbabilityModel, Symbol, TERMINATOR, decode, encode,
//! };
//!
//! let codes: Vec<Symbol> = "ab".bytes().map(Symbol::from).chain([TERMINATOR]).collect();
//! let model = ProbabilityModel::build(&codes);
//!
//! let interval = encode(&codes, &model)?;
//! let fraction = DyadicFraction::shortest_in(&interval)?;
//! let bytes = fraction.to_be_bytes()?;
//!
//! assert_eq!(bytes, vec![0x03]);
//! assert_eq!(decode(&fraction.value(), &model)?, vec![97u16, 98]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod decoder;
pub mod dyadic;
pub mod encoder;
pub mod model;

pub use decoder::{DecodeError, decode};
pub use dyadic::{DyadicError, DyadicFraction};
pub use encoder::{EncodeError, Interval, encode};
pub use model::{ProbabilityModel, Symbol, SymbolInterval, TERMINATOR};
