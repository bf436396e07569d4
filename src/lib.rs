pub mod config;
pub mod core;
pub mod validate;

pub use crate::core::converter::{decompose, to_roman, Chunk, ConvertError, Decomposition};
pub use crate::core::converter::{CLASSIC_MAX, MAX_CONVERTIBLE};
pub use crate::validate::{has_excessive_repeat, has_overline, is_valid_numeral};
