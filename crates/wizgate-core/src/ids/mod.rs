//!
//! Strongly-typed identifiers shared by the gate, the config schema and the
//! workflow layer.
//!
//! Validation names are string-backed so rule tables can be extended from
//! config without a code change; step and dialog ids are closed enums.
//!

mod dialog;
mod step;
mod validation;

pub use dialog::*;
pub use step::*;
pub use validation::*;
