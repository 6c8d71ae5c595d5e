//!
//! Plain data read from the provisioning API. The gate only ever borrows
//! these; nothing in this crate mutates a record.
//!

mod record;
mod status;
mod validation;

pub use record::*;
pub use status::*;
pub use validation::*;
