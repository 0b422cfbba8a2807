//! Core verification types, tax ID splitting, and address decomposition.
//!
//! Everything here is pure and offline: the network clients live behind the
//! `vies` and `evatr` features and build on these types.

mod address;
mod error;
mod taxid;
mod types;

pub use address::*;
pub use error::*;
pub use taxid::*;
pub use types::*;
