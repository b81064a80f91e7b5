//! Domain models for the pharmacy inventory.

mod medicine;
mod record;
mod sale;
mod supplier;

pub use medicine::*;
pub use record::*;
pub use sale::*;
pub use supplier::*;
