//! Customer domain entities.

pub mod model;
pub mod status;

pub use model::{Customer, CustomerDraft};
pub use status::MichelinStatus;
