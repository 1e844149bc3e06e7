//! AdService: validation and lookup rules on top of the storage handle.

mod ads;
mod validation;
pub use ads::{AdService, CreatedAd};
pub use validation::{AdValidator, FieldError};
