//! HTTP handlers for the ads resource.

pub mod ads;
pub use ads::*;
