//! Domain types for the promo admin service.
//!
//! This module contains the marketing content entities served by the API.

mod banner;
mod splash;

pub use banner::*;
pub use splash::*;
