//! HTTP API layer for the promo admin service.
//!
//! Provides REST endpoints for banner management, the splash screen
//! singleton and the contact-form CRM relay.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
