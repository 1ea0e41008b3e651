//! Storage layer for the promo admin service.
//!
//! Provides database access via SQLx with SQLite.

mod models;
mod repository;

pub use repository::PromoRepository;
