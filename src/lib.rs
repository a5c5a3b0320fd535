//! items-api - a small CRUD service over a relational store
//!
//! - Store connector with scoped sessions and a bounded startup readiness wait
//! - Item service: create, list, update, delete
//! - JSON HTTP API built on axum

pub mod api;
pub mod config;
pub mod error;
pub mod items;
pub mod store;
pub mod types;

pub use error::{Error, Result};
