//! Agent domain model
//!
//! Entities and value objects describing agents, their configuration,
//! and the request/response shapes that flow through them.

pub mod config;
pub mod entities;
pub mod value_objects;
