//! Background job entities

pub mod entities;
