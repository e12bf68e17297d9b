//! # Repositories
//!
//! Store-backed implementations of the gateway traits, one per collection.
//!
//! Each repository holds a clone of the connection pool (cheap: the pool is
//! internally reference-counted) and implements its collection's gateway
//! trait with runtime-checked sqlx queries.

pub mod category;
pub mod medicine;
pub mod supplier;
