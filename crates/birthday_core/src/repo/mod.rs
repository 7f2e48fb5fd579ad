//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for birthday records.
//! - Isolate SQLite query details from projection/business logic.
//!
//! # Invariants
//! - Repository writes enforce name validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod person_repo;
