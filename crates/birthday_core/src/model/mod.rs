//! Domain model for birthday records.
//!
//! # Responsibility
//! - Define the canonical `BirthdayPerson` record.
//! - Own the input-level validation rules (non-empty name, no future dates).
//!
//! # Invariants
//! - Every persisted record is identified by a storage-assigned `PersonId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod person;
