//! Core domain logic for the birthday keeper.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::person::{validate_name, BirthdayPerson, PersonId, PersonValidationError};
pub use projection::{
    days_until, next_occurrence, occurrence_in_year, MissedEntry, TodayEntry, UpcomingEntry,
};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use service::birthday_service::{BirthdayService, UPCOMING_LIMIT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
