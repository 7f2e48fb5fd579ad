//! Birthday book use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the menu shell.
//! - Delegate persistence to the repository and date math to `projection`.
//!
//! # Invariants
//! - Every date-driven query takes the reference date explicitly; the
//!   service never reads the system clock.
//! - Queries operate on the full `list_all()` record set. At this data
//!   scale a re-scan per query is fine.

use crate::model::person::{BirthdayPerson, PersonId};
use crate::projection::{
    missed_entries, today_entries, upcoming_entries, MissedEntry, TodayEntry, UpcomingEntry,
};
use crate::repo::person_repo::{PersonRepository, RepoResult};
use chrono::NaiveDate;

/// Default number of records shown by the upcoming view.
pub const UPCOMING_LIMIT: usize = 5;

/// Use-case service wrapper for the birthday book.
pub struct BirthdayService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> BirthdayService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new record and returns its storage-assigned id.
    pub fn add_person(&self, name: &str, birth_date: NaiveDate) -> RepoResult<PersonId> {
        self.repo.insert(name, birth_date)
    }

    /// Replaces name and birth date of an existing record.
    ///
    /// Callers build the full new record up front (fetch current values,
    /// fill in kept fields) and issue one explicit update; nothing mutates
    /// a fetched row in place.
    pub fn update_person(&self, id: PersonId, name: &str, birth_date: NaiveDate) -> RepoResult<()> {
        self.repo.update(id, name, birth_date)
    }

    /// Hard-deletes a record; absent ids are a silent no-op.
    pub fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> RepoResult<Vec<BirthdayPerson>> {
        self.repo.list_all()
    }

    /// Records whose birthday occurs on the reference date.
    pub fn today(&self, today: NaiveDate) -> RepoResult<Vec<TodayEntry>> {
        Ok(today_entries(self.repo.list_all()?, today))
    }

    /// The `limit` records closest to their next birthday, ascending.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> RepoResult<Vec<UpcomingEntry>> {
        Ok(upcoming_entries(self.repo.list_all()?, today, limit))
    }

    /// Records whose birthday already passed this year, most recent first.
    pub fn missed(&self, today: NaiveDate) -> RepoResult<Vec<MissedEntry>> {
        Ok(missed_entries(self.repo.list_all()?, today))
    }
}
