//! Birthday record repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `people` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate the name before SQL mutations. The no-future-date
//!   rule needs a reference date and stays with the input layer.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `list_all` returns records in insertion (`id`) order; projection
//!   queries rely on this as their tie-break order.

use crate::db::DbError;
use crate::model::person::{validate_name, BirthdayPerson, PersonId, PersonValidationError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage form of `birth_date`; sorts like a date as text.
const DATE_COLUMN_FORMAT: &str = "%Y-%m-%d";

const PERSON_SELECT_SQL: &str = "SELECT id, name, birth_date FROM people";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for birthday record persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(PersonValidationError),
    Db(DbError),
    NotFound(PersonId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<PersonValidationError> for RepoError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for birthday record CRUD operations.
pub trait PersonRepository {
    /// Inserts a record and returns the storage-assigned id.
    fn insert(&self, name: &str, birth_date: NaiveDate) -> RepoResult<PersonId>;

    /// Replaces name and birth date of an existing record.
    ///
    /// Returns `RepoError::NotFound` when no record carries `id`.
    fn update(&self, id: PersonId, name: &str, birth_date: NaiveDate) -> RepoResult<()>;

    /// Hard-deletes a record. Deleting an absent id is a silent no-op.
    fn delete(&self, id: PersonId) -> RepoResult<()>;

    /// Returns all records in insertion order.
    fn list_all(&self) -> RepoResult<Vec<BirthdayPerson>>;
}

/// SQLite-backed birthday record repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn insert(&self, name: &str, birth_date: NaiveDate) -> RepoResult<PersonId> {
        let name = validate_name(name)?;

        self.conn.execute(
            "INSERT INTO people (name, birth_date) VALUES (?1, ?2);",
            params![name, format_date(birth_date)],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: PersonId, name: &str, birth_date: NaiveDate) -> RepoResult<()> {
        let name = validate_name(name)?;

        let changed = self.conn.execute(
            "UPDATE people SET name = ?1, birth_date = ?2 WHERE id = ?3;",
            params![name, format_date(birth_date), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: PersonId) -> RepoResult<()> {
        // Affected-row count intentionally ignored: deleting an absent id
        // is specified as a silent no-op.
        self.conn
            .execute("DELETE FROM people WHERE id = ?1;", params![id])?;
        Ok(())
    }

    fn list_all(&self) -> RepoResult<Vec<BirthdayPerson>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut people = Vec::new();

        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<BirthdayPerson> {
    let date_text: String = row.get("birth_date")?;
    let birth_date = NaiveDate::parse_from_str(&date_text, DATE_COLUMN_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date value `{date_text}` in people.birth_date"
        ))
    })?;

    Ok(BirthdayPerson {
        id: row.get("id")?,
        name: row.get("name")?,
        birth_date,
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_COLUMN_FORMAT).to_string()
}
