//! Date-projection engine for recurring annual dates.
//!
//! # Responsibility
//! - Project a birth date onto a calendar year (occurrence arithmetic).
//! - Classify occurrences relative to an explicit reference date.
//!
//! # Invariants
//! - All functions take the reference date as a parameter; nothing in this
//!   module reads the system clock.
//! - The occurrence arithmetic lives here exactly once. The today/upcoming/
//!   missed queries all go through `occurrence_in_year`, so the boundary
//!   rules (a birthday today is "upcoming with 0 days", never "missed")
//!   cannot drift apart.
//!
//! # Leap-day policy
//! - Feb 29 birth dates project to Feb 28 in non-leap years (clamp). Every
//!   record therefore has exactly one occurrence per calendar year, and a
//!   clamped record is counted by all three queries on Feb 28.

use crate::model::person::BirthdayPerson;
use chrono::{Datelike, NaiveDate};

/// A record whose occurrence falls on the reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayEntry {
    pub person: BirthdayPerson,
    /// Age turning this year: reference year minus birth year.
    pub age_turning: i32,
}

/// A record ordered by its next occurrence on or after the reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEntry {
    pub person: BirthdayPerson,
    /// The next occurrence itself; equals the reference date when the
    /// birthday is today.
    pub occurs_on: NaiveDate,
    /// Whole days from the reference date to `occurs_on`. Zero for today.
    pub days_until: i64,
}

/// A record whose occurrence this year already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedEntry {
    pub person: BirthdayPerson,
    /// The this-year occurrence, strictly before the reference date.
    pub occurred_on: NaiveDate,
    /// Whole days since `occurred_on`, always >= 1.
    pub days_ago: i64,
}

/// Projects a birth date onto `year`, keeping month and day.
///
/// Feb 29 clamps to Feb 28 when `year` is not a leap year.
pub fn occurrence_in_year(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        // Only Feb 29 can fail to exist in a valid year.
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        // Unreachable for years inside chrono's supported range.
        .unwrap_or(birth_date)
}

/// The nearest occurrence on or after the reference date.
///
/// A birthday occurring exactly today counts as "next" with zero days
/// remaining, not as already passed.
pub fn next_occurrence(birth_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birth_date, today.year());
    if this_year >= today {
        this_year
    } else {
        occurrence_in_year(birth_date, today.year() + 1)
    }
}

/// Whole days from the reference date to the next occurrence.
pub fn days_until(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    (next_occurrence(birth_date, today) - today).num_days()
}

/// Records whose occurrence this year equals the reference date.
///
/// Keeps the input (storage) order.
pub fn today_entries(people: Vec<BirthdayPerson>, today: NaiveDate) -> Vec<TodayEntry> {
    people
        .into_iter()
        .filter(|person| occurrence_in_year(person.birth_date, today.year()) == today)
        .map(|person| TodayEntry {
            age_turning: person.age_turning_in(today.year()),
            person,
        })
        .collect()
}

/// The `limit` records closest to their next occurrence, ascending by days
/// remaining. The sort is stable, so ties keep insertion order. Today's
/// birthdays sort first with zero days.
pub fn upcoming_entries(
    people: Vec<BirthdayPerson>,
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingEntry> {
    let mut entries: Vec<UpcomingEntry> = people
        .into_iter()
        .map(|person| {
            let occurs_on = next_occurrence(person.birth_date, today);
            UpcomingEntry {
                days_until: (occurs_on - today).num_days(),
                occurs_on,
                person,
            }
        })
        .collect();

    entries.sort_by_key(|entry| entry.days_until);
    entries.truncate(limit);
    entries
}

/// Records already passed this year, most recently passed first.
///
/// A birthday occurring exactly today is never missed.
pub fn missed_entries(people: Vec<BirthdayPerson>, today: NaiveDate) -> Vec<MissedEntry> {
    let mut entries: Vec<MissedEntry> = people
        .into_iter()
        .filter_map(|person| {
            let occurred_on = occurrence_in_year(person.birth_date, today.year());
            if occurred_on >= today {
                return None;
            }
            Some(MissedEntry {
                days_ago: (today - occurred_on).num_days(),
                occurred_on,
                person,
            })
        })
        .collect();

    // Stable descending sort: equal occurrence dates keep insertion order.
    entries.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));
    entries
}
