//! Output formatting for the menu shell.
//!
//! # Responsibility
//! - Format dates (`DD.MM.YYYY` full, `DD.MM` month-day) and record lines.
//! - Provide a scoped highlight region that restores default styling when
//!   it goes out of scope.

use birthday_core::{BirthdayPerson, MissedEntry, TodayEntry, UpcomingEntry};
use chrono::NaiveDate;
use std::io::{self, Write};

const FULL_DATE_FORMAT: &str = "%d.%m.%Y";
const MONTH_DAY_FORMAT: &str = "%d.%m";

const HIGHLIGHT_SEQ: &str = "\x1b[1;33m";
const RESET_SEQ: &str = "\x1b[0m";

pub fn full_date(date: NaiveDate) -> String {
    date.format(FULL_DATE_FORMAT).to_string()
}

pub fn month_day(date: NaiveDate) -> String {
    date.format(MONTH_DAY_FORMAT).to_string()
}

/// Scoped highlight region.
///
/// Emits the highlight escape on creation and the reset escape when
/// dropped, so styled output can never leak past the region, whatever the
/// terminal does with the escape codes themselves.
pub struct Highlight<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Highlight<'a, W> {
    pub fn new(out: &'a mut W) -> io::Result<Self> {
        out.write_all(HIGHLIGHT_SEQ.as_bytes())?;
        Ok(Self { out })
    }
}

impl<W: Write> Write for Highlight<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for Highlight<'_, W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(RESET_SEQ.as_bytes());
        let _ = self.out.flush();
    }
}

pub fn render_people(out: &mut impl Write, people: &[BirthdayPerson]) -> io::Result<()> {
    if people.is_empty() {
        return writeln!(out, "No birthdays stored yet.");
    }
    for person in people {
        writeln!(
            out,
            "  [{}] {} — {}",
            person.id,
            person.name,
            full_date(person.birth_date)
        )?;
    }
    Ok(())
}

pub fn render_today(out: &mut impl Write, entries: &[TodayEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No birthdays today.");
    }
    let mut highlighted = Highlight::new(out)?;
    for entry in entries {
        writeln!(
            highlighted,
            "  {} turns {} today!",
            entry.person.name, entry.age_turning
        )?;
    }
    Ok(())
}

pub fn render_upcoming(out: &mut impl Write, entries: &[UpcomingEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No birthdays stored yet.");
    }
    for entry in entries {
        let line = format!(
            "  {} — {} ({})",
            month_day(entry.occurs_on),
            entry.person.name,
            days_until_label(entry.days_until)
        );
        if entry.days_until == 0 {
            let mut highlighted = Highlight::new(out)?;
            writeln!(highlighted, "{line}")?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

pub fn render_missed(out: &mut impl Write, entries: &[MissedEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No missed birthdays this year.");
    }
    for entry in entries {
        writeln!(
            out,
            "  {} — {} ({})",
            month_day(entry.occurred_on),
            entry.person.name,
            days_ago_label(entry.days_ago)
        )?;
    }
    Ok(())
}

fn days_until_label(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {n} days"),
    }
}

fn days_ago_label(days: i64) -> String {
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{days} days ago")
    }
}

#[cfg(test)]
mod tests {
    use super::{days_until_label, full_date, month_day, Highlight};
    use chrono::NaiveDate;
    use std::io::Write;

    #[test]
    fn date_formats_use_dotted_day_month_order() {
        let date = NaiveDate::from_ymd_opt(1990, 3, 10).unwrap();
        assert_eq!(full_date(date), "10.03.1990");
        assert_eq!(month_day(date), "10.03");
    }

    #[test]
    fn highlight_region_always_resets() {
        let mut out = Vec::new();
        {
            let mut highlighted = Highlight::new(&mut out).unwrap();
            write!(highlighted, "hello").unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[1;33m"));
        assert!(text.ends_with("\x1b[0m"));
        assert!(text.contains("hello"));
    }

    #[test]
    fn day_labels_handle_zero_and_singular() {
        assert_eq!(days_until_label(0), "today");
        assert_eq!(days_until_label(1), "in 1 day");
        assert_eq!(days_until_label(12), "in 12 days");
    }
}
