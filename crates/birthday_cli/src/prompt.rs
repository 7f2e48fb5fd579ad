//! Input prompts and reprompt loops.
//!
//! # Responsibility
//! - Own every validation rule the shell enforces at input time:
//!   non-empty names, parseable non-future dates, integer ids.
//! - Keep all loops over abstract `BufRead`/`Write` so tests can script
//!   sessions with in-memory buffers.
//!
//! # Invariants
//! - Validation failures reprompt; they never propagate as errors.
//! - End of input surfaces as `ErrorKind::UnexpectedEof`, which the menu
//!   loop treats as a normal session end.

use birthday_core::model::person::validate_birth_date;
use birthday_core::{validate_name, PersonId};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

/// Accepted date input form, matching the persisted column format.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Reads one line, trimmed. EOF maps to `ErrorKind::UnexpectedEof`.
pub fn read_trimmed(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompts until a non-empty (after trimming) name is entered.
pub fn prompt_name(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<String> {
    loop {
        write!(out, "Name: ")?;
        out.flush()?;
        let line = read_trimmed(input)?;
        match validate_name(&line) {
            Ok(name) => return Ok(name.to_string()),
            Err(err) => writeln!(out, "{err}, try again.")?,
        }
    }
}

/// Prompts until a parseable date on or before `today` is entered.
pub fn prompt_birth_date(
    input: &mut impl BufRead,
    out: &mut impl Write,
    today: NaiveDate,
) -> io::Result<NaiveDate> {
    loop {
        write!(out, "Birth date (YYYY-MM-DD): ")?;
        out.flush()?;
        let line = read_trimmed(input)?;
        match parse_birth_date(&line, today) {
            Ok(date) => return Ok(date),
            Err(message) => writeln!(out, "{message}, try again.")?,
        }
    }
}

/// Prompts for a record id.
///
/// Empty input aborts the surrounding operation (`None`); non-integer
/// input reprompts. Whether the id actually exists is the caller's check.
pub fn prompt_id(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<PersonId>> {
    loop {
        write!(out, "Id (empty to cancel): ")?;
        out.flush()?;
        let line = read_trimmed(input)?;
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse::<PersonId>() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => writeln!(out, "`{line}` is not a number, try again.")?,
        }
    }
}

/// Edit-flow name prompt: empty input keeps the current value (`None`).
pub fn prompt_optional_name(
    input: &mut impl BufRead,
    out: &mut impl Write,
    current: &str,
) -> io::Result<Option<String>> {
    loop {
        write!(out, "New name (empty keeps `{current}`): ")?;
        out.flush()?;
        let line = read_trimmed(input)?;
        if line.is_empty() {
            return Ok(None);
        }
        match validate_name(&line) {
            Ok(name) => return Ok(Some(name.to_string())),
            Err(err) => writeln!(out, "{err}, try again.")?,
        }
    }
}

/// Edit-flow date prompt: empty input keeps the current value (`None`).
pub fn prompt_optional_birth_date(
    input: &mut impl BufRead,
    out: &mut impl Write,
    today: NaiveDate,
    current: NaiveDate,
) -> io::Result<Option<NaiveDate>> {
    loop {
        write!(
            out,
            "New birth date YYYY-MM-DD (empty keeps {current}): "
        )?;
        out.flush()?;
        let line = read_trimmed(input)?;
        if line.is_empty() {
            return Ok(None);
        }
        match parse_birth_date(&line, today) {
            Ok(date) => return Ok(Some(date)),
            Err(message) => writeln!(out, "{message}, try again.")?,
        }
    }
}

fn parse_birth_date(line: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(line, DATE_INPUT_FORMAT)
        .map_err(|_| format!("`{line}` is not a valid date"))?;
    validate_birth_date(date, today).map_err(|err| err.to_string())?;
    Ok(date)
}
