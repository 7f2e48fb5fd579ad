//! Menu dispatch for the interactive shell.
//!
//! # Responsibility
//! - Present the numbered menu and route choices to one action each.
//! - Capture the reference date once per action and thread it explicitly
//!   into every query, so one action can never observe two "todays".
//!
//! # Invariants
//! - Validation problems are handled inside the prompts (reprompt); only
//!   I/O and storage errors escape an action.

use crate::prompt;
use crate::render;
use birthday_core::{BirthdayService, PersonRepository, RepoError, UPCOMING_LIMIT};
use chrono::{Local, NaiveDate};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, ErrorKind, Write};

/// Errors that end the menu loop: console I/O or storage failures.
#[derive(Debug)]
pub enum MenuError {
    Io(io::Error),
    Repo(RepoError),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for MenuError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

type MenuResult<T> = Result<T, MenuError>;

const MENU_TEXT: &str = "\nBirthday keeper
  1) Add a birthday
  2) List all
  3) Upcoming birthdays
  4) Today's birthdays
  5) Missed birthdays
  6) Delete
  7) Edit
  8) Exit";

/// Runs the menu loop until the user exits or input ends.
pub fn run<R: PersonRepository>(
    service: &BirthdayService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> MenuResult<()> {
    loop {
        writeln!(out, "{MENU_TEXT}")?;
        write!(out, "Choice: ")?;
        out.flush()?;

        let choice = match prompt::read_trimmed(input) {
            Ok(choice) => choice,
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        };

        // One reference date per action, threaded into every query.
        let today = Local::now().date_naive();
        debug!("event=menu_action module=cli choice={choice} today={today}");

        match choice.as_str() {
            "1" => add(service, input, out, today)?,
            "2" => list_all(service, out)?,
            "3" => upcoming(service, out, today)?,
            "4" => today_view(service, out, today)?,
            "5" => missed(service, out, today)?,
            "6" => delete(service, input, out)?,
            "7" => edit(service, input, out, today)?,
            "8" => {
                writeln!(out, "Bye!")?;
                break;
            }
            other => writeln!(out, "Unknown choice `{other}`.")?,
        }
    }

    Ok(())
}

fn add<R: PersonRepository>(
    service: &BirthdayService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    today: NaiveDate,
) -> MenuResult<()> {
    let name = prompt::prompt_name(input, out)?;
    let birth_date = prompt::prompt_birth_date(input, out, today)?;

    let id = service.add_person(&name, birth_date)?;
    writeln!(
        out,
        "Added {} ({}) with id {id}.",
        name,
        render::full_date(birth_date)
    )?;
    Ok(())
}

fn list_all<R: PersonRepository>(
    service: &BirthdayService<R>,
    out: &mut impl Write,
) -> MenuResult<()> {
    let people = service.list_all()?;
    render::render_people(out, &people)?;
    Ok(())
}

fn upcoming<R: PersonRepository>(
    service: &BirthdayService<R>,
    out: &mut impl Write,
    today: NaiveDate,
) -> MenuResult<()> {
    let entries = service.upcoming(today, UPCOMING_LIMIT)?;
    render::render_upcoming(out, &entries)?;
    Ok(())
}

fn today_view<R: PersonRepository>(
    service: &BirthdayService<R>,
    out: &mut impl Write,
    today: NaiveDate,
) -> MenuResult<()> {
    let entries = service.today(today)?;
    render::render_today(out, &entries)?;
    Ok(())
}

fn missed<R: PersonRepository>(
    service: &BirthdayService<R>,
    out: &mut impl Write,
    today: NaiveDate,
) -> MenuResult<()> {
    let entries = service.missed(today)?;
    render::render_missed(out, &entries)?;
    Ok(())
}

fn delete<R: PersonRepository>(
    service: &BirthdayService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> MenuResult<()> {
    let people = service.list_all()?;
    render::render_people(out, &people)?;
    if people.is_empty() {
        return Ok(());
    }

    let Some(id) = prompt::prompt_id(input, out)? else {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    };

    if !people.iter().any(|person| person.id == id) {
        writeln!(out, "No record with id {id}.")?;
        return Ok(());
    }

    service.delete_person(id)?;
    writeln!(out, "Deleted record {id}.")?;
    Ok(())
}

fn edit<R: PersonRepository>(
    service: &BirthdayService<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    today: NaiveDate,
) -> MenuResult<()> {
    let people = service.list_all()?;
    render::render_people(out, &people)?;
    if people.is_empty() {
        return Ok(());
    }

    let Some(id) = prompt::prompt_id(input, out)? else {
        writeln!(out, "Cancelled.")?;
        return Ok(());
    };

    let Some(current) = people.iter().find(|person| person.id == id) else {
        writeln!(out, "No record with id {id}.")?;
        return Ok(());
    };

    // Fetch current values, build the full new record, issue one update.
    let name = prompt::prompt_optional_name(input, out, &current.name)?
        .unwrap_or_else(|| current.name.clone());
    let birth_date = prompt::prompt_optional_birth_date(input, out, today, current.birth_date)?
        .unwrap_or(current.birth_date);

    match service.update_person(id, &name, birth_date) {
        Ok(()) => writeln!(
            out,
            "Updated record {id}: {} ({}).",
            name,
            render::full_date(birth_date)
        )?,
        Err(RepoError::NotFound(_)) => writeln!(out, "No record with id {id}.")?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
