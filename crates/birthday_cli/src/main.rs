//! Interactive birthday keeper shell.
//!
//! # Responsibility
//! - Resolve the per-user data directory and bootstrap logging + storage.
//! - Run the menu loop until the user exits.
//!
//! # Invariants
//! - The process exit code is always 0; failures are reported and logged,
//!   never mapped to an error exit path.

mod menu;
mod prompt;
mod render;

use birthday_core::db::open_db;
use birthday_core::{default_log_level, init_logging, BirthdayService, SqlitePersonRepository};
use log::{debug, error};
use std::io::{self, ErrorKind};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "birthdays";
const DB_FILE_NAME: &str = "birthdays.db";

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

fn main() {
    let data_dir = default_data_dir();
    if let Err(err) = std::fs::create_dir_all(&data_dir) {
        eprintln!(
            "cannot create data directory `{}`: {err}",
            data_dir.display()
        );
        return;
    }

    // Logging is best-effort; the program stays usable without it.
    if let Err(err) = init_logging(default_log_level(), &data_dir.join("logs")) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = match open_db(data_dir.join(DB_FILE_NAME)) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open birthday database: {err}");
            return;
        }
    };

    let service = BirthdayService::new(SqlitePersonRepository::new(&conn));
    let stdin = io::stdin();
    let stdout = io::stdout();

    match menu::run(&service, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => debug!("event=app_exit module=cli status=ok"),
        // Ctrl-D mid-prompt ends the session like choosing exit would.
        Err(menu::MenuError::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => {
            debug!("event=app_exit module=cli status=ok reason=eof");
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("fatal storage error: {err}");
        }
    }
}
