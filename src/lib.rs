pub mod cli;
pub mod clock;
pub mod constants;
pub mod status;

use clap::Parser;
use cli::Cli;
use clock::SystemClock;
use status::{StatusChecker, StatusError};
use std::io;

#[derive(Debug)]
pub enum AppError {
    Status(StatusError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Status(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Status(err) => Some(err),
        }
    }
}

impl From<StatusError> for AppError {
    fn from(err: StatusError) -> Self {
        AppError::Status(err)
    }
}

pub fn run() -> Result<(), AppError> {
    let _cli = Cli::parse();
    let stdout = io::stdout();
    StatusChecker::new(SystemClock).write_report(&mut stdout.lock())?;
    Ok(())
}
