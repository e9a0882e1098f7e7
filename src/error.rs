use crate::record::Category;
use chrono::NaiveDate;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum TrackerError {
    EmptyName,
    DuplicatePerson(String),
    UnknownPerson(String),
    InvalidRange { start: NaiveDate, end: NaiveDate },
    DateNotFound(NaiveDate),
    EmptyExport { person: String, category: Category },
    CorruptData(String),
    Io(io::Error),
    Csv(csv::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::EmptyName => write!(f, "person name is empty"),
            TrackerError::DuplicatePerson(name) => {
                write!(f, "person '{name}' already exists")
            }
            TrackerError::UnknownPerson(name) => write!(f, "unknown person '{name}'"),
            TrackerError::InvalidRange { start, end } => {
                write!(f, "start date {start} is after end date {end}")
            }
            TrackerError::DateNotFound(date) => write!(f, "date {date} is not registered"),
            TrackerError::EmptyExport { person, category } => {
                write!(f, "no registered {} dates for '{person}'", category.as_str())
            }
            TrackerError::CorruptData(msg) => write!(f, "corrupt stored data: {msg}"),
            TrackerError::Io(err) => write!(f, "io error: {err}"),
            TrackerError::Csv(err) => write!(f, "csv error: {err}"),
            #[cfg(feature = "sqlite")]
            TrackerError::Sqlite(err) => write!(f, "sqlite error: {err}"),
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<io::Error> for TrackerError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

// Serde failures only surface when the stored representation does not match
// the expected schema, so they map to the corrupt-data case.
impl From<SerdeJsonError> for TrackerError {
    fn from(value: SerdeJsonError) -> Self {
        Self::CorruptData(value.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for TrackerError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
