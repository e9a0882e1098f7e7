use crate::error::TrackerResult;
use crate::roster::Roster;

/// Durable backend for the whole roster. Saves are full-mapping overwrites;
/// `load_roster` returns `None` when no state has been stored yet, which is a
/// valid initial condition rather than an error.
pub trait RosterStore {
    fn save_roster(&self, roster: &Roster) -> TrackerResult<()>;
    fn load_roster(&self) -> TrackerResult<Option<Roster>>;
}

#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod file;

pub use file::{
    JsonFileStore, load_roster_from_csv, load_roster_from_json, save_roster_to_csv,
    save_roster_to_json,
};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRosterStore;
