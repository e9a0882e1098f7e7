pub mod dateset;
pub mod error;
pub mod persistence;
pub mod record;
pub mod registration;
pub mod report;
pub mod roster;
pub mod tracker;

pub use dateset::DateSet;
pub use error::{TrackerError, TrackerResult};
pub use persistence::{JsonFileStore, RosterStore};
pub use record::{Category, PersonRecord};
pub use registration::{RegistrationOutcome, register};
pub use report::{ReportPage, build_report, default_page_capacity, paginate};
pub use roster::Roster;
pub use tracker::Tracker;
