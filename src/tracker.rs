use crate::error::{TrackerError, TrackerResult};
use crate::persistence::RosterStore;
use crate::record::Category;
use crate::registration::{self, RegistrationOutcome};
use crate::report::{self, ReportPage};
use crate::roster::{Roster, normalize_name};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Boundary surface for front ends. Owns the roster together with its store
/// and writes the full mapping back synchronously after every mutation, so a
/// failed save leaves the in-memory state intact and usable while the error
/// is surfaced to the caller.
pub struct Tracker<S: RosterStore> {
    roster: Roster,
    store: S,
}

impl<S: RosterStore> Tracker<S> {
    /// Load existing state from the store, or start from an empty roster when
    /// nothing has been persisted yet.
    pub fn open(store: S) -> TrackerResult<Self> {
        let roster = match store.load_roster()? {
            Some(roster) => {
                info!(people = roster.len(), "loaded roster");
                roster
            }
            None => {
                info!("no stored roster, starting empty");
                Roster::new()
            }
        };
        Ok(Self { roster, store })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Names in lexicographic order. Read-only.
    pub fn people(&self) -> Vec<String> {
        self.roster.people()
    }

    pub fn add_person(&mut self, name: &str) -> TrackerResult<String> {
        let name = self.roster.add_person(name)?;
        self.persist()?;
        Ok(name)
    }

    /// Irreversible; front ends must confirm with the user before calling.
    pub fn delete_person(&mut self, name: &str) -> TrackerResult<()> {
        self.roster.delete_person(name)?;
        self.persist()
    }

    /// Register a single date or an inclusive range against one category.
    /// Persists once, and only when at least one new date went in.
    pub fn register(
        &mut self,
        person: &str,
        category: Category,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> TrackerResult<RegistrationOutcome> {
        let record = self.roster.record_mut(person)?;
        let outcome = registration::register(record.dates_mut(category), start, end)?;
        if !outcome.added.is_empty() {
            self.persist()?;
        }
        Ok(outcome)
    }

    pub fn dates(&self, person: &str, category: Category) -> TrackerResult<Vec<NaiveDate>> {
        self.roster.dates(person, category)
    }

    pub fn delete_date(
        &mut self,
        person: &str,
        category: Category,
        date: NaiveDate,
    ) -> TrackerResult<()> {
        let record = self.roster.record_mut(person)?;
        if !record.dates_mut(category).remove(date) {
            return Err(TrackerError::DateNotFound(date));
        }
        self.persist()
    }

    /// Lay out one person/category into pages. Read-only; rejects an empty
    /// category before pagination ever runs.
    pub fn export_report(
        &self,
        person: &str,
        category: Category,
    ) -> TrackerResult<Vec<ReportPage>> {
        let person = normalize_name(person);
        let dates = self.roster.dates(&person, category)?;
        if dates.is_empty() {
            return Err(TrackerError::EmptyExport { person, category });
        }
        Ok(report::build_report(
            &person,
            category,
            &dates,
            report::default_page_capacity(),
        ))
    }

    /// Write the rendered report into `dir` under the first free
    /// `{person}_{category}_{n}.txt` name.
    pub fn export_to_dir(
        &self,
        person: &str,
        category: Category,
        dir: &Path,
    ) -> TrackerResult<PathBuf> {
        let person = normalize_name(person);
        let pages = self.export_report(&person, category)?;
        std::fs::create_dir_all(dir)?;
        let path = report::next_report_path(dir, &person, category, "txt");
        std::fs::write(&path, report::render_report(&pages))?;
        info!(path = %path.display(), pages = pages.len(), "report written");
        Ok(path)
    }

    fn persist(&self) -> TrackerResult<()> {
        self.store.save_roster(&self.roster)?;
        debug!(people = self.roster.len(), "roster saved");
        Ok(())
    }
}
