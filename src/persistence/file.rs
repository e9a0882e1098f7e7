use super::RosterStore;
use crate::error::{TrackerError, TrackerResult};
use crate::record::{Category, PersonRecord};
use crate::roster::Roster;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// On-disk shape of the roster: a map from normalized person name to the
/// three category arrays. `BTreeMap` plus sorted `DateSet` serialization keeps
/// the written document deterministic.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct RosterSnapshot {
    people: BTreeMap<String, PersonRecord>,
}

impl RosterSnapshot {
    fn from_roster(roster: &Roster) -> Self {
        let people = roster
            .iter()
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect();
        Self { people }
    }

    fn into_roster(self) -> Roster {
        Roster::from_people(self.people)
    }
}

pub fn save_roster_to_json<P: AsRef<Path>>(roster: &Roster, path: P) -> TrackerResult<()> {
    let snapshot = RosterSnapshot::from_roster(roster);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_roster_from_json<P: AsRef<Path>>(path: P) -> TrackerResult<Roster> {
    let file = File::open(path)?;
    let snapshot: RosterSnapshot = serde_json::from_reader(file)?;
    Ok(snapshot.into_roster())
}

/// Whole-file JSON store. Every save overwrites the document in one go, so a
/// subsequent load never observes a partially-applied mutation.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonFileStore {
    fn save_roster(&self, roster: &Roster) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        save_roster_to_json(roster, &self.path)
    }

    fn load_roster(&self) -> TrackerResult<Option<Roster>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_roster_from_json(&self.path).map(Some)
    }
}

#[derive(Serialize, Deserialize)]
struct DateCsvRecord {
    person: String,
    category: String,
    date: NaiveDate,
}

/// CSV interchange: one row per (person, category, date). People without any
/// registered dates produce no rows and are not represented; the JSON store
/// stays the authoritative format.
pub fn save_roster_to_csv<P: AsRef<Path>>(roster: &Roster, path: P) -> TrackerResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for (name, record) in roster.iter() {
        for category in Category::ALL {
            for date in record.dates(category).ordered() {
                writer.serialize(DateCsvRecord {
                    person: name.clone(),
                    category: category.as_str().to_string(),
                    date: *date,
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn load_roster_from_csv<P: AsRef<Path>>(path: P) -> TrackerResult<Roster> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut people: BTreeMap<String, PersonRecord> = BTreeMap::new();
    for record in reader.deserialize::<DateCsvRecord>() {
        let record = record?;
        let category = Category::from_str(&record.category).ok_or_else(|| {
            TrackerError::CorruptData(format!("invalid category '{}'", record.category))
        })?;
        people
            .entry(record.person)
            .or_default()
            .dates_mut(category)
            .insert_many(&[record.date]);
    }
    Ok(Roster::from_people(people))
}
