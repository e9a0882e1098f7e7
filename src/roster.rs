use crate::error::{TrackerError, TrackerResult};
use crate::record::{Category, PersonRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Canonical form of a person name: trimmed and upper-cased. Applied on every
/// entry point (add and lookup alike) so a key can never diverge from the
/// identity of its record.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// The complete mapping from person name to record. Owned state with explicit
/// mutation methods; persistence is handled by the callers in `tracker`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    people: BTreeMap<String, PersonRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from loaded state, re-keying every entry through name
    /// normalization so stored keys and identities line up.
    pub fn from_people(people: BTreeMap<String, PersonRecord>) -> Self {
        let people = people
            .into_iter()
            .map(|(name, record)| (normalize_name(&name), record))
            .collect();
        Self { people }
    }

    /// Names in lexicographic order.
    pub fn people(&self) -> Vec<String> {
        self.people.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PersonRecord)> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Create an empty record under the normalized name. Returns the name as
    /// stored so callers can echo it back.
    pub fn add_person(&mut self, name: &str) -> TrackerResult<String> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        if self.people.contains_key(&name) {
            return Err(TrackerError::DuplicatePerson(name));
        }
        self.people.insert(name.clone(), PersonRecord::new());
        Ok(name)
    }

    /// Remove a person and all three of their date sets. Irreversible; the
    /// front end is expected to confirm before calling.
    pub fn delete_person(&mut self, name: &str) -> TrackerResult<()> {
        let name = normalize_name(name);
        if self.people.remove(&name).is_none() {
            return Err(TrackerError::UnknownPerson(name));
        }
        Ok(())
    }

    pub fn record(&self, name: &str) -> TrackerResult<&PersonRecord> {
        let name = normalize_name(name);
        self.people
            .get(&name)
            .ok_or(TrackerError::UnknownPerson(name))
    }

    pub fn record_mut(&mut self, name: &str) -> TrackerResult<&mut PersonRecord> {
        let name = normalize_name(name);
        match self.people.get_mut(&name) {
            Some(record) => Ok(record),
            None => Err(TrackerError::UnknownPerson(name)),
        }
    }

    pub fn dates(&self, name: &str, category: Category) -> TrackerResult<Vec<NaiveDate>> {
        Ok(self.record(name)?.dates(category).ordered().to_vec())
    }
}
