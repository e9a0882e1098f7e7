use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Deduplicated collection of calendar dates for one person/category pair.
/// Ascending order is re-established after every mutation, so lookups can use
/// binary search and `ordered` is a plain borrow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSet {
    dates: Vec<NaiveDate>,
}

impl DateSet {
    pub fn new() -> Self {
        Self { dates: Vec::new() }
    }

    /// Build a set from unordered input, dropping duplicates.
    pub fn from_dates(dates: Vec<NaiveDate>) -> Self {
        let mut set = Self { dates };
        set.normalize();
        set
    }

    fn normalize(&mut self) {
        self.dates.sort();
        self.dates.dedup();
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Insert a batch of dates. Already-present dates are no-ops per date.
    pub fn insert_many(&mut self, dates: &[NaiveDate]) {
        self.dates.extend_from_slice(dates);
        self.normalize();
    }

    /// Remove a single date. Returns false without mutating when absent.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        match self.dates.binary_search(&date) {
            Ok(idx) => {
                self.dates.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Ascending chronological snapshot.
    pub fn ordered(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl Serialize for DateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.dates.serialize(serializer)
    }
}

// Deserialization goes through `from_dates` so hand-edited or legacy files
// come back sorted and deduplicated.
impl<'de> Deserialize<'de> for DateSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dates = Vec::<NaiveDate>::deserialize(deserializer)?;
        Ok(Self::from_dates(dates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn insert_many_sorts_and_dedups() {
        let mut set = DateSet::new();
        set.insert_many(&[d(2025, 3, 2), d(2025, 1, 1), d(2025, 3, 2)]);
        assert_eq!(set.ordered(), &[d(2025, 1, 1), d(2025, 3, 2)]);
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut set = DateSet::from_dates(vec![d(2025, 1, 1)]);
        assert!(!set.remove(d(2025, 1, 2)));
        assert_eq!(set.len(), 1);
    }
}
