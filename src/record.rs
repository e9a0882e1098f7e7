use crate::dateset::DateSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three fixed date classifications. A closed enum so an invalid
/// category cannot reach the roster at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Vacation,
    Work,
    Holiday,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Vacation, Category::Work, Category::Holiday];

    /// Storage key, matching the persisted field names and export filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vacation => "vacations",
            Category::Work => "work",
            Category::Holiday => "holidays",
        }
    }

    /// Capitalized form used in report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vacation => "Vacations",
            Category::Work => "Work",
            Category::Holiday => "Holidays",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vacations" | "vacation" => Some(Category::Vacation),
            "work" => Some(Category::Work),
            "holidays" | "holiday" => Some(Category::Holiday),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One DateSet per category for a single named person. The field names double
/// as the persisted representation, one array of ISO dates per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub vacations: DateSet,
    pub work: DateSet,
    pub holidays: DateSet,
}

impl PersonRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(&self, category: Category) -> &DateSet {
        match category {
            Category::Vacation => &self.vacations,
            Category::Work => &self.work,
            Category::Holiday => &self.holidays,
        }
    }

    pub fn dates_mut(&mut self, category: Category) -> &mut DateSet {
        match category {
            Category::Vacation => &mut self.vacations,
            Category::Work => &mut self.work,
            Category::Holiday => &mut self.holidays,
        }
    }
}
