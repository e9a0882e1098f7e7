use crate::dateset::DateSet;
use crate::error::{TrackerError, TrackerResult};
use chrono::{Duration, NaiveDate};

/// Outcome of a registration request: the dates actually inserted and the
/// ones that were already present, both in ascending order. Duplicates are
/// reported, never treated as an error, and never block the new dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub added: Vec<NaiveDate>,
    pub duplicates: Vec<NaiveDate>,
}

/// Register a single date (`end` absent) or every date from `start` to `end`
/// inclusive. Each requested date is classified against the set before any
/// insertion happens, then the new ones go in as one batch.
///
/// Does not persist; that is the caller's responsibility, once, afterwards.
pub fn register(
    set: &mut DateSet,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> TrackerResult<RegistrationOutcome> {
    let end = end.unwrap_or(start);
    if start > end {
        return Err(TrackerError::InvalidRange { start, end });
    }

    let mut outcome = RegistrationOutcome::default();
    let mut current = start;
    while current <= end {
        if set.contains(current) {
            outcome.duplicates.push(current);
        } else {
            outcome.added.push(current);
        }
        current = current + Duration::days(1);
    }

    set.insert_many(&outcome.added);
    Ok(outcome)
}
