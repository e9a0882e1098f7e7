use chrono::NaiveDate;
use day_registry::{Category, DateSet, PersonRecord, TrackerError, register};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn single_date_is_added_once_and_reported_duplicate_after() {
    let mut set = DateSet::new();

    let first = register(&mut set, d(2025, 1, 1), None).unwrap();
    assert_eq!(first.added, vec![d(2025, 1, 1)]);
    assert!(first.duplicates.is_empty());
    assert_eq!(set.len(), 1);

    let second = register(&mut set, d(2025, 1, 1), None).unwrap();
    assert!(second.added.is_empty());
    assert_eq!(second.duplicates, vec![d(2025, 1, 1)]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.ordered(), &[d(2025, 1, 1)]);
}

#[test]
fn one_day_range_registers_exactly_one_date() {
    let mut set = DateSet::new();
    let outcome = register(&mut set, d(2025, 6, 15), Some(d(2025, 6, 15))).unwrap();
    assert_eq!(outcome.added, vec![d(2025, 6, 15)]);
    assert_eq!(set.len(), 1);
}

#[test]
fn range_is_inclusive_on_both_ends() {
    let mut set = DateSet::new();
    let outcome = register(&mut set, d(2025, 1, 1), Some(d(2025, 1, 5))).unwrap();
    assert_eq!(
        outcome.added,
        vec![
            d(2025, 1, 1),
            d(2025, 1, 2),
            d(2025, 1, 3),
            d(2025, 1, 4),
            d(2025, 1, 5),
        ]
    );
    assert!(outcome.duplicates.is_empty());
    assert_eq!(set.len(), 5);
}

#[test]
fn inverted_range_is_rejected_without_mutation() {
    let mut set = DateSet::from_dates(vec![d(2025, 1, 15)]);
    let result = register(&mut set, d(2025, 2, 1), Some(d(2025, 1, 1)));
    match result {
        Err(TrackerError::InvalidRange { start, end }) => {
            assert_eq!(start, d(2025, 2, 1));
            assert_eq!(end, d(2025, 1, 1));
        }
        other => panic!("expected InvalidRange, got {other:?}"),
    }
    assert_eq!(set.len(), 1);
}

#[test]
fn partial_overlap_partitions_added_and_duplicates() {
    let mut set = DateSet::from_dates(vec![d(2025, 1, 2)]);
    let outcome = register(&mut set, d(2025, 1, 1), Some(d(2025, 1, 3))).unwrap();
    assert_eq!(outcome.added, vec![d(2025, 1, 1), d(2025, 1, 3)]);
    assert_eq!(outcome.duplicates, vec![d(2025, 1, 2)]);
    assert_eq!(set.len(), 3);
    assert_eq!(
        set.ordered(),
        &[d(2025, 1, 1), d(2025, 1, 2), d(2025, 1, 3)]
    );
}

#[test]
fn ordering_is_strictly_ascending_after_mixed_mutations() {
    let mut set = DateSet::new();
    register(&mut set, d(2025, 3, 10), Some(d(2025, 3, 12))).unwrap();
    register(&mut set, d(2025, 1, 1), None).unwrap();
    assert!(set.remove(d(2025, 3, 11)));
    register(&mut set, d(2025, 2, 20), None).unwrap();

    let ordered = set.ordered();
    assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(
        ordered,
        &[d(2025, 1, 1), d(2025, 2, 20), d(2025, 3, 10), d(2025, 3, 12)]
    );
}

#[test]
fn same_date_may_live_in_more_than_one_category() {
    // Cross-category overlap is accepted behavior, not a conflict.
    let mut record = PersonRecord::new();
    register(&mut record.work, d(2025, 5, 1), None).unwrap();
    let outcome = register(record.dates_mut(Category::Vacation), d(2025, 5, 1), None).unwrap();
    assert_eq!(outcome.added, vec![d(2025, 5, 1)]);
    assert!(record.work.contains(d(2025, 5, 1)));
    assert!(record.vacations.contains(d(2025, 5, 1)));
}
