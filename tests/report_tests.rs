use chrono::{Duration, NaiveDate};
use day_registry::report::{next_report_path, render_report};
use day_registry::{
    Category, JsonFileStore, Tracker, TrackerError, build_report, default_page_capacity, paginate,
};
use tempfile::tempdir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn consecutive_dates(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| start + Duration::days(i as i64))
        .collect()
}

#[test]
fn twenty_five_dates_at_capacity_twenty_make_two_pages() {
    let dates = consecutive_dates(d(2025, 1, 1), 25);
    let pages = paginate(&dates, 20);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0], dates[..20].to_vec());
    assert_eq!(pages[1], dates[20..].to_vec());

    let flattened: Vec<NaiveDate> = pages.into_iter().flatten().collect();
    assert_eq!(flattened, dates);
}

#[test]
fn exact_multiple_fills_pages_with_no_remainder_page() {
    let dates = consecutive_dates(d(2025, 1, 1), 40);
    let pages = paginate(&dates, 20);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].len(), 20);
}

#[test]
fn empty_input_yields_one_header_only_page() {
    let pages = paginate(&[], 20);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_empty());
}

#[test]
fn default_capacity_matches_reference_geometry() {
    // List from 770 down to 50 in steps of 20.
    assert_eq!(default_page_capacity(), 37);
}

#[test]
fn every_page_carries_the_category_header() {
    let dates = consecutive_dates(d(2025, 1, 1), 5);
    let pages = build_report("ABYD", Category::Vacation, &dates, 2);
    assert_eq!(pages.len(), 3);
    for page in &pages {
        assert_eq!(page.header, "Record of Vacations - ABYD");
    }
    let rendered = render_report(&pages);
    assert!(rendered.starts_with("Record of Vacations - ABYD\n• 2025-01-01\n"));
    assert_eq!(rendered.matches('\u{0c}').count(), 2);
}

#[test]
fn report_path_skips_existing_suffixes() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("ABYD_work_1.txt"), "x").unwrap();
    std::fs::write(dir.path().join("ABYD_work_2.txt"), "x").unwrap();

    let path = next_report_path(dir.path(), "ABYD", Category::Work, "txt");
    assert_eq!(path, dir.path().join("ABYD_work_3.txt"));
}

#[test]
fn export_of_empty_category_is_rejected_at_the_boundary() {
    let dir = tempdir().unwrap();
    let mut tracker = Tracker::open(JsonFileStore::new(dir.path().join("records.json"))).unwrap();
    tracker.add_person("abyd").unwrap();

    match tracker.export_report("abyd", Category::Holiday) {
        Err(TrackerError::EmptyExport { person, category }) => {
            assert_eq!(person, "ABYD");
            assert_eq!(category, Category::Holiday);
        }
        other => panic!("expected EmptyExport, got {other:?}"),
    }
}

#[test]
fn export_to_dir_writes_collision_free_artifacts() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("reports");
    let mut tracker = Tracker::open(JsonFileStore::new(dir.path().join("records.json"))).unwrap();
    tracker.add_person("abyd").unwrap();
    tracker
        .register("abyd", Category::Vacation, d(2025, 1, 1), Some(d(2025, 1, 3)))
        .unwrap();

    let first = tracker
        .export_to_dir("abyd", Category::Vacation, &out)
        .unwrap();
    let second = tracker
        .export_to_dir("abyd", Category::Vacation, &out)
        .unwrap();

    assert_eq!(first, out.join("ABYD_vacations_1.txt"));
    assert_eq!(second, out.join("ABYD_vacations_2.txt"));

    let text = std::fs::read_to_string(&first).unwrap();
    assert_eq!(
        text,
        "Record of Vacations - ABYD\n• 2025-01-01\n• 2025-01-02\n• 2025-01-03\n"
    );
}
