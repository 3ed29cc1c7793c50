use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use ledger::{Amount, Category, ExpenseRecord, LedgerStore};

fn ledger_path() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_ledgers");
    std::fs::create_dir_all(&root).unwrap();
    root.join(format!("ledger_{}.csv", Uuid::new_v4()))
}

fn store() -> (LedgerStore, PathBuf) {
    let path = ledger_path();
    let store = LedgerStore::open(&path).unwrap();
    (store, path)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn descriptions(rows: &[ExpenseRecord]) -> Vec<&str> {
    rows.iter().map(|r| r.description.as_str()).collect()
}

fn is_sorted_desc(rows: &[ExpenseRecord]) -> bool {
    rows.windows(2).all(|w| w[0].date >= w[1].date)
}

#[test]
fn open_creates_header_only_file() {
    let (store, path) = store();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "User Password,Date,Category,Amount,Description\n");
    assert!(store.load().unwrap().is_empty());

    std::fs::remove_file(path).ok();
}

#[test]
fn open_keeps_existing_rows() {
    let path = ledger_path();
    std::fs::write(
        &path,
        "User Password,Date,Category,Amount,Description\nabc,2024-01-01,Food,12.5,lunch\n",
    )
    .unwrap();

    let store = LedgerStore::open(&path).unwrap();
    let rows = store.load().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, Amount::new(1250));
    assert_eq!(rows[0].category, Category::Food);

    std::fs::remove_file(path).ok();
}

#[test]
fn legacy_float_amounts_are_rounded_on_load() {
    let path = ledger_path();
    std::fs::write(
        &path,
        "User Password,Date,Category,Amount,Description\n\
         abc,2024-01-02,Food,0.30000000000000004,coffee\n\
         xyz,2024-01-01,Bills,12.499999999999998,gas\n",
    )
    .unwrap();

    let store = LedgerStore::open(&path).unwrap();
    let rows = store.load().unwrap();
    assert_eq!(rows[0].amount, Amount::new(30));
    assert_eq!(rows[1].amount, Amount::new(1250));

    // The next rewrite normalizes the file to two decimals.
    store
        .append("abc", day(2024, 1, 3), Category::Other, Amount::new(100), "tip")
        .unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("abc,2024-01-02,Food,0.30,coffee"));
    assert!(content.contains("xyz,2024-01-01,Bills,12.50,gas"));

    std::fs::remove_file(path).ok();
}

#[test]
fn corrupt_file_fails_to_load() {
    let path = ledger_path();
    std::fs::write(
        &path,
        "User Password,Date,Category,Amount,Description\nabc,not-a-date,Food,1,x\n",
    )
    .unwrap();

    let store = LedgerStore::open(&path).unwrap();
    assert!(store.load().is_err());

    std::fs::remove_file(path).ok();
}

#[test]
fn newest_expense_comes_first() {
    let (store, path) = store();

    store
        .append("abc", day(2024, 1, 1), Category::Food, Amount::new(1250), "lunch")
        .unwrap();
    store
        .append("abc", day(2024, 2, 1), Category::Bills, Amount::new(4000), "rent")
        .unwrap();

    let view = store.filtered("abc").unwrap();
    assert_eq!(descriptions(&view), vec!["rent", "lunch"]);
    assert_eq!(view[0].category, Category::Bills);
    assert_eq!(view[0].amount.to_string(), "40.00");
    assert_eq!(view[1].amount.to_string(), "12.50");

    std::fs::remove_file(path).ok();
}

#[test]
fn append_sorts_every_owner() {
    let (store, path) = store();

    store
        .append("abc", day(2024, 3, 1), Category::Food, Amount::new(100), "a1")
        .unwrap();
    store
        .append("xyz", day(2024, 1, 1), Category::Other, Amount::new(200), "x1")
        .unwrap();
    store
        .append("abc", day(2023, 12, 1), Category::Shopping, Amount::new(300), "a2")
        .unwrap();
    store
        .append("xyz", day(2024, 5, 1), Category::Transport, Amount::new(400), "x2")
        .unwrap();

    let rows = store.load().unwrap();
    assert!(is_sorted_desc(&rows));
    assert_eq!(descriptions(&rows), vec!["x2", "a1", "x1", "a2"]);

    std::fs::remove_file(path).ok();
}

#[test]
fn same_day_rows_keep_insertion_order() {
    let (store, path) = store();

    store
        .append("abc", day(2024, 1, 1), Category::Food, Amount::new(100), "first")
        .unwrap();
    store
        .append("abc", day(2024, 1, 1), Category::Food, Amount::new(100), "second")
        .unwrap();

    assert_eq!(descriptions(&store.filtered("abc").unwrap()), vec!["first", "second"]);

    std::fs::remove_file(path).ok();
}

#[test]
fn filtered_view_only_has_owner_rows() {
    let (store, path) = store();

    store
        .append("abc", day(2024, 1, 1), Category::Food, Amount::new(100), "mine")
        .unwrap();
    store
        .append("xyz", day(2024, 1, 2), Category::Food, Amount::new(100), "theirs")
        .unwrap();

    assert_eq!(descriptions(&store.filtered("abc").unwrap()), vec!["mine"]);
    assert_eq!(descriptions(&store.filtered("xyz").unwrap()), vec!["theirs"]);
    assert!(store.filtered("nobody").unwrap().is_empty());

    std::fs::remove_file(path).ok();
}

#[test]
fn delete_only_row_empties_view() {
    let (store, path) = store();

    store
        .append("xyz", day(2024, 1, 1), Category::Food, Amount::new(100), "only")
        .unwrap();

    assert!(store.delete_at("xyz", 0).unwrap());
    assert!(store.filtered("xyz").unwrap().is_empty());

    std::fs::remove_file(path).ok();
}

#[test]
fn delete_out_of_range_changes_nothing() {
    let (store, path) = store();

    store
        .append("xyz", day(2024, 1, 1), Category::Food, Amount::new(100), "only")
        .unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(!store.delete_at("xyz", 5).unwrap());
    assert!(!store.delete_at("xyz", 1).unwrap());
    assert!(!store.delete_at("nobody", 0).unwrap());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert_eq!(descriptions(&store.filtered("xyz").unwrap()), vec!["only"]);

    std::fs::remove_file(path).ok();
}

#[test]
fn delete_targets_position_in_owner_view() {
    let (store, path) = store();

    for (owner, d, desc) in [
        ("abc", 1, "a-jan1"),
        ("xyz", 2, "x-jan2"),
        ("abc", 3, "a-jan3"),
        ("abc", 5, "a-jan5"),
        ("xyz", 4, "x-jan4"),
    ] {
        store
            .append(owner, day(2024, 1, d), Category::Other, Amount::new(100), desc)
            .unwrap();
    }

    assert_eq!(
        descriptions(&store.filtered("abc").unwrap()),
        vec!["a-jan5", "a-jan3", "a-jan1"]
    );

    assert!(store.delete_at("abc", 1).unwrap());

    assert_eq!(
        descriptions(&store.filtered("abc").unwrap()),
        vec!["a-jan5", "a-jan1"]
    );
    assert_eq!(
        descriptions(&store.filtered("xyz").unwrap()),
        vec!["x-jan4", "x-jan2"]
    );
    // The owner's remaining rows are moved to the end of the table.
    assert_eq!(
        descriptions(&store.load().unwrap()),
        vec!["x-jan4", "x-jan2", "a-jan5", "a-jan1"]
    );

    std::fs::remove_file(path).ok();
}

#[test]
fn deleting_everything_leaves_other_owners_intact() {
    let (store, path) = store();

    store
        .append("abc", day(2024, 1, 1), Category::Food, Amount::new(100), "a1")
        .unwrap();
    store
        .append("xyz", day(2024, 1, 2), Category::Bills, Amount::new(200), "x1")
        .unwrap();
    store
        .append("abc", day(2024, 1, 3), Category::Food, Amount::new(300), "a2")
        .unwrap();
    let xyz_before = store.filtered("xyz").unwrap();

    while store.delete_at("abc", 0).unwrap() {}

    assert!(store.filtered("abc").unwrap().is_empty());
    assert_eq!(store.filtered("xyz").unwrap(), xyz_before);

    std::fs::remove_file(path).ok();
}

#[test]
fn free_text_survives_rewrites() {
    let (store, path) = store();

    let description = "dinner, \"with\" friends\nsecond line";
    store
        .append("abc", day(2024, 1, 1), Category::Food, Amount::new(1999), description)
        .unwrap();
    store
        .append("abc", day(2024, 1, 2), Category::Food, Amount::new(1), "")
        .unwrap();

    let view = store.filtered("abc").unwrap();
    assert_eq!(view[0].description, "");
    assert_eq!(view[1].description, description);
    assert_eq!(view[1].amount, Amount::new(1999));

    std::fs::remove_file(path).ok();
}
