//! Snapshot Tests
//!
//! Tests verify:
//! - Dump/load round trip through a file
//! - Tolerance for blank and malformed lines
//! - Duplicate handling during load
//! - Custom delimiters
//! - LoadReport accounting

use std::io::Cursor;
use std::path::PathBuf;

use skipkv::{Config, SkipKvError, SkipList};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_snapshot() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.snapshot");
    (temp_dir, path)
}

fn list_with(config: Config) -> SkipList<i64, String> {
    SkipList::with_config(config).unwrap()
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_dump_then_load_round_trip() {
    let (_temp, path) = setup_temp_snapshot();

    let original: SkipList<i64, String> = SkipList::new(8).unwrap();
    for key in [5, 3, 9, 1, 7] {
        original.insert(key, format!("value-{key}")).unwrap();
    }
    original.dump(&path).unwrap();

    // Same max_height, fresh list; levels are re-randomized on reload
    let reloaded: SkipList<i64, String> = SkipList::new(8).unwrap();
    let report = reloaded.load(&path).unwrap();

    assert_eq!(report.records_loaded, 5);
    assert_eq!(report.lines_skipped, 0);
    assert_eq!(report.duplicates_skipped, 0);
    assert_eq!(reloaded.len(), original.len());
    for key in [1, 3, 5, 7, 9] {
        assert_eq!(reloaded.get(&key), original.get(&key));
    }
}

#[test]
fn test_dump_empty_list_loads_empty() {
    let (_temp, path) = setup_temp_snapshot();

    let empty: SkipList<i64, String> = SkipList::new(4).unwrap();
    empty.dump(&path).unwrap();

    let reloaded: SkipList<i64, String> = SkipList::new(4).unwrap();
    let report = reloaded.load(&path).unwrap();

    assert_eq!(report.records_loaded, 0);
    assert!(reloaded.is_empty());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let (_temp, path) = setup_temp_snapshot();

    let list: SkipList<i64, String> = SkipList::new(4).unwrap();
    let err = list.load(&path).unwrap_err();

    assert!(matches!(err, SkipKvError::Io(_)));
    assert!(list.is_empty());
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn test_blank_and_malformed_lines_are_skipped() {
    let list: SkipList<i64, String> = SkipList::new(6).unwrap();

    let report = list
        .load_from(Cursor::new("3:foo\n\nbadline\n4:bar\n"))
        .unwrap();

    assert_eq!(report.records_loaded, 2);
    assert_eq!(report.lines_skipped, 2);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(&3), Some("foo".to_string()));
    assert_eq!(list.get(&4), Some("bar".to_string()));
}

#[test]
fn test_unparseable_key_is_skipped() {
    let list: SkipList<i64, String> = SkipList::new(6).unwrap();

    let report = list
        .load_from(Cursor::new("1:one\nnot_a_number:oops\n2:two\n"))
        .unwrap();

    assert_eq!(report.records_loaded, 2);
    assert_eq!(report.lines_skipped, 1);
    assert_eq!(list.get(&1), Some("one".to_string()));
    assert_eq!(list.get(&2), Some("two".to_string()));
}

#[test]
fn test_value_keeps_later_delimiters() {
    let list: SkipList<i64, String> = SkipList::new(6).unwrap();

    // Split happens at the first delimiter only
    let report = list.load_from(Cursor::new("1:a:b:c\n")).unwrap();

    assert_eq!(report.records_loaded, 1);
    assert_eq!(list.get(&1), Some("a:b:c".to_string()));
}

#[test]
fn test_file_without_trailing_newline() {
    let list: SkipList<i64, String> = SkipList::new(6).unwrap();

    let report = list.load_from(Cursor::new("1:one\n2:two")).unwrap();

    assert_eq!(report.records_loaded, 2);
    assert_eq!(list.get(&2), Some("two".to_string()));
}

// =============================================================================
// Duplicate Handling Tests
// =============================================================================

#[test]
fn test_duplicate_lines_keep_first_occurrence() {
    let list: SkipList<i64, String> = SkipList::new(6).unwrap();

    let report = list
        .load_from(Cursor::new("1:first\n1:second\n2:other\n"))
        .unwrap();

    assert_eq!(report.records_loaded, 2);
    assert_eq!(report.duplicates_skipped, 1);
    assert_eq!(list.get(&1), Some("first".to_string()));
}

#[test]
fn test_load_into_nonempty_list_skips_present_keys() {
    let list: SkipList<i64, String> = SkipList::new(6).unwrap();
    list.insert(1, "already here".to_string()).unwrap();

    let report = list.load_from(Cursor::new("1:incoming\n2:new\n")).unwrap();

    assert_eq!(report.records_loaded, 1);
    assert_eq!(report.duplicates_skipped, 1);
    assert_eq!(list.get(&1), Some("already here".to_string()));
    assert_eq!(list.get(&2), Some("new".to_string()));
}

// =============================================================================
// Delimiter Tests
// =============================================================================

#[test]
fn test_custom_delimiter_round_trip() {
    let (_temp, path) = setup_temp_snapshot();

    let config = Config::builder().max_height(8).delimiter('=').build();
    let original = list_with(config.clone());
    original.insert(1, "one".to_string()).unwrap();
    original.insert(2, "two".to_string()).unwrap();
    original.dump(&path).unwrap();

    let mut raw = Vec::new();
    original.dump_to(&mut raw).unwrap();
    assert_eq!(String::from_utf8(raw).unwrap(), "1=one\n2=two\n");

    let reloaded = list_with(config);
    let report = reloaded.load(&path).unwrap();
    assert_eq!(report.records_loaded, 2);
    assert_eq!(reloaded.get(&2), Some("two".to_string()));
}

#[test]
fn test_wrong_delimiter_skips_everything() {
    let list: SkipList<i64, String> = {
        let config = Config::builder().max_height(6).delimiter(';').build();
        SkipList::with_config(config).unwrap()
    };

    let report = list.load_from(Cursor::new("1:one\n2:two\n")).unwrap();

    assert_eq!(report.records_loaded, 0);
    assert_eq!(report.lines_skipped, 2);
    assert!(list.is_empty());
}
