use super::store::HistoryStore;
use super::HistoryEntry;
use crate::error::StorageError;
use crate::scoring::Label;

fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
    HistoryStore::new(dir.path().join("history.json"))
}

#[test]
fn missing_document_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    assert!(store.all().unwrap().is_empty());

    let stats = store.stats().unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.malicious, 0);
    assert_eq!(stats.benign, 0);
}

#[test]
fn record_then_all_round_trips_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let e1 = HistoryEntry::new("https://a.com", Label::Benign, "Looks safe");
    let e2 = HistoryEntry::new("http://b.biz", Label::Malicious, "Suspicious pattern");

    store.record(e1.clone()).unwrap();
    store.record(e2.clone()).unwrap();

    let all = store.all().unwrap();
    assert_eq!(all, vec![e1.clone(), e2.clone()]);

    // Timestamps are non-decreasing in insertion order.
    assert!(all[0].time <= all[1].time);
}

#[test]
fn stats_count_labels() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store
        .record(HistoryEntry::new("http://bad.biz", Label::Malicious, "Suspicious pattern"))
        .unwrap();
    store
        .record(HistoryEntry::new("https://ok.com", Label::Benign, "Looks safe"))
        .unwrap();
    store
        .record(HistoryEntry::new("https://fine.org", Label::Benign, "Looks safe"))
        .unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.malicious, 1);
    assert_eq!(stats.benign, 2);
}

#[test]
fn entries_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let store = HistoryStore::new(&path);
        store
            .record(HistoryEntry::new("https://a.com", Label::Benign, "Looks safe"))
            .unwrap();
    }

    let reopened = HistoryStore::new(&path);
    let all = reopened.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].url, "https://a.com");
    assert_eq!(all[0].result, Label::Benign);
}

#[test]
fn corrupt_document_is_an_error_not_a_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ definitely not a list").unwrap();

    let store = HistoryStore::new(&path);
    assert!(matches!(store.all(), Err(StorageError::Corrupt(_))));

    // A record against a corrupt document must not clobber it.
    let result = store.record(HistoryEntry::new("https://a.com", Label::Benign, "Looks safe"));
    assert!(matches!(result, Err(StorageError::Corrupt(_))));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ definitely not a list");
}

#[test]
fn persisted_document_uses_wire_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store
        .record(HistoryEntry::new("https://a.com", Label::Benign, "Looks safe"))
        .unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"url\""));
    assert!(raw.contains("\"result\""));
    assert!(raw.contains("\"reason\""));
    assert!(raw.contains("\"time\""));
    assert!(raw.contains("\"Benign\""));
}
