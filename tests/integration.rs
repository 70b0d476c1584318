//! Integration tests for the record collection.

use record_collection::{Record, RecordStore, StoreConfig, Value};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn record(value: Value) -> Record {
    Record::from_value(value).unwrap()
}

fn test_store(records: Vec<Record>) -> RecordStore {
    init_tracing();
    RecordStore::new(StoreConfig::default().with_records(records)).unwrap()
}

// --- Scenarios ---

#[test]
fn test_insert_assigns_missing_key() {
    let mut store = test_store(Vec::new());
    store.insert(vec![
        record(json!({"id": 1, "name": "Batman"})),
        record(json!({"name": "Black Panther"})),
    ]);

    let all = store.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], record(json!({"id": 1, "name": "Batman"})));

    let generated = all[1].get("id").unwrap();
    assert!(generated.is_number());
    assert_eq!(all[1].get("name"), Some(&json!("Black Panther")));
}

#[test]
fn test_empty_store_lists_nothing() {
    let store = test_store(Vec::new());
    assert!(store.all().is_empty());
}

#[test]
fn test_update_by_key() {
    let mut store = test_store(vec![record(json!({"id": 1, "name": "Batman"}))]);
    assert!(store.update(1, record(json!({"name": "Joker"}))));
    assert_eq!(store.find(1), Some(record(json!({"id": 1, "name": "Joker"}))));
}

#[test]
fn test_update_missing_key() {
    let mut store = test_store(vec![record(json!({"id": 1, "name": "Batman"}))]);
    assert!(!store.update(2, Record::new()));
    assert_eq!(store.find(1).unwrap().get("name"), Some(&json!("Batman")));
}

#[test]
fn test_remove_single_field() {
    let mut store = test_store(vec![record(json!({"id": 1, "name": "Batman", "cape": true}))]);
    store.remove_field(1, "cape");
    assert_eq!(store.find(1), Some(record(json!({"id": 1, "name": "Batman"}))));
}

#[test]
fn test_remove_whole_record() {
    let mut store = test_store(vec![record(json!({"id": 1, "name": "Batman"}))]);
    store.remove(1);
    assert!(store.find(1).is_none());
}

// --- Realistic Workflow Tests ---

#[test]
fn test_roster_workflow() {
    let mut store = test_store(vec![
        record(json!({"id": 1, "name": "Batman"})),
        record(json!({"id": 2, "name": "Black Panther"})),
    ]);

    // Recruit two heroes without keys
    let recruits = store.insert(vec![
        record(json!({"name": "Storm", "powers": ["weather"]})),
        record(json!({"name": "Cyborg"})),
    ]);
    let storm_key = recruits[0].get("id").cloned().unwrap();
    let cyborg_key = recruits[1].get("id").cloned().unwrap();
    assert_ne!(storm_key, cyborg_key);

    // Promote Storm
    assert!(store.update(storm_key.clone(), record(json!({"rank": "captain"}))));
    let storm = store.find(storm_key.clone()).unwrap();
    assert_eq!(storm.get("rank"), Some(&json!("captain")));
    assert_eq!(storm.get("powers"), Some(&json!(["weather"])));

    // Cyborg leaves
    assert!(store.remove(cyborg_key.clone()).is_some());
    assert!(store.find(cyborg_key).is_none());

    let names: Vec<_> = store
        .iter()
        .filter_map(|r| r.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["Batman", "Black Panther", "Storm"]);
}

#[test]
fn test_string_keys_with_custom_primary_key() {
    init_tracing();
    let config = StoreConfig::default()
        .with_primary_key("slug")
        .with_records(vec![
            record(json!({"slug": "batman", "name": "Batman"})),
            record(json!({"slug": "joker", "name": "Joker"})),
        ]);
    let mut store = RecordStore::new(config).unwrap();

    assert!(store.update("joker", record(json!({"villain": true}))));
    assert_eq!(store.find("joker").unwrap().get("villain"), Some(&json!(true)));
    assert!(store.find(1).is_none());

    // Generated keys use the configured field
    let inserted = store.insert_one(record(json!({"name": "Robin"}))).unwrap();
    assert!(inserted.get("slug").is_some());
    assert!(inserted.get("id").is_none());
}

#[test]
fn test_store_from_json_config() {
    init_tracing();
    let config = StoreConfig::from_json(
        r#"{
            "primary_key": "id",
            "duplicate_keys": "skip",
            "initial_records": [
                {"id": 1, "name": "Batman"},
                {"id": 1, "name": "Impostor"},
                {"name": "Black Panther"}
            ]
        }"#,
    )
    .unwrap();
    let store = RecordStore::new(config).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.find(1).unwrap().get("name"), Some(&json!("Batman")));
    assert_eq!(store.find(2).unwrap().get("name"), Some(&json!("Black Panther")));
}

#[test]
fn test_records_roundtrip_through_json() {
    let store = test_store(vec![
        record(json!({"id": 1, "name": "Batman", "gear": {"belt": true}})),
        record(json!({"id": 2, "name": "Black Panther"})),
    ]);

    let json = serde_json::to_string(&store.all()).unwrap();
    let parsed: Vec<Record> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, store.all());
}

#[test]
fn test_nested_values_are_isolated() {
    let store = test_store(vec![record(json!({"id": 1, "gear": {"belt": true}}))]);

    let mut copy = store.find(1).unwrap();
    copy.set("gear", json!({"belt": false}));

    assert_eq!(store.find(1).unwrap().get("gear"), Some(&json!({"belt": true})));
}
