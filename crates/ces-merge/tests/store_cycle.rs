//! Full merge cycles against a real store file: load, transform, save,
//! reload. Exercises the way the authoring flows actually use the crates.

use ces_merge::{append_all, replace_from, SplicePoint};
use ces_store::{backup, load, save};
use ces_types::EntityRecord;
use serde_json::json;

fn record(value: serde_json::Value) -> EntityRecord {
    EntityRecord::from_value(value).unwrap()
}

#[test]
fn append_cycle_writes_one_line_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entities_00001.jsonl");
    save(&path, &[record(json!({"type": "a", "id": 1}))]).unwrap();

    let collection = load(&path).unwrap();
    let merged = append_all(collection, vec![record(json!({"type": "b", "id": 2}))]);
    save(&path, &merged).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw.lines().count(), 2);

    let reloaded = load(&path).unwrap();
    let kinds: Vec<_> = reloaded.iter().map(|r| r.kind().unwrap()).collect();
    assert_eq!(kinds, ["a", "b"]);
}

#[test]
fn replace_cycle_preserves_the_permission_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entities_00001.jsonl");
    save(
        &path,
        &[
            record(json!({"action": "plugin::users-permissions.find", "role": 1})),
            record(json!({"action": "plugin::users-permissions.create", "role": 1})),
            record(json!({"type": "api::article.article", "id": 13, "data": {"title": "Old"}})),
            record(json!({"type": "api::category.category", "id": 10, "data": {}})),
        ],
    )
    .unwrap();

    let collection = load(&path).unwrap();
    let backup_path = backup(&path).unwrap();
    let merged = replace_from(
        collection,
        &SplicePoint::before_kind("api::article.article"),
        vec![record(
            json!({"type": "api::article.article", "id": 20, "data": {"title": "New"}}),
        )],
    );
    save(&path, &merged).unwrap();

    let reloaded = load(&path).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded[0].kind(), None); // permission records carry no type
    assert!(reloaded[2].is_kind("api::article.article"));

    // The backup still holds the pre-splice collection.
    assert_eq!(load(&backup_path).unwrap().len(), 4);
}

#[test]
fn re_appending_a_batch_doubles_it_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entities_00001.jsonl");
    let batch = vec![record(json!({"type": "api::faq.faq", "id": 200, "data": {}}))];

    save(&path, &append_all(Vec::new(), batch.clone())).unwrap();
    let collection = load(&path).unwrap();
    save(&path, &append_all(collection, batch)).unwrap();

    assert_eq!(load(&path).unwrap().len(), 2);
}
