//! Loading world documents from disk.
//!
//! Writes JSON files into a temp dir, loads them through `FileSource`, and
//! checks catalog merging, failure recording and field defaults.

use std::fs;
use std::path::PathBuf;

use roomgraph::model::UNKNOWN;
use roomgraph::{AnalysisConfig, DocumentSource, Error, FileSource, ViolationKind, World};

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

const PART1: &str = r#"{
  "districts": [{
    "name": "Imperial City",
    "locations": [{
      "name": "North Gate",
      "rooms": [
        {
          "id": "tj_gate_north",
          "name": "North Gate",
          "type": "gate",
          "coordinates": {"x": 0, "y": 10, "z": 0},
          "exits": [
            {"direction": "south", "targetRoomId": "tj_gate_north_inside", "description": "through the gate"}
          ]
        },
        {
          "id": "tj_gate_north_inside",
          "name": "Inside North Gate",
          "type": "street",
          "exits": [
            {"direction": "north", "targetRoomId": "tj_gate_north"},
            {"direction": "south", "targetRoomId": "tj_palace_square"}
          ]
        }
      ]
    }]
  }]
}"#;

const PART2: &str = r#"{
  "districts": [{
    "name": "Palace District",
    "locations": [{
      "name": "Palace",
      "rooms": [
        {
          "id": "tj_palace_square",
          "name": "Palace Square",
          "type": "plaza",
          "exits": [
            {"direction": "east", "targetRoomId": "tj_ministry_plaza"}
          ]
        }
      ]
    }]
  }]
}"#;

#[test]
fn test_load_multiple_parts() {
    let dir = tempfile::tempdir().unwrap();
    let p1 = write(&dir, "part1.json", PART1);
    let p2 = write(&dir, "part2.json", PART2);

    let world = World::load([FileSource::new(p1), FileSource::new(p2)]).unwrap();
    let catalog = world.catalog();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.sources_loaded(), 2);

    let gate = catalog.room("tj_gate_north").unwrap();
    assert_eq!(gate.region, "Imperial City");
    assert_eq!(gate.location, "North Gate");
    assert_eq!(gate.coordinates["y"], 10);

    let result = world.analyze(&AnalysisConfig::default().with_expected_room_count(3));
    let kinds: Vec<(&str, &str, ViolationKind)> = result
        .violations
        .iter()
        .map(|v| (v.from.as_str(), v.to.as_str(), v.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("tj_gate_north_inside", "tj_palace_square", ViolationKind::NoReverse),
            ("tj_palace_square", "tj_ministry_plaza", ViolationKind::MissingTarget),
        ]
    );
    assert_eq!(result.region_stats["Palace District"], 1);
}

#[test]
fn test_bad_file_is_skipped_and_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(&dir, "good.json", PART2);
    let broken = write(&dir, "broken.json", r#"{"districts": [ {"locations": [ }"#);
    let missing = dir.path().join("missing.json");

    let world = World::load([
        FileSource::new(&broken),
        FileSource::new(&good),
        FileSource::new(&missing),
    ])
    .unwrap();

    let failures = world.catalog().failures();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].source, broken.display().to_string());
    assert_eq!(failures[1].source, missing.display().to_string());
    assert_eq!(world.catalog().len(), 1);
}

#[test]
fn test_room_without_id_skips_whole_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "partial.json",
        r#"{"districts":[{"locations":[{"rooms":[{"id":"ok"},{"name":"no id"}]}]}]}"#,
    );

    let result = FileSource::new(&path).load();
    assert!(matches!(result, Err(Error::SourceUnreadable { .. })));
    assert!(matches!(World::load([FileSource::new(&path)]), Err(Error::EmptyCatalog { failures: 1 })));
}

#[test]
fn test_duplicate_ids_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let first = write(
        &dir,
        "a.json",
        r#"{"districts":[{"name":"Old","locations":[{"rooms":[{"id":"r","name":"Old room","exits":[{"targetRoomId":"gone"}]}]}]}]}"#,
    );
    let second = write(
        &dir,
        "b.json",
        r#"{"districts":[{"name":"New","locations":[{"rooms":[{"id":"r","name":"New room"}]}]}]}"#,
    );

    let world = World::load([FileSource::new(first), FileSource::new(second)]).unwrap();
    let room = world.catalog().room("r").unwrap();
    assert_eq!(room.name, "New room");
    assert_eq!(room.region, "New");
    assert_eq!(room.location, UNKNOWN);

    let result = world.analyze(&AnalysisConfig::default());
    assert_eq!(result.total_rooms, 1);
    assert!(result.violations.is_empty());
}

#[test]
fn test_null_lists_do_not_drop_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "nulls.json",
        r#"{"districts":[{"name":"d","locations":[
            {"name":"l","rooms":[{"id":"a","exits":[{"direction":"east","targetRoomId":"b"}]},{"id":"b","exits":null}]},
            {"name":"empty","rooms":null}
        ]}]}"#,
    );

    let world = World::load([FileSource::new(&path)]).unwrap();
    assert!(world.catalog().failures().is_empty());
    assert_eq!(world.catalog().len(), 2);
    assert!(world.catalog().exits("b").is_empty());

    let result = world.analyze(&AnalysisConfig::default());
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].kind, ViolationKind::NoReverse);
}
