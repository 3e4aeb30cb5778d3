//! Dump and problem file tests - reading inputs from disk

use std::fs;

use tempfile::TempDir;

use hexplot::core::{dump, DumpError, GridCell, Problem};

const SEQUENCE: &str = r#"[
    {
        "board": {"width": 3, "height": 2, "cells": [[false, false, false], [true, false, false]]},
        "unit": {"cells": [[2, 0]], "pivot": [2, 0]},
        "previousMove": ""
    },
    {
        "board": {"width": 3, "height": 2, "cells": [[false, false, false], [true, false, false]]},
        "unit": {"cells": [[1, 1]], "pivot": [1, 1]},
        "previousMove": "SW"
    }
]"#;

#[test]
fn test_load_sequence_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.json");
    fs::write(&path, SEQUENCE).unwrap();

    let states = dump::load_states(&path).unwrap();
    assert_eq!(states.len(), 2);

    // Pairs are [column, row]; board rows are indexed by row first.
    assert!(states[0].board.is_locked(GridCell::new(0, 1)));
    assert!(!states[0].board.is_locked(GridCell::new(1, 0)));
    assert!(states[0].unit.contains(GridCell::new(2, 0)));
    assert!(states[1].unit.is_pivot(GridCell::new(1, 1)));

    assert_eq!(states[0].caption(), None);
    assert_eq!(states[1].caption(), Some("SW"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    match dump::load_states(&path) {
        Err(DumpError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a read error, got {:?}", other),
    }
}

#[test]
fn test_second_state_missing_pivot() {
    let json = r#"[
        {"board": {"width": 1, "height": 1, "cells": [[false]]}, "unit": {"cells": [], "pivot": [0, 0]}},
        {"board": {"width": 1, "height": 1, "cells": [[false]]}, "unit": {"cells": []}}
    ]"#;
    let err = dump::parse_states(json).unwrap_err();
    assert!(matches!(
        err,
        DumpError::MissingField {
            index: 1,
            field: "unit.pivot"
        }
    ));
    assert!(err.to_string().contains("unit.pivot"));
}

#[test]
fn test_written_dump_loads_back() {
    let states = dump::parse_states(SEQUENCE).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("copy.json");
    fs::write(&path, dump::to_json_string(&states).unwrap()).unwrap();
    assert_eq!(dump::load_states(&path).unwrap(), states);
}

#[test]
fn test_problem_file_from_disk() {
    let json = r#"{
        "id": 7,
        "width": 5,
        "height": 5,
        "filled": [{"x": 4, "y": 0}],
        "units": [
            {"members": [{"x": 2, "y": 0}, {"x": 3, "y": 0}], "pivot": {"x": 2, "y": 0}},
            {"members": [{"x": 2, "y": 0}], "pivot": {"x": 2, "y": 0}}
        ],
        "sourceLength": 3,
        "sourceSeeds": [0]
    }"#;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("problem_7.json");
    fs::write(&path, json).unwrap();

    let problem = Problem::load(&path).unwrap();
    assert_eq!(problem.id, 7);

    let gallery = problem.unit_gallery().unwrap();
    assert_eq!(gallery.len(), 2);
    assert!(gallery
        .iter()
        .all(|s| s.board.is_locked(GridCell::new(4, 0))));

    // The first output of any seed below 2^16 is 0, so unit 0 comes first.
    let dealt = problem.source_states(0).unwrap();
    assert_eq!(dealt.len(), 3);
    assert_eq!(dealt[0].unit.cells.len(), 2);
}
