//! Integration tests for the `spot` CLI.
//!
//! Each test creates a temp store directory, runs `spot -C <dir>` as a
//! subprocess, and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `spot` binary.
fn spot_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("spot");
    path
}

/// Seed a store directory with two locations and three items.
/// Kitchen holds Sponge (unchecked) and Soap (checked); Garage holds Wrench.
fn seed_store(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("locations.json"),
        r#"[
  { "id": "loc-1", "name": "Kitchen" },
  { "id": "loc-2", "name": "Garage" }
]"#,
    )
    .unwrap();
    fs::write(
        dir.join("items.json"),
        r#"[
  { "id": "item-1", "name": "Sponge", "checked": false, "location_id": "loc-1" },
  { "id": "item-2", "name": "Soap", "checked": true, "location_id": "loc-1" },
  { "id": "item-3", "name": "Wrench", "checked": false, "location_id": "loc-2" }
]"#,
    )
    .unwrap();
}

/// Run `spot` against the given store dir, returning (stdout, stderr, success).
fn run_spot(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(spot_bin())
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to run spot");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `spot` expecting success, return stdout.
fn run_spot_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_spot(dir, args);
    if !success {
        panic!(
            "spot {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

// ---------------------------------------------------------------------------
// Read command tests
// ---------------------------------------------------------------------------

#[test]
fn test_locations_listing() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["locations"]);
    assert!(out.contains("Kitchen"));
    assert!(out.contains("loc-1"));
    assert!(out.contains("1/2")); // Soap is already checked
    assert!(out.contains("Garage"));
    assert!(out.contains("1/1"));
}

#[test]
fn test_locations_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["locations", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], "loc-1");
    assert_eq!(arr[0]["name"], "Kitchen");
    assert_eq!(arr[0]["unchecked"], 1);
    assert_eq!(arr[0]["total"], 2);
}

#[test]
fn test_items_hides_checked_by_default() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["items"]);
    assert!(out.contains("== Kitchen (loc-1) 1/2 =="));
    assert!(out.contains("[ ] item-1 Sponge"));
    assert!(!out.contains("Soap"));
    assert!(out.contains("[ ] item-3 Wrench"));
}

#[test]
fn test_items_all_includes_checked() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["items", "--all"]);
    assert!(out.contains("[x] item-2 Soap"));
    // Checked items sort below unchecked ones
    let sponge = out.find("Sponge").unwrap();
    let soap = out.find("Soap").unwrap();
    assert!(sponge < soap);
}

#[test]
fn test_items_single_location_by_name() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["items", "Garage"]);
    assert!(out.contains("Wrench"));
    assert!(!out.contains("Sponge"));

    // Name matching is case-insensitive
    let out = run_spot_ok(tmp.path(), &["items", "garage"]);
    assert!(out.contains("Wrench"));
}

#[test]
fn test_items_unknown_location_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let (_stdout, stderr, success) = run_spot(tmp.path(), &["items", "Attic"]);
    assert!(!success);
    assert!(stderr.contains("location not found: Attic"));
}

#[test]
fn test_items_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["items", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    // Checked items are excluded without --all
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], "item-1");
    assert_eq!(arr[0]["location"], "loc-1");
    assert_eq!(arr[1]["id"], "item-3");

    let out = run_spot_ok(tmp.path(), &["items", "--all", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

#[test]
fn test_empty_store_listings() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = run_spot_ok(tmp.path(), &["locations"]);
    assert!(out.trim().is_empty());

    let out = run_spot_ok(tmp.path(), &["items"]);
    assert!(out.trim().is_empty());

    let out = run_spot_ok(tmp.path(), &["locations", "--json"]);
    assert_eq!(out.trim(), "[]");
}

#[test]
fn test_check_valid_store() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["check"]);
    assert!(out.contains("store is valid"));
}

#[test]
fn test_check_reports_dangling_reference() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());
    // Hand-edit an item to point at a location that doesn't exist
    fs::write(
        tmp.path().join("items.json"),
        r#"[ { "id": "item-1", "name": "Ghost", "location_id": "loc-9" } ]"#,
    )
    .unwrap();

    let out = run_spot_ok(tmp.path(), &["check"]);
    assert!(out.contains("references missing location loc-9"));
    assert!(out.contains("store has errors"));
}

#[test]
fn test_check_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());
    fs::write(
        tmp.path().join("items.json"),
        r#"[ { "id": "item-1", "name": "Ghost", "location_id": "loc-9" } ]"#,
    )
    .unwrap();

    let out = run_spot_ok(tmp.path(), &["check", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["errors"][0]["type"], "dangling_location");
    assert_eq!(parsed["errors"][0]["location_id"], "loc-9");
}

// ---------------------------------------------------------------------------
// Write command tests
// ---------------------------------------------------------------------------

#[test]
fn test_loc_add_prints_id_and_persists() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = run_spot_ok(tmp.path(), &["loc", "Pantry"]);
    assert_eq!(out.trim(), "loc-1");

    let text = fs::read_to_string(tmp.path().join("locations.json")).unwrap();
    assert!(text.contains("Pantry"));

    // `loc` with no name lists locations
    let out = run_spot_ok(tmp.path(), &["loc"]);
    assert!(out.contains("Pantry"));
    assert!(out.contains("0/0"));
}

#[test]
fn test_loc_trims_name() {
    let tmp = tempfile::TempDir::new().unwrap();

    run_spot_ok(tmp.path(), &["loc", "  Pantry  "]);
    let out = run_spot_ok(tmp.path(), &["locations", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["name"], "Pantry");
}

#[test]
fn test_loc_whitespace_name_fails() {
    let tmp = tempfile::TempDir::new().unwrap();

    let (_stdout, stderr, success) = run_spot(tmp.path(), &["loc", "   "]);
    assert!(!success);
    assert!(stderr.contains("name is empty"));
    assert!(!tmp.path().join("locations.json").exists());
}

#[test]
fn test_add_item() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["add", "Kitchen", "Mop"]);
    assert_eq!(out.trim(), "item-4");

    let text = fs::read_to_string(tmp.path().join("items.json")).unwrap();
    assert!(text.contains("Mop"));

    let out = run_spot_ok(tmp.path(), &["items", "Kitchen"]);
    assert!(out.contains("[ ] item-4 Mop"));
}

#[test]
fn test_add_item_by_location_id() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    run_spot_ok(tmp.path(), &["add", "loc-2", "Socket set"]);
    let out = run_spot_ok(tmp.path(), &["items", "Garage", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1]["name"], "Socket set");
    assert_eq!(arr[1]["location"], "loc-2");
}

#[test]
fn test_add_unknown_location_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let (_stdout, stderr, success) = run_spot(tmp.path(), &["add", "Attic", "Boxes"]);
    assert!(!success);
    assert!(stderr.contains("location not found: Attic"));
}

#[test]
fn test_add_whitespace_name_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());
    let before = fs::read_to_string(tmp.path().join("items.json")).unwrap();

    let (_stdout, stderr, success) = run_spot(tmp.path(), &["add", "Kitchen", "   "]);
    assert!(!success);
    assert!(stderr.contains("name is empty"));

    let after = fs::read_to_string(tmp.path().join("items.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_toggle_persists() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["toggle", "item-1"]);
    assert!(out.contains("[x] item-1 Sponge"));

    let out = run_spot_ok(tmp.path(), &["items", "Kitchen", "--all", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let sponge = parsed
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == "item-1")
        .unwrap();
    assert_eq!(sponge["checked"], true);

    // Toggling again unchecks
    let out = run_spot_ok(tmp.path(), &["toggle", "item-1"]);
    assert!(out.contains("[ ] item-1 Sponge"));
}

#[test]
fn test_toggle_unknown_item_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let (_stdout, stderr, success) = run_spot(tmp.path(), &["toggle", "item-9"]);
    assert!(!success);
    assert!(stderr.contains("item not found: item-9"));
}

#[test]
fn test_mv_moves_item() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let out = run_spot_ok(tmp.path(), &["mv", "item-3", "Kitchen"]);
    assert!(out.contains("item-3 → loc-1"));

    let out = run_spot_ok(tmp.path(), &["items", "Kitchen"]);
    assert!(out.contains("Wrench"));
    let out = run_spot_ok(tmp.path(), &["items", "Garage"]);
    assert!(!out.contains("Wrench"));
}

#[test]
fn test_mv_same_location_writes_nothing() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());
    let before = fs::read_to_string(tmp.path().join("items.json")).unwrap();

    let out = run_spot_ok(tmp.path(), &["mv", "item-1", "Kitchen"]);
    assert!(out.contains("already in"));

    let after = fs::read_to_string(tmp.path().join("items.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_mv_unknown_item_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let (_stdout, stderr, success) = run_spot(tmp.path(), &["mv", "item-9", "Kitchen"]);
    assert!(!success);
    assert!(stderr.contains("item not found: item-9"));
}

#[test]
fn test_mv_unknown_location_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    seed_store(tmp.path());

    let (_stdout, stderr, success) = run_spot(tmp.path(), &["mv", "item-1", "Attic"]);
    assert!(!success);
    assert!(stderr.contains("location not found: Attic"));
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn test_full_workflow_from_empty_store() {
    let tmp = tempfile::TempDir::new().unwrap();

    assert_eq!(run_spot_ok(tmp.path(), &["loc", "Kitchen"]).trim(), "loc-1");
    assert_eq!(run_spot_ok(tmp.path(), &["loc", "Garage"]).trim(), "loc-2");
    assert_eq!(
        run_spot_ok(tmp.path(), &["add", "loc-1", "Sponge"]).trim(),
        "item-1"
    );
    assert_eq!(
        run_spot_ok(tmp.path(), &["add", "Garage", "Wrench"]).trim(),
        "item-2"
    );

    run_spot_ok(tmp.path(), &["toggle", "item-1"]);
    run_spot_ok(tmp.path(), &["mv", "item-2", "Kitchen"]);

    let out = run_spot_ok(tmp.path(), &["items", "--all"]);
    assert!(out.contains("== Kitchen (loc-1) 1/2 =="));
    assert!(out.contains("[ ] item-2 Wrench"));
    assert!(out.contains("[x] item-1 Sponge"));
    assert!(out.contains("== Garage (loc-2) 0/0 =="));

    let out = run_spot_ok(tmp.path(), &["check"]);
    assert!(out.contains("store is valid"));
}
