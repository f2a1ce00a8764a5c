use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a `wk` command with plain output against the
/// database in `dir`
fn wk_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wk").expect("Failed to find wk binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(dir.join("cli_test.db"));
    cmd
}

/// Runs a command expected to succeed and returns its stdout
fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = wk_cmd(dir).args(args).output().expect("Failed to run wk");
    assert!(output.status.success(), "wk {args:?} failed");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

/// Pulls the first backticked id out of a heading such as "### Name (`id`)"
fn first_listed_id(markdown: &str) -> String {
    let start = markdown.find("(`").expect("No id in output") + 2;
    let end = start + markdown[start..].find("`)").expect("Unterminated id");
    markdown[start..end].to_string()
}

#[test]
fn test_cli_default_shows_empty_plan() {
    let temp_dir = create_cli_test_environment();

    wk_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Regular Weekend"))
        .stdout(predicate::str::contains("## Saturday"))
        .stdout(predicate::str::contains("No events planned."))
        .stdout(predicate::str::contains("## Friday").not());
}

#[test]
fn test_cli_catalog_search_matches_any_term() {
    let temp_dir = create_cli_test_environment();

    wk_cmd(temp_dir.path())
        .args(["catalog", "search", "kayak", "pottery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Events (2)"))
        .stdout(predicate::str::contains("Kayaking on Mirror Lake"))
        .stdout(predicate::str::contains("Pottery Workshop"))
        .stdout(predicate::str::contains("Rooftop Jazz Night").not());
}

#[test]
fn test_cli_catalog_show_unknown_event_fails() {
    let temp_dir = create_cli_test_environment();

    wk_cmd(temp_dir.path())
        .args(["catalog", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event 999 not found"));
}

#[test]
fn test_cli_add_to_plan_and_reject_duplicate() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    wk_cmd(dir)
        .args(["plan", "add", "1", "saturday"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added \"Sunrise Hike at Eagle Ridge\" to Saturday",
        ));

    wk_cmd(dir)
        .args(["plan", "add", "1", "Saturday"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"Sunrise Hike at Eagle Ridge\" is already in Saturday",
        ));

    let plan = run_ok(dir, &["plan", "show"]);
    assert_eq!(plan.matches("Sunrise Hike at Eagle Ridge").count(), 1);
}

#[test]
fn test_cli_invalid_day_is_rejected() {
    let temp_dir = create_cli_test_environment();

    wk_cmd(temp_dir.path())
        .args(["plan", "add", "1", "tuesday"])
        .assert()
        .failure();
}

#[test]
fn test_cli_long_weekend_days() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    wk_cmd(dir)
        .args(["plan", "add", "4", "friday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("only available on a long weekend"));

    wk_cmd(dir)
        .args(["plan", "long-weekend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Long weekend on"));

    wk_cmd(dir)
        .args(["plan", "add", "4", "friday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Kayaking on Mirror Lake\" to Friday"));

    let plan = run_ok(dir, &["plan", "show"]);
    assert!(plan.contains("# Long Weekend"));
    assert!(plan.contains("Kayaking on Mirror Lake"));

    wk_cmd(dir)
        .args(["plan", "long-weekend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Friday and Monday cleared"));

    let plan = run_ok(dir, &["plan", "show"]);
    assert!(plan.contains("# Regular Weekend"));
    assert!(!plan.contains("Kayaking on Mirror Lake"));
}

#[test]
fn test_cli_theme_set_and_clear() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    wk_cmd(dir)
        .args(["plan", "theme", "romantic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to Romantic Getaway"));
    assert!(run_ok(dir, &["plan", "show"]).contains("- Theme: Romantic Getaway"));

    wk_cmd(dir)
        .args(["plan", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme cleared"));
    assert!(!run_ok(dir, &["plan", "show"]).contains("- Theme:"));
}

#[test]
fn test_cli_remove_event_and_day() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    run_ok(dir, &["plan", "add", "2", "sunday"]);
    run_ok(dir, &["plan", "add", "3", "sunday"]);

    wk_cmd(dir)
        .args(["plan", "remove", "sunday", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"Farmers Market Brunch\" from Sunday"));

    wk_cmd(dir)
        .args(["plan", "remove", "sunday", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event 2 is not planned on Sunday"));

    wk_cmd(dir)
        .args(["plan", "remove-day", "sunday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 event(s) from Sunday"));

    assert!(!run_ok(dir, &["plan", "show"]).contains("Modern Art Museum"));
}

#[test]
fn test_cli_timeline_orders_events() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    run_ok(dir, &["plan", "add", "5", "saturday"]);
    run_ok(dir, &["plan", "add", "8", "saturday"]);
    run_ok(dir, &["plan", "add", "7", "saturday"]);

    let timeline = run_ok(dir, &["plan", "timeline"]);
    let bike = timeline.find("Coastal Bike Ride").expect("all-day event listed");
    let pottery = timeline.find("Pottery Workshop").expect("morning event listed");
    let jazz = timeline.find("Rooftop Jazz Night").expect("evening event listed");
    assert!(bike < pottery && pottery < jazz);
}

#[test]
fn test_cli_save_and_favorite_toggle() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    wk_cmd(dir)
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved events."));

    wk_cmd(dir)
        .args(["save", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved \"Botanical Garden Picnic\""));
    assert!(run_ok(dir, &["saved"]).contains("Botanical Garden Picnic"));

    wk_cmd(dir)
        .args(["save", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"Botanical Garden Picnic\" from saved events"));

    wk_cmd(dir)
        .args(["favorite", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Stand-up Comedy Club\" to favorites"));

    let favorites = run_ok(dir, &["favorites"]);
    assert!(favorites.contains("Stand-up Comedy Club"));
    assert!(run_ok(dir, &["saved"]).contains("No saved events."));
}

#[test]
fn test_cli_saved_plans_workflow() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    wk_cmd(dir)
        .args(["plans", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved plans."));

    run_ok(dir, &["plan", "add", "11", "sunday"]);
    wk_cmd(dir)
        .args(["plans", "save", "Beach day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend plan \"Beach day\" saved!"));

    let listing = run_ok(dir, &["plans", "list"]);
    assert!(listing.contains("### Beach day"));
    let plan_id = first_listed_id(&listing);

    run_ok(dir, &["plan", "remove-day", "sunday"]);
    assert!(!run_ok(dir, &["plan", "show"]).contains("Sunset Yoga on the Beach"));

    wk_cmd(dir)
        .args(["plans", "load", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded \"Beach day\""));
    assert!(run_ok(dir, &["plan", "show"]).contains("Sunset Yoga on the Beach"));

    wk_cmd(dir)
        .args(["plans", "delete", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend plan deleted"));

    wk_cmd(dir)
        .args(["plans", "load", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No saved plan {plan_id}")));
}

#[test]
fn test_cli_blank_plan_name_warns() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    wk_cmd(dir)
        .args(["plans", "save", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a plan name"));

    assert!(run_ok(dir, &["plans", "list"]).contains("No saved plans."));
}

#[test]
fn test_cli_event_edit_updates_copies() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    run_ok(dir, &["save", "1"]);
    run_ok(dir, &["plan", "add", "1", "saturday"]);

    wk_cmd(dir)
        .args(["event", "edit", "1", "--title", "Dawn Hike", "--rating", "4.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated \"Dawn Hike\" in 2 place(s)"));

    let saved = run_ok(dir, &["saved"]);
    assert!(saved.contains("### Dawn Hike (`1`)"));
    assert!(saved.contains("- Rating: 4.1/5"));
    assert!(run_ok(dir, &["plan", "show"]).contains("**Dawn Hike**"));
}

#[test]
fn test_cli_event_edit_without_copies_warns() {
    let temp_dir = create_cli_test_environment();

    wk_cmd(temp_dir.path())
        .args(["event", "edit", "3", "--title", "Modern Art"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to update"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let temp_dir = create_cli_test_environment();
    let catalog_path = temp_dir.path().join("catalog.json");
    let catalog = serde_json::json!([{
        "id": "zoo",
        "title": "City Zoo",
        "description": "Animals from every continent",
        "location": "North Park",
        "duration": "3 hours",
        "rating": 4.3,
        "image": "",
        "category": "Family",
        "timeSlot": "morning"
    }]);
    std::fs::write(&catalog_path, catalog.to_string()).expect("Failed to write catalog");

    wk_cmd(temp_dir.path())
        .arg("--catalog-file")
        .arg(&catalog_path)
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Events (1)"))
        .stdout(predicate::str::contains("City Zoo"))
        .stdout(predicate::str::contains("Pottery Workshop").not());
}

#[test]
fn test_cli_missing_catalog_file_fails() {
    let temp_dir = create_cli_test_environment();

    wk_cmd(temp_dir.path())
        .args(["--catalog-file", "/nonexistent/catalog.json", "catalog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_cli_event_edit_clears_classifier() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    run_ok(dir, &["save", "7"]);
    assert!(run_ok(dir, &["saved"]).contains("- Tags:"));

    wk_cmd(dir)
        .args([
            "event",
            "edit",
            "7",
            "--clear-vibe",
            "--clear-time-slot",
            "--clear-difficulty",
            "--clear-cost",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated \"Pottery Workshop\" in 1 place(s)"));

    assert!(!run_ok(dir, &["saved"]).contains("- Tags:"));
}

#[test]
fn test_cli_event_edit_rejects_set_and_clear_together() {
    let temp_dir = create_cli_test_environment();

    wk_cmd(temp_dir.path())
        .args(["event", "edit", "7", "--cost", "free", "--clear-cost"])
        .assert()
        .failure();
}
