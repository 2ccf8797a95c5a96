use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{HERE, init_db, init_db_with_data, mapty, setup_test_db, stored_workouts};

#[test]
fn test_add_running_then_list() {
    let db_path = setup_test_db("add_running_list");
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "--here",
            HERE,
            "add",
            "running",
            "--distance",
            "5",
            "--duration",
            "25",
            "--cadence",
            "178",
            "--at",
            "51.5,-0.12",
        ])
        .assert()
        .success()
        .stdout(contains("5.0 min/km"))
        .stdout(contains("Running on"));

    mapty()
        .args(["--db", &db_path, "--here", HERE, "list"])
        .assert()
        .success()
        .stdout(contains("Running on"))
        .stdout(contains("178 spm"));

    let stored = stored_workouts(&db_path);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].coords.lat, 51.5);
    assert_eq!(stored[0].coords.lng, -0.12);
    assert_eq!(stored[0].metric(), (5.0, "min/km"));
}

#[test]
fn test_add_cycling_with_negative_elevation() {
    let db_path = setup_test_db("add_cycling_negative");
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "--here",
            HERE,
            "add",
            "c",
            "--distance",
            "30",
            "--duration",
            "90",
            "--elevation",
            "-40",
        ])
        .assert()
        .success()
        .stdout(contains("20.0 km/h"))
        .stdout(contains("-40 m"));

    assert_eq!(stored_workouts(&db_path).len(), 1);
}

#[test]
fn test_invalid_input_is_rejected_and_not_stored() {
    let db_path = setup_test_db("invalid_input");
    init_db_with_data(&db_path);

    for args in [
        vec!["running", "--distance", "-5", "--duration", "25", "--cadence", "178"],
        vec!["running", "--distance", "5", "--duration", "25", "--cadence", "0"],
        vec!["running", "--distance", "5", "--duration", "25"],
        vec!["cycling", "--distance", "0", "--duration", "25", "--elevation", "10"],
    ] {
        mapty()
            .args(["--db", &db_path, "--here", HERE, "add"])
            .args(&args)
            .assert()
            .failure()
            .stderr(contains("positive numbers"));
    }

    assert_eq!(stored_workouts(&db_path).len(), 2);
}

#[test]
fn test_unknown_kind_fails() {
    let db_path = setup_test_db("unknown_kind");
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "--here",
            HERE,
            "add",
            "swimming",
            "--distance",
            "1",
            "--duration",
            "30",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid workout type"));
}

#[test]
fn test_add_without_position_fails() {
    let db_path = setup_test_db("add_no_position");
    init_db(&db_path);

    mapty()
        .args([
            "--db",
            &db_path,
            "add",
            "running",
            "--distance",
            "5",
            "--duration",
            "25",
            "--cadence",
            "170",
            "--at",
            "10,10",
        ])
        .assert()
        .failure()
        .stderr(contains("Map is not available"));

    assert!(stored_workouts(&db_path).is_empty());
}

#[test]
fn test_list_without_position_still_shows_history() {
    let db_path = setup_test_db("list_no_position");
    init_db_with_data(&db_path);

    mapty()
        .args(["--db", &db_path, "list", "--markers"])
        .assert()
        .success()
        .stdout(contains("Unable to load map"))
        .stdout(contains("Running on"))
        .stdout(contains("Cycling on"))
        .stdout(contains("📍").not());
}

#[test]
fn test_list_markers_and_table() {
    let db_path = setup_test_db("list_markers_table");
    init_db_with_data(&db_path);

    mapty()
        .args(["--db", &db_path, "--here", HERE, "list", "--markers"])
        .assert()
        .success()
        .stdout(contains("Map centered at"))
        .stdout(contains("📍 🚴 Cycling on"));

    mapty()
        .args(["--db", &db_path, "--here", HERE, "list", "--table"])
        .assert()
        .success()
        .stdout(contains("METRIC"))
        .stdout(contains("running"))
        .stdout(contains("cycling"));
}

#[test]
fn test_select_known_and_unknown_id() {
    let db_path = setup_test_db("select_ids");
    init_db_with_data(&db_path);

    let id = stored_workouts(&db_path)[1].id.clone();

    mapty()
        .args(["--db", &db_path, "--here", HERE, "select", &id])
        .assert()
        .success()
        .stdout(contains("Map centered on Cycling on"))
        .stdout(contains("45.46000, 9.19000"));

    mapty()
        .args(["--db", &db_path, "--here", HERE, "select", "0000000000"])
        .assert()
        .success()
        .stdout(contains("No workout with id 0000000000"));
}

#[test]
fn test_reset_clears_storage() {
    let db_path = setup_test_db("reset_all");
    init_db_with_data(&db_path);

    mapty()
        .args(["--db", &db_path, "--here", HERE, "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 workouts removed"));

    assert!(stored_workouts(&db_path).is_empty());

    mapty()
        .args(["--db", &db_path, "--here", HERE, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts logged yet"));
}

#[test]
fn test_corrupted_storage_is_empty_history() {
    use mapty::db::{SqliteStorage, Storage};

    let db_path = setup_test_db("corrupted_storage");
    init_db(&db_path);
    {
        let mut storage = SqliteStorage::open(&db_path).unwrap();
        storage.set_item("workouts", "definitely not json").unwrap();
    }

    mapty()
        .args(["--db", &db_path, "--here", HERE, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts logged yet"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_db_with_data(&db_path);

    mapty()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Running on"));
}
