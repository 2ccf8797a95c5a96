#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mapty::db::{SqliteStorage, Storage};
use mapty::models::Workout;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HERE: &str = "51.5,-0.12";

pub fn mapty() -> Command {
    cargo_bin_cmd!("mapty")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mapty.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mapty_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the storage schema without touching the user config
pub fn init_db(db_path: &str) {
    mapty()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Log one running and one cycling workout
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    mapty()
        .args([
            "--db",
            db_path,
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
        ])
        .assert()
        .success();

    mapty()
        .args([
            "--db",
            db_path,
            "--here",
            HERE,
            "add",
            "cycling",
            "--distance",
            "30",
            "--duration",
            "90",
            "--elevation",
            "-40",
            "--at",
            "45.46,9.19",
        ])
        .assert()
        .success();
}

/// Read the persisted workout list straight from the storage file
pub fn stored_workouts(db_path: &str) -> Vec<Workout> {
    let storage = SqliteStorage::open(db_path).expect("open storage");
    match storage.get_item("workouts").expect("read storage") {
        Some(raw) => serde_json::from_str(&raw).expect("parse stored workouts"),
        None => Vec::new(),
    }
}
