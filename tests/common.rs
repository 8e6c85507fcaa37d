#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated HOME so tests never read or write the user's real config.
pub fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("rtreports_test_home");
    fs::create_dir_all(&path).ok();
    path
}

pub fn rtr() -> Command {
    let mut cmd = cargo_bin_cmd!("rtreports");
    cmd.env("HOME", test_home());
    cmd
}

/// Command with its own HOME, for tests that write a config file.
pub fn rtr_with_home(name: &str) -> (Command, PathBuf) {
    let mut home = env::temp_dir();
    home.push(format!("{}_rtreports_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(home.join(".rtreports")).ok();

    let mut cmd = cargo_bin_cmd!("rtreports");
    cmd.env("HOME", &home);
    (cmd, home)
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtreports.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtreports_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rtr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_hours(db_path: &str, user: &str, date: &str, hours: i32) {
    rtr()
        .args([
            "--db",
            db_path,
            "add",
            date,
            "--user",
            user,
            "--hours",
            &hours.to_string(),
        ])
        .assert()
        .success();
}

/// Initialize DB with a small dataset useful for many tests:
/// - alice 2025-09-01: 5+1+1 = 7h
/// - alice 2025-09-02: 1+6+1 = 8h
/// - alice 2025-09-03: 5+2+2 = 9h
/// - bob   2025-09-01: 8h
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for h in [5, 1, 1] {
        add_hours(db_path, "alice", "2025-09-01", h);
    }
    for h in [1, 6, 1] {
        add_hours(db_path, "alice", "2025-09-02", h);
    }
    for h in [5, 2, 2] {
        add_hours(db_path, "alice", "2025-09-03", h);
    }
    add_hours(db_path, "bob", "2025-09-01", 8);
}
