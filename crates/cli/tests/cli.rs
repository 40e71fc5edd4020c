use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("plantarium")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("seed"))
        .stdout(predicate::str::contains("get"));
}

#[test]
fn seed_then_get_roundtrips_through_sqlite() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("plants.db");

    Command::cargo_bin("plantarium")
        .unwrap()
        .args(["seed", "--db-path"])
        .arg(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("seeded 8 plants"));

    Command::cargo_bin("plantarium")
        .unwrap()
        .args(["get", "MONSTERA", "--db-path"])
        .arg(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"MONSTERA\""))
        .stdout(predicate::str::contains("Araceae"));
}

#[test]
fn get_missing_plant_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("plants.db");

    Command::cargo_bin("plantarium")
        .unwrap()
        .args(["get", "ORCHID", "--db-path"])
        .arg(&db_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("plant not found: ORCHID"));
}
