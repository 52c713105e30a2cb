#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli(board: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shiftbook-cli").unwrap();
    cmd.arg("--board").arg(board);
    cmd
}

#[test]
fn add_then_list_grouped_by_day() {
    let dir = tempdir().unwrap();
    let board = dir.path().join("board.json");

    cli(&board)
        .args([
            "add",
            "--area",
            "NYC",
            "--start",
            "2023-11-03T09:00:00Z",
            "--end",
            "2023-11-03T17:00:00Z",
        ])
        .assert()
        .success();

    cli(&board)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("November 3"))
        .stdout(predicate::str::contains("09:00 → 17:00 | NYC"));

    cli(&board)
        .args(["areas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NYC (1)"));
}

#[test]
fn fetch_book_and_cancel_roundtrip() {
    let dir = tempdir().unwrap();
    let board = dir.path().join("board.json");
    let shifts = dir.path().join("shifts.json");
    fs::write(
        &shifts,
        r#"[{"id": "s1", "area": "LA", "startTime": "2023-11-03T09:00:00Z", "endTime": "2023-11-03T17:00:00Z"}]"#,
    )
    .unwrap();

    cli(&board)
        .args(["fetch", "--from"])
        .arg(&shifts)
        .assert()
        .success();

    cli(&board)
        .args(["booked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Booked Shifts"));

    cli(&board)
        .args(["book", "--shift-id", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("booked s1"));

    cli(&board)
        .args(["booked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s1"))
        .stdout(predicate::str::contains("LA"));

    cli(&board)
        .args(["cancel", "--shift-id", "s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled s1"));

    cli(&board)
        .args(["booked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Booked Shifts"));
}

#[test]
fn cancel_unknown_shift_is_tolerated() {
    let dir = tempdir().unwrap();
    let board = dir.path().join("board.json");

    cli(&board)
        .args(["cancel", "--shift-id", "ghost"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown shift"));
}

#[test]
fn fetch_from_missing_directory_keeps_running() {
    let dir = tempdir().unwrap();
    let board = dir.path().join("board.json");

    cli(&board)
        .args(["fetch", "--from"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("no shifts available"));

    cli(&board).args(["list"]).assert().success();
}

#[test]
fn import_csv_then_export() {
    let dir = tempdir().unwrap();
    let board = dir.path().join("board.json");
    let csv = dir.path().join("shifts.csv");
    fs::write(
        &csv,
        "area,start,end,booked\nNYC,2023-11-03T09:00:00Z,2023-11-03T12:00:00Z,true\nLA,2023-11-03T09:00:00Z,2023-11-03T12:00:00Z,\n",
    )
    .unwrap();

    cli(&board)
        .args(["import", "--csv"])
        .arg(&csv)
        .assert()
        .success();

    let out_csv = dir.path().join("out.csv");
    cli(&board)
        .args(["export", "--out-csv"])
        .arg(&out_csv)
        .assert()
        .success();

    let exported = fs::read_to_string(&out_csv).unwrap();
    assert!(exported.starts_with("id,area,start,end,booked"));
    assert!(exported.contains("NYC"));
    assert!(exported.contains("true"));
}
