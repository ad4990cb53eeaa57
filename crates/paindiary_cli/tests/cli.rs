use std::process::Command;

fn cli(db_path: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_paindiary_cli"))
        .args(args)
        .env("PAINDIARY_DB_PATH", db_path)
        .env_remove("PAINDIARY_LOG_DIR")
        .output()
        .expect("run paindiary_cli")
}

#[test]
fn add_then_list_shows_entry() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("diary.db");

    let added = cli(&db_path, &["add", "6"]);
    assert!(added.status.success(), "{added:?}");
    assert!(String::from_utf8_lossy(&added.stdout).contains("added level=6"));

    let listed = cli(&db_path, &["list"]);
    assert!(listed.status.success(), "{listed:?}");
    assert!(String::from_utf8_lossy(&listed.stdout).contains(" 6.0"));
}

#[test]
fn help_is_available_for_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli(&dir.path().join("diary.db"), &["add", "--help"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Pain level from 0 to 10"));
}

#[test]
fn stray_arguments_fail_without_touching_the_db() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("diary.db");

    let output = cli(&db_path, &["list", "--bogus"]);
    assert!(!output.status.success());
    assert!(!db_path.exists());
}
