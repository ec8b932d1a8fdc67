use assert_cmd::Command;
use predicates::prelude::*;

// Helper function to set up a test Command instance
fn set_up_command() -> Command {
    let mut cmd = Command::cargo_bin("metajournal").unwrap();
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("METAJOURNAL_SAVE_PATH", "/tmp/test_metajournal");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = set_up_command();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("daily and weekly journal entries"))
        .stdout(predicate::str::contains("--log-format"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_cli_version() {
    let mut cmd = set_up_command();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_rejects_unknown_log_format() {
    let mut cmd = set_up_command();
    cmd.args(["--log-format", "xml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

#[test]
fn test_cli_rejects_unexpected_argument() {
    let mut cmd = set_up_command();
    cmd.arg("--retro");

    cmd.assert().failure();
}
