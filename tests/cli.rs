//! Startup validation tests — no network I/O.
//!
//! Every case here must fail before the server binds, so no listener or
//! skin API is ever involved.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("skinface");
    cmd.env("SKINFACE_CONFIG", "/nonexistent/skinface/config.toml")
        .env_remove("SKINFACE_UPSTREAM_URL")
        .env_remove("SKINFACE_REPLAY")
        .env_remove("SKINFACE_REC");
    cmd
}

#[test]
fn zero_scale_exits_with_error() {
    cmd()
        .args(["--scale", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported scale 0"));
}

#[test]
fn oversized_scale_exits_with_error() {
    cmd()
        .args(["--scale", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported scale 1000"));
}

#[test]
fn invalid_upstream_exits_with_error() {
    cmd()
        .args(["--upstream", "ftp://skins.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported upstream URL"));
}

#[test]
fn upstream_env_is_validated() {
    cmd()
        .env("SKINFACE_UPSTREAM_URL", "ftp://skins.example")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported upstream URL 'ftp://skins.example'"));
}

#[test]
fn upstream_env_overrides_config_file() {
    let path = std::env::temp_dir().join("skinface_cli_ftp_upstream.toml");
    std::fs::write(&path, "[upstream]\nbase_url = \"ftp://file.example\"\n").unwrap();

    // Upstream is checked before bind, so reaching the bind error means
    // the file's ftp URL was replaced by the env var.
    cmd()
        .env("SKINFACE_UPSTREAM_URL", "http://127.0.0.1:9")
        .args(["--config", path.to_str().unwrap(), "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bind address"))
        .stderr(predicate::str::contains("Unsupported upstream URL").not());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn config_file_upstream_is_validated() {
    let path = std::env::temp_dir().join("skinface_cli_ftp_upstream_only.toml");
    std::fs::write(&path, "[upstream]\nbase_url = \"ftp://file.example\"\n").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap(), "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported upstream URL 'ftp://file.example'"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_bind_exits_with_error() {
    cmd()
        .args(["--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bind address"));
}

#[test]
fn unparsable_config_exits_with_error() {
    let path = std::env::temp_dir().join("skinface_cli_bad_config.toml");
    std::fs::write(&path, "[render\nscale = ").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn config_file_scale_is_validated() {
    let path = std::env::temp_dir().join("skinface_cli_zero_scale.toml");
    std::fs::write(&path, "[render]\nscale = 0\n").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported scale 0"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_cassette_exits_with_error() {
    cmd()
        .env("SKINFACE_REPLAY", "/nonexistent/skin_source.cassette.yaml")
        .args(["--bind", "127.0.0.1:0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load cassette"));
}
