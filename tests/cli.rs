//! CLI integration tests for rollcall admin commands.
//!
//! Each test uses an isolated temp directory for the database, ensuring tests
//! can run in parallel safely.

#![allow(deprecated)] // Command::cargo_bin deprecation only affects custom build dirs

use std::path::Path;

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;
use rollcall::store::{SqliteStore, Store};

struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    fn data_dir_str(&self) -> String {
        self.data_dir().to_string_lossy().to_string()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rollcall").expect("failed to find binary");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    fn init(&self, extra: &[&str]) -> assert_cmd::assert::Assert {
        self.cmd()
            .args([
                "admin",
                "init",
                "--data-dir",
                &self.data_dir_str(),
                "--non-interactive",
            ])
            .args(extra)
            .assert()
    }

    fn store(&self) -> SqliteStore {
        SqliteStore::new(self.data_dir().join("rollcall.db")).expect("open store")
    }
}

#[test]
fn test_init_writes_admin_token() {
    let ctx = TestContext::new();

    ctx.init(&[])
        .success()
        .stdout(predicate::str::contains("Admin token"));

    let token = std::fs::read_to_string(ctx.data_dir().join(".admin_token")).unwrap();
    assert!(token.starts_with("rollcall_"));
    assert!(ctx.store().has_admin_token().unwrap());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(ctx.data_dir().join(".admin_token"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn test_init_twice_fails() {
    let ctx = TestContext::new();

    ctx.init(&[]).success();
    ctx.init(&[])
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_first_user() {
    let ctx = TestContext::new();

    ctx.init(&["--username", "alice"])
        .success()
        .stdout(predicate::str::contains("Created user 'alice'"));

    let user = ctx.store().get_user_by_username("alice").unwrap().unwrap();
    assert_eq!(ctx.store().list_user_tokens(&user.id).unwrap().len(), 1);
}

#[test]
fn test_serve_requires_init() {
    let ctx = TestContext::new();

    ctx.cmd()
        .args(["serve", "--data-dir", &ctx.data_dir_str(), "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_serve_rejects_bad_config() {
    let ctx = TestContext::new();
    let config = ctx.data_dir().join("rollcall.toml");
    std::fs::write(&config, "port = \"eighty\"\n").unwrap();

    ctx.cmd()
        .args(["serve", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
