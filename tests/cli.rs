use assert_cmd::Command;
use predicates::str::contains;

fn health_check() -> Command {
    Command::cargo_bin("health-check").unwrap()
}

#[test]
fn health_check_accepts_ready_cluster() {
    health_check()
        .write_stdin(
            r#"{"applications": {"app1": {"units": {"app1/0": {
                "workload-status": {"current": "active"},
                "juju-status": {"current": "idle"}}}}}}"#,
        )
        .assert()
        .success()
        .stdout("");
}

#[test]
fn health_check_rejects_busy_unit() {
    health_check()
        .write_stdin(
            r#"{"applications": {"app1": {"units": {"app1/0": {
                "workload-status": {"current": "active"},
                "juju-status": {"current": "executing"}}}}}}"#,
        )
        .assert()
        .code(1);
}

#[test]
fn health_check_rejects_garbage() {
    health_check().write_stdin("not json").assert().code(1).stdout("");
    health_check().write_stdin("").assert().code(1);
    health_check().write_stdin(r#"{"applications": {}}"#).assert().code(1);
}

#[cfg(unix)]
mod preflight {
    use super::*;
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn fake_tool(dir: &TempDir, name: &str, body: &str) {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn validate(dir: &TempDir) -> Command {
        let mut cmd = Command::cargo_bin("validate-deployment").unwrap();
        cmd.env("PATH", dir.path()).env_remove("PREFLIGHT_FORCE_JUJU").arg("--no-color");
        cmd
    }

    const JUJU: &str = r#"case "$1" in
  version) echo "3.6.0-ubuntu-amd64" ;;
  whoami) echo "Controller: localhost" ;;
esac"#;

    #[test]
    fn all_tools_present() {
        let dir = TempDir::new().unwrap();
        fake_tool(&dir, "ansible", "exit 0");
        fake_tool(&dir, "lxd", "exit 0");
        fake_tool(&dir, "juju", JUJU);

        validate(&dir)
            .assert()
            .success()
            .stdout(contains("[PASS] Juju version is 3.6.0 (>= 3.x)."))
            .stdout(contains("All essential pre-flight checks passed."));
    }

    #[test]
    fn missing_juju_fails() {
        let dir = TempDir::new().unwrap();
        fake_tool(&dir, "ansible", "exit 0");
        fake_tool(&dir, "lxd", "exit 0");

        validate(&dir)
            .assert()
            .code(1)
            .stdout(contains("[FAIL] Tool 'juju' is installed."))
            .stdout(contains("One or more critical pre-flight checks failed."))
            .stdout(contains("Juju version").not());
    }

    #[test]
    fn forced_juju_checks_run_when_tools_missing() {
        let dir = TempDir::new().unwrap();
        fake_tool(&dir, "juju", JUJU);

        validate(&dir)
            .arg("juju")
            .assert()
            .code(1)
            .stdout(contains("[FAIL] Tool 'ansible' is installed."))
            .stdout(contains("[PASS] Juju version is 3.6.0 (>= 3.x)."))
            .stdout(contains("[PASS] Logged into a Juju controller."));
    }

    #[test]
    fn unknown_flag_exits_with_failure() {
        let dir = TempDir::new().unwrap();

        validate(&dir)
            .args(["--verbose", "juju"])
            .assert()
            .code(1)
            .stderr(contains("--verbose"));
    }

    #[test]
    fn zero_timeout_exits_with_failure() {
        let dir = TempDir::new().unwrap();

        validate(&dir).args(["--timeout-secs", "0"]).assert().code(1);
    }

    #[test]
    fn help_exits_cleanly() {
        let dir = TempDir::new().unwrap();

        validate(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(contains("--timeout-secs"));
    }

    #[test]
    fn slow_juju_times_out() {
        let dir = TempDir::new().unwrap();
        fake_tool(&dir, "ansible", "exit 0");
        fake_tool(&dir, "lxd", "exit 0");
        fake_tool(&dir, "juju", "exec /bin/sleep 10");

        validate(&dir)
            .args(["--timeout-secs", "1"])
            .assert()
            .code(1)
            .stdout(contains("'juju version' timed out after 1s."));
    }
}
