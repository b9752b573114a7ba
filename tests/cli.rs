//! End-to-end tests for the `jdk_home` and `create_r8lib` binaries.

use assert_cmd::Command;
use predicates::prelude::*;

fn jdk_home() -> Command {
    let mut cmd = Command::cargo_bin("jdk_home").unwrap();
    cmd.env_remove("JAVA_HOME").env_remove("R8_THIRD_PARTY");
    cmd
}

fn create_r8lib() -> Command {
    let mut cmd = Command::cargo_bin("create_r8lib").unwrap();
    cmd.env_remove("JAVA_HOME")
        .env_remove("R8_THIRD_PARTY")
        .env_remove("R8_WITH_DEPS_JAR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn jdk_home_prints_bundled_layout() {
    jdk_home()
        .args(["--platform", "linux", "--generation", "9", "--third-party", "/x"])
        .assert()
        .success()
        .stdout("/x/openjdk/openjdk-9.0.4/linux\n");
}

#[test]
fn jdk_home_defaults_to_jdk11() {
    jdk_home()
        .args(["--platform", "macos", "--third-party", "/x"])
        .assert()
        .success()
        .stdout("/x/openjdk/jdk-11/osx/Contents/Home\n");
}

#[test]
fn jdk_home_falls_back_to_java_home() {
    jdk_home()
        .args(["--platform", "other"])
        .env("JAVA_HOME", "/fake/java/home")
        .assert()
        .success()
        .stdout("/fake/java/home\n");
}

#[test]
fn jdk_home_fails_without_java_home() {
    jdk_home()
        .args(["--platform", "other", "--generation", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JAVA_HOME"));
}

#[test]
fn create_r8lib_requires_input_and_output() {
    create_r8lib()
        .args(["--r8jar", "r8.jar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn create_r8lib_help_lists_repeatable_options() {
    create_r8lib()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--pg-conf").and(predicate::str::contains("--lib")));
}

#[test]
fn create_r8lib_fails_when_java_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    create_r8lib()
        .args(["--r8jar", "/tmp/app.jar", "--output", "/tmp/out.jar"])
        .arg("--third-party")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[cfg(target_os = "linux")]
mod fake_jdk {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Stands in for JDK 11's `java`: answers `--version` like a release R8
    /// (or with `$FAKE_R8_VERSION`) and records the arguments of any other run.
    const FAKE_JAVA: &str = r#"#!/bin/sh
for last; do :; done
if [ "$last" = "--version" ]; then
  echo "${FAKE_R8_VERSION:-R8 1.2.3 (build abcdef)}"
  exit 0
fi
echo "$@" > "$(dirname "$0")/shrink-args"
exit "${FAKE_R8_EXIT:-0}"
"#;

    fn install_fake_java(third_party: &Path) -> PathBuf {
        let bin = third_party.join("openjdk/jdk-11/linux/bin");
        fs::create_dir_all(&bin).unwrap();
        let java = bin.join("java");
        fs::write(&java, FAKE_JAVA).unwrap();
        fs::set_permissions(&java, fs::Permissions::from_mode(0o755)).unwrap();
        bin
    }

    #[test]
    fn shrink_command_is_echoed_and_run() {
        let dir = tempfile::tempdir().unwrap();
        let bin = install_fake_java(dir.path());

        create_r8lib()
            .args([
                "--r8jar", "/tmp/app.jar", "--output", "/tmp/out.jar",
                "--pg-conf", "A", "--pg-conf", "B", "--lib", "L1",
            ])
            .arg("--third-party")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "--output /tmp/out.jar --pg-map-output /tmp/out.jar.map",
            ));

        let recorded = fs::read_to_string(bin.join("shrink-args")).unwrap();
        assert!(recorded.starts_with("-Xmx8g -ea -cp build/libs/r8_with_deps.jar"));
        assert!(recorded.contains("--map-id-template 1.2.3"));
        assert!(recorded.contains("--source-file-template R8_%MAP_ID_%MAP_HASH"));
        assert!(recorded.trim_end().ends_with("--pg-conf A --pg-conf B --lib L1"));
    }

    /// Runs `git` in `dir` and returns its trimmed stdout.
    fn git(dir: &Path, args: &[&str]) -> String {
        let output = std::process::Command::new("git")
            .current_dir(dir)
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .args([
                "-c", "user.name=r8lib",
                "-c", "user.email=r8lib@example.com",
                "-c", "commit.gpgsign=false",
            ])
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    #[test]
    fn engineering_build_uses_checkout_head() {
        if which::which("git").is_err() {
            eprintln!("git not installed, skipping");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let bin = install_fake_java(dir.path());

        let checkout = dir.path().join("checkout");
        fs::create_dir(&checkout).unwrap();
        git(&checkout, &["init", "--quiet"]);
        git(&checkout, &["commit", "--quiet", "--allow-empty", "-m", "initial"]);
        let head = git(&checkout, &["rev-parse", "HEAD"]);

        create_r8lib()
            .args(["--r8jar", "/tmp/app.jar", "--output", "/tmp/out.jar"])
            .arg("--third-party")
            .arg(dir.path())
            .arg("--checkout")
            .arg(&checkout)
            .env("FAKE_R8_VERSION", "R8 main (build engineering)")
            .assert()
            .success();

        let recorded = fs::read_to_string(bin.join("shrink-args")).unwrap();
        assert!(
            recorded.contains(&format!("--map-id-template {} ", head)),
            "{recorded}"
        );
    }

    #[test]
    fn failing_shrink_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        install_fake_java(dir.path());

        create_r8lib()
            .args(["--r8jar", "/tmp/app.jar", "--output", "/tmp/out.jar"])
            .arg("--third-party")
            .arg(dir.path())
            .env("FAKE_R8_EXIT", "3")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("exit code 3"));
    }
}
