//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool,
//! following behavior-driven testing principles.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Helper to create a command for the declscope CLI
fn declscope_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_declscope"))
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Writes a Latin-1 encoded source that is not valid UTF-8.
fn latin1_source(temp: &assert_fs::TempDir) -> PathBuf {
    let file = temp.child("latin1.cpp");
    file.write_binary(b"// caf\xe9\nclass X {};\n").unwrap();
    file.path().to_path_buf()
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        declscope_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        declscope_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod print_command {
    use super::*;

    #[test]
    fn prints_full_specialization() {
        declscope_cmd()
            .arg("print")
            .arg(fixtures_dir().join("specialization.cpp"))
            .assert()
            .success()
            .stdout("specialization\tY<int>\n");
    }

    #[test]
    fn prints_partial_specializations_and_calls() {
        declscope_cmd()
            .arg("print")
            .arg(fixtures_dir().join("clock.cpp"))
            .assert()
            .success()
            .stdout(
                "partial specialization\tClock<T, Tick>\n\
                 partial specialization\tClock<T, Tock>\n\
                 call expr\tCallExpr\n\
                 call expr\tCallExpr\n",
            );
    }

    #[test]
    fn reads_stdin_without_files() {
        declscope_cmd()
            .arg("print")
            .write_stdin("template <typename T> class Y {}; template <> class Y<char> {};")
            .assert()
            .success()
            .stdout("specialization\tY<char>\n");
    }

    #[test]
    fn filter_without_match_prints_nothing() {
        declscope_cmd()
            .arg("print")
            .arg("--filter")
            .arg("NoSuchName")
            .arg(fixtures_dir().join("specialization.cpp"))
            .arg(fixtures_dir().join("clock.cpp"))
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn filter_selects_subtree() {
        declscope_cmd()
            .args(["print", "--filter", "Clock<.*Tock>"])
            .arg(fixtures_dir().join("clock.cpp"))
            .assert()
            .success()
            .stdout("partial specialization\tClock<T, Tock>\n");
    }

    #[test]
    fn malformed_filter_is_fatal() {
        declscope_cmd()
            .args(["print", "--filter", "("])
            .arg(fixtures_dir().join("specialization.cpp"))
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("malformed filter expression: ("));
    }

    #[test]
    fn dump_calls_adds_subtree_lines() {
        declscope_cmd()
            .args(["print", "--dump-calls", "--filter", "^main$"])
            .arg(fixtures_dir().join("clock.cpp"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("call expr\tCallExpr\nCallExpr <"))
            .stdout(predicate::str::contains("CallExpr 'step'"));
    }

    #[test]
    fn parse_failure_exits_with_one_and_keeps_going() {
        declscope_cmd()
            .arg("print")
            .arg(fixtures_dir().join("broken.cpp"))
            .arg(fixtures_dir().join("specialization.cpp"))
            .assert()
            .code(1)
            .stdout("specialization\tY<int>\n")
            .stderr(predicate::str::contains("broken.cpp"));
    }

    #[test]
    fn non_utf8_file_exits_with_one_and_keeps_going() {
        let temp = assert_fs::TempDir::new().unwrap();

        declscope_cmd()
            .arg("print")
            .arg(latin1_source(&temp))
            .arg(fixtures_dir().join("specialization.cpp"))
            .assert()
            .code(1)
            .stdout("specialization\tY<int>\n")
            .stderr(predicate::str::contains("latin1.cpp"))
            .stderr(predicate::str::contains("not valid UTF-8"));
    }

    #[test]
    fn missing_file_is_fatal() {
        declscope_cmd()
            .arg("print")
            .arg("nonexistent_file.cpp")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read nonexistent_file.cpp"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn reports_ok_for_valid_source() {
        let path = fixtures_dir().join("clock.cpp");

        declscope_cmd()
            .arg("check")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("ok\t{}\n", path.display())));
    }

    #[test]
    fn reports_error_for_invalid_source() {
        declscope_cmd()
            .arg("check")
            .arg(fixtures_dir().join("specialization.cpp"))
            .arg(fixtures_dir().join("broken.cpp"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("ok\t"))
            .stdout(predicate::str::contains("error\t"))
            .stdout(predicate::str::contains("Invalid source"));
    }

    #[test]
    fn reports_error_for_non_utf8_source() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = latin1_source(&temp);
        let clock = fixtures_dir().join("clock.cpp");

        declscope_cmd()
            .arg("check")
            .arg(&path)
            .arg(&clock)
            .assert()
            .code(1)
            .stdout(predicate::str::starts_with(format!(
                "error\t{}\tParse error: Invalid source: not valid UTF-8 at byte 6\n",
                path.display()
            )))
            .stdout(predicate::str::ends_with(format!("ok\t{}\n", clock.display())));
    }

    #[test]
    fn checks_stdin_with_dash() {
        declscope_cmd()
            .args(["check", "-"])
            .write_stdin("int main() { return 0; }")
            .assert()
            .success()
            .stdout("ok\t<stdin>\n");
    }
}
