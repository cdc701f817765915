//! CLI integration tests for folio commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Base url used by the sample catalog.
const BASE: &str = "https://books.example/library/";

/// A small two-volume catalog with one entry lacking a url.
const CATALOG: &str = r#"[
  {"url": "vol1/", "title": "Volume 1", "children": [
    {"url": "vol1/ch1.html", "title": "Chapter 1"},
    {"url": "vol1/ch2.html#top", "title": "Chapter 2", "pages": 12}
  ]},
  {"title": "Untitled draft"},
  {"url": "vol2/", "title": "Volume 2"}
]"#;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a folio command with HOME isolated and logging left at defaults.
fn folio(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("HOME", home).env_remove("FOLIO_LOG");
    cmd.current_dir(home);
    cmd
}

/// Writes the sample catalog and a root config pointing at it.
fn setup_catalog(dir: &Path) {
    fs::write(dir.join("catalog.json"), CATALOG).unwrap();
    fs::write(
        dir.join(".folio.toml"),
        format!("root = true\n\n[catalog]\npath = \"catalog.json\"\nbase = \"{BASE}\"\n"),
    )
    .unwrap();
}

/// Parses stdout of a successful command as JSON.
fn stdout_json(cmd: &mut Command) -> Value {
    let assert = cmd.assert().success();
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();

        folio(dir.path())
            .current_dir(&project)
            .arg("init")
            .assert()
            .success();

        let contents = fs::read_to_string(project.join(".folio.toml")).unwrap();
        assert!(contents.contains("# [catalog]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".folio.toml"), "existing").unwrap();

        folio(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        fs::write(dir.path().join(".folio.toml"), "old content").unwrap();

        folio(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".folio.toml")).unwrap();
        assert!(contents.contains("# [catalog]"));
    }

    #[test]
    fn works_with_broken_config() {
        let dir = temp_dir();
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(dir.path().join(".folio.toml"), "[catalog\n").unwrap();

        folio(dir.path())
            .current_dir(&project)
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration written:"));
    }
}

mod ls {
    use super::*;

    #[test]
    fn lists_documents_in_depth_first_order() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        let assert = folio(dir.path()).arg("ls").assert().success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

        let order: Vec<usize> = ["Volume 1", "Chapter 1", "Chapter 2", "Volume 2"]
            .iter()
            .map(|title| stdout.find(title).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{stdout}");
        assert!(!stdout.contains("Untitled draft"));
    }

    #[test]
    fn warns_about_entries_without_url() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .arg("ls")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "skipping catalog entry without a url",
            ));
    }

    #[test]
    fn debug_log_names_catalog_and_base() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .env("FOLIO_LOG", "folio=debug")
            .arg("ls")
            .assert()
            .success()
            .stderr(predicate::str::contains("loading catalog"))
            .stderr(predicate::str::contains("catalog.json"))
            .stderr(predicate::str::contains(BASE));
    }

    #[test]
    fn log_env_silences_warnings() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .env("FOLIO_LOG", "error")
            .arg("ls")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn json_output() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        let docs = stdout_json(folio(dir.path()).args(["ls", "--json"]));
        let docs = docs.as_array().unwrap();

        assert_eq!(docs.len(), 4);
        assert_eq!(docs[0]["url"], format!("{BASE}vol1/"));
        assert_eq!(docs[2]["url"], format!("{BASE}vol1/ch2.html"));
        assert_eq!(docs[2]["position"], 2);
        assert_eq!(docs[2]["depth"], 1);
        assert_eq!(docs[2]["meta"]["url"], "vol1/ch2.html#top");
        assert_eq!(docs[3]["depth"], 0);
    }

    #[test]
    fn long_shows_summary() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .args(["ls", "--long"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Distinct urls"))
            .stdout(predicate::str::contains("pages"));
    }

    #[test]
    fn fails_without_catalog() {
        let dir = temp_dir();

        folio(dir.path())
            .arg("ls")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no catalog configured"));
    }

    #[test]
    fn catalog_flag_defaults_base_to_catalog_directory() {
        let dir = temp_dir();
        let books = dir.path().join("books");
        fs::create_dir(&books).unwrap();
        fs::write(books.join("catalog.json"), r#"[{"url": "intro.html"}]"#).unwrap();

        let docs = stdout_json(folio(dir.path()).args([
            "--catalog",
            "books/catalog.json",
            "ls",
            "--json",
        ]));
        let url = docs[0]["url"].as_str().unwrap();
        assert!(url.starts_with("file://"), "{url}");
        assert!(url.ends_with("/books/intro.html"), "{url}");
    }

    #[test]
    fn base_flag_overrides_config() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        let docs = stdout_json(folio(dir.path()).args([
            "ls",
            "--json",
            "--base",
            "https://mirror.example/",
        ]));
        assert_eq!(docs[0]["url"], "https://mirror.example/vol1/");
    }

    #[test]
    fn malformed_catalog_lists_nothing() {
        let dir = temp_dir();
        setup_catalog(dir.path());
        fs::write(dir.path().join("catalog.json"), "[{\"url\": ").unwrap();

        folio(dir.path())
            .arg("ls")
            .assert()
            .success()
            .stdout(predicate::str::contains("No documents"))
            .stderr(predicate::str::contains("malformed catalog"));
    }
}

mod at {
    use super::*;

    #[test]
    fn shows_document_with_breadcrumb() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .args(["at", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chapter 2"))
            .stdout(predicate::str::contains("Volume 1"))
            .stdout(predicate::str::contains(format!("{BASE}vol1/ch2.html")));
    }

    #[test]
    fn json_output() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        let doc = stdout_json(folio(dir.path()).args(["at", "1", "--json"]));
        assert_eq!(doc["position"], 1);
        assert_eq!(doc["meta"]["title"], "Chapter 1");
        assert_eq!(doc["ancestors"][0], format!("{BASE}vol1/"));
    }

    #[test]
    fn fails_when_out_of_range() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .args(["at", "4"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no document at position 4"));
    }
}

mod get {
    use super::*;

    #[test]
    fn resolves_relative_url_and_ignores_fragment() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .args(["get", "vol1/ch2.html#section-3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chapter 2"))
            .stdout(predicate::str::contains("Volume 1"));
    }

    #[test]
    fn absolute_url() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        let out = stdout_json(folio(dir.path()).args([
            "get",
            &format!("{BASE}vol2/"),
            "--json",
        ]));
        assert_eq!(out["positions"], serde_json::json!([3]));
        assert_eq!(out["matches"][0]["meta"]["title"], "Volume 2");
    }

    #[test]
    fn returns_every_duplicate() {
        let dir = temp_dir();
        setup_catalog(dir.path());
        fs::write(
            dir.path().join("catalog.json"),
            r#"[{"url": "a", "title": "First"}, {"url": "b"}, {"url": "a#x", "title": "Second"}]"#,
        )
        .unwrap();

        let out = stdout_json(folio(dir.path()).args(["get", "a", "--json"]));
        assert_eq!(out["positions"], serde_json::json!([0, 2]));
        let titles: Vec<&str> = out["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["meta"]["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn fails_when_missing() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .args(["get", "missing-url"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }
}

mod position {
    use super::*;

    #[test]
    fn prints_position() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .args(["position", "vol2/"])
            .assert()
            .success()
            .stdout("3\n");
    }

    #[test]
    fn last_duplicate_wins() {
        let dir = temp_dir();
        setup_catalog(dir.path());
        fs::write(
            dir.path().join("catalog.json"),
            r#"[{"url": "a"}, {"url": "b", "children": [{"url": "a"}]}, {"url": "c"}]"#,
        )
        .unwrap();

        folio(dir.path())
            .args(["position", "a"])
            .assert()
            .success()
            .stdout("2\n");
    }

    #[test]
    fn fails_when_missing() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .args(["position", "nowhere.html"])
            .assert()
            .failure();
    }
}

mod status {
    use super::*;

    #[test]
    fn succeeds_without_config() {
        let dir = temp_dir();

        folio(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("(none defined)"));
    }

    #[test]
    fn reports_counts_and_duplicates() {
        let dir = temp_dir();
        setup_catalog(dir.path());
        fs::write(
            dir.path().join("catalog.json"),
            r#"[{"url": "a"}, {"url": "b", "children": [{"url": "a"}]}]"#,
        )
        .unwrap();

        folio(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("3 total, 2 top level, 2 distinct urls"))
            .stdout(predicate::str::contains(format!("{BASE}a")));
    }

    #[test]
    fn fails_on_invalid_toml() {
        let dir = temp_dir();
        fs::write(dir.path().join(".folio.toml"), "[catalog\n").unwrap();

        folio(dir.path())
            .arg("status")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod check {
    use super::*;

    #[test]
    fn valid_catalog_passes() {
        let dir = temp_dir();
        fs::write(dir.path().join("catalog.json"), r#"[{"url": "a"}]"#).unwrap();
        fs::write(
            dir.path().join(".folio.toml"),
            format!("root = true\n[catalog]\npath = \"catalog.json\"\nbase = \"{BASE}\"\n"),
        )
        .unwrap();

        folio(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn counts_skipped_entries() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("1 of 5 catalog entries were not loaded"));
    }

    #[test]
    fn reports_invalid_json() {
        let dir = temp_dir();
        setup_catalog(dir.path());
        fs::write(dir.path().join("catalog.json"), "{not json").unwrap();

        folio(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("not valid JSON"));
    }

    #[test]
    fn reports_wrong_shape() {
        let dir = temp_dir();
        setup_catalog(dir.path());
        fs::write(dir.path().join("catalog.json"), r#"{"url": "a"}"#).unwrap();

        folio(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("cannot be loaded"));
    }

    #[test]
    fn reports_missing_catalog_and_bad_level() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".folio.toml"),
            "root = true\n[catalog]\npath = \"gone.json\"\n[log]\nlevel = \"folio=loudest\"\n",
        )
        .unwrap();

        folio(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("catalog path does not exist"))
            .stdout(predicate::str::contains("not a valid filter"));
    }

    #[test]
    fn catalog_flag_replaces_missing_config() {
        let dir = temp_dir();
        fs::write(dir.path().join("catalog.json"), r#"[{"url": "a"}]"#).unwrap();

        folio(dir.path())
            .args(["--catalog", "catalog.json", "check"])
            .assert()
            .success();
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_effective_settings() {
        let dir = temp_dir();
        setup_catalog(dir.path());

        folio(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("[catalog]"))
            .stdout(predicate::str::contains(format!("base = \"{BASE}\"")))
            .stdout(predicate::str::contains("level = \"warn\""));
    }
}
