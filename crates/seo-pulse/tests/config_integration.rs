//! Configuration integration tests.
//!
//! Discovery, format parsing and precedence are checked through
//! `info --json`; scoring settings are checked through the commands they
//! change.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert!(json["config"]["min_score"].is_null());
}

#[test]
fn discovers_dotfile_and_regular_names() {
    for name in [".seo-pulse.toml", "seo-pulse.toml"] {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), r#"log_level = "warn""#).unwrap();

        let json = info_json(tmp.path());

        assert_eq!(json["config"]["log_level"], "warn", "{name}");
        let reported = json["config"]["config_file"].as_str().unwrap();
        assert!(reported.ends_with(name), "should report {name}: {reported}");
    }
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("site").join("pages");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".seo-pulse.toml"), "min_score = 70\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["min_score"], 70);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo-pulse.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("seo-pulse.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(tmp.path().join(".seo-pulse.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());

    fs::write(repo.join(".seo-pulse.toml"), r#"log_level = "debug""#).unwrap();
    let json = info_json(&src);
    assert_eq!(json["config"]["log_level"], "debug");
}

// =============================================================================
// Formats and precedence
// =============================================================================

#[test]
fn parses_every_supported_format() {
    let cases = [
        (".seo-pulse.toml", "min_score = 61\n"),
        (".seo-pulse.yaml", "min_score: 62\n"),
        (".seo-pulse.yml", "min_score: 63\n"),
        (".seo-pulse.json", r#"{"min_score": 64}"#),
    ];
    for (expected, (name, contents)) in (61..).zip(cases) {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), contents).unwrap();

        let json = info_json(tmp.path());
        assert_eq!(json["config"]["min_score"], expected, "{name}");
    }
}

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("blog");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".seo-pulse.toml"), "min_score = 50\n").unwrap();
    fs::write(sub_dir.join(".seo-pulse.toml"), "min_score = 80\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["min_score"], 80);
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo-pulse.toml"), r#"log_level = "debug""#).unwrap();
    let explicit = tmp.path().join("ci.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["log_level"], "error");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("ci.toml"), "{reported}");
}

#[test]
fn env_overrides_nested_scoring_keys() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-pulse.toml"),
        "[scoring]\nsimilarity_threshold = 0.9\n",
    )
    .unwrap();

    let output = cmd()
        .env("SEO_PULSE_SCORING__SIMILARITY_THRESHOLD", "0.5")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["similarity_threshold"], 0.5);
}

// =============================================================================
// Scoring settings reach the commands
// =============================================================================

#[test]
fn config_min_score_gates_health() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".seo-pulse.toml"), "min_score = 60\n").unwrap();
    fs::write(tmp.path().join("page.json"), r#"{ "title": "Başlık" }"#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "health", "page.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 60"));

    // The flag wins over the config.
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "health",
            "page.json",
            "--min-score",
            "0",
        ])
        .assert()
        .success();
}

#[test]
fn custom_stopwords_change_keyword_extraction() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-pulse.yaml"),
        "scoring:\n  stopwords: [Bisiklet]\n",
    )
    .unwrap();
    fs::write(tmp.path().join("copy.txt"), "bisiklet bisiklet kask ve").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["stopwords"]["custom"], 1);

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "keywords", "copy.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("kask\n"));
}

#[test]
fn config_threshold_is_the_duplicate_default() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-pulse.toml"),
        "[scoring]\nsimilarity_threshold = 0.2\n",
    )
    .unwrap();
    fs::write(tmp.path().join("a.txt"), "kış lastiği rehberi burada").unwrap();
    fs::write(tmp.path().join("b.txt"), "yaz lastiği rehberi orada").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "duplicate",
            "a.txt",
            "--against",
            "b.txt",
        ])
        .assert()
        .failure();
}

#[test]
fn disabled_input_limit_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-pulse.toml"),
        "disable_input_limit = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn malformed_config_files_fail() {
    let cases = [
        (".seo-pulse.toml", "this is not valid toml [[["),
        (".seo-pulse.yaml", "invalid:\n  yaml\n content:\n[broken"),
        (".seo-pulse.json", "{not valid json}"),
    ];
    for (name, contents) in cases {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), contents).unwrap();

        cmd()
            .args(["-C", tmp.path().to_str().unwrap(), "info"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("configuration"));
    }
}

#[test]
fn unordered_scoring_bands_fail_with_field_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-pulse.toml"),
        "[scoring.title]\nideal_min = 70\nideal_max = 50\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scoring.title"));
}

#[test]
fn out_of_range_threshold_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-pulse.toml"),
        "[scoring]\nsimilarity_threshold = 0.0\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("similarity_threshold"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".seo-pulse.toml"),
        "log_level = \"info\"\nunknown_field = \"ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}
