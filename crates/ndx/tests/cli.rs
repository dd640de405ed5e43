//! CLI integration tests for ndx commands.
//!
//! These tests focus on exit codes and behavioral verification against a
//! small fixture collection, not on exact output formatting.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use predicates::prelude::*;

/// A fixture collection mixing categories, field shapes, and key variants.
const FIXTURE: &str = r#"[
    {"diagnosis": "Acute Pain", "definition": "Unpleasant sensory and emotional experience.",
     "defining_characteristics": ["guarding behavior", "grimacing"], "page_num": 214},
    {"diagnosis": "Chronic Pain", "definition": "Pain persisting longer than three months.",
     "page_num": 218},
    {"diagnosis": "Risk for Falls", "risk_factors": ["unsteady gait", "pain"], "page_num": 219},
    {"diagnosis": "Risk for Infection", "risk_factors": ["invasive procedure"], "page_num": 404},
    {"diagnosis": "Readiness for Enhanced Coping", "page_num": 330},
    {"diagnosis": "Impaired Gas Exchange", "definition": "Excess or deficit in oxygenation.",
     "page_num": 120},
    {"diagnosis": "Nausea", "definition": "A subjective unpleasant sensation.", "page_num": 150},
    {"diagnosis": "Anxiety", "related_factors": "stressors", "page_num": 100},
    {"diagnosis": "Fatigue", "page_num": 130},
    {"diagnosis": "Hypothermia", "page_num": 140}
]"#;

/// Creates an isolated home directory with a project subdirectory holding
/// the fixture collection.
fn setup() -> (tempfile::TempDir, PathBuf) {
    let home = tempfile::tempdir().unwrap();
    let project = home.path().join("project");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("diagnoses.json"), FIXTURE).unwrap();
    (home, project)
}

/// Helper to get an ndx command running in `dir` with HOME isolated.
fn ndx_in(home: &Path, dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ndx").unwrap();
    cmd.env("HOME", home).current_dir(dir);
    cmd
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Runs a search with `--json` and parses the output.
fn search_json(home: &Path, dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = ndx_in(home, dir)
        .arg("search")
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success(), "search failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Extracts result titles from parsed search JSON.
fn result_titles(json: &serde_json::Value) -> Vec<String> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["record"]["title"].as_str().unwrap().to_string())
        .collect()
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let (home, project) = setup();

        ndx_in(home.path(), &project)
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));

        let config_path = project.join(".ndx.toml");
        assert!(config_path.exists());

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# [settings]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let (home, project) = setup();
        fs::write(project.join(".ndx.toml"), "existing").unwrap();

        ndx_in(home.path(), &project)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let (home, project) = setup();
        fs::write(project.join(".ndx.toml"), "old content").unwrap();

        ndx_in(home.path(), &project)
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(project.join(".ndx.toml")).unwrap();
        assert!(contents.contains("# [settings]"));
    }

    #[test]
    fn global_flag_writes_home_config() {
        let (home, project) = setup();

        ndx_in(home.path(), &project)
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".ndx.toml").exists());
    }
}

mod search {
    use super::*;

    #[test]
    fn empty_query_browses_in_title_order() {
        let (home, project) = setup();
        let json = search_json(home.path(), &project, &[]);

        assert_eq!(json["total_matches"], 10);
        let titles = result_titles(&json);
        assert_eq!(titles[0], "Acute Pain");
        assert_eq!(titles[1], "Anxiety");

        let mut sorted = titles.clone();
        sorted.sort_by_key(|t| t.to_lowercase());
        assert_eq!(titles, sorted);

        // Browsing carries no match annotations
        assert!(json["results"][0].get("annotation").is_none());
    }

    #[test]
    fn query_ranks_title_matches_first() {
        let (home, project) = setup();
        let json = search_json(home.path(), &project, &["pain"]);

        assert_eq!(json["total_matches"], 3);
        let titles = result_titles(&json);
        // Title matches outrank the list-field match
        assert!(titles[..2].contains(&"Acute Pain".to_string()));
        assert!(titles[..2].contains(&"Chronic Pain".to_string()));
        assert_eq!(titles[2], "Risk for Falls");

        // Scores are attached and descending
        let results = json["results"].as_array().unwrap();
        let scores: Vec<f64> = results
            .iter()
            .map(|hit| hit["annotation"]["score"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn multi_term_query_is_conjunctive() {
        let (home, project) = setup();
        let json = search_json(home.path(), &project, &["acute", "pain"]);

        // "pain" alone appears in three records, but only one field
        // contains both terms
        assert_eq!(json["total_matches"], 1);
        assert_eq!(result_titles(&json), ["Acute Pain"]);
    }

    #[test]
    fn unmatched_query_is_empty_success() {
        let (home, project) = setup();
        let json = search_json(home.path(), &project, &["xylophone"]);
        assert_eq!(json["total_matches"], 0);

        ndx_in(home.path(), &project)
            .args(["search", "xylophone"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No matching diagnoses"));
    }

    #[test]
    fn category_filter_narrows_results() {
        let (home, project) = setup();
        let json = search_json(home.path(), &project, &["-c", "risk"]);

        assert_eq!(json["total_matches"], 2);
        assert_eq!(
            result_titles(&json),
            ["Risk for Falls", "Risk for Infection"]
        );

        let json = search_json(home.path(), &project, &["-c", "readiness", "pain"]);
        assert_eq!(json["total_matches"], 0);
    }

    #[test]
    fn pagination_slices_the_result_list() {
        let (home, project) = setup();
        let json = search_json(home.path(), &project, &["-s", "3", "-p", "2"]);

        assert_eq!(json["window"]["total_pages"], 4);
        assert_eq!(json["window"]["current_page"], 2);
        assert_eq!(json["window"]["start_index"], 3);
        assert_eq!(json["window"]["first_visible"], 4);
        assert_eq!(
            result_titles(&json),
            ["Fatigue", "Hypothermia", "Impaired Gas Exchange"]
        );
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let (home, project) = setup();
        let json = search_json(home.path(), &project, &["-s", "3", "-p", "99"]);

        assert_eq!(json["window"]["current_page"], 4);
        assert_eq!(result_titles(&json).len(), 1);
    }

    #[test]
    fn page_bar_shows_window_with_ellipsis() {
        let (home, project) = setup();
        let output = ndx_in(home.path(), &project)
            .args(["search", "-s", "1", "-p", "5", "--list"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        // 10 pages of one record each: centered window plus boundary pages
        assert!(stdout.contains("[5]"), "missing current page: {stdout}");
        assert!(stdout.contains('…'), "missing ellipsis: {stdout}");
        assert!(stdout.contains("10"), "missing last page: {stdout}");
    }

    #[test]
    fn matches_are_highlighted_unless_disabled() {
        let (home, project) = setup();

        let output = ndx_in(home.path(), &project)
            .args(["search", "pain"])
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\u{1b}[7m"), "no highlight marker: {stdout}");
        assert!(strip_ansi(&stdout).contains("Acute Pain"));

        let output = ndx_in(home.path(), &project)
            .args(["search", "pain", "--no-highlight", "--list"])
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(!stdout.contains("\u{1b}[7m"));
    }

    #[test]
    fn list_mode_prints_one_line_per_hit() {
        let (home, project) = setup();
        let output = ndx_in(home.path(), &project)
            .args(["search", "pain", "--list", "--no-highlight"])
            .output()
            .unwrap();

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        let hit_lines: Vec<&str> = stdout
            .lines()
            .filter(|line| line.contains("(actual") || line.contains("(risk"))
            .collect();
        assert_eq!(hit_lines.len(), 3, "unexpected output: {stdout}");
    }

    #[test]
    fn data_flag_overrides_discovery() {
        let (home, project) = setup();
        let elsewhere = home.path().join("elsewhere.json");
        fs::write(&elsewhere, r#"[{"title": "Wandering"}]"#).unwrap();

        let json = search_json(
            home.path(),
            &project,
            &["--data", elsewhere.to_str().unwrap()],
        );
        assert_eq!(json["total_matches"], 1);
        assert_eq!(result_titles(&json), ["Wandering"]);
    }

    #[test]
    fn missing_collection_is_an_error() {
        let (home, _) = setup();
        let empty = home.path().join("empty");
        fs::create_dir_all(&empty).unwrap();

        ndx_in(home.path(), &empty)
            .args(["search", "pain"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no record collection"));
    }

    #[test]
    fn config_file_sets_data_and_page_size() {
        let (home, project) = setup();
        let nested = project.join("notes");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            project.join(".ndx.toml"),
            "[settings]\ndata = \"diagnoses.json\"\npage_size = 4\n",
        )
        .unwrap();

        // Run from a nested directory: discovery walks up to the config,
        // and the data path resolves relative to the config file
        let json = search_json(home.path(), &nested, &[]);
        assert_eq!(json["total_matches"], 10);
        assert_eq!(json["window"]["total_pages"], 3);
        assert_eq!(result_titles(&json).len(), 4);
    }
}

mod get {
    use super::*;

    #[test]
    fn shows_full_record_sections() {
        let (home, project) = setup();
        let output = ndx_in(home.path(), &project)
            .args(["get", "acute pain"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Acute Pain"));
        assert!(stdout.contains("p. 214"));
        assert!(stdout.contains("Characteristics"));
        assert!(stdout.contains("guarding behavior"));
    }

    #[test]
    fn json_round_trips_the_record() {
        let (home, project) = setup();
        let output = ndx_in(home.path(), &project)
            .args(["get", "Risk for Falls", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(record["title"], "Risk for Falls");
        assert_eq!(record["page"], 219);
        assert_eq!(record["risk_factors"][0], "unsteady gait");
    }

    #[test]
    fn unknown_title_fails() {
        let (home, project) = setup();
        ndx_in(home.path(), &project)
            .args(["get", "No Such Diagnosis"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no diagnosis titled"));
    }
}

mod ls {
    use super::*;

    #[test]
    fn lists_all_with_category_counts() {
        let (home, project) = setup();
        let output = ndx_in(home.path(), &project).arg("ls").output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Title"));
        assert!(stdout.contains("Risk for Infection"));
        assert!(stdout.contains("2 risk, 1 readiness, 7 actual"));
    }

    #[test]
    fn category_flag_filters_rows() {
        let (home, project) = setup();
        let output = ndx_in(home.path(), &project)
            .args(["ls", "-c", "risk", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let titles: Vec<&str> = entries
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["Risk for Falls", "Risk for Infection"]);
    }
}

mod status {
    use super::*;

    #[test]
    fn reports_missing_configuration() {
        let (home, project) = setup();
        let output = ndx_in(home.path(), &project).arg("status").output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("No configuration files found"));
        // The fixture collection is still discovered by filename
        assert!(stdout.contains("10 diagnoses"));
    }

    #[test]
    fn shows_effective_settings_and_warnings() {
        let (home, project) = setup();
        fs::write(
            project.join(".ndx.toml"),
            "[settings]\nviewport = \"enormous\"\n",
        )
        .unwrap();

        let output = ndx_in(home.path(), &project).arg("status").output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains(".ndx.toml"));
        assert!(stdout.contains("page_size = 12"));
        assert!(stdout.contains("unknown viewport 'enormous'"));
    }
}
