use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{AS_OF, MIXED_RESUME_JSON, gi, no_config, temp_path, write_resume};

#[test]
fn test_analyze_json_output() {
    let resume = write_resume("cli_json", "json", MIXED_RESUME_JSON);
    let cfg = no_config("cli_json");

    let output = gi()
        .args([
            "--config", &cfg, "analyze", &resume, "--format", "json", "--as-of", AS_OF,
        ])
        .output()
        .expect("run gapinspect");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is a JSON report");
    assert_eq!(report["pct"], "75.2%");
    assert_eq!(report["duration"]["total"], 731);
    assert_eq!(report["duration"]["work"], 92);
    assert_eq!(report["duration"]["gaps"], 181);
    assert_eq!(report["gaps"][0]["start"], "2021-01-01");
    assert_eq!(report["gaps"][0]["end"], "2021-07-01");
    assert_eq!(report["overlaps"][0]["duration"], 92);
}

#[test]
fn test_analyze_table_output() {
    let resume = write_resume("cli_table", "json", MIXED_RESUME_JSON);
    let cfg = no_config("cli_table");

    gi()
        .args(["--config", &cfg, "analyze", &resume, "--as-of", AS_OF])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("2021-07-01"))
        .stdout(contains("Coverage:"))
        .stdout(contains("75.2%"));
}

#[test]
fn test_analyze_yaml_resume_to_yaml() {
    let yaml = r#"
name: Yaml Person
employment:
  history:
    - employer: A
      start: "2023-01"
      end: "2023-06"
    - employer: B
      start: "2023-04"
      end: "2023-09"
"#;
    let resume = write_resume("cli_yaml", "yaml", yaml);
    let cfg = no_config("cli_yaml");

    gi()
        .args([
            "--config", &cfg, "analyze", &resume, "--format", "yaml", "--as-of", AS_OF,
        ])
        .assert()
        .success()
        .stdout(contains("100.0%"))
        .stdout(contains("duration: 61"));
}

#[test]
fn test_analyze_empty_history() {
    let resume = write_resume("cli_empty", "json", r#"{ "name": "New Grad" }"#);
    let cfg = no_config("cli_empty");

    gi()
        .args(["--config", &cfg, "analyze", &resume, "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"pct\": \"0%\""))
        .stdout(contains("\"gaps\": []"));
}

#[test]
fn test_analyze_invalid_date_fails() {
    let resume = write_resume(
        "cli_bad_date",
        "json",
        r#"{ "employment": { "history": [ { "start": "last spring", "end": "2021-01" } ] } }"#,
    );
    let cfg = no_config("cli_bad_date");

    gi()
        .args(["--config", &cfg, "analyze", &resume, "--format", "json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid date format: last spring"))
        .stdout(contains("\"pct\"").not());
}

#[test]
fn test_analyze_unsupported_extension_fails() {
    let resume = write_resume("cli_txt", "txt", MIXED_RESUME_JSON);
    let cfg = no_config("cli_txt");

    gi()
        .args(["--config", &cfg, "analyze", &resume])
        .assert()
        .failure()
        .stderr(contains("Unsupported resume format"));
}

#[test]
fn test_analyze_invalid_as_of_fails() {
    let resume = write_resume("cli_bad_as_of", "json", MIXED_RESUME_JSON);
    let cfg = no_config("cli_bad_as_of");

    gi()
        .args(["--config", &cfg, "analyze", &resume, "--as-of", "tomorrow"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: tomorrow"));
}

#[test]
fn test_export_csv_file() {
    let resume = write_resume("cli_csv", "json", MIXED_RESUME_JSON);
    let cfg = no_config("cli_csv");
    let out = temp_path("cli_csv_out", "csv");

    gi()
        .args([
            "--config", &cfg, "analyze", &resume, "--format", "csv", "--file", &out, "--as-of",
            AS_OF,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("kind,start,end,duration_days"));
    assert!(content.contains("gap,2021-01-01,2021-07-01,181"));
    assert!(content.contains("overlap,2020-06-01,2020-09-01,92"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let resume = write_resume("cli_overwrite", "json", MIXED_RESUME_JSON);
    let cfg = no_config("cli_overwrite");
    let out = temp_path("cli_overwrite_out", "json");
    fs::write(&out, "keep me").expect("seed output file");

    gi()
        .args([
            "--config", &cfg, "analyze", &resume, "--format", "json", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    gi()
        .args([
            "--config", &cfg, "analyze", &resume, "--format", "json", "--file", &out, "--force",
            "--as-of", AS_OF,
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("\"pct\": \"75.2%\""));
}

#[test]
fn test_export_table_to_file_is_rejected() {
    let resume = write_resume("cli_table_file", "json", MIXED_RESUME_JSON);
    let cfg = no_config("cli_table_file");
    let out = temp_path("cli_table_file_out", "txt");

    gi()
        .args([
            "--config", &cfg, "analyze", &resume, "--format", "table", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: table"));
}

#[test]
fn test_init_and_config_print() {
    let cfg = no_config("cli_init");

    gi().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::read_to_string(&cfg).unwrap().contains("default_format: table"));

    gi()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_format: table"))
        .stdout(contains("date_format:"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = no_config("cli_init_test");

    gi()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();
    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_config_default_format_is_used() {
    let cfg = no_config("cli_cfg_format");
    fs::write(&cfg, "default_format: json\ncolor: false\n").expect("write config");
    let resume = write_resume("cli_cfg_format", "json", MIXED_RESUME_JSON);

    gi()
        .args(["--config", &cfg, "analyze", &resume, "--as-of", AS_OF])
        .assert()
        .success()
        .stdout(contains("\"pct\": \"75.2%\""));
}

#[test]
fn test_table_without_color_has_no_escape_codes() {
    let cfg = no_config("cli_no_color");
    fs::write(&cfg, "color: false\n").expect("write config");
    let resume = write_resume("cli_no_color", "json", MIXED_RESUME_JSON);

    gi()
        .args(["--config", &cfg, "analyze", &resume, "--as-of", AS_OF])
        .assert()
        .success()
        .stdout(contains("Coverage:"))
        .stdout(contains("75.2%"))
        .stdout(contains("\x1b[").not());
}

#[test]
fn test_config_with_unknown_format_fails() {
    let cfg = no_config("cli_cfg_bad_format");
    fs::write(&cfg, "default_format: xlsx\n").expect("write config");
    let resume = write_resume("cli_cfg_bad_format", "json", MIXED_RESUME_JSON);

    gi()
        .args(["--config", &cfg, "analyze", &resume])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: xlsx"));
}
