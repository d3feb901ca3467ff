mod common;

use cybershield::config::Config;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn config_loads_from_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let toml_content = r#"
        [assistant]
        response_delay_ms = 250
        delay_jitter_ms = 50

        [analyzer]
        url_length_threshold = 40
        extra_shorteners = ["lnkd.in"]

        [quiz]
        pass_threshold = 70
    "#;
    fs::write(&config_path, toml_content).unwrap();

    let config = Config::from_file(&config_path).unwrap();

    assert_eq!(config.assistant.response_delay_ms, 250);
    assert_eq!(config.assistant.delay_jitter_ms, 50);
    assert_eq!(config.analyzer.url_length_threshold, 40);
    assert_eq!(config.analyzer.extra_shorteners, ["lnkd.in"]);
    assert_eq!(config.quiz.pass_threshold, 70);
}

#[test]
fn config_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[quiz]\npass_threshold = 50\n").unwrap();

    let config = Config::from_file(&config_path).unwrap();

    assert_eq!(config.quiz.pass_threshold, 50);
    assert_eq!(config.assistant, Config::default().assistant);
    assert_eq!(config.analyzer, Config::default().analyzer);
}

#[test]
fn config_uses_defaults_when_missing() {
    let config = Config::default();

    assert_eq!(config.assistant.response_delay_ms, 1500);
    assert_eq!(config.assistant.delay_jitter_ms, 0);
    assert_eq!(config.analyzer.simulated_delay_ms, 0);
    assert_eq!(config.analyzer.url_length_threshold, 100);
    assert_eq!(config.quiz.pass_threshold, 60);
}

#[test]
fn config_explicit_missing_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    assert!(Config::load(Some(&missing)).is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[quiz\npass_threshold = ").unwrap();
    assert!(Config::from_file(&config_path).is_err());
}

#[test]
fn config_toml_round_trips() {
    let config = Config::default();
    let toml = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&toml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn cli_config_init_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    common::cybershield_cmd()
        .args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let written = Config::from_file(&config_path).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn cli_config_show_prints_effective_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[assistant]\nresponse_delay_ms = 42\n").unwrap();

    common::cybershield_cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("response_delay_ms = 42"))
        .stdout(predicate::str::contains("pass_threshold = 60"));
}

#[test]
fn cli_broken_config_fails_commands_that_need_it() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "not = [valid").unwrap();

    common::cybershield_cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["analyze", "--text", "hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));

    // Commands with no config dependency still run.
    common::cybershield_cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["password", "x"])
        .assert()
        .success();
}

#[test]
fn cli_pass_threshold_changes_quiz_verdict() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[quiz]\npass_threshold = 70\n").unwrap();

    // 3 of 5 correct is 60%, below the configured threshold.
    common::cybershield_cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["quiz", "take", "phishing", "--answers", "2,2,3,1,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 60%"))
        .stdout(predicate::str::contains("Keep practicing"));
}

#[test]
fn cli_analyze_honours_simulated_delay() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[analyzer]\nsimulated_delay_ms = 20\n").unwrap();

    let start = std::time::Instant::now();
    common::cybershield_cmd()
        .arg("--config")
        .arg(&config_path)
        .args(["analyze", "--text", "a trojan"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("threat keyword: trojan"));
    assert!(start.elapsed() >= std::time::Duration::from_millis(20));
}
