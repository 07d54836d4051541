//! Loading configuration files and building registries from them

use camino::Utf8PathBuf;
use logattr::{Config, Error, ParsePolicy, Status};

const CONFIG: &str = r#"
history_limit = 3
relaxed_factor = 2.0
parse_policy = "abort"

[[attributes]]
name = "PNL"
kind = "numeric"
pattern = 'PNL\s*=\s*(?P<value>-?[0-9.]+)'
criticality = "critical"
trend_percent = 50.0

[[attributes]]
name = "RAM"
kind = "numeric"
pattern = 'RAM=(\d+)%'
criticality = "relaxed"
warning = 40.0
error = 45.0

[[attributes]]
name = "Sleep Time"
kind = "accumulator"
pattern = 'slept (\d+(?:\.\d+)?)s'
ignore_case = false
"#;

#[test]
fn test_load_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("attributes.toml")).unwrap();
    std::fs::write(&path, CONFIG).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.attributes.len(), 3);
    assert_eq!(config.history_limit(), Some(3));
    assert_eq!(config.parse_policy, ParsePolicy::Abort);
    assert_eq!(config.attributes[2].criticality, "CRITICAL");
}

#[test]
fn test_missing_file() {
    let err = Config::load(camino::Utf8Path::new("/nonexistent/attributes.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("reading configuration file"));
}

#[test]
fn test_configured_registry_behaves() {
    let config = Config::from_toml(CONFIG).unwrap();
    let mut registry = config.build_registry().unwrap();

    assert_eq!(registry.process_line("PNL = 100").get("PNL"), Some(Status::Ok));
    assert_eq!(registry.process_line("pnl = 120").get("PNL"), Some(Status::Ok));
    assert_eq!(registry.process_line("PNL = 200").get("PNL"), Some(Status::Warning));

    // relaxed: levels doubled to 80/90
    assert_eq!(registry.process_line("RAM=85%").get("RAM"), Some(Status::Warning));
    assert_eq!(registry.process_line("RAM=95%").get("RAM"), Some(Status::Error));

    let _ = registry.process_line("worker slept 1.5s");
    assert!(registry.process_line("worker SLEPT 9s").is_empty());
    let _ = registry.process_line("worker slept 2s");
    let sleep = registry.get("Sleep Time").unwrap().as_accumulator().unwrap();
    assert!((sleep.current().unwrap().data - 3.5).abs() < 1e-9);

    let pnl = registry.get("PNL").unwrap();
    assert_eq!(pnl.history_len(), 2);
}

#[test]
fn test_parse_policy_from_config() {
    let config = Config::from_toml(CONFIG).unwrap();
    let mut registry = config.build_registry().unwrap();
    let err = registry.process_lines(["PNL = 1", "PNL = 1.2.3"], config.parse_policy).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_save_default_round_trips() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("default.toml")).unwrap();
    Config::save_default(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.attributes, Config::default().attributes);
}

#[test]
fn test_complex_statistic_must_match_kind() {
    let text = "[[attributes]]\nname = 'A'\nkind = 'count'\npattern = 'A'\nstatistic = 'q3'\nerror = 1.0\n";
    let config = Config::from_toml(text).unwrap();
    assert!(matches!(config.build_registry().unwrap_err(), Error::Configuration(_)));
}
