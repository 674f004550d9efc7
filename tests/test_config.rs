use finding_reports::config::ReportConfig;
use finding_reports::error::ReportError;
use std::io::Write;
use std::path::Path;

#[test]
fn default_config_enables_everything() {
    let config = ReportConfig::default();
    assert_eq!(config.tool.name, "finding-reports");
    assert!(config.is_report_enabled("SARIF"));
    assert!(config.is_report_enabled("JSON"));
    assert!(config.is_report_enabled("TXT"));
}

#[test]
fn unknown_report_names_are_enabled() {
    let config = ReportConfig::default();
    assert!(config.is_report_enabled("SomeCustomFormat"));
}

#[test]
fn load_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[tool]\nname = \"Detekt\"\n\n[reports]\ntxt = false\n"
    )
    .unwrap();

    let config = ReportConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.tool.name, "Detekt");
    assert!(config.is_report_enabled("SARIF"));
    assert!(!config.is_report_enabled("TXT"));
}

#[test]
fn partial_config_keeps_defaults_for_missing_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[reports]\njson = false\n").unwrap();

    let config = ReportConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.tool.name, "finding-reports");
    assert!(!config.is_report_enabled("JSON"));
    assert!(config.is_report_enabled("SARIF"));
}

#[test]
fn missing_explicit_path_is_an_error() {
    let result = ReportConfig::load(Some(Path::new("/nonexistent/finding-reports.toml")));
    assert!(matches!(result, Err(ReportError::ConfigNotFound(_))));
}

#[test]
fn invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not valid toml [[[").unwrap();

    let result = ReportConfig::load(Some(file.path()));
    assert!(matches!(result, Err(ReportError::Toml(_))));
}
