use finding_reports::config::ReportConfig;
use finding_reports::finding::{AnalysisResult, Finding, Location, SourcePosition};
use finding_reports::output::{all_reports, JsonReport, OutputReport, TxtReport};

fn sample_analysis() -> AnalysisResult {
    let mut analysis = AnalysisResult::new();
    analysis.add_findings(
        "style",
        vec![
            Finding {
                id: "UnusedVariable".to_string(),
                message: Some("x is never used".to_string()),
                description: "Reports variables that are never read".to_string(),
                location: Location {
                    file: "/src/Main.kt".to_string(),
                    source: SourcePosition { line: 10, column: 5 },
                },
            },
            Finding {
                id: "MagicNumber".to_string(),
                message: None,
                description: "Reports magic numbers".to_string(),
                location: Location {
                    file: "/src/Util.kt".to_string(),
                    source: SourcePosition { line: 3, column: 14 },
                },
            },
        ],
    );
    analysis
}

#[test]
fn registry_returns_all_formats_by_default() {
    let config = ReportConfig::default();
    let reports = all_reports(&config);

    let names: Vec<&str> = reports.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["SARIF", "JSON", "TXT"]);
}

#[test]
fn registry_honors_disabled_formats() {
    let mut config = ReportConfig::default();
    config.reports.txt = false;
    config.reports.json = false;

    let reports = all_reports(&config);
    let names: Vec<&str> = reports.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["SARIF"]);
}

#[test]
fn every_registered_report_renders_valid_output() {
    let analysis = sample_analysis();
    for report in all_reports(&ReportConfig::default()) {
        let rendered = report.render(&analysis).expect("render should not fail");
        assert!(
            !rendered.is_empty(),
            "{} produced empty output for a non-empty analysis",
            report.name()
        );
        assert!(!report.extension().starts_with('.'));
    }
}

#[test]
fn json_output_is_valid() {
    let mut config = ReportConfig::default();
    config.tool.name = "MyAnalyzer".to_string();

    let json = JsonReport::new(&config)
        .render(&sample_analysis())
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    assert_eq!(parsed["tool"], "MyAnalyzer");
    assert_eq!(parsed["summary"]["total_findings"], 2);
    assert_eq!(parsed["summary"]["groups"][0]["key"], "style");
    assert_eq!(parsed["summary"]["groups"][0]["findings"], 2);
    assert_eq!(parsed["findings"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["findings"][0]["id"], "UnusedVariable");
}

#[test]
fn txt_output_lists_one_line_per_finding() {
    let txt = TxtReport.render(&sample_analysis()).unwrap();

    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "UnusedVariable - x is never used at /src/Main.kt:10:5"
    );
    // Fallback text: the second finding has no primary message.
    assert_eq!(
        lines[1],
        "MagicNumber - Reports magic numbers at /src/Util.kt:3:14"
    );
}

#[test]
fn txt_output_is_empty_for_empty_analysis() {
    let txt = TxtReport.render(&AnalysisResult::new()).unwrap();
    assert!(txt.is_empty());
}
