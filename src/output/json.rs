//! JSON report renderer.
//!
//! Produces a pretty-printed JSON snapshot of an analysis result: tool name,
//! a per-group summary, and the flattened finding list. Unlike the SARIF
//! report this is a house format intended for scripting, not for exchange
//! with external dashboards.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::finding::{AnalysisResult, Finding};
use crate::output::OutputReport;

/// Machine-readable JSON report format.
///
/// Registered under the name `"JSON"` with extension `"json"`.
pub struct JsonReport {
    tool_name: String,
}

impl JsonReport {
    pub fn new(config: &ReportConfig) -> Self {
        JsonReport {
            tool_name: config.tool.name.clone(),
        }
    }
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    tool: &'a str,
    summary: Summary<'a>,
    findings: Vec<&'a Finding>,
}

#[derive(serde::Serialize)]
struct Summary<'a> {
    total_findings: usize,
    groups: Vec<GroupCount<'a>>,
}

#[derive(serde::Serialize)]
struct GroupCount<'a> {
    key: &'a str,
    findings: usize,
}

impl OutputReport for JsonReport {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, analysis: &AnalysisResult) -> Result<String> {
        let output = JsonOutput {
            tool: &self.tool_name,
            summary: Summary {
                total_findings: analysis.total_findings(),
                groups: analysis
                    .groups()
                    .map(|(key, findings)| GroupCount {
                        key,
                        findings: findings.len(),
                    })
                    .collect(),
            },
            findings: analysis.findings().collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
