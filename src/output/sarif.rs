//! SARIF 2.1.0 report renderer.
//!
//! Flattens all finding groups into one result list and wraps it in the
//! SARIF envelope (`version`, `runs`, `tool.driver`). The emitted subset is
//! deliberately small: rule id, message text, and one physical location per
//! result. No fixes, code flows, related locations, or rule metadata.
//!
//! The document structs below mirror the exact shape consumers of this
//! report already parse. Note that `region` sits beside `physicalLocation`
//! inside each location object, and `artifactLocation.index` is always `0`.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::finding::AnalysisResult;
use crate::output::OutputReport;

/// SARIF 2.1.0 report format.
///
/// Registered under the name `"SARIF"` with extension `"json"`. The
/// `tool.driver.name` value comes from
/// [`ReportConfig::tool`](crate::config::ToolConfig), so any embedding
/// analyzer can stamp its own identity into the output.
pub struct SarifReport {
    tool_name: String,
}

impl SarifReport {
    /// Creates a SARIF report carrying the configured tool name.
    pub fn new(config: &ReportConfig) -> Self {
        SarifReport {
            tool_name: config.tool.name.clone(),
        }
    }
}

impl OutputReport for SarifReport {
    fn name(&self) -> &'static str {
        "SARIF"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    /// Renders the analysis result as a pretty-printed SARIF 2.1.0 document.
    ///
    /// Every finding produces exactly one `result` entry, in (group
    /// insertion order, within-group order). An empty analysis result yields
    /// a valid document with an empty `results` array.
    fn render(&self, analysis: &AnalysisResult) -> Result<String> {
        let results: Vec<SarifResult> = analysis
            .findings()
            .map(|finding| SarifResult {
                rule_id: &finding.id,
                message: Message {
                    text: finding.message_or_description(),
                },
                locations: vec![ResultLocation {
                    physical_location: PhysicalLocation {
                        artifact_location: ArtifactLocation {
                            uri: format!("file://{}", finding.location.file),
                            index: 0,
                        },
                    },
                    region: Region {
                        start_line: finding.location.source.line,
                        start_column: finding.location.source.column,
                    },
                }],
            })
            .collect();

        let document = SarifDocument {
            version: "2.1.0",
            runs: vec![Run {
                tool: Tool {
                    driver: Driver {
                        name: &self.tool_name,
                    },
                },
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[derive(serde::Serialize)]
struct SarifDocument<'a> {
    version: &'static str,
    runs: Vec<Run<'a>>,
}

#[derive(serde::Serialize)]
struct Run<'a> {
    tool: Tool<'a>,
    results: Vec<SarifResult<'a>>,
}

#[derive(serde::Serialize)]
struct Tool<'a> {
    driver: Driver<'a>,
}

#[derive(serde::Serialize)]
struct Driver<'a> {
    name: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult<'a> {
    rule_id: &'a str,
    message: Message<'a>,
    locations: Vec<ResultLocation>,
}

#[derive(serde::Serialize)]
struct Message<'a> {
    text: &'a str,
}

// region is a sibling of physicalLocation here, not nested inside it.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultLocation {
    physical_location: PhysicalLocation,
    region: Region,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
}

#[derive(serde::Serialize)]
struct ArtifactLocation {
    uri: String,
    index: u32,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
    start_column: usize,
}
