//! Plain-text report renderer.
//!
//! One line per finding, no colors, no header. Empty input renders to an
//! empty string.

use crate::error::Result;
use crate::finding::AnalysisResult;
use crate::output::OutputReport;
use std::fmt::Write;

/// Plain-text report format.
///
/// Registered under the name `"TXT"` with extension `"txt"`.
pub struct TxtReport;

impl OutputReport for TxtReport {
    fn name(&self) -> &'static str {
        "TXT"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, analysis: &AnalysisResult) -> Result<String> {
        let mut out = String::new();
        for finding in analysis.findings() {
            // Write into a String cannot fail; discard the fmt::Result.
            let _ = writeln!(
                out,
                "{} - {} at {}:{}:{}",
                finding.id,
                finding.message_or_description(),
                finding.location.file,
                finding.location.source.line,
                finding.location.source.column,
            );
        }
        Ok(out)
    }
}
