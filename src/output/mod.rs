//! Report rendering for analysis results.
//!
//! Every report format implements the [`OutputReport`] trait. Three formats
//! are built in:
//!
//! | Report | Name | Extension | Module | Use case |
//! |--------|------|-----------|--------|----------|
//! | [`SarifReport`] | `SARIF` | `json` | [`sarif`] | CI/CD tool integration |
//! | [`JsonReport`]  | `JSON`  | `json` | [`json`]  | Automation / scripting |
//! | [`TxtReport`]   | `TXT`   | `txt`  | [`txt`]   | Quick human inspection |
//!
//! Use [`all_reports`] to obtain the reports enabled by a
//! [`ReportConfig`](crate::config::ReportConfig); the host tool selects among
//! them by [`OutputReport::name`] and writes each rendered string to a file
//! carrying [`OutputReport::extension`].

pub mod json;
pub mod sarif;
pub mod txt;

pub use json::JsonReport;
pub use sarif::SarifReport;
pub use txt::TxtReport;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::finding::AnalysisResult;

/// A pluggable report format.
///
/// Implementers **must** be [`Send`] + [`Sync`] so that a host tool may
/// render several formats of the same [`AnalysisResult`] concurrently.
///
/// # Implementing a custom report
///
/// ```rust,ignore
/// use finding_reports::output::OutputReport;
///
/// pub struct MyReport;
///
/// impl OutputReport for MyReport {
///     fn name(&self) -> &'static str { "MY-FORMAT" }
///     fn extension(&self) -> &'static str { "myf" }
///     fn render(&self, analysis: &AnalysisResult) -> Result<String> {
///         // ... rendering logic ...
///         # todo!()
///     }
/// }
/// ```
pub trait OutputReport: Send + Sync {
    /// Returns the report's registration name (e.g., `"SARIF"`), used by the
    /// host for format selection.
    fn name(&self) -> &'static str;

    /// Returns the nominal file extension for the rendered document (e.g.,
    /// `"json"`), without a leading dot.
    fn extension(&self) -> &'static str;

    /// Renders the analysis result as a complete document.
    ///
    /// Pure transformation: no I/O, no logging, no mutation of the input.
    /// A fresh document is produced on every call.
    ///
    /// # Errors
    ///
    /// Only serialization failure, which is fatal and never retried.
    fn render(&self, analysis: &AnalysisResult) -> Result<String>;
}

/// Returns every report format enabled in `config`.
///
/// The returned order is the default registration order; the host tool does
/// not depend on this ordering because each report renders independently.
pub fn all_reports(config: &ReportConfig) -> Vec<Box<dyn OutputReport>> {
    let reports: Vec<Box<dyn OutputReport>> = vec![
        Box::new(SarifReport::new(config)),
        Box::new(JsonReport::new(config)),
        Box::new(TxtReport),
    ];

    reports
        .into_iter()
        .filter(|r| config.is_report_enabled(r.name()))
        .collect()
}
