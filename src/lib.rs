//! # finding-reports
//!
//! Report rendering for static-analysis findings.
//!
//! `finding-reports` takes the in-memory result of a static-analysis run —
//! findings grouped under arbitrary keys — and renders it as a complete
//! report document: [SARIF] 2.1.0 for CI/CD and code-review integrations,
//! plain JSON for automation, or plain text for quick inspection. The crate
//! performs no analysis and no I/O of its own; the embedding tool computes
//! the findings and writes the rendered string wherever it wants.
//!
//! ## Quick start
//!
//! ```rust
//! use finding_reports::config::ReportConfig;
//! use finding_reports::finding::{AnalysisResult, Finding, Location, SourcePosition};
//! use finding_reports::output::{OutputReport, SarifReport};
//!
//! let mut analysis = AnalysisResult::new();
//! analysis.add_findings("style", vec![Finding {
//!     id: "UnusedVariable".to_string(),
//!     message: Some("x is never used".to_string()),
//!     description: "Reports variables that are never read".to_string(),
//!     location: Location {
//!         file: "/src/Main.kt".to_string(),
//!         source: SourcePosition { line: 10, column: 5 },
//!     },
//! }]);
//!
//! let config = ReportConfig::default();
//! let report = SarifReport::new(&config);
//! let sarif = report.render(&analysis).expect("rendering failed");
//! println!("{sarif}");
//! ```
//!
//! ## Architecture
//!
//! 1. **[`finding`]** — core data types ([`finding::Finding`],
//!    [`finding::AnalysisResult`]).
//! 2. **[`config`]** — load report configuration (tool name, enabled
//!    formats) from TOML files.
//! 3. **[`output`]** — the [`output::OutputReport`] trait and its built-in
//!    implementations (SARIF, JSON, TXT).
//! 4. **[`error`]** — crate-wide error type.
//!
//! ## Report formats
//!
//! | Report | Name | Extension | Use case |
//! |--------|------|-----------|----------|
//! | [`output::SarifReport`] | `SARIF` | `json` | CI/CD tool integration |
//! | [`output::JsonReport`]  | `JSON`  | `json` | Automation / scripting  |
//! | [`output::TxtReport`]   | `TXT`   | `txt`  | Quick human inspection  |
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod error;
pub mod finding;
pub mod output;
