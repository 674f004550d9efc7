//! Configuration loading and management.
//!
//! Provides the TOML-based configuration for report rendering: the tool name
//! stamped into SARIF output and per-format on/off toggles.
//!
//! # Configuration file
//!
//! The default configuration file is `finding-reports.toml` in the current
//! working directory. Use [`ReportConfig::load`] to read it:
//!
//! ```rust,no_run
//! use finding_reports::config::ReportConfig;
//!
//! let config = ReportConfig::load(None).expect("failed to load config");
//! assert!(config.is_report_enabled("SARIF"));
//! ```
//!
//! # File format
//!
//! ```toml
//! [tool]
//! name = "MyAnalyzer"
//!
//! [reports]
//! txt = false   # skip the plain-text report
//! ```

use crate::error::{ReportError, Result};
use std::path::Path;

/// Main configuration for report rendering.
///
/// Loaded from a TOML file (typically `finding-reports.toml`). All fields
/// carry sensible defaults so the config file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Identity of the analysis tool embedding this crate.
    pub tool: ToolConfig,
    /// Per-format on/off toggles.
    pub reports: ReportsConfig,
}

/// Identity of the embedding analysis tool.
///
/// The name ends up in the SARIF `tool.driver.name` field, so downstream
/// dashboards attribute results to the host tool rather than to this
/// rendering library.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Display name of the analysis tool (e.g., `"Detekt"`).
    pub name: String,
}

/// Per-format on/off toggles.
///
/// Every report format defaults to **enabled**. Set a field to `false` in
/// the TOML config file to leave that format out of
/// [`all_reports`](crate::output::all_reports).
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// SARIF 2.1.0 document for CI/CD integration.
    pub sarif: bool,
    /// Machine-readable JSON findings dump.
    pub json: bool,
    /// Plain-text findings listing.
    pub txt: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            name: "finding-reports".to_string(),
        }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        ReportsConfig {
            sarif: true,
            json: true,
            txt: true,
        }
    }
}

impl ReportConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `finding-reports.toml` in the current directory.
    /// 3. If that file does not exist either, return [`ReportConfig::default()`].
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use finding_reports::config::ReportConfig;
    ///
    /// // Explicit path
    /// let cfg = ReportConfig::load(Some(Path::new("my-config.toml")))?;
    ///
    /// // Auto-detect or default
    /// let cfg = ReportConfig::load(None)?;
    /// # Ok::<(), finding_reports::error::ReportError>(())
    /// ```
    pub fn load(path: Option<&Path>) -> Result<ReportConfig> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(ReportError::ConfigNotFound(p.display().to_string()));
            }
        } else {
            let default_path = Path::new("finding-reports.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                let config: ReportConfig = toml::from_str(&content)?;
                Ok(config)
            }
            None => Ok(ReportConfig::default()),
        }
    }

    /// Returns `true` if the named report format is enabled.
    ///
    /// Names match [`OutputReport::name`](crate::output::OutputReport::name)
    /// values. Unknown names are considered enabled (returns `true`).
    ///
    /// # Examples
    ///
    /// ```
    /// use finding_reports::config::ReportConfig;
    ///
    /// let config = ReportConfig::default();
    /// assert!(config.is_report_enabled("SARIF"));
    /// assert!(config.is_report_enabled("SomeCustomFormat"));
    /// ```
    pub fn is_report_enabled(&self, name: &str) -> bool {
        match name {
            "SARIF" => self.reports.sarif,
            "JSON" => self.reports.json,
            "TXT" => self.reports.txt,
            _ => true,
        }
    }
}
