//! Core data types for analysis findings.
//!
//! A [`Finding`] is one detected issue with a rule id, a message, and a
//! source location. An [`AnalysisResult`] groups findings under arbitrary
//! keys (rule set, file, whatever the upstream engine uses) while preserving
//! insertion order. Both are plain value types: the analysis engine creates
//! them, the [`output`](crate::output) renderers only read them.

/// One issue detected by the upstream analysis engine.
///
/// Findings are immutable value records. Renderers never create or mutate
/// them; missing required fields (`id`, `location`) are a contract violation
/// of the producing engine, not something this crate repairs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    /// Stable rule identifier (e.g., `"UnusedVariable"`).
    pub id: String,
    /// Primary message for this specific occurrence, when the engine
    /// produced one.
    pub message: Option<String>,
    /// Generic description of the rule, used as the fallback text when no
    /// primary message is present.
    pub description: String,
    /// Where the issue was detected.
    pub location: Location,
}

/// Source location of a [`Finding`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Filesystem path of the source file containing the issue.
    pub file: String,
    /// Position within the file.
    pub source: SourcePosition,
}

/// 1-based line/column position within a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl Finding {
    /// Returns the primary message if present, otherwise the rule
    /// description.
    ///
    /// Exactly one of the two is ever emitted by a renderer; the description
    /// is never used when a primary message exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use finding_reports::finding::{Finding, Location, SourcePosition};
    ///
    /// let mut finding = Finding {
    ///     id: "UnusedVariable".to_string(),
    ///     message: Some("x is never used".to_string()),
    ///     description: "Reports variables that are never read".to_string(),
    ///     location: Location {
    ///         file: "/src/Main.kt".to_string(),
    ///         source: SourcePosition { line: 10, column: 5 },
    ///     },
    /// };
    /// assert_eq!(finding.message_or_description(), "x is never used");
    ///
    /// finding.message = None;
    /// assert_eq!(
    ///     finding.message_or_description(),
    ///     "Reports variables that are never read"
    /// );
    /// ```
    pub fn message_or_description(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.description)
    }
}

/// The complete output of one analysis run: findings grouped under arbitrary
/// keys.
///
/// Group keys carry no meaning for rendering — renderers flatten all groups
/// into one sequence — but iteration order is part of the contract: groups
/// iterate in insertion order and findings keep their within-group order, so
/// rendered output is deterministic for a given input.
///
/// # Examples
///
/// ```
/// use finding_reports::finding::AnalysisResult;
///
/// let analysis = AnalysisResult::new();
/// assert!(analysis.is_empty());
/// assert_eq!(analysis.total_findings(), 0);
/// ```
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    groups: Vec<(String, Vec<Finding>)>,
}

impl AnalysisResult {
    /// Creates an empty analysis result.
    pub fn new() -> Self {
        AnalysisResult::default()
    }

    /// Appends findings under the given group key.
    ///
    /// When the key is already present the findings are appended to the
    /// existing group, keeping the mapping's one-entry-per-key semantics
    /// without disturbing group order.
    pub fn add_findings(&mut self, key: impl Into<String>, findings: Vec<Finding>) {
        let key = key.into();
        match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.extend(findings),
            None => self.groups.push((key, findings)),
        }
    }

    /// Iterates over `(key, findings)` groups in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.groups.iter().map(|(k, f)| (k.as_str(), f.as_slice()))
    }

    /// Iterates over all findings, flattened across groups.
    ///
    /// Order is (group insertion order, then within-group order). Renderers
    /// rely on this; no independent sort is applied anywhere.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.groups.iter().flat_map(|(_, findings)| findings)
    }

    /// Total number of findings across all groups.
    pub fn total_findings(&self) -> usize {
        self.groups.iter().map(|(_, f)| f.len()).sum()
    }

    /// Returns `true` when no group contains any finding.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|(_, f)| f.is_empty())
    }
}
