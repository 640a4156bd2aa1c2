//! Report generation for conformance results.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::verify::VerificationSummary;

/// A conformance report for one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Backend tested (host or native).
    pub backend: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Backend: {}\n", self.backend));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Status |\n");
        out.push_str("|------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("| {} | {} |\n", r.case_name, status));
        }

        if self.summary.failed > 0 {
            out.push_str("\n## Failures\n\n");
            for r in self.summary.failures() {
                let diagnostic = r.diagnostic.as_deref().unwrap_or("(no diagnostic)");
                out.push_str(&format!("- `{}`: {}\n", r.case_name, diagnostic));
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    /// Write the markdown report plus a `.json` sibling.
    ///
    /// Returns the JSON sibling's path.
    pub fn write_artifacts(&self, markdown_path: &Path) -> Result<PathBuf, HarnessError> {
        std::fs::write(markdown_path, self.to_markdown())?;
        let json_path = markdown_path.with_extension("json");
        std::fs::write(&json_path, serde_json::to_string_pretty(self)?)?;
        Ok(json_path)
    }
}
