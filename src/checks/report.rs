//! Aggregated health check results.

use serde::Serialize;
use std::io::Write;

use super::{CheckResult, CheckStatus};

/// Outcome of a full run, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    results: Vec<CheckResult>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    healthy: bool,
    checks: Vec<JsonCheck<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    name: &'a str,
    passed: bool,
    status: &'a CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    passed: usize,
    failed: usize,
    total: usize,
}

impl HealthReport {
    /// Create a report from results in run order.
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// All results, in run order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Number of checks that failed.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Number of checks run.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Names of the checks that failed.
    pub fn failed_names(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.passed())
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Process exit code: 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let checks = self
            .results
            .iter()
            .map(|r| JsonCheck {
                name: &r.name,
                passed: r.passed(),
                status: &r.status,
                detail: (!r.passed()).then(|| r.status.describe()),
            })
            .collect();

        let output = JsonReport {
            healthy: self.all_passed(),
            checks,
            summary: JsonSummary {
                passed: self.passed(),
                failed: self.failed(),
                total: self.total(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
