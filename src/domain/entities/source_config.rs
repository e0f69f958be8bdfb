//! Immutable description of the upstream sources queried per request.

/// Upstream sources and the per-source retry budget.
///
/// Built once at startup from [`crate::config::Config`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    sources: Vec<String>,
    retry_budget: i32,
}

impl SourceConfig {
    pub fn new(sources: Vec<String>, retry_budget: i32) -> Self {
        Self {
            sources,
            retry_budget,
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Additional attempts allowed per source after an initial failure.
    pub fn retry_budget(&self) -> i32 {
        self.retry_budget
    }
}
