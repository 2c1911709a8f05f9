use std::collections::BTreeMap;

use crate::enums::analysis_status::AnalysisStatus;
use crate::structs::language_stats::LanguageStats;

/// One row of the per-repository detail table, appended in accumulation order.
#[derive(Debug, Clone)]
pub struct RepositoryDetail {
    pub repository: String,
    pub private: bool,
    pub language: String,
    pub stats: LanguageStats,
}

/// Accumulated state over all analysis results of a run. Mutated only by the
/// aggregator; read-only once handed to the renderer.
#[derive(Debug, Default)]
pub struct AggregateState {
    pub language_totals: BTreeMap<String, LanguageStats>,
    pub grand_totals: LanguageStats,
    pub processed: Vec<String>,
    pub skipped: Vec<(String, AnalysisStatus)>,
    pub details: Vec<RepositoryDetail>,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }
}
