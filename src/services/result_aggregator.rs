use crate::structs::aggregate_state::{AggregateState, RepositoryDetail};
use crate::structs::analysis_result::AnalysisResult;

/// Folds per-repository results into the run-wide aggregate. Totals are
/// order-independent; the processed/skipped/detail lists preserve analysis
/// order for the report.
pub struct ResultAggregator;

impl ResultAggregator {
    pub fn accumulate(state: &mut AggregateState, result: AnalysisResult) {
        if !result.is_success() {
            log::warn!("⏭️ Skipping '{}' ({})", result.name, result.status);
            state.skipped.push((result.name, result.status));
            return;
        }

        state.processed.push(result.name.clone());

        for (language, stats) in &result.languages {
            state
                .language_totals
                .entry(language.clone())
                .or_default()
                .merge(stats);

            state.details.push(RepositoryDetail {
                repository: result.name.clone(),
                private: result.private,
                language: language.clone(),
                stats: *stats,
            });
        }

        state.grand_totals.merge(&result.totals);
    }
}
