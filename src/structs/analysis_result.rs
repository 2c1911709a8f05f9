use std::collections::BTreeMap;

use crate::enums::analysis_status::AnalysisStatus;
use crate::structs::language_stats::LanguageStats;

/// Outcome of analyzing one repository. Language data is present only when
/// the status is `Success`.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub name: String,
    pub private: bool,
    pub status: AnalysisStatus,
    pub languages: BTreeMap<String, LanguageStats>,
    pub totals: LanguageStats,
}

impl AnalysisResult {
    pub fn success(name: &str, private: bool, languages: BTreeMap<String, LanguageStats>) -> Self {
        let mut totals = LanguageStats::default();
        for stats in languages.values() {
            totals.merge(stats);
        }

        Self {
            name: name.to_string(),
            private,
            status: AnalysisStatus::Success,
            languages,
            totals,
        }
    }

    pub fn failed(name: &str, private: bool, status: AnalysisStatus) -> Self {
        Self {
            name: name.to_string(),
            private,
            status,
            languages: BTreeMap::new(),
            totals: LanguageStats::default(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AnalysisStatus::Success
    }
}
