use serde::Deserialize;

/// Per-language measurement for one repository tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageStats {
    #[serde(rename = "nFiles")]
    pub files: u64,
    pub blank: u64,
    pub comment: u64,
    pub code: u64,
}

impl LanguageStats {
    pub fn merge(&mut self, other: &LanguageStats) {
        self.files += other.files;
        self.blank += other.blank;
        self.comment += other.comment;
        self.code += other.code;
    }
}
