use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Success,
    CloneFailed,
    CountFailed,
}

impl AnalysisStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::CloneFailed => "clone failed",
            Self::CountFailed => "count failed",
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
