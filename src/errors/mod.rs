use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum GitlocError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    // Repository listing errors
    DiscoveryError {
        page: u32,
        reason: String,
    },

    // Per-repository acquisition errors
    CloneError {
        repository: String,
        reason: String,
    },

    // Per-repository measurement errors
    CountError {
        repository: String,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl GitlocError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn discovery_error(page: u32, reason: &str) -> Self {
        Self::DiscoveryError {
            page,
            reason: reason.to_string(),
        }
    }

    pub fn clone_error(repository: &str, reason: &str) -> Self {
        Self::CloneError {
            repository: repository.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn count_error(repository: &str, reason: &str) -> Self {
        Self::CountError {
            repository: repository.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::DiscoveryError { page, reason } => {
                format!("Repository listing failed on page {}: {}", page, reason)
            }
            Self::CloneError { repository, reason } => {
                format!("Clone failed for repository '{}': {}", repository, reason)
            }
            Self::CountError { repository, reason } => {
                format!("Line counting failed for repository '{}': {}", repository, reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}", content_type, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for GitlocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for GitlocError {}

/// Result type alias for gitloc operations
pub type GitlocResult<T> = Result<T, GitlocError>;

impl From<std::io::Error> for GitlocError {
    fn from(error: std::io::Error) -> Self {
        GitlocError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GitlocError {
    fn from(error: serde_json::Error) -> Self {
        GitlocError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for GitlocError {
    fn from(error: reqwest::Error) -> Self {
        GitlocError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
