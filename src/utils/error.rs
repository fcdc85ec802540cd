use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compilation error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Input file not found: {path}")]
    MissingInputError { path: String },

    #[error("Could not resolve 8 distinct groups from line: {line}")]
    UnresolvedGroupsError { line: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Parse,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::Io,
            EtlError::MissingInputError { .. } => ErrorCategory::Input,
            EtlError::PatternError(_) | EtlError::UnresolvedGroupsError { .. } => {
                ErrorCategory::Parse
            }
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::IoError(_) | EtlError::SerializationError(_) | EtlError::PatternError(_) => {
                ErrorSeverity::Critical
            }
            EtlError::MissingInputError { .. }
            | EtlError::UnresolvedGroupsError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::MissingInputError { path } => format!(
                "Create {} and paste the third-place mapping table into it, then run again",
                path
            ),
            EtlError::UnresolvedGroupsError { .. } => {
                "Fix the row so it lists the 8 advancing groups as standalone letters A-L".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Check the value passed for {}", field)
            }
            EtlError::IoError(_) => {
                "Check file permissions and free space in the working directory".to_string()
            }
            EtlError::SerializationError(_) | EtlError::PatternError(_) => {
                "This is an internal error; please report it".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MissingInputError { path } => format!("Missing input file {}", path),
            EtlError::UnresolvedGroupsError { line } => {
                format!("Could not parse 8 groups from line: {}", line)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
