use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Duplicate project title: {title}")]
    DuplicateTitleError { title: String },

    #[error("Slug '{slug}' is shared by '{first}' and '{second}'")]
    DuplicateSlugError {
        slug: String,
        first: String,
        second: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Project not found: {slug}")]
    NotFoundError { slug: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::SerializationError(_)
            | CatalogError::CsvError(_)
            | CatalogError::DuplicateTitleError { .. }
            | CatalogError::DuplicateSlugError { .. }
            | CatalogError::ProcessingError { .. } => ErrorCategory::Data,
            CatalogError::TomlParseError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::NotFoundError { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::NotFoundError { .. } => ErrorSeverity::Medium,
            CatalogError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::IoError(_) => {
                "Check that the catalog file exists and the output directory is writable".to_string()
            }
            CatalogError::TomlParseError { .. } => {
                "Fix the TOML syntax in the catalog file".to_string()
            }
            CatalogError::DuplicateTitleError { .. } => {
                "Give every project a unique title".to_string()
            }
            CatalogError::DuplicateSlugError { .. } => {
                "Rename one of the projects so their titles no longer collapse to the same slug"
                    .to_string()
            }
            CatalogError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            CatalogError::NotFoundError { .. } => {
                "Run the `list` command to see available project slugs".to_string()
            }
            CatalogError::SerializationError(_)
            | CatalogError::CsvError(_)
            | CatalogError::ProcessingError { .. } => {
                "Re-run with --verbose for more detail".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Data => format!("The catalog data is inconsistent: {}", self),
            ErrorCategory::Configuration => format!("The catalog file is invalid: {}", self),
            ErrorCategory::Lookup => self.to_string(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
