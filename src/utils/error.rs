use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Profile parse error: {0}")]
    ProfileError(#[from] toml::de::Error),

    #[error("Unsupported veto schema version {found} (expected {expected})")]
    SchemaVersionError { found: u32, expected: u32 },

    #[error("No handler registered for control '{control}'")]
    DispatchError { control: String },

    #[error("Payment failed: {message}")]
    PaymentError { message: String },

    #[error("Feedback rejected: {message}")]
    FeedbackError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Serialization,
    Io,
    Configuration,
    Dispatch,
    Collaborator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::SerializationError(_) | StoreError::SchemaVersionError { .. } => {
                ErrorCategory::Serialization
            }
            StoreError::IoError(_) => ErrorCategory::Io,
            StoreError::ProfileError(_)
            | StoreError::InvalidConfigValueError { .. }
            | StoreError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StoreError::DispatchError { .. } => ErrorCategory::Dispatch,
            StoreError::PaymentError { .. } | StoreError::FeedbackError { .. } => {
                ErrorCategory::Collaborator
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StoreError::FeedbackError { .. } => ErrorSeverity::Low,
            StoreError::PaymentError { .. } => ErrorSeverity::Medium,
            StoreError::SerializationError(_)
            | StoreError::SchemaVersionError { .. }
            | StoreError::DispatchError { .. } => ErrorSeverity::High,
            StoreError::IoError(_)
            | StoreError::ProfileError(_)
            | StoreError::InvalidConfigValueError { .. }
            | StoreError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::SerializationError(_) => {
                "A record could not be encoded or decoded.".to_string()
            }
            StoreError::IoError(_) => "A file could not be read or written.".to_string(),
            StoreError::ProfileError(_) => "The session profile is not valid TOML.".to_string(),
            StoreError::SchemaVersionError { found, expected } => format!(
                "The veto record uses schema version {} but this build reads version {}.",
                found, expected
            ),
            StoreError::DispatchError { control } => {
                format!("Nothing is bound to the control '{}'.", control)
            }
            StoreError::PaymentError { message } => {
                format!("The payment was declined: {}.", message)
            }
            StoreError::FeedbackError { message } => {
                format!("The feedback was not accepted: {}.", message)
            }
            StoreError::InvalidConfigValueError { field, reason, .. } => {
                format!("The configuration value '{}' is invalid: {}.", field, reason)
            }
            StoreError::MissingConfigError { field } => {
                format!("The configuration value '{}' is required.", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StoreError::SerializationError(_) => {
                "Check that the input is well-formed JSON".to_string()
            }
            StoreError::IoError(_) => {
                "Check the path exists and the process can write to it".to_string()
            }
            StoreError::ProfileError(_) => {
                "Fix the TOML syntax or start without --profile to use the built-in session"
                    .to_string()
            }
            StoreError::SchemaVersionError { .. } => {
                "Re-export the ledger with a matching build".to_string()
            }
            StoreError::DispatchError { .. } => {
                "Register a handler for the control before dispatching to it".to_string()
            }
            StoreError::PaymentError { .. } => {
                "Retry with another payment method or a smaller purchase".to_string()
            }
            StoreError::FeedbackError { .. } => {
                "Shorten or rephrase the comment and submit again".to_string()
            }
            StoreError::InvalidConfigValueError { .. } | StoreError::MissingConfigError { .. } => {
                "Run with --help to see the expected values".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
