pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Please fill all fields")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Apply(#[from] ApplyError),

    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of the freelancer apply action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("You have already applied to this job")]
    AlreadyApplied,

    #[error("Job not found")]
    NotFound,
}

/// Failures of the chat send action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("Message cannot be empty")]
    Empty,

    #[error("Select a conversation first")]
    NoActiveConversation,
}

/// Failures of the mock sign-in and registration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please select your account type")]
    MissingRole,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
