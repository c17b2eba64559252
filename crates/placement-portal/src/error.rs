//! Error types for portal services.

use thiserror::Error;

/// Errors raised by the portal layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    // === Settings ===
    /// A configuration value could not be interpreted.
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
    },

    // === Lecturer sign-in ===
    /// Registration email is outside the institution's domain.
    #[error("registration requires an institutional email ending with {suffix}")]
    EmailNotInstitutional { email: String, suffix: String },

    /// Login form submitted without both fields.
    #[error("email and password are required")]
    MissingCredentials,

    /// Login with an email that was never registered.
    #[error("no lecturer account for {email}; register first")]
    NotRegistered { email: String },

    /// Secret step attempted without a pending login.
    #[error("no sign-in in progress; log in first")]
    NoPendingLogin,

    /// Lecturer secret did not match (or none is configured).
    #[error("incorrect lecturer secret")]
    WrongSecret,

    /// Lecturer area accessed without a completed sign-in.
    #[error("lecturer sign-in required")]
    NotSignedIn,

    // === Sheets ===
    /// Credentials variable is unset or empty.
    #[error("credentials variable {var} is not set")]
    CredentialsMissing { var: &'static str },

    /// Credentials variable does not hold a usable service-account JSON.
    #[error("credentials in {var} are not valid service-account JSON: {message}")]
    CredentialsInvalid { var: &'static str, message: String },

    /// No spreadsheet with the requested title.
    #[error("spreadsheet '{title}' not found")]
    SheetNotFound { title: String },

    /// The spreadsheet exists but could not be read.
    #[error("failed to read spreadsheet '{title}': {message}")]
    SheetRead { title: String, message: String },
}

/// Result type for portal operations.
pub type Result<T> = std::result::Result<T, PortalError>;
