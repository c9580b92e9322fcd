//! Error types shared by the dashboard crates.
//!
//! The `Display` text of each variant is what the user sees in the alert or
//! inline message, so keep them short and plain.

use thiserror::Error;

/// Failures of the bulk import pipeline that abort before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The text produced zero candidate records.
    #[error("No valid records found")]
    NoValidRecords,
    /// The selected file is neither typed nor named as CSV.
    #[error("Please upload a CSV file (got \"{0}\")")]
    UnsupportedFile(String),
}

/// Validation failures of the single-record form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    RequiredField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API URL must not be empty")]
    EmptyApiUrl,
    #[error("API URL must start with http:// or https:// (got \"{0}\")")]
    UnsupportedScheme(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
