use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    /// Embedded variant document failed to deserialize
    #[error("Config error in variant '{variant}': {source}")]
    Config {
        variant: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Variant parsed but is structurally unusable
    #[error("Invalid config for variant '{variant}': {reason}")]
    InvalidConfig { variant: &'static str, reason: String },

    #[error("Unknown site variant: {0}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
