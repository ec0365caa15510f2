use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing {0} environment variable. Please set it in your .env file or deployment platform."
    )]
    MissingEnv(String),

    #[error("{var} has an invalid value '{value}': {reason}")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },

    #[error("Invalid store URL: {0}")]
    InvalidStoreUrl(#[from] sqlx::Error),
}
