use thiserror::Error;

/// Main error type for the ASCII filter plugin
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Effect program errors
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("Failed to load effect file: {path}: {diagnostics}")]
    LoadFailed { path: String, diagnostics: String },
}

/// Source registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Source already registered: {id}")]
    Duplicate { id: String },

    #[error("Source not found: {id}")]
    NotFound { id: String },
}

/// Settings snapshot errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings: {reason}")]
    ParseFailed { reason: String },

    #[error("Failed to serialize settings: {reason}")]
    SerializeFailed { reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using FilterError
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Check if this error is recoverable (can be retried)
    ///
    /// A failed effect compile is terminal for that creation attempt.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Shader(ShaderError::LoadFailed { path, .. }) => {
                format!("Could not compile effect file '{}'. Check that the plugin data directory contains it.", path)
            }
            Self::Registry(RegistryError::NotFound { id }) => {
                format!("Source '{}' is not registered. Was the module loaded?", id)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}
