//! Configuration validation module

use crate::config::{DataConfig, LoggingConfig, PagerConfig, ServerConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Server configuration error: {message}")]
    Server { message: String },

    #[error("Pager configuration error: {message}")]
    Pager { message: String },

    #[error("Data configuration error: {message}")]
    Data { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn pager(message: impl Into<String>) -> Self {
        Self::Pager {
            message: message.into(),
        }
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // u16 cannot exceed 65535, so only 0 is out of range
        if self.port == 0 {
            return Err(ValidationError::server(format!(
                "Port must be in range 1-65535, got {}",
                self.port
            )));
        }

        if self.host.is_empty() {
            return Err(ValidationError::server("Host cannot be empty"));
        }

        if self.request_timeout_seconds == 0 {
            return Err(ValidationError::server("Request timeout must be > 0"));
        }

        if self.allowed_origins.is_empty() {
            return Err(ValidationError::server(
                "At least one CORS origin is required (use \"*\" for any)",
            ));
        }

        Ok(())
    }
}

impl Validate for PagerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.default_per_page == 0 {
            return Err(ValidationError::pager("default_per_page must be > 0"));
        }
        if self.max_per_page < self.default_per_page {
            return Err(ValidationError::pager(format!(
                "max_per_page ({}) must be >= default_per_page ({})",
                self.max_per_page, self.default_per_page
            )));
        }
        Ok(())
    }
}

impl Validate for DataConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.mappings_file.as_os_str().is_empty() {
            return Err(ValidationError::data("mappings_file cannot be empty"));
        }
        if self.content_file.as_os_str().is_empty() {
            return Err(ValidationError::data("content_file cannot be empty"));
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format.as_str() {
            "json" | "pretty" | "compact" => Ok(()),
            other => Err(ValidationError::logging(format!(
                "Unknown log format '{other}' (expected json, pretty, or compact)"
            ))),
        }
    }
}
