use crate::SiteId;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum RelayError {
    /// Logged when a link is skipped. The gateway reports absence as `None`,
    /// so this never travels through a `Result`.
    #[error("No response from metadata endpoint")]
    NoResponse,

    #[error("Malformed metadata from {site}: {reason}")]
    MalformedMetadata { site: SiteId, reason: String },

    #[error("Unrecognized site: {0}")]
    UnrecognizedSite(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to send preview: {0}")]
    SendError(String),

    #[error("Chat platform rejected preview: {status} - {message}")]
    SinkError { status: u16, message: String },
}

impl RelayError {
    pub fn malformed(site: SiteId, reason: impl Into<String>) -> Self {
        RelayError::MalformedMetadata {
            site,
            reason: reason.into(),
        }
    }

    pub fn log(&self) {
        match self {
            RelayError::NoResponse => {
                debug!("Metadata endpoint gave no response, skipping link");
            }
            RelayError::MalformedMetadata { site, reason } => {
                warn!(site = %site, error = %reason, "Malformed submission metadata");
            }
            RelayError::UnrecognizedSite(site) => {
                error!(site = %site, "No adapter registered for site");
            }
            RelayError::Config(e) => {
                error!(error = %e, "Invalid configuration");
            }
            RelayError::ConfigIo(e) => {
                error!(error = %e, "Configuration file could not be read");
            }
            RelayError::ConfigParse(e) => {
                error!(error = %e, "Configuration file could not be parsed");
            }
            RelayError::SendError(e) => {
                warn!(error = %e, "Preview delivery failed");
            }
            RelayError::SinkError { status, message } => {
                warn!(
                    status = %status,
                    error = %message,
                    "Chat platform rejected preview"
                );
            }
        }
    }
}
