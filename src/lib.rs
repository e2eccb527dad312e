mod config;
mod error;
mod fetcher;
mod logging;
mod preview_builder;
mod registry;
mod relay_service;
mod scanner;
mod sink;
mod site_types;
mod sites;
mod utils;

pub use config::{RelayConfig, DEFAULT_CONFIG_PATH, DISCORD_API_BASE};
pub use error::RelayError;
pub use fetcher::{FetchGateway, Fetcher, FetcherConfig};
#[cfg(feature = "logging")]
pub use logging::setup_logging;
pub use logging::{log_preview_card, LogConfig};
pub use preview_builder::{BuildOutcome, PreviewBuilder};
pub use registry::{PatternRegistry, SiteDescriptor, SiteId};
pub use relay_service::{RelayService, RelaySummary};
pub use scanner::{LinkMatch, LinkScanner};
pub use sink::{DiscordSink, Embed, EmbedAuthor, EmbedImage, PresentationSink};
pub use sites::{AdapterTable, FetchRequest, FurAffinityAdapter, SiteAdapter, WeasylAdapter};

/// Site-agnostic submission preview, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Preview {
    pub title: String,
    pub image_url: String,
    pub has_author: bool,
    pub author_name: Option<String>,
    pub author_icon_url: Option<String>,
}

/// Where a chat message came from. Used for logging and replying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOrigin {
    pub author_id: String,
    pub author_name: String,
    pub guild: Option<String>,
    pub channel_id: String,
    pub channel_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub content: String,
    pub origin: MessageOrigin,
}

impl InboundMessage {
    pub fn new(content: impl Into<String>, origin: MessageOrigin) -> Self {
        Self {
            content: content.into(),
            origin,
        }
    }
}
