use crate::{
    AdapterTable, DiscordSink, Fetcher, InboundMessage, LinkScanner, PatternRegistry,
    PresentationSink, PreviewBuilder, RelayConfig, RelayError,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Counts for one handled message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaySummary {
    pub detected: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Scans a chat message, builds previews for its links and hands them to
/// the sink in order.
#[derive(Clone)]
pub struct RelayService {
    scanner: LinkScanner,
    builder: PreviewBuilder,
    sink: Arc<dyn PresentationSink>,
    bot_user_id: Option<String>,
}

impl RelayService {
    pub fn new(
        scanner: LinkScanner,
        builder: PreviewBuilder,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        Self {
            scanner,
            builder,
            sink,
            bot_user_id: None,
        }
    }

    /// Wires the HTTP fetcher and Discord sink from configuration.
    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        let adapters = AdapterTable::from_config(config)?;
        let fetcher = Fetcher::new_with_config(&config.fetcher)?;
        let sink = DiscordSink::with_base_url(&config.discord_token, &config.discord_api_base)?;

        debug!(adapters = adapters.len(), "RelayService initialized");

        Ok(Self::new(
            LinkScanner::new(PatternRegistry::new()),
            PreviewBuilder::new(adapters, Arc::new(fetcher)),
            Arc::new(sink),
        )
        .with_bot_user_id(config.bot_user_id.clone()))
    }

    pub fn with_bot_user_id(mut self, bot_user_id: Option<String>) -> Self {
        self.bot_user_id = bot_user_id;
        self
    }

    #[instrument(level = "debug", skip_all, fields(channel = %message.origin.channel_name))]
    pub async fn handle_message(&self, message: &InboundMessage) -> RelaySummary {
        let mut summary = RelaySummary::default();

        if self.bot_user_id.as_deref() == Some(message.origin.author_id.as_str()) {
            debug!("Ignoring own message");
            return summary;
        }

        let links = self.scanner.scan(&message.content);
        summary.detected = links.len();
        if links.is_empty() {
            return summary;
        }

        // Each preview goes out before the next link is fetched.
        for link in &links {
            let Some(result) = self.builder.build_one(&message.origin, link).await else {
                continue;
            };

            let outcome = match result {
                Ok(preview) => {
                    self.sink
                        .send(&message.origin.channel_id, &preview)
                        .await
                }
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => summary.sent += 1,
                Err(e) => {
                    e.log();
                    summary.failed += 1;
                }
            }
        }

        debug!(?summary, "Message handled");
        summary
    }
}
