use crate::{
    log_preview_card, AdapterTable, FetchGateway, LinkMatch, MessageOrigin, Preview, RelayError,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Result of building one link's preview.
pub type BuildOutcome = (LinkMatch, Result<Preview, RelayError>);

/// Turns detected links into previews, one link at a time.
#[derive(Clone)]
pub struct PreviewBuilder {
    adapters: AdapterTable,
    gateway: Arc<dyn FetchGateway>,
}

impl PreviewBuilder {
    pub fn new(adapters: AdapterTable, gateway: Arc<dyn FetchGateway>) -> Self {
        Self { adapters, gateway }
    }

    /// Builds a preview for every match, in order.
    ///
    /// Links whose metadata endpoint gave no response are left out of the
    /// result. Parse failures are kept as `Err` entries so the caller can
    /// report them; they never stop the remaining links from being built.
    pub async fn build_all(
        &self,
        origin: &MessageOrigin,
        matches: &[LinkMatch],
    ) -> Vec<BuildOutcome> {
        let mut outcomes = Vec::with_capacity(matches.len());

        for link in matches {
            if let Some(result) = self.build_one(origin, link).await {
                outcomes.push((link.clone(), result));
            }
        }

        outcomes
    }

    /// Returns `None` when the link is skipped for lack of a response.
    #[instrument(
        level = "debug",
        skip(self, origin),
        fields(site = %link.site, id = %link.raw_id)
    )]
    pub async fn build_one(
        &self,
        origin: &MessageOrigin,
        link: &LinkMatch,
    ) -> Option<Result<Preview, RelayError>> {
        let adapter = match self.adapters.resolve(link.site) {
            Ok(adapter) => adapter,
            Err(e) => return Some(Err(e)),
        };

        let request = adapter.build_request(&link.raw_id);
        let Some(raw) = self.gateway.fetch(&request).await else {
            RelayError::NoResponse.log();
            return None;
        };

        let result = adapter.parse_response(&raw);
        if let Ok(preview) = &result {
            info!(
                author = %origin.author_name,
                guild = origin.guild.as_deref().unwrap_or("-"),
                channel = %origin.channel_name,
                image_url = %preview.image_url,
                "Relaying preview"
            );
            log_preview_card(preview, origin);
        }

        Some(result)
    }
}
