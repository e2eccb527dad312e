use crate::{Preview, RelayError, DISCORD_API_BASE};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Outbound boundary: renders one preview into a chat channel.
#[async_trait]
pub trait PresentationSink: Send + Sync {
    async fn send(&self, channel_id: &str, preview: &Preview) -> Result<(), RelayError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub image: EmbedImage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Embed {
    pub fn from_preview(preview: &Preview) -> Self {
        let author = if preview.has_author {
            Some(EmbedAuthor {
                name: preview.author_name.clone().unwrap_or_default(),
                icon_url: preview.author_icon_url.clone(),
            })
        } else {
            None
        };

        Self {
            title: preview.title.clone(),
            image: EmbedImage {
                url: preview.image_url.clone(),
            },
            author,
        }
    }
}

#[derive(Serialize)]
struct CreateMessage<'a> {
    embeds: [&'a Embed; 1],
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Posts previews as embeds through the Discord REST API.
#[derive(Clone)]
pub struct DiscordSink {
    client: Client,
    bot_token: String,
    base_url: String,
}

impl DiscordSink {
    pub fn new(bot_token: impl Into<String>) -> Result<Self, RelayError> {
        Self::with_base_url(bot_token, DISCORD_API_BASE)
    }

    pub fn with_base_url(
        bot_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RelayError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            bot_token: bot_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn error_from_response(status: StatusCode, response: reqwest::Response) -> RelayError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };
        RelayError::SinkError {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl PresentationSink for DiscordSink {
    async fn send(&self, channel_id: &str, preview: &Preview) -> Result<(), RelayError> {
        let url = format!("{}/channels/{}/messages", self.base_url, channel_id);
        let embed = Embed::from_preview(preview);

        debug!(channel_id = %channel_id, title = %embed.title, "Sending preview embed");

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bot {}", self.bot_token))
            .json(&CreateMessage { embeds: [&embed] })
            .send()
            .await
            .map_err(|e| RelayError::SendError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        Ok(())
    }
}
