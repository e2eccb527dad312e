use crate::utils::truncate_str;
use crate::{MessageOrigin, Preview};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

#[cfg(feature = "logging")]
use crate::RelayError;
#[cfg(feature = "logging")]
use tracing_appender::rolling::{RollingFileAppender, Rotation};
#[cfg(feature = "logging")]
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: String,
    pub console_output: bool,
    pub file_output: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".into(),
            log_level: "info".into(),
            console_output: true,
            file_output: true,
        }
    }
}

fn create_separator(width: usize, ch: char) -> String {
    std::iter::repeat_n(ch, width).collect()
}

pub fn log_preview_card(preview: &Preview, origin: &MessageOrigin) {
    const CARD_WIDTH: usize = 80;
    const CONTENT_WIDTH: usize = CARD_WIDTH - 10;

    let horizontal_line = create_separator(CARD_WIDTH - 2, '═');
    let author = if preview.has_author {
        preview.author_name.as_deref().unwrap_or("N/A")
    } else {
        "-"
    };

    debug!(
        "\n╔{}╗\n\
         From: {}@{}:{}\n\
         Title: {}\n\
         Author: {}\n\
         Image: {}\n\
         ╚{}╝",
        horizontal_line,
        truncate_str(&origin.author_name, CONTENT_WIDTH / 3),
        truncate_str(origin.guild.as_deref().unwrap_or("-"), CONTENT_WIDTH / 3),
        truncate_str(&origin.channel_name, CONTENT_WIDTH / 3),
        truncate_str(&preview.title, CONTENT_WIDTH),
        truncate_str(author, CONTENT_WIDTH),
        truncate_str(&preview.image_url, CONTENT_WIDTH),
        horizontal_line,
    );
}

/// Installs the global subscriber: console and/or a daily `relayer.log`.
#[cfg(feature = "logging")]
pub fn setup_logging(config: &LogConfig) -> Result<(), RelayError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let mut layers = Vec::new();

    if config.console_output {
        let console_layer = subscriber_fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .pretty();
        layers.push(console_layer.boxed());
    }

    if config.file_output {
        std::fs::create_dir_all(&config.log_dir).map_err(|e| {
            RelayError::Config(format!(
                "failed to create log directory {}: {e}",
                config.log_dir.display()
            ))
        })?;

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "relayer.log");

        let file_layer = subscriber_fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .with_file(true)
            .with_writer(file_appender);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| RelayError::Config(format!("failed to install log subscriber: {e}")))?;

    debug!("Logging system initialized with config: {:?}", config);
    Ok(())
}
