use art_relay::{
    setup_logging, AdapterTable, Fetcher, InboundMessage, LinkScanner, MessageOrigin,
    PresentationSink, Preview, PreviewBuilder, RelayConfig, RelayError, RelayService,
    DEFAULT_CONFIG_PATH,
};
use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;
use std::error::Error;
use std::sync::Arc;

/// Prints previews to the terminal instead of posting them.
struct ConsoleSink;

#[async_trait]
impl PresentationSink for ConsoleSink {
    async fn send(&self, channel_id: &str, preview: &Preview) -> Result<(), RelayError> {
        println!("\n{} #{}", "Preview".bold().blue(), channel_id);
        println!("{}", "---------------".blue());
        println!("{}: {}", "Title".bold(), preview.title);
        println!("{}: {}", "Image".bold(), preview.image_url);
        if preview.has_author {
            println!(
                "{}: {} ({})",
                "Author".bold(),
                preview.author_name.as_deref().unwrap_or("N/A"),
                preview.author_icon_url.as_deref().unwrap_or("no icon")
            );
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("relay_cli")
        .about("Relay one chat message through the preview pipeline")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(Arg::new("message").required(true))
        .get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    let message = matches
        .get_one::<String>("message")
        .cloned()
        .unwrap_or_default();

    let config = RelayConfig::from_file(config_path)?;
    setup_logging(&config.log)?;

    let builder = PreviewBuilder::new(
        AdapterTable::from_config(&config)?,
        Arc::new(Fetcher::new_with_config(&config.fetcher)?),
    );
    let service = RelayService::new(LinkScanner::default(), builder, Arc::new(ConsoleSink));

    let origin = MessageOrigin {
        author_id: "cli".into(),
        author_name: "cli".into(),
        guild: None,
        channel_id: "console".into(),
        channel_name: "console".into(),
    };
    let summary = service
        .handle_message(&InboundMessage::new(message, origin))
        .await;

    println!(
        "\n{} detected={} sent={} failed={}",
        "Done".bold().green(),
        summary.detected,
        summary.sent,
        summary.failed
    );
    Ok(())
}
