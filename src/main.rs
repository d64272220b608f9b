//! HBnB dynamic places page.
//!
//! Drives the filter-and-render controller from a stream of UI events.
//! Ctrl-C is honored while an event's request is still in flight: the
//! request is dropped and the page is written as it stands.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin (UI events)          Ctrl-C
//!        │                        │
//!        ▼                        ▼
//!   events::parse_line      lifecycle::Shutdown
//!        │                        │
//!        └──────────┬─────────────┘
//!                   ▼
//!             controller ──────▶ api client ──────▶ HBnB REST API
//!                   │
//!                   ▼
//!             page model ──────▶ page::document ──▶ HTML file / stdout
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

use hbnb_dynamic::config::{self, HbnbConfig};
use hbnb_dynamic::controller::{Controller, EventOutcome};
use hbnb_dynamic::events;
use hbnb_dynamic::lifecycle::{signals, Shutdown};
use hbnb_dynamic::observability;
use hbnb_dynamic::page::{document, PageModel};
use hbnb_dynamic::ApiClient;

#[derive(Parser)]
#[command(name = "hbnb-dynamic")]
#[command(about = "Render the HBnB places page from UI events read on stdin", long_about = None)]
struct Args {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the page (`-` for stdout).
    #[arg(short, long)]
    output: Option<String>,

    /// Override `api.base_url`.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => HbnbConfig::default(),
    };
    if let Some(output) = args.output {
        config.page.output_path = output;
    }
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;

    observability::init_logging(&config.observability)?;

    tracing::info!(
        base_url = %config.api.base_url,
        status_base_url = %config.api.status_base_url,
        output = %config.page.output_path,
        "hbnb-dynamic starting"
    );

    let api = ApiClient::new(&config.api, &config.timeouts)?;
    let mut controller = Controller::new(api, PageModel::new(), &config.page);

    let report = controller.start().await;
    tracing::info!(
        status_ok = report.status.is_ok(),
        places_ok = report.places.is_ok(),
        catalog_ok = ?report.catalog_ok(),
        "Startup requests finished"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown.clone()));
    let mut shutdown_rx = shutdown.subscribe();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("End of input");
                    break;
                };
                let event = match events::parse_line(&line) {
                    Ok(Some(event)) => event,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, line = %line, "Ignoring malformed event");
                        continue;
                    }
                };
                match controller.handle_until_shutdown(event, &mut shutdown_rx).await {
                    EventOutcome::Continue => {}
                    EventOutcome::Render => write_page(&controller, &config).await?,
                    EventOutcome::Quit => break,
                }
            }
            _ = shutdown_rx.recv() => break,
        }
    }

    write_page(&controller, &config).await?;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn write_page(
    controller: &Controller<PageModel>,
    config: &HbnbConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = document::to_html(controller.page(), &config.page.title, Uuid::new_v4());

    if config.page.output_path == "-" {
        use tokio::io::AsyncWriteExt;
        let mut stdout = tokio::io::stdout();
        stdout.write_all(html.as_bytes()).await?;
        stdout.flush().await?;
    } else {
        tokio::fs::write(&config.page.output_path, html).await?;
    }

    tracing::info!(output = %config.page.output_path, "Page written");
    Ok(())
}
