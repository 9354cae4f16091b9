use clap::{Parser, Subcommand};
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use app_state::load_app_settings;
use gallery_ui::{SearchController, UploadController};
use photo_api::{PhotoApiClient, PhotoUpload};

mod console;

use console::ConsoleView;

#[derive(Parser, Debug)]
#[command(version, about = "Search the photo collection and upload new photos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the photo collection by free text
    Search { query: String },
    /// Upload a photo, optionally tagged with comma-separated labels
    Upload {
        file: Option<PathBuf>,
        #[arg(long, default_value = "")]
        labels: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = PhotoApiClient::new(&settings.api.base_url, settings.api.api_key.clone());
    let mut view = ConsoleView;

    match Cli::parse().command {
        Command::Search { query } => {
            SearchController::new(client).search(&query, &mut view).await;
        }
        Command::Upload { file, labels } => {
            let photo = match file {
                Some(path) => Some(PhotoUpload::from_path(&path).await?),
                None => None,
            };
            UploadController::new(client)
                .upload(photo, &labels, &mut view)
                .await;
        }
    }

    Ok(())
}
