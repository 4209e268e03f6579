//! Subcommand implementations.

pub mod authorize;
pub mod bucket;
pub mod download;
pub mod key;
pub mod ls;
pub mod rm;
pub mod share;
pub mod upload;

use anyhow::{Context, Result};

use b2_client::B2Client;
use b2_core::Bucket;

use crate::cli::Commands;

pub async fn handle(command: Commands, client: &B2Client) -> Result<()> {
    match command {
        Commands::Authorize(args) => authorize::run(args, client).await,
        Commands::Bucket(cmd) => bucket::handle(cmd, client).await,
        Commands::Ls(args) => ls::run(args, client).await,
        Commands::Upload(args) => upload::run(args, client).await,
        Commands::Download(args) => download::run(args, client).await,
        Commands::Rm(args) => rm::run(args, client).await,
        Commands::Key(cmd) => key::handle(cmd, client).await,
        Commands::Share(args) => share::run(args, client).await,
    }
}

/// Look up a bucket by name, for commands that need its id.
pub(crate) async fn find_bucket(client: &B2Client, name: &str) -> Result<Bucket> {
    tracing::debug!(bucket = name, "Resolving bucket");
    client
        .find_bucket_by_name(name)
        .await
        .with_context(|| format!("Bucket '{}' not found", name))
}
