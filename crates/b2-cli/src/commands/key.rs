//! Application key subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use futures_util::TryStreamExt;

use b2_client::B2Client;
use b2_core::NewApplicationKey;

use crate::commands::find_bucket;
use crate::output;

#[derive(Args, Debug)]
pub struct KeyCommand {
    #[command(subcommand)]
    pub command: KeySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum KeySubcommand {
    /// List application keys
    List {
        /// Print one JSON object per key
        #[arg(long)]
        json: bool,
    },

    /// Create an application key
    Create(CreateKeyArgs),

    /// Delete an application key
    Delete {
        /// Application key id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct CreateKeyArgs {
    /// Key name
    pub name: String,

    /// Capability to grant; repeat for several
    #[arg(long = "capability", short = 'c', required = true)]
    pub capabilities: Vec<String>,

    /// Restrict the key to one bucket, by name
    #[arg(long)]
    pub bucket: Option<String>,

    /// Restrict the key to names starting with this prefix
    #[arg(long, requires = "bucket")]
    pub name_prefix: Option<String>,

    /// Expire the key after this many seconds
    #[arg(long)]
    pub valid_for: Option<u64>,
}

pub async fn handle(cmd: KeyCommand, client: &B2Client) -> Result<()> {
    match cmd.command {
        KeySubcommand::List { json } => list(client, json).await,
        KeySubcommand::Create(args) => create(client, args).await,
        KeySubcommand::Delete { id } => delete(client, &id).await,
    }
}

async fn list(client: &B2Client, json: bool) -> Result<()> {
    let mut keys = client.list_keys(None);
    let mut count = 0usize;

    while let Some(key) = keys.try_next().await.context("Failed to list keys")? {
        if json {
            output::json(&key)?;
        } else {
            println!(
                "{}  {:<24} {}",
                key.application_key_id.dimmed(),
                key.key_name,
                key.capabilities.join(",")
            );
        }
        count += 1;
    }

    if count == 0 {
        eprintln!("{}", "No keys found.".dimmed());
    }

    Ok(())
}

async fn create(client: &B2Client, args: CreateKeyArgs) -> Result<()> {
    let mut new_key = NewApplicationKey::new(&args.name, &args.capabilities);

    if let Some(bucket_name) = &args.bucket {
        let bucket = find_bucket(client, bucket_name).await?;
        new_key = new_key.restrict_to_bucket(bucket.bucket_id);
    }
    if let Some(prefix) = &args.name_prefix {
        new_key = new_key.with_name_prefix(prefix);
    }
    if let Some(seconds) = args.valid_for {
        new_key = new_key.valid_for_seconds(seconds);
    }

    let key = client
        .create_key(&new_key)
        .await
        .context("Failed to create key")?;

    output::success(&format!("Created key {}", key.key_name));
    output::field("Key ID", &key.application_key_id);
    if let Some(secret) = &key.application_key {
        output::field("Key", secret);
        eprintln!(
            "{}",
            "The key is shown only once. Store it somewhere safe.".yellow()
        );
    }

    Ok(())
}

async fn delete(client: &B2Client, id: &str) -> Result<()> {
    let key = client
        .delete_key(id)
        .await
        .context("Failed to delete key")?;

    output::success(&format!("Deleted key {} ({})", key.key_name, key.application_key_id));
    Ok(())
}
