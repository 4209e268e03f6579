//! Bucket subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use b2_client::{B2Client, BucketFilter};
use b2_core::BucketType;

use crate::commands::find_bucket;
use crate::output;

#[derive(Args, Debug)]
pub struct BucketCommand {
    #[command(subcommand)]
    pub command: BucketSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BucketSubcommand {
    /// List buckets
    List {
        /// Print one JSON object per bucket
        #[arg(long)]
        json: bool,
    },

    /// Create a bucket
    Create {
        /// Bucket name
        name: String,

        /// Make the bucket public
        #[arg(long)]
        public: bool,
    },

    /// Delete an empty bucket
    Delete {
        /// Bucket name
        name: String,
    },
}

pub async fn handle(cmd: BucketCommand, client: &B2Client) -> Result<()> {
    match cmd.command {
        BucketSubcommand::List { json } => list(client, json).await,
        BucketSubcommand::Create { name, public } => create(client, &name, public).await,
        BucketSubcommand::Delete { name } => delete(client, &name).await,
    }
}

async fn list(client: &B2Client, json: bool) -> Result<()> {
    let buckets = client
        .list_buckets(&BucketFilter::default())
        .await
        .context("Failed to list buckets")?;

    if buckets.is_empty() {
        eprintln!("{}", "No buckets found.".dimmed());
        return Ok(());
    }

    for bucket in &buckets {
        if json {
            output::json(bucket)?;
        } else {
            println!(
                "{:<12} {}  {}",
                bucket.bucket_type.as_str(),
                bucket.bucket_id.dimmed(),
                bucket.bucket_name
            );
        }
    }

    Ok(())
}

async fn create(client: &B2Client, name: &str, public: bool) -> Result<()> {
    let bucket_type = if public {
        BucketType::AllPublic
    } else {
        BucketType::AllPrivate
    };

    let bucket = client
        .create_bucket(name, bucket_type)
        .await
        .context("Failed to create bucket")?;

    output::success(&format!("Created bucket {}", bucket.bucket_name));
    output::field("ID", &bucket.bucket_id);
    output::field("Type", bucket.bucket_type.as_str());
    Ok(())
}

async fn delete(client: &B2Client, name: &str) -> Result<()> {
    let bucket = find_bucket(client, name).await?;
    client
        .delete_bucket(&bucket.bucket_id)
        .await
        .context("Failed to delete bucket")?;

    output::success(&format!("Deleted bucket {}", name));
    Ok(())
}
