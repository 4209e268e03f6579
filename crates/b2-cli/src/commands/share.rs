//! Share command implementation.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Args;
use colored::Colorize;

use b2_client::{B2Client, MAX_DOWNLOAD_VALIDITY_SECS};

use crate::commands::find_bucket;

#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Bucket name
    pub bucket: String,

    /// File name, or a prefix shared by several files
    pub prefix: String,

    /// How long the URL stays valid, in seconds
    #[arg(long, default_value_t = 86_400, value_parser = clap::value_parser!(u64).range(1..=MAX_DOWNLOAD_VALIDITY_SECS))]
    pub valid_for: u64,
}

pub async fn run(args: ShareArgs, client: &B2Client) -> Result<()> {
    let bucket = find_bucket(client, &args.bucket).await?;

    let authorization = client
        .get_download_authorization(&args.prefix, &bucket.bucket_id, args.valid_for)
        .await
        .context("Failed to get download authorization")?;

    let url = client
        .create_download_url(&args.prefix, &bucket.bucket_name, &authorization.authorization_token)
        .await
        .context("Failed to build download URL")?;

    println!("{}", url);

    let expires = Utc::now() + Duration::seconds(args.valid_for as i64);
    eprintln!();
    eprintln!(
        "{}: {}",
        "Expires".dimmed(),
        expires.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}
