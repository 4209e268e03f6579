//! Upload command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;

use b2_client::{B2Client, UploadOptions, UploadProgress};

use crate::commands::find_bucket;
use crate::output;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Bucket name
    pub bucket: String,

    /// Local file to upload
    pub path: PathBuf,

    /// Name in the bucket (defaults to the local file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Content type (defaults to detection by the server)
    #[arg(long)]
    pub content_type: Option<String>,

    /// Upload in parts, for files too big for one request
    #[arg(long)]
    pub large: bool,
}

impl UploadArgs {
    fn file_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .with_context(|| format!("Cannot derive a file name from {}", self.path.display()))
    }
}

pub async fn run(args: UploadArgs, client: &B2Client) -> Result<()> {
    let file_name = args.file_name()?;
    let bucket = find_bucket(client, &args.bucket).await?;

    let data = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    let mut options = UploadOptions::default();
    if let Some(content_type) = &args.content_type {
        options = options.with_content_type(content_type);
    }
    match modified_millis(&args.path).await {
        Some(millis) => options = options.with_last_modified_millis(millis),
        None => tracing::debug!("No modification time for local file, using now"),
    }

    eprintln!("{}", format!("Uploading {} bytes...", data.len()).dimmed());

    let file = if args.large {
        client
            .upload_large_file(
                &bucket.bucket_id,
                &file_name,
                Bytes::from(data),
                &options,
                Some(Box::new(print_progress)),
            )
            .await
    } else {
        client
            .upload_file(&bucket.bucket_id, &file_name, Bytes::from(data), &options)
            .await
    }
    .context("Failed to upload file")?;

    output::success(&format!("Uploaded {}", file.file_name));
    if let Some(id) = &file.file_id {
        output::field("ID", id);
    }
    if let Some(sha1) = &file.content_sha1 {
        output::field("SHA1", sha1);
    }

    Ok(())
}

async fn modified_millis(path: &Path) -> Option<i64> {
    let modified = tokio::fs::metadata(path).await.ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified).timestamp_millis())
}

fn print_progress(progress: UploadProgress) {
    eprint!(
        "\r  part {}/{} ({:.0}%)",
        progress.current_part,
        progress.total_parts,
        progress.percentage()
    );
    if progress.current_part == progress.total_parts {
        eprintln!();
    }
    let _ = std::io::stderr().flush();
}
