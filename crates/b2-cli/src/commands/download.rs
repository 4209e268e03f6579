//! Download command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use b2_client::B2Client;

use crate::output;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Bucket name
    pub bucket: String,

    /// File name in the bucket
    pub name: String,

    /// Where to write the file (defaults to the last path segment)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl DownloadArgs {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let last = self.name.rsplit('/').next().unwrap_or(&self.name);
            PathBuf::from(last)
        })
    }
}

pub async fn run(args: DownloadArgs, client: &B2Client) -> Result<()> {
    let path = args.output_path();

    let file = client
        .download_file_by_name(&args.bucket, &args.name)
        .await
        .context("Failed to download file")?;

    tokio::fs::write(&path, &file.body)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output::success(&format!(
        "Downloaded {} to {}",
        args.name,
        path.display()
    ));
    output::field("Size", &output::size(file.content_length() as u64));
    if let Some(sha1) = &file.content_sha1 {
        output::field("SHA1", sha1);
    }

    Ok(())
}
