//! Remove command implementation.

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args};

use b2_client::{B2Client, DeleteTarget};

use crate::commands::find_bucket;
use crate::output;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["name", "id"])))]
pub struct RmArgs {
    /// Bucket name
    pub bucket: String,

    /// File name, or a folder ending in '/' to delete everything below it
    #[arg(long)]
    pub name: Option<String>,

    /// File version id
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn run(args: RmArgs, client: &B2Client) -> Result<()> {
    let target = match (args.id, args.name) {
        (Some(file_id), _) => DeleteTarget::ById { file_id },
        (None, Some(file_name)) => {
            let bucket = find_bucket(client, &args.bucket).await?;
            DeleteTarget::ByName {
                file_name,
                bucket_id: bucket.bucket_id,
            }
        }
        (None, None) => bail!("Pass --name or --id"),
    };

    let deleted = client
        .delete_target(&target)
        .await
        .context("Failed to delete")?;

    let noun = if deleted == 1 { "file version" } else { "file versions" };
    output::success(&format!("Deleted {} {}", deleted, noun));
    Ok(())
}
