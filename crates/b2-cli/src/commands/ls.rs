//! List files command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use futures_util::TryStreamExt;

use b2_client::{B2Client, ListFilesQuery};
use b2_core::File;

use crate::commands::find_bucket;
use crate::output;

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Bucket name
    pub bucket: String,

    /// Only list names starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// List everything below the prefix instead of one folder level
    #[arg(long, short)]
    pub recursive: bool,

    /// Include every version, hidden files included
    #[arg(long)]
    pub versions: bool,

    /// Print one JSON object per file
    #[arg(long)]
    pub json: bool,
}

impl LsArgs {
    fn query(&self, bucket_id: &str) -> ListFilesQuery {
        let mut query = ListFilesQuery::new(bucket_id);
        if let Some(prefix) = &self.prefix {
            query = query.with_prefix(prefix);
        }
        if !self.recursive {
            query = query.with_delimiter("/");
        }
        query
    }
}

pub async fn run(args: LsArgs, client: &B2Client) -> Result<()> {
    let bucket = find_bucket(client, &args.bucket).await?;
    let query = args.query(&bucket.bucket_id);

    let mut files = if args.versions {
        client.list_file_versions(query)
    } else {
        client.list_file_names(query)
    };

    let mut count = 0usize;
    while let Some(file) = files.try_next().await.context("Failed to list files")? {
        if args.json {
            output::json(&file)?;
        } else {
            print_file(&file, args.versions);
        }
        count += 1;
    }

    if count == 0 {
        eprintln!("{}", "No files found.".dimmed());
    }

    Ok(())
}

fn print_file(file: &File, versions: bool) {
    if file.is_folder() {
        println!("{:>10}  {:19}  {}", "", "", file.file_name.blue());
        return;
    }

    let name = if versions {
        format!(
            "{}  {} {}",
            file.file_name,
            file.action.to_string().dimmed(),
            file.file_id.as_deref().unwrap_or_default().dimmed()
        )
    } else {
        file.file_name.clone()
    };

    println!(
        "{:>10}  {:19}  {}",
        output::size(file.content_length),
        output::timestamp(file.uploaded_at()),
        name
    );
}
