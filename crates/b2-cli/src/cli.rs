//! CLI argument definitions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use b2_client::{B2Client, ClientConfig, DEFAULT_AUTH_URL};
use b2_core::Credentials;

use crate::commands::{authorize, bucket, download, key, ls, rm, share, upload};

/// Command-line client for B2 object storage.
#[derive(Parser, Debug)]
#[command(name = "b2")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub account: AccountArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Account credentials and endpoint.
#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Application key id
    #[arg(long, env = "B2_APPLICATION_KEY_ID", global = true)]
    pub key_id: Option<String>,

    /// Application key
    #[arg(long, env = "B2_APPLICATION_KEY", global = true, hide_env_values = true)]
    pub key: Option<String>,

    /// Authorization endpoint
    #[arg(long, env = "B2_AUTH_URL", global = true, default_value = DEFAULT_AUTH_URL)]
    pub auth_url: String,
}

impl AccountArgs {
    /// Build a client from the credentials. Nothing is sent until the first
    /// command runs.
    pub fn client(&self) -> Result<B2Client> {
        let key_id = self
            .key_id
            .as_deref()
            .context("No application key id. Pass --key-id or set B2_APPLICATION_KEY_ID.")?;
        let key = self
            .key
            .as_deref()
            .context("No application key. Pass --key or set B2_APPLICATION_KEY.")?;

        let config = ClientConfig::default()
            .with_auth_url(&self.auth_url)
            .with_user_agent(format!("b2-cli/{}", env!("CARGO_PKG_VERSION")));

        B2Client::with_config(Credentials::new(key_id, key), config)
            .context("Invalid client configuration")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authorize the account and show the session
    Authorize(authorize::AuthorizeArgs),

    /// Bucket operations
    Bucket(bucket::BucketCommand),

    /// List files in a bucket
    Ls(ls::LsArgs),

    /// Upload a local file
    Upload(upload::UploadArgs),

    /// Download a file by name
    Download(download::DownloadArgs),

    /// Delete a file, or everything under a folder
    Rm(rm::RmArgs),

    /// Application key operations
    Key(key::KeyCommand),

    /// Create a pre-authorized download URL
    Share(share::ShareArgs),
}
