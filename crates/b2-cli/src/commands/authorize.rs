//! Authorize command implementation.

use anyhow::{Context, Result};
use clap::Args;

use b2_client::B2Client;

use crate::output;

#[derive(Args, Debug)]
pub struct AuthorizeArgs {}

pub async fn run(_args: AuthorizeArgs, client: &B2Client) -> Result<()> {
    let session = client
        .authorize_account()
        .await
        .context("Failed to authorize account")?;

    output::success("Authorized");
    println!();
    output::field("Account", &session.account_id);
    output::field("API URL", session.api_url.as_str());
    output::field("Download URL", session.download_url.as_str());

    if let Some(allowed) = &session.allowed {
        output::field("Capabilities", &allowed.capabilities.join(", "));
        if let Some(bucket) = allowed.bucket_name.as_deref().or(allowed.bucket_id.as_deref()) {
            output::field("Bucket", bucket);
        }
        if let Some(prefix) = &allowed.name_prefix {
            output::field("Name prefix", prefix);
        }
    }

    Ok(())
}
