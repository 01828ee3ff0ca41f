//! Approve and reject commands.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Settings;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ApproveArgs {
    /// Job to approve
    pub job_id: String,
}

#[derive(Args, Debug)]
pub struct RejectArgs {
    /// Job to reject
    pub job_id: String,

    /// Reason recorded with the rejection
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Args, Debug)]
pub struct BulkApproveArgs {
    /// Jobs to approve
    #[arg(required = true)]
    pub job_ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct BulkRejectArgs {
    /// Jobs to reject
    #[arg(required = true)]
    pub job_ids: Vec<String>,

    /// Reason recorded with each rejection
    #[arg(long)]
    pub reason: Option<String>,
}

pub async fn approve(settings: &Settings, args: ApproveArgs) -> Result<()> {
    let api = session::review_api(settings).await?;
    let ack = api
        .approve(&args.job_id)
        .await
        .with_context(|| format!("Failed to approve {}", args.job_id))?;

    output::success(&ack.message);
    Ok(())
}

pub async fn reject(settings: &Settings, args: RejectArgs) -> Result<()> {
    let api = session::review_api(settings).await?;
    let ack = api
        .reject(&args.job_id, args.reason.as_deref())
        .await
        .with_context(|| format!("Failed to reject {}", args.job_id))?;

    output::success(&ack.message);
    Ok(())
}

pub async fn bulk_approve(settings: &Settings, args: BulkApproveArgs) -> Result<()> {
    let api = session::review_api(settings).await?;
    let ack = api
        .bulk_approve(&args.job_ids)
        .await
        .context("Failed to approve jobs")?;

    output::success(&ack.message);
    Ok(())
}

pub async fn bulk_reject(settings: &Settings, args: BulkRejectArgs) -> Result<()> {
    let api = session::review_api(settings).await?;
    let ack = api
        .bulk_reject(&args.job_ids, args.reason.as_deref())
        .await
        .context("Failed to reject jobs")?;

    output::success(&ack.message);
    Ok(())
}
