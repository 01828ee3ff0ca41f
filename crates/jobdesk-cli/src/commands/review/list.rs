//! Queue listing commands.

use anyhow::{Context, Result};
use clap::Args;

use jobdesk_http::ListQuery;

use crate::config::Settings;
use crate::output;
use crate::session;

/// Paging and search options shared by both queues.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Jobs per page
    #[arg(long, default_value_t = 20)]
    pub per_page: u32,

    /// Search title and company
    #[arg(long, short)]
    pub query: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct PendingArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only jobs from this source
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Args, Debug)]
pub struct RejectedArgs {
    #[command(flatten)]
    pub list: ListArgs,
}

impl ListArgs {
    fn to_query(&self, source: Option<String>) -> ListQuery {
        ListQuery {
            page: self.page,
            per_page: self.per_page,
            q: self.query.clone(),
            source,
        }
    }
}

pub async fn pending(settings: &Settings, args: PendingArgs) -> Result<()> {
    let api = session::review_api(settings).await?;
    let query = args.list.to_query(args.source);

    let page = api
        .pending(&query)
        .await
        .context("Failed to list pending jobs")?;
    print_page(&page, args.list.pretty)
}

pub async fn rejected(settings: &Settings, args: RejectedArgs) -> Result<()> {
    let api = session::review_api(settings).await?;
    let query = args.list.to_query(None);

    let page = api
        .rejected(&query)
        .await
        .context("Failed to list rejected jobs")?;
    print_page(&page, args.list.pretty)
}

fn print_page(page: &jobdesk_http::Page, pretty: bool) -> Result<()> {
    if page.data.is_empty() {
        output::note("No jobs found.");
        return Ok(());
    }

    for job in &page.data {
        output::json(job, pretty)?;
    }
    output::page_footer(page);

    Ok(())
}
