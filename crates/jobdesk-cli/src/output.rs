//! Terminal output for the console.
//!
//! Records go to stdout so they can be piped; paging hints and progress
//! notes go to stderr.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use serde::Serialize;

use jobdesk_core::User;
use jobdesk_http::Page;

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a progress note on stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// One JSON document per line, or indented when `pretty` is set.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// The signed-in user. Optional fields are skipped when absent.
pub fn user_fields(user: &User) {
    field("User", &user.username);
    if user.full_name.is_some() {
        field("Name", user.display_name());
    }
    if let Some(email) = &user.email {
        field("Email", email);
    }
    field("Role", &user.role);
    if let Some(last_login) = user.last_login {
        let local = last_login.with_timezone(&Local);
        field("Last login", &local.format("%Y-%m-%d %H:%M").to_string());
    }
}

/// Per-source job counts, largest first.
pub fn source_table(counts: &BTreeMap<String, u64>) {
    if counts.is_empty() {
        return;
    }

    let mut rows: Vec<_> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let width = rows.iter().map(|(source, _)| source.len()).max().unwrap_or(0);

    println!();
    println!("{}", "By source".dimmed());
    for (source, count) in rows {
        println!("  {:<width$}  {}", source, count, width = width);
    }
}

/// Paging position for a listed queue, on stderr.
pub fn page_footer(page: &Page) {
    eprintln!();
    eprintln!("{}", page_summary(page).dimmed());
    if page.has_next() {
        eprintln!("{}: --page {}", "Next".dimmed(), page.page + 1);
    }
}

fn page_summary(page: &Page) -> String {
    let noun = if page.total == 1 { "job" } else { "jobs" };
    format!(
        "Page {} of {} ({} {})",
        page.page,
        page.total_pages.max(1),
        page.total,
        noun
    )
}
