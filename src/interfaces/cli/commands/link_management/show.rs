//! Show a single link

use chrono::Utc;
use colored::Colorize;

use super::helpers::{expiry_text, print_json, status_badge};
use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub async fn show_link(service: &LinkService, code: &str, json: bool) -> Result<(), CliError> {
    let link = service.load_link(code).await?;

    if json {
        return print_json(&*link);
    }

    let now = Utc::now();
    println!("{} {}", "Short link".bold().green(), link.short_code.cyan());
    println!("  {:<10} {}", "Status:", status_badge(link.status_at(now)));
    println!("  {:<10} {}", "Short URL:", link.short_url.magenta());
    println!("  {:<10} {}", "Target:", link.original_url.blue().underline());
    println!("  {:<10} {}", "Clicks:", link.clicks.to_string().cyan());
    println!("  {:<10} {}", "Created:", link.created_label());
    println!(
        "  {:<10} {}",
        "Expires:",
        expiry_text(&link, now).unwrap_or_else(|| "never".to_string())
    );
    Ok(())
}
