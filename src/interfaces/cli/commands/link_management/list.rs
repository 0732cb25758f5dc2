//! List links command

use chrono::Utc;
use colored::Colorize;

use super::helpers::{format_link_line, print_json};
use crate::interfaces::cli::CliError;
use crate::models::LinkStatus;
use crate::services::LinkService;

pub async fn list_links(service: &LinkService, json: bool) -> Result<(), CliError> {
    let links = service.load_links().await?;

    if json {
        return print_json(links.as_slice());
    }

    if links.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    // 状态按当前时间计算
    let now = Utc::now();
    println!("{}", "Short link list:".bold().green());
    println!();
    for link in links.iter() {
        println!("  {}", format_link_line(link, now));
    }
    println!();

    let expired = links
        .iter()
        .filter(|link| link.status_at(now) == LinkStatus::Expired)
        .count();
    println!(
        "{} Total {} short links ({} active, {} expired)",
        "ℹ".bold().blue(),
        links.len().to_string().green(),
        (links.len() - expired).to_string().green(),
        expired.to_string().red()
    );
    Ok(())
}
