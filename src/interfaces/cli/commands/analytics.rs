//! Analytics command

use colored::Colorize;

use super::link_management::print_json;
use crate::analytics::{AnalyticsView, Breakdown, TopLinkRow, render_bar};
use crate::interfaces::cli::CliError;
use crate::models::AnalyticsScope;
use crate::services::AnalyticsService;
use crate::utils::{format_count, truncate_chars};

const BAR_CELLS: usize = 20;
const LABEL_WIDTH: usize = 24;
const URL_WIDTH: usize = 60;

pub async fn show_analytics(
    service: &AnalyticsService,
    code: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let scope = AnalyticsScope::from_code(code);
    let data = service.load(&scope).await?;

    if json {
        return print_json(&*data);
    }

    let data = match data.as_ref() {
        Some(data) if !data.has_no_records() => data,
        _ => {
            println!(
                "{} No analytics data available yet for {}",
                "ℹ".bold().blue(),
                scope.label().cyan()
            );
            return Ok(());
        }
    };

    let view = AnalyticsView::from_data(data);
    println!(
        "{} {}",
        "Analytics for".bold().green(),
        scope.label().cyan().bold()
    );
    println!();
    println!("  {:<14} {}", "Total Clicks:", view.total_clicks.bold());
    println!("  {:<14} {}", "Unique Clicks:", view.unique_clicks.bold());
    println!("  {:<14} {}", "Click Rate:", view.click_rate.bold());

    print_breakdown("Daily Trend", &view.trend, "No daily data available");
    print_breakdown("Clicks by Country", &view.countries, "No geography data available");
    print_breakdown("Traffic Sources", &view.referrers, "No referrer data available");
    print_top_links(&view.top_links);
    Ok(())
}

fn print_breakdown(title: &str, breakdown: &Breakdown, empty_message: &str) {
    println!();
    println!("{}", title.bold());
    match breakdown {
        Breakdown::NoData => println!("  {}", empty_message.dimmed()),
        Breakdown::Rows(rows) => {
            for row in rows {
                println!(
                    "  {:<width$} {} {}",
                    truncate_chars(&row.label, LABEL_WIDTH - 3),
                    render_bar(row.width_percent, BAR_CELLS).blue(),
                    format_count(row.clicks),
                    width = LABEL_WIDTH
                );
            }
        }
    }
}

fn print_top_links(rows: &[TopLinkRow]) {
    println!();
    println!("{}", "Most Clicked Links".bold());
    if rows.is_empty() {
        println!("  {}", "No links data available".dimmed());
        return;
    }
    for row in rows {
        println!(
            "  {} {} {} clicks",
            format!("#{}", row.rank).dimmed(),
            row.short_code.cyan(),
            format_count(row.clicks).bold()
        );
        println!(
            "     {}",
            truncate_chars(&row.original_url, URL_WIDTH).blue().underline()
        );
    }
}
