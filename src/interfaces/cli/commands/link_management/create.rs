//! Create link command

use std::time::Duration;

use colored::Colorize;

use crate::errors::LinkshortError;
use crate::interfaces::cli::CliError;
use crate::services::{LinkService, SubmitOutcome};
use crate::utils::clipboard::{Clipboard, SystemClipboard};

/// 进程退出后剪贴板内容会丢失，退出前最多保持这么久
const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

pub async fn create_link(
    service: &LinkService,
    url: &str,
    custom_code: &str,
    expires_in: &str,
    copy: bool,
) -> Result<(), CliError> {
    let created = match service.submit(url, custom_code, expires_in).await {
        SubmitOutcome::Created(created) => created,
        SubmitOutcome::Invalid(errors) => {
            for error in errors.iter() {
                println!(
                    "{} {}: {}",
                    "✗".bold().red(),
                    error.field().display_title().yellow(),
                    error
                );
            }
            return Err(CliError::ParseError(errors.summary()));
        }
        SubmitOutcome::Failed(e) => return Err(e.into()),
    };

    println!(
        "{} Created short link: {} -> {}",
        "✓".bold().green(),
        created.short_code.cyan(),
        url.trim().blue().underline()
    );
    println!("  {}", created.short_url.magenta().bold());

    if copy {
        // 复制失败不影响创建结果
        let short_url = created.short_url.clone();
        let copied = tokio::task::spawn_blocking(move || {
            let mut clipboard = SystemClipboard::holding(CLIPBOARD_HOLD);
            clipboard
                .copy_text(&short_url)
                .map(|()| clipboard.copied_message())
        })
        .await
        .unwrap_or_else(|e| Err(LinkshortError::clipboard_failed(e.to_string())));
        match copied {
            Ok(message) => println!("{} {}", "ℹ".bold().blue(), message),
            Err(e) => println!("{} {}", "⚠".bold().yellow(), e.format_simple().yellow()),
        }
    }

    Ok(())
}
