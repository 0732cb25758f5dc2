//! Terminal User Interface (TUI) module
//!
//! Links 与 Analytics 两个标签页。数据请求在后台任务中完成，事件循环只读缓存，
//! 按 tick 轮询结果并重绘。

use std::io;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use app::App;
use constants::CLOCK_REDRAW_SECS;
use ui::ui;

use crate::config::AppConfig;
use crate::errors::{LinkshortError, Result};
use crate::services::ServiceContext;

/// Run the TUI application
pub async fn run_tui(ctx: ServiceContext, config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ctx, config);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));
    info!("TUI started (tick {:?})", tick_rate);
    let res = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.map_err(|e| LinkshortError::terminal(format!("TUI error: {}", e)))
}

/// Main application loop
///
/// 过期状态随时间变化，即使没有事件也至少每秒重绘一次。
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    let clock_redraw = Duration::from_secs(CLOCK_REDRAW_SECS);
    let mut last_draw: Option<Instant> = None;

    loop {
        let now = Instant::now();
        app.on_tick(now);

        let clock_due = last_draw.is_none_or(|at| now.duration_since(at) >= clock_redraw);
        if app.take_dirty() || clock_due {
            terminal.draw(|f| ui(f, app))?;
            last_draw = Some(now);
        }

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            // 部分终端会同时上报按下与释放
            && key.kind == KeyEventKind::Press
        {
            if event_handler::handle_key_event(app, key) {
                debug!("TUI exit requested");
                return Ok(());
            }
            app.mark_dirty();
        }
    }
}
