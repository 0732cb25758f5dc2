//! Event handlers for the Links and Analytics tabs

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen, Tab};
use crate::models::AnalyticsScope;

pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    // 两个标签页共用的按键
    match key_code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_tab();
            return false;
        }
        KeyCode::Char('1') => {
            app.switch_tab(Tab::Links);
            return false;
        }
        KeyCode::Char('2') => {
            app.switch_tab(Tab::Analytics);
            return false;
        }
        KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Help;
            app.mark_dirty();
            return false;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Exiting;
            app.mark_dirty();
            return false;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh();
            return false;
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_add_link();
            return false;
        }
        _ => {}
    }

    match app.current_tab {
        Tab::Links => handle_links_tab(app, key_code),
        Tab::Analytics => handle_analytics_tab(app, key_code),
    }
    false
}

fn handle_links_tab(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => app.toggle_detail(),
        KeyCode::Char('y') => app.copy_selected_short_url(),
        KeyCode::Char('u') => app.copy_selected_original_url(),
        KeyCode::Char('Y') => app.copy_last_created(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.dismiss_last_created(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.show_selected_analytics(),
        _ => {}
    }
}

fn handle_analytics_tab(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => app.next_analytics_tab(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => app.prev_analytics_tab(),
        KeyCode::Char('g') | KeyCode::Char('G') => app.set_analytics_scope(AnalyticsScope::Global),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::interfaces::tui::app::AnalyticsTab;
    use crate::services::ServiceContext;

    fn app() -> App {
        App::new(ServiceContext::from_config(&AppConfig::default()), &AppConfig::default())
    }

    #[tokio::test]
    async fn test_tab_switching() {
        let mut app = app();
        handle_main_screen(&mut app, KeyCode::Tab);
        assert_eq!(app.current_tab, Tab::Analytics);
        handle_main_screen(&mut app, KeyCode::Char('1'));
        assert_eq!(app.current_tab, Tab::Links);
    }

    #[tokio::test]
    async fn test_analytics_sections_cycle() {
        let mut app = app();
        handle_main_screen(&mut app, KeyCode::Char('2'));
        handle_main_screen(&mut app, KeyCode::Char('l'));
        assert_eq!(app.analytics_tab, AnalyticsTab::Referrers);
        handle_main_screen(&mut app, KeyCode::Char('h'));
        handle_main_screen(&mut app, KeyCode::Char('h'));
        assert_eq!(app.analytics_tab, AnalyticsTab::TopLinks);
    }

    #[tokio::test]
    async fn test_quit_asks_for_confirmation() {
        let mut app = app();
        assert!(!handle_main_screen(&mut app, KeyCode::Char('q')));
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
    }

    #[tokio::test]
    async fn test_analytics_scope_reset() {
        let mut app = app();
        app.set_analytics_scope(AnalyticsScope::Link("abc".into()));
        handle_main_screen(&mut app, KeyCode::Char('2'));
        handle_main_screen(&mut app, KeyCode::Char('g'));
        assert_eq!(app.analytics_scope, AnalyticsScope::Global);
    }
}
