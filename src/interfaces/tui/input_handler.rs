//! Text input handling for the add-link form

use ratatui::crossterm::event::KeyCode;

use super::app::{App, CurrentScreen};

/// Handle add link screen input
pub fn handle_add_link_input(app: &mut App, key_code: KeyCode) {
    // 请求进行中只允许关闭弹窗，结果仍会回到表单
    if app.form.submitting {
        if key_code == KeyCode::Esc {
            app.current_screen = CurrentScreen::Main;
            app.mark_dirty();
        }
        return;
    }

    match key_code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => return,
    }
    app.mark_dirty();
}
