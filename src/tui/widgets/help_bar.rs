// Help bar widget: context-sensitive keyboard hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::ScreenId;
use crate::tui::ViewState;

/// Render the bottom help bar with hints for the active screen and mode.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let hints = hint_text(state);
    let paragraph =
        Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::Gray).bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Pick the hint line for the current screen and input mode.
pub fn hint_text(state: &ViewState) -> String {
    if state.confirm_quit {
        return " y: quit  n: cancel".to_string();
    }
    if state.picker_open {
        return " j/k: move  Enter: add prescription  Esc: close".to_string();
    }
    if state.edit_mode {
        return " type to edit  Tab: next field  Enter/Esc: done".to_string();
    }
    match state.active_screen {
        ScreenId::Consultation if state.consultation.is_some() => {
            " Tab: field  e: edit  p: rx picker  a/x: attach  Ctrl+S: save  Ctrl+Enter: submit  Esc: close"
                .to_string()
        }
        ScreenId::Consultation => " Enter: start consultation  1-7: screens  q: quit".to_string(),
        ScreenId::Appointments => {
            " j/k: move  Enter: open consultation  1-7: screens  q: quit".to_string()
        }
        _ => " j/k: move  1-7: screens  q: quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_mode() {
        let mut state = ViewState::default();
        assert!(hint_text(&state).contains("1-7"));

        state.confirm_quit = true;
        assert!(hint_text(&state).contains("y: quit"));
        state.confirm_quit = false;

        state.edit_mode = true;
        assert!(hint_text(&state).contains("type to edit"));
    }

    #[test]
    fn consultation_hints_mention_save_and_submit() {
        let mut state = ViewState::default();
        state.active_screen = ScreenId::Consultation;
        state.consultation = Some(Box::default());
        let hints = hint_text(&state);
        assert!(hints.contains("Ctrl+S"));
        assert!(hints.contains("Ctrl+Enter"));
    }
}
