// Toast overlay: a transient notification box in the top-right corner.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::protocol::ToastKind;
use crate::tui::ViewState;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(toast) = state.toast.as_ref() else {
        return;
    };

    let toast_area = top_right_rect(TOAST_WIDTH, TOAST_HEIGHT, area);
    frame.render_widget(Clear, toast_area);

    let border_color = match toast.kind {
        ToastKind::Info => Color::Cyan,
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };

    let paragraph = Paragraph::new(vec![Line::raw(toast.message.clone())]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Line::styled(
                format!(" {} ", toast.title),
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(paragraph, toast_area);
}

/// Anchor a rect of the given size to the top-right corner, one row below the
/// status bar.
fn top_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(area.right().saturating_sub(width), area.y + 1, width, height)
}
