// Status bar widget: clinic identity, unread badge, screen tabs.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::data::messages;
use crate::protocol::ScreenId;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [clinic name | doctor] [unread badge] [screen tabs]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!(" {} ", state.clinic.name),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("{} ", state.clinic.doctor),
        Style::default().fg(Color::White),
    ));

    let unread = messages::unread_total();
    if unread > 0 {
        spans.push(Span::styled(
            format!("[{unread} unread] "),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_screen));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Build screen tab spans with the active screen highlighted.
/// E.g. "[1:Dashboard] [2:Appointments] ... [7:Products]"
pub fn tab_spans(active: ScreenId) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, screen) in ScreenId::ALL.iter().enumerate() {
        let style = if *screen == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("[{}:{}]", i + 1, screen.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_spans_cover_every_screen() {
        let spans = tab_spans(ScreenId::Dashboard);
        // One label span plus one spacer per screen.
        assert_eq!(spans.len(), ScreenId::ALL.len() * 2);
        assert!(spans[0].content.contains("1:Dashboard"));
        assert!(spans[12].content.contains("7:Products"));
    }

    #[test]
    fn active_tab_is_highlighted() {
        let spans = tab_spans(ScreenId::Messages);
        // Messages is screen 6, label span index 10.
        let active = &spans[10];
        assert!(active.content.contains("6:Messages"));
        assert_eq!(active.style.bg, Some(Color::White));
    }
}
