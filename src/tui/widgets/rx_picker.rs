// Quick-prescription picker overlay: choose a formulary medication to append
// to the draft with default frequency and duration.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use ratatui::Frame;

use crate::data::medications;
use crate::tui::ViewState;

const PICKER_WIDTH: u16 = 48;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let formulary = medications::all();
    // Two border rows plus one row per medication.
    let height = (formulary.len() as u16 + 2).min(area.height);
    let dialog_area = centered_rect(PICKER_WIDTH, height, area);

    frame.render_widget(Clear, dialog_area);

    let items: Vec<ListItem> = formulary
        .iter()
        .map(|m| {
            ListItem::new(Line::from(vec![
                Span::styled(m.name, Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {} {}", m.dosage, m.form),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Add Prescription ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.picker_sel.min(formulary.len().saturating_sub(1))));
    frame.render_stateful_widget(list, dialog_area, &mut list_state);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .split(vertical[0]);
    horizontal[0]
}
