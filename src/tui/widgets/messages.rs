// Messages widget: conversation list on the left, selected thread on the
// right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::data::{messages, patients};
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_conversations(frame, columns[0], state);
    render_thread(frame, columns[1], state);
}

fn patient_name(patient_id: u32) -> &'static str {
    patients::patient_by_id(patient_id).map_or("Unknown", |p| p.name)
}

fn render_conversations(frame: &mut Frame, area: Rect, state: &ViewState) {
    let conversations = messages::conversations();

    let items: Vec<ListItem> = conversations
        .iter()
        .map(|c| {
            let mut line = format!("{}  {}", patient_name(c.patient_id), c.last_message);
            if c.unread_count > 0 {
                line = format!("({}) {line}", c.unread_count);
            }
            let style = if c.unread_count > 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(line, style))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Conversations "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(
        state.message_sel.min(conversations.len().saturating_sub(1)),
    ));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_thread(frame: &mut Frame, area: Rect, state: &ViewState) {
    let conversations = messages::conversations();
    let selected =
        conversations.get(state.message_sel.min(conversations.len().saturating_sub(1)));

    let mut lines = Vec::new();
    if let Some(conversation) = selected {
        for msg in messages::messages_by_conversation(conversation.id) {
            let (who, style) = match msg.sender {
                messages::Sender::Doctor => ("You", Style::default().fg(Color::Cyan)),
                messages::Sender::Patient => (
                    patient_name(conversation.patient_id),
                    Style::default().fg(Color::White),
                ),
            };
            lines.push(Line::styled(format!("{} [{}]", who, msg.timestamp), style));
            lines.push(Line::raw(format!("  {}", msg.content)));
        }
    }

    let title = selected.map_or(" Thread ".to_string(), |c| {
        format!(" Thread: {} ", patient_name(c.patient_id))
    });
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
