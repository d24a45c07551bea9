// Patients widget: roster table plus a recent-consultations panel for the
// selected patient.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::data::{consultations, patients};
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_roster(frame, columns[0], state);
    render_history(frame, columns[1], state);
}

fn render_roster(frame: &mut Frame, area: Rect, state: &ViewState) {
    let roster = patients::all();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Age"),
        Cell::from("Condition"),
        Cell::from("Last Visit"),
        Cell::from("Phone"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = roster
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name),
                Cell::from(format!("{}", p.age)),
                Cell::from(p.condition),
                Cell::from(p.last_visit),
                Cell::from(p.phone),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(4),
        Constraint::Min(14),
        Constraint::Length(11),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Patients ({}) ", roster.len())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.patient_sel.min(roster.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_history(frame: &mut Frame, area: Rect, state: &ViewState) {
    let roster = patients::all();
    let selected = roster.get(state.patient_sel.min(roster.len().saturating_sub(1)));

    let mut lines = Vec::new();
    if let Some(patient) = selected {
        for record in consultations::consultations_by_patient_id(patient.id) {
            lines.push(Line::styled(
                format!("{}  {}", record.date, record.diagnosis),
                Style::default().fg(Color::Cyan),
            ));
            lines.push(Line::raw(format!(
                "  BP {}  HR {}  {}",
                record.vitals.blood_pressure, record.vitals.heart_rate, record.notes
            )));
            if let Some(follow_up) = record.follow_up_date {
                lines.push(Line::styled(
                    format!("  follow-up {follow_up}"),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }
        if lines.is_empty() {
            lines.push(Line::styled(
                "No prior consultations.",
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let title = selected.map_or(" History ".to_string(), |p| format!(" History: {} ", p.name));
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
