// Dashboard widget: today's schedule plus summary counters.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::data::{appointments, messages, patients};
use crate::tui::ViewState;

/// Render the dashboard: summary counters on top, today's appointments below.
pub fn render(frame: &mut Frame, area: Rect, _state: &ViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_summary(frame, rows[0]);
    render_today(frame, rows[1]);
}

fn render_summary(frame: &mut Frame, area: Rect) {
    let today = appointments::appointments_by_date(appointments::CLINIC_DAY);
    let line = Line::from(vec![
        Span::styled(
            format!(" {} appointments today", today.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} patients", patients::all().len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} unread messages", messages::unread_total()),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Overview "),
    );
    frame.render_widget(paragraph, area);
}

fn render_today(frame: &mut Frame, area: Rect) {
    let today = appointments::appointments_by_date(appointments::CLINIC_DAY);

    let header = Row::new(vec![
        Cell::from("Time"),
        Cell::from("Patient"),
        Cell::from("Type"),
        Cell::from("Status"),
        Cell::from("Reason"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = today
        .iter()
        .map(|a| {
            Row::new(vec![
                Cell::from(a.time),
                Cell::from(a.patient_name),
                Cell::from(a.kind),
                Cell::from(a.status.label()),
                Cell::from(a.reason),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Today ({}) ", appointments::CLINIC_DAY)),
    );
    frame.render_widget(table, area);
}
