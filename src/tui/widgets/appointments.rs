// Appointments widget: full schedule with the current selection highlighted.
// Enter on a row opens a consultation for that appointment.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::data::appointments;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let schedule = appointments::all();

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Time"),
        Cell::from("Patient"),
        Cell::from("Type"),
        Cell::from("Dur"),
        Cell::from("Status"),
        Cell::from("Reason"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = schedule
        .iter()
        .map(|a| {
            let status_style = match a.status {
                appointments::AppointmentStatus::Scheduled => Style::default().fg(Color::Cyan),
                appointments::AppointmentStatus::InProgress => Style::default().fg(Color::Yellow),
                appointments::AppointmentStatus::Completed => Style::default().fg(Color::Green),
                appointments::AppointmentStatus::Cancelled
                | appointments::AppointmentStatus::NoShow => Style::default().fg(Color::Red),
            };
            Row::new(vec![
                Cell::from(a.date),
                Cell::from(a.time),
                Cell::from(a.patient_name),
                Cell::from(a.kind),
                Cell::from(format!("{}m", a.duration_min)),
                Cell::from(a.status.label()).style(status_style),
                Cell::from(a.reason),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Length(7),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(12),
        Constraint::Min(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Appointments ({}) ", schedule.len())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.appointment_sel.min(schedule.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut table_state);
}
