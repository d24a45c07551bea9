// Prescriptions widget: the medication formulary table.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::data::medications;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let formulary = medications::all();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Generic"),
        Cell::from("Dosage"),
        Cell::from("Form"),
        Cell::from("Category"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = formulary
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(m.name),
                Cell::from(m.generic_name),
                Cell::from(m.dosage),
                Cell::from(m.form),
                Cell::from(m.category),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),
        Constraint::Min(14),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Formulary ({}) ", formulary.len())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.formulary_sel.min(formulary.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut table_state);
}
