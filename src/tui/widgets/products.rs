// Products widget: pharmacy catalog with the selected product's batches.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::data::products::{self, BatchStatus};
use crate::tui::ViewState;

/// Format a cent price as dollars, e.g. 1250 -> "$12.50".
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_catalog(frame, rows[0], state);
    render_batches(frame, rows[1], state);
}

fn render_catalog(frame: &mut Frame, area: Rect, state: &ViewState) {
    let catalog = products::all();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Manufacturer"),
        Cell::from("Category"),
        Cell::from("Price"),
        Cell::from("Stock"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = catalog
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name),
                Cell::from(p.manufacturer),
                Cell::from(p.category),
                Cell::from(format_price(p.price_cents)),
                Cell::from(format!("{}", p.stock)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Min(14),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Products ({}) ", catalog.len())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.product_sel.min(catalog.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_batches(frame: &mut Frame, area: Rect, state: &ViewState) {
    let catalog = products::all();
    let selected = catalog.get(state.product_sel.min(catalog.len().saturating_sub(1)));

    let header = Row::new(vec![
        Cell::from("Batch"),
        Cell::from("Qty"),
        Cell::from("Expiry"),
        Cell::from("Vendor"),
        Cell::from("Status"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = selected
        .map(|p| p.batches.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|b| {
            let status_style = match b.status {
                BatchStatus::Valid => Style::default().fg(Color::Green),
                BatchStatus::NearExpiry => Style::default().fg(Color::Yellow),
                BatchStatus::Expired => Style::default().fg(Color::Red),
            };
            Row::new(vec![
                Cell::from(b.batch_number),
                Cell::from(format!("{}", b.quantity)),
                Cell::from(b.expiry_date),
                Cell::from(b.vendor),
                Cell::from(status_label(b.status)).style(status_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Min(12),
        Constraint::Length(12),
    ];

    let title = selected.map_or(" Batches ".to_string(), |p| format!(" Batches: {} ", p.name));
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn status_label(status: BatchStatus) -> &'static str {
    match status {
        BatchStatus::Valid => "valid",
        BatchStatus::NearExpiry => "near-expiry",
        BatchStatus::Expired => "expired",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(1250), "$12.50");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(100), "$1.00");
    }
}
