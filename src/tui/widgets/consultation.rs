// Consultation widget: the SOAP form, vitals, quick prescriptions, and
// attachments for the active session.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::consultation::draft::{SoapField, VitalField};
use crate::data::{appointments, patients};
use crate::protocol::ConsultationView;
use crate::tui::layout::build_consultation_layout;
use crate::tui::{FieldFocus, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(view) = state.consultation.as_deref() else {
        render_empty(frame, area);
        return;
    };

    let layout = build_consultation_layout(area);

    render_header(frame, layout.header, view);
    for (i, field) in SoapField::ALL.iter().enumerate() {
        render_soap_section(frame, layout.soap[i], state, view, *field);
    }
    render_vitals(frame, layout.vitals, state, view);
    render_prescriptions(frame, layout.prescriptions, state, view);
    render_attachments(frame, layout.attachments, view);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            "  No active consultation.",
            Style::default().fg(Color::Gray),
        ),
        Line::styled(
            "  Press Enter to start one, or pick an appointment on screen 2.",
            Style::default().fg(Color::Gray),
        ),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Consultation "),
    );
    frame.render_widget(paragraph, area);
}

/// Status suffix shown in the header while a save or submit is in flight.
fn status_span(view: &ConsultationView) -> Span<'static> {
    if view.submitted {
        Span::styled(
            "  [submitted]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if view.submitting {
        Span::styled("  [submitting...]", Style::default().fg(Color::Yellow))
    } else if view.saving {
        Span::styled("  [saving...]", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("")
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &ConsultationView) {
    let patient = view.patient_id.and_then(patients::patient_by_id);
    let appointment = view.appointment_id.and_then(appointments::appointment_by_id);

    let mut spans = vec![Span::styled(
        match patient {
            Some(p) => format!(" {} ({}, {})", p.name, p.age, p.gender),
            None => " Walk-in consultation".to_string(),
        },
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(a) = appointment {
        spans.push(Span::styled(
            format!("  {} {} - {}", a.date, a.time, a.reason),
            Style::default().fg(Color::White),
        ));
    }
    spans.push(status_span(view));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_soap_section(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState,
    view: &ConsultationView,
    field: SoapField,
) {
    let focused = state.focus == FieldFocus::Soap(field);
    let editing = focused && state.edit_mode;

    let text = if editing {
        format!("{}_", state.edit_buffer)
    } else {
        view.draft.field(field).to_string()
    };

    let error = match field {
        SoapField::Subjective => view.errors.subjective,
        SoapField::Assessment => view.errors.assessment,
        _ => None,
    };

    let mut title_spans = vec![Span::raw(format!(" {} ", field.label()))];
    if let Some(message) = error {
        title_spans.push(Span::styled(
            format!("{message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title_spans)),
    );
    frame.render_widget(paragraph, area);
}

fn render_vitals(frame: &mut Frame, area: Rect, state: &ViewState, view: &ConsultationView) {
    let lines: Vec<Line> = VitalField::ALL
        .iter()
        .map(|field| {
            let focused = state.focus == FieldFocus::Vital(*field);
            let editing = focused && state.edit_mode;
            let value = if editing {
                format!("{}_", state.edit_buffer)
            } else {
                view.draft.vitals.get(*field).to_string()
            };
            let style = if editing {
                Style::default().fg(Color::Yellow)
            } else if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::styled(format!(" {:<7} {}", field.label(), value), style)
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Vitals "));
    frame.render_widget(paragraph, area);
}

fn render_prescriptions(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState,
    view: &ConsultationView,
) {
    let items: Vec<ListItem> = view
        .draft
        .prescriptions
        .iter()
        .map(|rx| {
            ListItem::new(vec![
                Line::styled(
                    format!("{} {}", rx.name, rx.dosage),
                    Style::default().fg(Color::White),
                ),
                Line::styled(
                    format!("  {} for {}", rx.frequency, rx.duration),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let count = view.draft.prescriptions.len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Prescriptions ({count}) [p: add, d: remove] ")),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if count > 0 {
        list_state.select(Some(state.rx_sel.min(count - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_attachments(frame: &mut Frame, area: Rect, view: &ConsultationView) {
    let lines: Vec<Line> = view
        .draft
        .attachments
        .iter()
        .map(|file| Line::raw(format!(" {} ({} bytes)", file.name, file.size)))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Attachments ({}) [a: add, x: remove] ", view.draft.attachments.len())),
    );
    frame.render_widget(paragraph, area);
}
