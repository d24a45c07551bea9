// Screen layout: panel arrangement and sizing.
//
// The portal uses one shared frame for every screen:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Body (fill) -- content of the active screen       |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// The Consultation screen further splits its body into a SOAP column and a
// sidebar (vitals, prescriptions, attachments).

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for the shared frame.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: clinic identity and screen tabs.
    pub status_bar: Rect,
    /// Content area for the active screen.
    pub body: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the shared frame layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // body
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        body: vertical[1],
        help_bar: vertical[2],
    }
}

/// Resolved areas for the Consultation screen body.
#[derive(Debug, Clone)]
pub struct ConsultationLayout {
    /// Patient / appointment header line.
    pub header: Rect,
    /// The four SOAP sections stacked vertically.
    pub soap: [Rect; 4],
    /// Vitals grid.
    pub vitals: Rect,
    /// Quick prescriptions list.
    pub prescriptions: Rect,
    /// Attachment list.
    pub attachments: Rect,
}

/// Split the body area for the consultation form: SOAP column on the left
/// (60%), vitals/prescriptions/attachments sidebar on the right.
pub fn build_consultation_layout(area: Rect) -> ConsultationLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(8),    // form
        ])
        .split(area);

    let header = vertical[0];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(vertical[1]);

    let soap_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(columns[0]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),      // vitals
            Constraint::Percentage(60), // prescriptions
            Constraint::Min(3),         // attachments
        ])
        .split(columns[1]);

    ConsultationLayout {
        header,
        soap: [soap_rows[0], soap_rows[1], soap_rows[2], soap_rows[3]],
        vitals: sidebar[0],
        prescriptions: sidebar[1],
        attachments: sidebar[2],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        for (name, rect) in [
            ("status_bar", layout.status_bar),
            ("body", layout.body),
            ("help_bar", layout.help_bar),
        ] {
            assert!(rect.width > 0 && rect.height > 0, "{name} has zero area");
        }
    }

    #[test]
    fn layout_rows_are_stacked() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.y, 0);
        assert_eq!(layout.body.y, 1);
        assert_eq!(layout.help_bar.y, layout.body.y + layout.body.height);
    }

    #[test]
    fn consultation_layout_fills_body() {
        let body = build_layout(test_area()).body;
        let consult = build_consultation_layout(body);
        assert!(consult.header.height > 0);
        for (i, rect) in consult.soap.iter().enumerate() {
            assert!(rect.height > 0, "soap section {i} has zero height");
        }
        assert!(consult.vitals.height > 0);
        assert!(consult.prescriptions.height > 0);
        assert!(consult.attachments.height > 0);
    }

    #[test]
    fn layout_survives_tiny_terminal() {
        let layout = build_layout(Rect::new(0, 0, 20, 6));
        // Just must not panic; zero-height body is acceptable here.
        let _ = build_consultation_layout(layout.body);
    }
}
