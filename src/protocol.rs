// Message types exchanged between the TUI and the app orchestrator.

use crate::consultation::draft::{ConsultationDraft, DraftAction};
use crate::consultation::session::ValidationErrors;

/// The portal's screens, in keyboard order (`1`..`7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Dashboard,
    Appointments,
    Patients,
    Consultation,
    Prescriptions,
    Messages,
    Products,
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Dashboard,
        ScreenId::Appointments,
        ScreenId::Patients,
        ScreenId::Consultation,
        ScreenId::Prescriptions,
        ScreenId::Messages,
        ScreenId::Products,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Dashboard => "Dashboard",
            ScreenId::Appointments => "Appointments",
            ScreenId::Patients => "Patients",
            ScreenId::Consultation => "Consultation",
            ScreenId::Prescriptions => "Prescriptions",
            ScreenId::Messages => "Messages",
            ScreenId::Products => "Products",
        }
    }

    /// Map a digit key to its screen.
    pub fn from_digit(digit: char) -> Option<ScreenId> {
        match digit {
            '1' => Some(ScreenId::Dashboard),
            '2' => Some(ScreenId::Appointments),
            '3' => Some(ScreenId::Patients),
            '4' => Some(ScreenId::Consultation),
            '5' => Some(ScreenId::Prescriptions),
            '6' => Some(ScreenId::Messages),
            '7' => Some(ScreenId::Products),
            _ => None,
        }
    }
}

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Open a consultation session, either for an appointment or standalone.
    OpenConsultation { appointment_id: Option<u32> },
    /// Apply an edit to the active consultation draft.
    Draft(DraftAction),
    /// Persist the active draft (Ctrl+S).
    SaveDraft,
    /// Validate and submit the active consultation (Ctrl+Enter).
    Submit,
    /// Drop the active session without saving.
    CloseConsultation,
    /// Shut the application down.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient notification shown in the TUI overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn info(title: &str, message: &str) -> Self {
        Toast {
            kind: ToastKind::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn success(title: &str, message: &str) -> Self {
        Toast {
            kind: ToastKind::Success,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Toast {
            kind: ToastKind::Error,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// Snapshot of the active consultation session for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationView {
    pub appointment_id: Option<u32>,
    pub patient_id: Option<u32>,
    pub draft: ConsultationDraft,
    pub errors: ValidationErrors,
    pub saving: bool,
    pub submitting: bool,
    pub submitted: bool,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// The consultation session changed (opened, edited, settled). `None`
    /// means no session is active.
    Consultation(Option<Box<ConsultationView>>),
    /// Show a transient notification.
    Toast(Toast),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_digits_cover_all_screens() {
        for (i, screen) in ScreenId::ALL.iter().enumerate() {
            let digit = char::from_digit(i as u32 + 1, 10).unwrap();
            assert_eq!(ScreenId::from_digit(digit), Some(*screen));
        }
        assert_eq!(ScreenId::from_digit('8'), None);
        assert_eq!(ScreenId::from_digit('0'), None);
    }
}
