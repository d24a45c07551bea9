// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors relevant parts of the application
// state. The app orchestrator pushes `UiUpdate` messages over an mpsc channel;
// the TUI applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::config::ClinicConfig;
use crate::consultation::draft::{DraftAction, SoapField, VitalField};
use crate::protocol::{ConsultationView, ScreenId, Toast, UiUpdate, UserCommand};

use layout::build_layout;

/// How many render ticks a toast stays visible (~3 s at 30 fps).
const TOAST_TICKS: u16 = 90;

// ---------------------------------------------------------------------------
// FieldFocus
// ---------------------------------------------------------------------------

/// Which consultation form field currently has focus. Tab/BackTab cycle
/// through the SOAP sections first, then the vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Soap(SoapField),
    Vital(VitalField),
}

impl FieldFocus {
    pub const ORDER: [FieldFocus; 10] = [
        FieldFocus::Soap(SoapField::Subjective),
        FieldFocus::Soap(SoapField::Objective),
        FieldFocus::Soap(SoapField::Assessment),
        FieldFocus::Soap(SoapField::Plan),
        FieldFocus::Vital(VitalField::BloodPressure),
        FieldFocus::Vital(VitalField::HeartRate),
        FieldFocus::Vital(VitalField::Temperature),
        FieldFocus::Vital(VitalField::RespRate),
        FieldFocus::Vital(VitalField::Spo2),
        FieldFocus::Vital(VitalField::Weight),
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> FieldFocus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> FieldFocus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator;
/// selections, focus, and modal flags are purely local.
pub struct ViewState {
    /// Clinic identity for the status bar.
    pub clinic: ClinicConfig,
    /// Which screen is active.
    pub active_screen: ScreenId,
    /// List selections, one per list screen.
    pub appointment_sel: usize,
    pub patient_sel: usize,
    pub formulary_sel: usize,
    pub message_sel: usize,
    pub product_sel: usize,
    /// Snapshot of the active consultation session, if any.
    pub consultation: Option<Box<ConsultationView>>,
    /// Focused consultation form field.
    pub focus: FieldFocus,
    /// Whether keystrokes are captured into the focused field.
    pub edit_mode: bool,
    /// Text of the focused field while editing.
    pub edit_buffer: String,
    /// Selection within the draft's prescription list.
    pub rx_sel: usize,
    /// Whether the quick-prescription picker overlay is open.
    pub picker_open: bool,
    pub picker_sel: usize,
    /// Whether the quit confirmation overlay is open.
    pub confirm_quit: bool,
    /// Most recent toast and its remaining display ticks.
    pub toast: Option<Toast>,
    pub toast_ticks: u16,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            clinic: ClinicConfig {
                name: String::new(),
                doctor: String::new(),
            },
            active_screen: ScreenId::Dashboard,
            appointment_sel: 0,
            patient_sel: 0,
            formulary_sel: 0,
            message_sel: 0,
            product_sel: 0,
            consultation: None,
            focus: FieldFocus::ORDER[0],
            edit_mode: false,
            edit_buffer: String::new(),
            rx_sel: 0,
            picker_open: false,
            picker_sel: 0,
            confirm_quit: false,
            toast: None,
            toast_ticks: 0,
        }
    }
}

impl ViewState {
    /// Load the focused field's current text into the edit buffer.
    pub fn reload_edit_buffer(&mut self) {
        let Some(view) = self.consultation.as_ref() else {
            self.edit_buffer.clear();
            return;
        };
        self.edit_buffer = match self.focus {
            FieldFocus::Soap(field) => view.draft.field(field).to_string(),
            FieldFocus::Vital(field) => view.draft.vitals.get(field).to_string(),
        };
    }

    /// Build the draft edit for the focused field from the edit buffer.
    pub fn focused_field_command(&self) -> UserCommand {
        let value = self.edit_buffer.clone();
        match self.focus {
            FieldFocus::Soap(field) => UserCommand::Draft(DraftAction::SetField { field, value }),
            FieldFocus::Vital(field) => UserCommand::Draft(DraftAction::SetVital { field, value }),
        }
    }

    /// Reset consultation-local UI state when a session opens.
    pub fn reset_consultation_focus(&mut self) {
        self.focus = FieldFocus::ORDER[0];
        self.edit_mode = false;
        self.edit_buffer.clear();
        self.rx_sel = 0;
        self.picker_open = false;
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Consultation(view) => {
            // Keep the prescription selection inside the (possibly shrunk) list.
            if let Some(view) = view.as_ref() {
                let count = view.draft.prescriptions.len();
                if state.rx_sel >= count {
                    state.rx_sel = count.saturating_sub(1);
                }
            }
            state.consultation = view;
        }
        UiUpdate::Toast(toast) => {
            state.toast = Some(toast);
            state.toast_ticks = TOAST_TICKS;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame: status bar, active screen, help bar, and any
/// overlays (prescription picker, quit confirm, toast).
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);

    match state.active_screen {
        ScreenId::Dashboard => widgets::dashboard::render(frame, layout.body, state),
        ScreenId::Appointments => widgets::appointments::render(frame, layout.body, state),
        ScreenId::Patients => widgets::patients::render(frame, layout.body, state),
        ScreenId::Consultation => widgets::consultation::render(frame, layout.body, state),
        ScreenId::Prescriptions => widgets::prescriptions::render(frame, layout.body, state),
        ScreenId::Messages => widgets::messages::render(frame, layout.body, state),
        ScreenId::Products => widgets::products::render(frame, layout.body, state),
    }

    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.picker_open {
        widgets::rx_picker::render(frame, frame.area(), state);
    }
    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
    if state.toast.is_some() && state.toast_ticks > 0 {
        widgets::toast::render(frame, frame.area(), state);
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    clinic: ClinicConfig,
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();

    // 2. Set panic hook to restore the terminal on crash.
    //    We capture the original hook and chain ours before it.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    // 3. Create ViewState
    let mut view_state = ViewState {
        clinic,
        ..ViewState::default()
    };

    // 4. Create crossterm EventStream for async keyboard input
    let mut event_stream = EventStream::new();

    // 5. Create render interval (~30fps)
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // 6. Main loop
    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse events, resize events, etc. -- ignore
                    }
                    Some(Err(_)) | None => {
                        // Input error or stream ended
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                if view_state.toast_ticks > 0 {
                    view_state.toast_ticks -= 1;
                    if view_state.toast_ticks == 0 {
                        view_state.toast = None;
                    }
                }
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    // 7. Restore terminal
    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToastKind;

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert_eq!(state.active_screen, ScreenId::Dashboard);
        assert!(state.consultation.is_none());
        assert!(!state.edit_mode);
        assert!(!state.picker_open);
        assert!(!state.confirm_quit);
        assert!(state.toast.is_none());
        assert_eq!(state.focus, FieldFocus::Soap(SoapField::Subjective));
    }

    #[test]
    fn focus_order_cycles_through_all_ten_stops() {
        let mut focus = FieldFocus::ORDER[0];
        for expected in FieldFocus::ORDER.iter().skip(1) {
            focus = focus.next();
            assert_eq!(focus, *expected);
        }
        // Wraps back to the start.
        assert_eq!(focus.next(), FieldFocus::ORDER[0]);
        assert_eq!(FieldFocus::ORDER[0].prev(), FieldFocus::ORDER[9]);
    }

    #[test]
    fn apply_ui_update_toast_arms_timer() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::Toast(Toast::success("Draft Saved", "ok")),
        );
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(state.toast_ticks, TOAST_TICKS);
    }

    #[test]
    fn apply_ui_update_consultation_clamps_rx_selection() {
        let mut state = ViewState::default();
        state.rx_sel = 5;
        apply_ui_update(
            &mut state,
            UiUpdate::Consultation(Some(Box::new(ConsultationView::default()))),
        );
        assert_eq!(state.rx_sel, 0);
        assert!(state.consultation.is_some());

        apply_ui_update(&mut state, UiUpdate::Consultation(None));
        assert!(state.consultation.is_none());
    }

    #[test]
    fn reload_edit_buffer_reads_focused_field() {
        let mut state = ViewState::default();
        let mut view = ConsultationView::default();
        view.draft.objective = "BP 120/80".to_string();
        view.draft.vitals.spo2 = "98".to_string();
        state.consultation = Some(Box::new(view));

        state.focus = FieldFocus::Soap(SoapField::Objective);
        state.reload_edit_buffer();
        assert_eq!(state.edit_buffer, "BP 120/80");

        state.focus = FieldFocus::Vital(VitalField::Spo2);
        state.reload_edit_buffer();
        assert_eq!(state.edit_buffer, "98");
    }
}
