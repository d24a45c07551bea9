// Application state and orchestration logic.
//
// The central event loop that coordinates user commands from the TUI with
// the consultation session and the database, and pushes UI updates back to
// the TUI render loop. Save and submit indicators settle through spawned
// delay tasks reporting over the effect channel.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::consultation::session::{ConsultationSession, SaveOutcome, SubmitOutcome};
use crate::db::Database;
use crate::protocol::{ConsultationView, Toast, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

/// Completion signals from spawned delay tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SaveSettled,
    SubmitSettled,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    /// The active consultation session, at most one.
    pub session: Option<ConsultationSession>,
    /// Sender for effect completions; spawned delay tasks use a clone of
    /// this sender so the loop hears back when an indicator settles.
    effect_tx: mpsc::Sender<Effect>,
}

impl AppState {
    pub fn new(config: Config, db: Database, effect_tx: mpsc::Sender<Effect>) -> Self {
        AppState {
            config,
            db,
            session: None,
            effect_tx,
        }
    }

    /// Snapshot the active session for the TUI.
    fn consultation_view(&self) -> Option<Box<ConsultationView>> {
        self.session.as_ref().map(|s| {
            Box::new(ConsultationView {
                appointment_id: s.appointment_id(),
                patient_id: s.patient_id(),
                draft: s.draft().clone(),
                errors: s.validation_errors().clone(),
                saving: s.is_saving(),
                submitting: s.is_submitting(),
                submitted: s.is_submitted(),
            })
        })
    }

    /// Spawn a task that reports `effect` after `delay_ms`. Zero delay still
    /// goes through the channel so settling is always asynchronous from the
    /// caller's point of view.
    fn spawn_settle(&self, effect: Effect, delay_ms: u64) {
        let tx = self.effect_tx.clone();
        tokio::spawn(async move {
            if delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            }
            let _ = tx.send(effect).await;
        });
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the application orchestrator.
///
/// Listens on two channels using `tokio::select!`:
/// 1. User commands from the TUI
/// 2. Effect completions from spawned delay tasks
///
/// Pushes UI updates through `ui_tx` for the TUI render loop.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    mut effect_rx: mpsc::Receiver<Effect>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            effect = effect_rx.recv() => {
                match effect {
                    Some(effect) => {
                        handle_effect(&mut state, effect, &ui_tx).await;
                    }
                    None => {
                        info!("Effect channel closed, shutting down");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Command handling
// ---------------------------------------------------------------------------

async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::OpenConsultation { appointment_id } => {
            match ConsultationSession::hydrate(&state.db, appointment_id) {
                Ok(session) => {
                    info!(?appointment_id, "Consultation session opened");
                    state.session = Some(session);
                    push_consultation(state, ui_tx).await;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to open consultation session");
                    let _ = ui_tx
                        .send(UiUpdate::Toast(Toast::error(
                            "Store Error",
                            "Could not load the draft. Try again.",
                        )))
                        .await;
                }
            }
        }

        UserCommand::Draft(action) => {
            if let Some(session) = state.session.as_mut() {
                session.apply(action);
                push_consultation(state, ui_tx).await;
            }
        }

        UserCommand::SaveDraft => {
            let Some(session) = state.session.as_mut() else {
                return;
            };
            match session.save_draft(&state.db) {
                Ok(SaveOutcome::Saved) => {
                    let delay = state.config.ui.save_delay_ms;
                    state.spawn_settle(Effect::SaveSettled, delay);
                    push_consultation(state, ui_tx).await;
                }
                Ok(SaveOutcome::Ignored) => {}
                Err(e) => {
                    // The in-memory draft survives; the user can retry.
                    warn!(error = %e, "Draft save failed");
                    let _ = ui_tx
                        .send(UiUpdate::Toast(Toast::error(
                            "Save Failed",
                            "Could not write the draft. Try again.",
                        )))
                        .await;
                    push_consultation(state, ui_tx).await;
                }
            }
        }

        UserCommand::Submit => {
            let Some(session) = state.session.as_mut() else {
                return;
            };
            match session.submit(&state.db) {
                Ok(SubmitOutcome::Accepted) => {
                    let delay = state.config.ui.submit_delay_ms;
                    state.spawn_settle(Effect::SubmitSettled, delay);
                    push_consultation(state, ui_tx).await;
                }
                Ok(SubmitOutcome::ValidationFailed) => {
                    let _ = ui_tx
                        .send(UiUpdate::Toast(Toast::error(
                            "Validation Error",
                            "Please fill required fields.",
                        )))
                        .await;
                    push_consultation(state, ui_tx).await;
                }
                Ok(SubmitOutcome::Ignored) => {}
                Err(e) => {
                    warn!(error = %e, "Consultation submit failed");
                    let _ = ui_tx
                        .send(UiUpdate::Toast(Toast::error(
                            "Submit Failed",
                            "Could not clear the stored draft. Try again.",
                        )))
                        .await;
                    push_consultation(state, ui_tx).await;
                }
            }
        }

        UserCommand::CloseConsultation => {
            if state.session.take().is_some() {
                info!("Consultation session closed");
            }
            let _ = ui_tx.send(UiUpdate::Consultation(None)).await;
        }

        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

// ---------------------------------------------------------------------------
// Effect handling
// ---------------------------------------------------------------------------

async fn handle_effect(state: &mut AppState, effect: Effect, ui_tx: &mpsc::Sender<UiUpdate>) {
    // The session may have been closed while the delay task slept.
    let Some(session) = state.session.as_mut() else {
        return;
    };

    match effect {
        Effect::SaveSettled => {
            session.settle_save();
            let _ = ui_tx
                .send(UiUpdate::Toast(Toast::success(
                    "Draft Saved",
                    "Consultation draft saved locally.",
                )))
                .await;
            push_consultation(state, ui_tx).await;
        }
        Effect::SubmitSettled => {
            session.settle_submit();
            let payload = session.payload_json().unwrap_or_else(|_| "{}".to_string());
            let appointment_id = session.appointment_id().map(|id| id.to_string());
            let patient_id = session.patient_id().map(|id| id.to_string());
            if let Err(e) = state.db.record_submission(
                appointment_id.as_deref(),
                patient_id.as_deref(),
                &payload,
            ) {
                warn!(error = %e, "Failed to record submission");
            }
            let _ = ui_tx
                .send(UiUpdate::Toast(Toast::success(
                    "Consultation Submitted",
                    "Consultation saved successfully.",
                )))
                .await;
            push_consultation(state, ui_tx).await;
        }
    }
}

async fn push_consultation(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx
        .send(UiUpdate::Consultation(state.consultation_view()))
        .await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
