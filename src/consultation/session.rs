// Consultation session: one draft's lifecycle against the persistent store.

use anyhow::{Context, Result};
use tracing::warn;

use crate::consultation::draft::{ConsultationDraft, DraftAction};
use crate::data::appointments;
use crate::db::DraftStore;

const REQUIRED: &str = "Required";

/// Derive the store key for a consultation. Consultations opened outside an
/// appointment share the single "new" slot.
pub fn draft_key(appointment_id: Option<u32>) -> String {
    match appointment_id {
        Some(id) => format!("consultation-draft-{id}"),
        None => "consultation-draft-new".to_string(),
    }
}

/// Field-scoped validation failures from the last submit attempt.
///
/// The blank-note rule (subjective and objective both empty) surfaces on the
/// subjective field; assessment is checked independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub subjective: Option<&'static str>,
    pub assessment: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.subjective.is_none() && self.assessment.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft written to the store; the saving indicator is now pending.
    Saved,
    /// A save or submit is already pending, or the session is finished.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the stored draft was deleted and the submission
    /// is pending.
    Accepted,
    /// Required fields missing; see `validation_errors()`.
    ValidationFailed,
    /// A submission is already pending or has completed.
    Ignored,
}

/// Owns the active consultation draft and its transient UI state. The
/// transient flags (saving/submitting/errors) are never persisted; only the
/// draft itself reaches the store.
#[derive(Debug)]
pub struct ConsultationSession {
    key: String,
    appointment_id: Option<u32>,
    /// Patient resolved from the appointment, when one exists. Takes
    /// precedence over any patient stored in the draft.
    appointment_patient: Option<u32>,
    draft: ConsultationDraft,
    validation: ValidationErrors,
    saving: bool,
    submitting: bool,
    submitted: bool,
}

impl ConsultationSession {
    /// Open a session for the given appointment (or the standalone "new"
    /// consultation), loading any stored draft.
    ///
    /// A stored payload that fails to parse is purged from the store and the
    /// session starts from a blank draft. When no stored draft exists, the
    /// appointment's patient is seeded into the draft.
    pub fn hydrate(store: &dyn DraftStore, appointment_id: Option<u32>) -> Result<Self> {
        let key = draft_key(appointment_id);
        let appointment_patient = appointment_id
            .and_then(appointments::appointment_by_id)
            .map(|a| a.patient_id);

        let mut draft = ConsultationDraft::default();
        match store.get(&key).context("failed to load stored draft")? {
            Some(raw) => match serde_json::from_str::<ConsultationDraft>(&raw) {
                Ok(stored) => draft = stored,
                Err(e) => {
                    warn!(key, error = %e, "purging corrupt stored draft");
                    store
                        .delete(&key)
                        .context("failed to purge corrupt draft")?;
                }
            },
            None => {
                if let Some(patient_id) = appointment_patient {
                    draft.patient_id = Some(patient_id);
                }
            }
        }

        Ok(Self {
            key,
            appointment_id,
            appointment_patient,
            draft,
            validation: ValidationErrors::default(),
            saving: false,
            submitting: false,
            submitted: false,
        })
    }

    /// Apply an edit to the draft.
    ///
    /// `SetPatient` is ignored while an appointment-derived patient exists;
    /// manual selection only applies to standalone consultations. Quick
    /// prescriptions missing any core field are rejected before they reach
    /// the draft.
    pub fn apply(&mut self, action: DraftAction) {
        if self.submitted {
            return;
        }
        match &action {
            DraftAction::SetPatient(_) if self.appointment_patient.is_some() => return,
            DraftAction::AddPrescription(item)
                if item.name.is_empty()
                    || item.dosage.is_empty()
                    || item.frequency.is_empty()
                    || item.duration.is_empty() =>
            {
                return;
            }
            _ => {}
        }
        self.draft.apply(action);
    }

    /// Serialize the full draft and write it under this session's key.
    /// A store failure leaves the in-memory draft untouched.
    pub fn save_draft(&mut self, store: &dyn DraftStore) -> Result<SaveOutcome> {
        if self.saving || self.submitting || self.submitted {
            return Ok(SaveOutcome::Ignored);
        }
        let payload = self.payload_json()?;
        store
            .set(&self.key, &payload)
            .context("failed to save draft")?;
        self.saving = true;
        Ok(SaveOutcome::Saved)
    }

    /// Marks the pending save as settled (called when the save indicator
    /// delay elapses).
    pub fn settle_save(&mut self) {
        self.saving = false;
    }

    /// Validate and submit the consultation.
    ///
    /// The rule, kept exactly as the form behaves: fail when subjective and
    /// objective are both empty, or when assessment is empty. On failure the
    /// errors are recorded and nothing else changes. On success the stored
    /// draft entry is deleted and the submission becomes pending.
    pub fn submit(&mut self, store: &dyn DraftStore) -> Result<SubmitOutcome> {
        if self.submitting || self.submitted {
            return Ok(SubmitOutcome::Ignored);
        }

        let mut errors = ValidationErrors::default();
        if self.draft.subjective.is_empty() && self.draft.objective.is_empty() {
            errors.subjective = Some(REQUIRED);
        }
        if self.draft.assessment.is_empty() {
            errors.assessment = Some(REQUIRED);
        }
        self.validation = errors;
        if !self.validation.is_empty() {
            return Ok(SubmitOutcome::ValidationFailed);
        }

        store
            .delete(&self.key)
            .context("failed to clear stored draft on submit")?;
        self.submitting = true;
        Ok(SubmitOutcome::Accepted)
    }

    /// Marks the pending submission as settled.
    pub fn settle_submit(&mut self) {
        self.submitting = false;
        self.submitted = true;
    }

    /// The draft serialized exactly as it is stored and submitted.
    pub fn payload_json(&self) -> Result<String> {
        serde_json::to_string(&self.draft).context("failed to serialize draft")
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn appointment_id(&self) -> Option<u32> {
        self.appointment_id
    }

    /// The patient in effect: the appointment's patient when one exists,
    /// otherwise whatever the draft carries.
    pub fn patient_id(&self) -> Option<u32> {
        self.appointment_patient.or(self.draft.patient_id)
    }

    pub fn draft(&self) -> &ConsultationDraft {
        &self.draft
    }

    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}
