// Consultation draft data model and action reducer.

use serde::{Deserialize, Serialize};

/// The four SOAP note sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapField {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl SoapField {
    pub const ALL: [SoapField; 4] = [
        SoapField::Subjective,
        SoapField::Objective,
        SoapField::Assessment,
        SoapField::Plan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SoapField::Subjective => "Subjective",
            SoapField::Objective => "Objective",
            SoapField::Assessment => "Assessment",
            SoapField::Plan => "Plan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalField {
    BloodPressure,
    HeartRate,
    Temperature,
    RespRate,
    Spo2,
    Weight,
}

impl VitalField {
    pub const ALL: [VitalField; 6] = [
        VitalField::BloodPressure,
        VitalField::HeartRate,
        VitalField::Temperature,
        VitalField::RespRate,
        VitalField::Spo2,
        VitalField::Weight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VitalField::BloodPressure => "BP",
            VitalField::HeartRate => "HR",
            VitalField::Temperature => "Temp",
            VitalField::RespRate => "RR",
            VitalField::Spo2 => "SpO2",
            VitalField::Weight => "Weight",
        }
    }
}

/// Free-text vitals. Values are kept as entered; no unit parsing happens at
/// this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vitals {
    pub blood_pressure: String,
    pub heart_rate: String,
    pub temperature: String,
    pub resp_rate: String,
    pub spo2: String,
    pub weight: String,
}

impl Vitals {
    pub fn get(&self, field: VitalField) -> &str {
        match field {
            VitalField::BloodPressure => &self.blood_pressure,
            VitalField::HeartRate => &self.heart_rate,
            VitalField::Temperature => &self.temperature,
            VitalField::RespRate => &self.resp_rate,
            VitalField::Spo2 => &self.spo2,
            VitalField::Weight => &self.weight,
        }
    }
}

/// An attached file reference. Only the name and byte size travel with the
/// draft; file content never enters the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentRef {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrescriptionItem {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

/// The full consultation form state.
///
/// Every field carries a serde default so payloads written by an older
/// shape of this struct merge into the current one: missing fields (and
/// missing vitals sub-fields) fall back to their defaults instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultationDraft {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
    pub vitals: Vitals,
    pub attachments: Vec<AttachmentRef>,
    pub prescriptions: Vec<PrescriptionItem>,
    pub patient_id: Option<u32>,
}

/// Every edit the consultation form can make.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetField { field: SoapField, value: String },
    SetVital { field: VitalField, value: String },
    AddAttachment(AttachmentRef),
    RemoveAttachment(usize),
    AddPrescription(PrescriptionItem),
    RemovePrescription(usize),
    SetPatient(u32),
}

impl ConsultationDraft {
    /// Apply one action. Field writes are last-write-wins; list additions
    /// append in arrival order; removals are positional and out-of-range
    /// indices are a no-op.
    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::SetField { field, value } => match field {
                SoapField::Subjective => self.subjective = value,
                SoapField::Objective => self.objective = value,
                SoapField::Assessment => self.assessment = value,
                SoapField::Plan => self.plan = value,
            },
            DraftAction::SetVital { field, value } => match field {
                VitalField::BloodPressure => self.vitals.blood_pressure = value,
                VitalField::HeartRate => self.vitals.heart_rate = value,
                VitalField::Temperature => self.vitals.temperature = value,
                VitalField::RespRate => self.vitals.resp_rate = value,
                VitalField::Spo2 => self.vitals.spo2 = value,
                VitalField::Weight => self.vitals.weight = value,
            },
            DraftAction::AddAttachment(file) => self.attachments.push(file),
            DraftAction::RemoveAttachment(index) => {
                if index < self.attachments.len() {
                    self.attachments.remove(index);
                }
            }
            DraftAction::AddPrescription(item) => self.prescriptions.push(item),
            DraftAction::RemovePrescription(index) => {
                if index < self.prescriptions.len() {
                    self.prescriptions.remove(index);
                }
            }
            DraftAction::SetPatient(id) => self.patient_id = Some(id),
        }
    }

    pub fn field(&self, field: SoapField) -> &str {
        match field {
            SoapField::Subjective => &self.subjective,
            SoapField::Objective => &self.objective,
            SoapField::Assessment => &self.assessment,
            SoapField::Plan => &self.plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rx(name: &str) -> PrescriptionItem {
        PrescriptionItem {
            name: name.to_string(),
            dosage: "500mg".to_string(),
            frequency: "BID".to_string(),
            duration: "7 days".to_string(),
            instructions: String::new(),
        }
    }

    #[test]
    fn set_field_last_write_wins() {
        let mut draft = ConsultationDraft::default();
        draft.apply(DraftAction::SetField {
            field: SoapField::Plan,
            value: "rest".to_string(),
        });
        draft.apply(DraftAction::SetField {
            field: SoapField::Plan,
            value: "rest and fluids".to_string(),
        });
        assert_eq!(draft.plan, "rest and fluids");
        assert_eq!(draft.subjective, "");
    }

    #[test]
    fn set_vital_touches_one_field() {
        let mut draft = ConsultationDraft::default();
        draft.apply(DraftAction::SetVital {
            field: VitalField::BloodPressure,
            value: "120/80".to_string(),
        });
        assert_eq!(draft.vitals.blood_pressure, "120/80");
        assert_eq!(draft.vitals.heart_rate, "");
    }

    #[test]
    fn attachments_preserve_insertion_order() {
        let mut draft = ConsultationDraft::default();
        draft.apply(DraftAction::AddAttachment(AttachmentRef {
            name: "xray.png".to_string(),
            size: 1024,
        }));
        draft.apply(DraftAction::AddAttachment(AttachmentRef {
            name: "labs.pdf".to_string(),
            size: 2048,
        }));
        assert_eq!(draft.attachments[0].name, "xray.png");
        assert_eq!(draft.attachments[1].name, "labs.pdf");
    }

    #[test]
    fn remove_attachment_is_positional() {
        let mut draft = ConsultationDraft::default();
        for name in ["a", "b", "c"] {
            draft.apply(DraftAction::AddAttachment(AttachmentRef {
                name: name.to_string(),
                size: 1,
            }));
        }
        draft.apply(DraftAction::RemoveAttachment(1));
        let names: Vec<_> = draft.attachments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut draft = ConsultationDraft::default();
        draft.apply(DraftAction::AddPrescription(rx("Metformin")));
        draft.apply(DraftAction::RemovePrescription(5));
        draft.apply(DraftAction::RemoveAttachment(0));
        assert_eq!(draft.prescriptions.len(), 1);
    }

    #[test]
    fn remove_prescription_keeps_relative_order() {
        let mut draft = ConsultationDraft::default();
        draft.apply(DraftAction::AddPrescription(rx("Lisinopril")));
        draft.apply(DraftAction::AddPrescription(rx("Metformin")));
        draft.apply(DraftAction::AddPrescription(rx("Atorvastatin")));
        draft.apply(DraftAction::RemovePrescription(0));
        let names: Vec<_> = draft.prescriptions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Metformin", "Atorvastatin"]);
    }

    #[test]
    fn serde_round_trip_preserves_everything() {
        let mut draft = ConsultationDraft::default();
        draft.apply(DraftAction::SetField {
            field: SoapField::Assessment,
            value: "Viral URI".to_string(),
        });
        draft.apply(DraftAction::SetVital {
            field: VitalField::Spo2,
            value: "98".to_string(),
        });
        draft.apply(DraftAction::AddPrescription(rx("Metformin")));
        draft.apply(DraftAction::SetPatient(4));

        let json = serde_json::to_string(&draft).unwrap();
        let back: ConsultationDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn partial_payload_merges_into_defaults() {
        // A payload from an older shape: missing plan, partial vitals,
        // no attachments. Unknown fields must not break parsing either.
        let raw = r#"{
            "subjective": "headache",
            "vitals": { "bloodPressure": "130/85" },
            "legacyField": true
        }"#;
        let draft: ConsultationDraft = serde_json::from_str(raw).unwrap();
        assert_eq!(draft.subjective, "headache");
        assert_eq!(draft.plan, "");
        assert_eq!(draft.vitals.blood_pressure, "130/85");
        assert_eq!(draft.vitals.heart_rate, "");
        assert!(draft.attachments.is_empty());
        assert!(draft.patient_id.is_none());
    }
}
