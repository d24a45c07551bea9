// Historical consultation records (the "recent consultations" panel).

use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct RecordedVitals {
    pub blood_pressure: &'static str,
    pub heart_rate: u32,
    pub temperature: f32,
    pub weight: f32,
    pub height: f32,
    pub bmi: f32,
}

#[derive(Debug, Clone)]
pub struct ConsultationRecord {
    pub id: u32,
    pub patient_id: u32,
    pub date: &'static str,
    pub diagnosis: &'static str,
    pub symptoms: &'static [&'static str],
    pub notes: &'static str,
    pub follow_up_date: Option<&'static str>,
    pub vitals: RecordedVitals,
}

pub fn all() -> &'static [ConsultationRecord] {
    static RECORDS: OnceLock<Vec<ConsultationRecord>> = OnceLock::new();
    RECORDS.get_or_init(|| {
        vec![
            ConsultationRecord {
                id: 1,
                patient_id: 1,
                date: "2024-11-15",
                diagnosis: "Essential (primary) hypertension",
                symptoms: &["Elevated blood pressure", "Mild headache"],
                notes: "BP remains elevated despite current medication. Recommended \
                        reduced sodium intake and regular exercise. Will adjust \
                        medication and follow up in 4 weeks.",
                follow_up_date: Some("2024-12-13"),
                vitals: RecordedVitals {
                    blood_pressure: "142/92",
                    heart_rate: 78,
                    temperature: 98.2,
                    weight: 185.0,
                    height: 70.0,
                    bmi: 26.5,
                },
            },
            ConsultationRecord {
                id: 2,
                patient_id: 1,
                date: "2024-10-10",
                diagnosis: "Hypertension follow-up",
                symptoms: &["Occasional dizziness", "Mild fatigue"],
                notes: "BP improved but still above target. Increased dosage of \
                        current medication. Advised home BP monitoring twice daily.",
                follow_up_date: None,
                vitals: RecordedVitals {
                    blood_pressure: "138/88",
                    heart_rate: 72,
                    temperature: 98.0,
                    weight: 183.0,
                    height: 70.0,
                    bmi: 26.3,
                },
            },
            ConsultationRecord {
                id: 3,
                patient_id: 1,
                date: "2024-09-05",
                diagnosis: "Initial hypertension diagnosis",
                symptoms: &["Headaches", "Nosebleeds", "Shortness of breath"],
                notes: "BP significantly elevated. Started initial antihypertensive \
                        therapy. Ordered blood work to rule out secondary causes.",
                follow_up_date: Some("2024-10-10"),
                vitals: RecordedVitals {
                    blood_pressure: "156/98",
                    heart_rate: 82,
                    temperature: 98.4,
                    weight: 187.0,
                    height: 70.0,
                    bmi: 26.8,
                },
            },
            ConsultationRecord {
                id: 4,
                patient_id: 2,
                date: "2024-11-20",
                diagnosis: "Type 2 Diabetes Mellitus",
                symptoms: &["Increased thirst", "Frequent urination", "Fatigue"],
                notes: "Newly diagnosed type 2 diabetes. Started on metformin. \
                        Referred to diabetes education program.",
                follow_up_date: Some("2024-12-18"),
                vitals: RecordedVitals {
                    blood_pressure: "130/84",
                    heart_rate: 76,
                    temperature: 98.2,
                    weight: 210.0,
                    height: 66.0,
                    bmi: 33.9,
                },
            },
            ConsultationRecord {
                id: 5,
                patient_id: 3,
                date: "2024-11-18",
                diagnosis: "Post-operative follow-up",
                symptoms: &["Incision tenderness"],
                notes: "Surgical site healing well, no signs of infection. Cleared \
                        for light activity; lifting restriction continues 2 weeks.",
                follow_up_date: Some("2024-12-15"),
                vitals: RecordedVitals {
                    blood_pressure: "124/80",
                    heart_rate: 70,
                    temperature: 98.6,
                    weight: 176.0,
                    height: 71.0,
                    bmi: 24.5,
                },
            },
            ConsultationRecord {
                id: 6,
                patient_id: 7,
                date: "2024-11-12",
                diagnosis: "Hyperlipidemia",
                symptoms: &[],
                notes: "LDL above target on current statin dose. Dose increased; \
                        repeat lipid panel ordered for next visit.",
                follow_up_date: Some("2024-12-16"),
                vitals: RecordedVitals {
                    blood_pressure: "128/82",
                    heart_rate: 74,
                    temperature: 98.1,
                    weight: 192.0,
                    height: 69.0,
                    bmi: 28.4,
                },
            },
        ]
    })
}

/// Records for one patient, most recent first.
pub fn consultations_by_patient_id(patient_id: u32) -> Vec<&'static ConsultationRecord> {
    let mut records: Vec<_> = all().iter().filter(|r| r.patient_id == patient_id).collect();
    records.sort_by(|a, b| b.date.cmp(a.date));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consultations_by_patient_sorted_most_recent_first() {
        let records = consultations_by_patient_id(1);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, "2024-11-15");
        assert_eq!(records[1].date, "2024-10-10");
        assert_eq!(records[2].date, "2024-09-05");
    }

    #[test]
    fn consultations_empty_for_patient_without_history() {
        assert!(consultations_by_patient_id(10).is_empty());
    }
}
