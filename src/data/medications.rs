// Medication formulary feeding the quick-prescription picker.

use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Medication {
    pub id: u32,
    pub name: &'static str,
    pub generic_name: &'static str,
    pub dosage: &'static str,
    pub form: &'static str,
    pub category: &'static str,
}

pub fn all() -> &'static [Medication] {
    static MEDICATIONS: OnceLock<Vec<Medication>> = OnceLock::new();
    MEDICATIONS.get_or_init(|| {
        vec![
            Medication {
                id: 1,
                name: "Lisinopril",
                generic_name: "Lisinopril",
                dosage: "10mg",
                form: "Tablet",
                category: "Hypertension",
            },
            Medication {
                id: 2,
                name: "Hydrochlorothiazide",
                generic_name: "Hydrochlorothiazide",
                dosage: "12.5mg",
                form: "Tablet",
                category: "Hypertension",
            },
            Medication {
                id: 3,
                name: "Amlodipine",
                generic_name: "Amlodipine Besylate",
                dosage: "5mg",
                form: "Tablet",
                category: "Hypertension",
            },
            Medication {
                id: 4,
                name: "Metformin",
                generic_name: "Metformin HCl",
                dosage: "500mg",
                form: "Tablet",
                category: "Diabetes",
            },
            Medication {
                id: 5,
                name: "Atorvastatin",
                generic_name: "Atorvastatin Calcium",
                dosage: "40mg",
                form: "Tablet",
                category: "Cholesterol",
            },
            Medication {
                id: 6,
                name: "Clopidogrel",
                generic_name: "Clopidogrel Bisulfate",
                dosage: "75mg",
                form: "Tablet",
                category: "Cardiovascular",
            },
            Medication {
                id: 7,
                name: "Albuterol",
                generic_name: "Albuterol Sulfate",
                dosage: "90mcg",
                form: "Inhaler",
                category: "Respiratory",
            },
            Medication {
                id: 8,
                name: "Levothyroxine",
                generic_name: "Levothyroxine Sodium",
                dosage: "50mcg",
                form: "Tablet",
                category: "Thyroid",
            },
            Medication {
                id: 9,
                name: "Ibuprofen",
                generic_name: "Ibuprofen",
                dosage: "600mg",
                form: "Tablet",
                category: "Analgesic",
            },
            Medication {
                id: 10,
                name: "Sumatriptan",
                generic_name: "Sumatriptan Succinate",
                dosage: "50mg",
                form: "Tablet",
                category: "Migraine",
            },
        ]
    })
}

/// Names shown in the quick-prescription picker, formulary order.
pub fn medication_names() -> Vec<&'static str> {
    all().iter().map(|m| m.name).collect()
}

pub fn medication_by_name(name: &str) -> Option<&'static Medication> {
    all().iter().find(|m| m.name.eq_ignore_ascii_case(name))
}
