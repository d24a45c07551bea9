// Patient roster.

use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Patient {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
    pub gender: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub condition: &'static str,
    pub last_visit: &'static str,
}

pub fn all() -> &'static [Patient] {
    static PATIENTS: OnceLock<Vec<Patient>> = OnceLock::new();
    PATIENTS.get_or_init(|| {
        vec![
            Patient {
                id: 1,
                name: "John Smith",
                age: 54,
                gender: "Male",
                phone: "555-0101",
                email: "john.smith@example.com",
                condition: "Hypertension",
                last_visit: "2024-11-15",
            },
            Patient {
                id: 2,
                name: "Emma Johnson",
                age: 47,
                gender: "Female",
                phone: "555-0102",
                email: "emma.johnson@example.com",
                condition: "Type 2 Diabetes",
                last_visit: "2024-11-20",
            },
            Patient {
                id: 3,
                name: "Michael Brown",
                age: 61,
                gender: "Male",
                phone: "555-0103",
                email: "michael.brown@example.com",
                condition: "Post-surgical recovery",
                last_visit: "2024-11-18",
            },
            Patient {
                id: 4,
                name: "Sarah Davis",
                age: 58,
                gender: "Female",
                phone: "555-0104",
                email: "sarah.davis@example.com",
                condition: "Atrial fibrillation",
                last_visit: "2024-11-22",
            },
            Patient {
                id: 5,
                name: "Robert Wilson",
                age: 68,
                gender: "Male",
                phone: "555-0105",
                email: "robert.wilson@example.com",
                condition: "COPD",
                last_visit: "2024-11-10",
            },
            Patient {
                id: 6,
                name: "Emily Thompson",
                age: 29,
                gender: "Female",
                phone: "555-0106",
                email: "emily.thompson@example.com",
                condition: "Asthma",
                last_visit: "2024-11-25",
            },
            Patient {
                id: 7,
                name: "David Lee",
                age: 52,
                gender: "Male",
                phone: "555-0107",
                email: "david.lee@example.com",
                condition: "Hyperlipidemia",
                last_visit: "2024-11-12",
            },
            Patient {
                id: 8,
                name: "Jessica Martinez",
                age: 41,
                gender: "Female",
                phone: "555-0108",
                email: "jessica.martinez@example.com",
                condition: "Hypothyroidism",
                last_visit: "2024-11-19",
            },
            Patient {
                id: 9,
                name: "William Taylor",
                age: 64,
                gender: "Male",
                phone: "555-0109",
                email: "william.taylor@example.com",
                condition: "Osteoarthritis",
                last_visit: "2024-11-08",
            },
            Patient {
                id: 10,
                name: "Amanda White",
                age: 36,
                gender: "Female",
                phone: "555-0110",
                email: "amanda.white@example.com",
                condition: "Chronic migraine",
                last_visit: "2024-11-21",
            },
        ]
    })
}

pub fn patient_by_id(id: u32) -> Option<&'static Patient> {
    all().iter().find(|p| p.id == id)
}
