// Appointment schedule.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: u32,
    pub patient_id: u32,
    pub patient_name: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
    pub status: AppointmentStatus,
    pub duration_min: u32,
    pub reason: &'static str,
    pub notes: Option<&'static str>,
}

/// The demo schedule's current day; the dashboard filters to this date.
pub const CLINIC_DAY: &str = "2024-12-15";

pub fn all() -> &'static [Appointment] {
    static APPOINTMENTS: OnceLock<Vec<Appointment>> = OnceLock::new();
    APPOINTMENTS.get_or_init(|| {
        vec![
            Appointment {
                id: 1,
                patient_id: 1,
                patient_name: "John Smith",
                date: "2024-12-15",
                time: "09:00",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 30,
                reason: "Hypertension check-up",
                notes: Some("Needs BP medication adjustment"),
            },
            Appointment {
                id: 2,
                patient_id: 2,
                patient_name: "Emma Johnson",
                date: "2024-12-15",
                time: "10:00",
                kind: "New Patient",
                status: AppointmentStatus::Scheduled,
                duration_min: 45,
                reason: "Initial diabetes consultation",
                notes: None,
            },
            Appointment {
                id: 3,
                patient_id: 3,
                patient_name: "Michael Brown",
                date: "2024-12-15",
                time: "11:00",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 30,
                reason: "Post-surgery check",
                notes: None,
            },
            Appointment {
                id: 4,
                patient_id: 4,
                patient_name: "Sarah Davis",
                date: "2024-12-15",
                time: "14:00",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 30,
                reason: "Heart rhythm check",
                notes: None,
            },
            Appointment {
                id: 5,
                patient_id: 5,
                patient_name: "Robert Wilson",
                date: "2024-12-16",
                time: "09:30",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 30,
                reason: "COPD management",
                notes: None,
            },
            Appointment {
                id: 6,
                patient_id: 6,
                patient_name: "Emily Thompson",
                date: "2024-12-16",
                time: "10:30",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 20,
                reason: "Asthma control check",
                notes: None,
            },
            Appointment {
                id: 7,
                patient_id: 7,
                patient_name: "David Lee",
                date: "2024-12-16",
                time: "11:30",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 30,
                reason: "Cholesterol recheck",
                notes: None,
            },
            Appointment {
                id: 8,
                patient_id: 8,
                patient_name: "Jessica Martinez",
                date: "2024-12-17",
                time: "09:00",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 30,
                reason: "Thyroid function test review",
                notes: None,
            },
            Appointment {
                id: 9,
                patient_id: 9,
                patient_name: "William Taylor",
                date: "2024-12-17",
                time: "10:30",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 30,
                reason: "Joint pain evaluation",
                notes: None,
            },
            Appointment {
                id: 10,
                patient_id: 10,
                patient_name: "Amanda White",
                date: "2024-12-17",
                time: "14:00",
                kind: "Follow-up",
                status: AppointmentStatus::Scheduled,
                duration_min: 45,
                reason: "Migraine treatment review",
                notes: None,
            },
        ]
    })
}

pub fn appointment_by_id(id: u32) -> Option<&'static Appointment> {
    all().iter().find(|a| a.id == id)
}

/// Appointments for a given date, in schedule order.
pub fn appointments_by_date(date: &str) -> Vec<&'static Appointment> {
    all().iter().filter(|a| a.date == date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_by_id_finds_known_appointment() {
        let appt = appointment_by_id(7).expect("appointment 7 should exist");
        assert_eq!(appt.patient_id, 7);
        assert_eq!(appt.patient_name, "David Lee");
        assert_eq!(appt.reason, "Cholesterol recheck");
    }

    #[test]
    fn appointment_by_id_returns_none_for_unknown() {
        assert!(appointment_by_id(0).is_none());
        assert!(appointment_by_id(999).is_none());
    }

    #[test]
    fn appointments_by_date_filters() {
        let day = appointments_by_date("2024-12-15");
        assert_eq!(day.len(), 4);
        assert!(day.iter().all(|a| a.date == "2024-12-15"));
    }

    #[test]
    fn every_appointment_resolves_a_patient() {
        for appt in all() {
            assert!(
                crate::data::patients::patient_by_id(appt.patient_id).is_some(),
                "appointment {} references missing patient {}",
                appt.id,
                appt.patient_id
            );
        }
    }
}
