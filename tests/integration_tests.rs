// Integration tests for the doctor portal.
//
// These tests exercise the full system end-to-end using the library crate's
// public API: the consultation drafting workflow against a real SQLite
// database, and the pharmacy REST API via in-process requests.

use doctor_portal::consultation::draft::{DraftAction, PrescriptionItem, SoapField, VitalField};
use doctor_portal::consultation::session::{ConsultationSession, SaveOutcome, SubmitOutcome};
use doctor_portal::data::{medications, products};
use doctor_portal::db::{Database, DraftStore};
use doctor_portal::server;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn test_db() -> Database {
    Database::open(":memory:").expect("in-memory database")
}

fn set_field(session: &mut ConsultationSession, field: SoapField, value: &str) {
    session.apply(DraftAction::SetField {
        field,
        value: value.to_string(),
    });
}

// ===========================================================================
// Drafting workflow against a real database
// ===========================================================================

#[test]
fn fresh_consultation_for_appointment_seeds_patient() {
    let db = test_db();
    let session = ConsultationSession::hydrate(&db, Some(7)).unwrap();

    // Appointment 7 is David Lee's cholesterol recheck.
    assert_eq!(session.patient_id(), Some(7));
    assert_eq!(session.key(), "consultation-draft-7");
    assert_eq!(session.draft().assessment, "");
}

#[test]
fn draft_survives_save_and_rehydrate() {
    let db = test_db();
    let mut session = ConsultationSession::hydrate(&db, Some(7)).unwrap();

    set_field(&mut session, SoapField::Subjective, "no chest pain, walks daily");
    set_field(&mut session, SoapField::Plan, "repeat lipid panel in 12 weeks");
    session.apply(DraftAction::SetVital {
        field: VitalField::BloodPressure,
        value: "126/78".to_string(),
    });

    assert_eq!(session.save_draft(&db).unwrap(), SaveOutcome::Saved);
    session.settle_save();
    drop(session);

    let reopened = ConsultationSession::hydrate(&db, Some(7)).unwrap();
    assert_eq!(reopened.draft().subjective, "no chest pain, walks daily");
    assert_eq!(reopened.draft().plan, "repeat lipid panel in 12 weeks");
    assert_eq!(reopened.draft().vitals.blood_pressure, "126/78");
    assert_eq!(reopened.patient_id(), Some(7));
}

#[test]
fn quick_prescriptions_from_formulary_are_positional() {
    let db = test_db();
    let mut session = ConsultationSession::hydrate(&db, Some(7)).unwrap();

    // Add two formulary medications the way the picker does.
    for name in ["Metformin", "Lisinopril"] {
        let med = medications::medication_by_name(name).unwrap();
        session.apply(DraftAction::AddPrescription(PrescriptionItem {
            name: med.name.to_string(),
            dosage: med.dosage.to_string(),
            frequency: "Once daily".to_string(),
            duration: "30 days".to_string(),
            instructions: String::new(),
        }));
    }
    assert_eq!(session.draft().prescriptions.len(), 2);

    session.apply(DraftAction::RemovePrescription(0));
    assert_eq!(session.draft().prescriptions.len(), 1);
    assert_eq!(session.draft().prescriptions[0].name, "Lisinopril");
}

#[test]
fn corrupt_stored_payload_is_purged_from_database() {
    let db = test_db();
    db.set("consultation-draft-7", "{definitely not json").unwrap();

    let session = ConsultationSession::hydrate(&db, Some(7)).unwrap();
    assert_eq!(session.draft().subjective, "");
    assert!(db.get("consultation-draft-7").unwrap().is_none());
}

#[test]
fn standalone_draft_uses_shared_new_slot() {
    let db = test_db();
    let mut session = ConsultationSession::hydrate(&db, None).unwrap();
    assert_eq!(session.key(), "consultation-draft-new");

    session.apply(DraftAction::SetPatient(3));
    set_field(&mut session, SoapField::Subjective, "walk-in, sore throat");
    session.save_draft(&db).unwrap();

    let reopened = ConsultationSession::hydrate(&db, None).unwrap();
    assert_eq!(reopened.patient_id(), Some(3));
    assert_eq!(reopened.draft().subjective, "walk-in, sore throat");
}

#[test]
fn submit_clears_draft_and_records_submission() {
    let db = test_db();
    let mut session = ConsultationSession::hydrate(&db, Some(7)).unwrap();
    set_field(&mut session, SoapField::Subjective, "fatigue improving");
    set_field(&mut session, SoapField::Assessment, "Hyperlipidemia, improving");
    session.save_draft(&db).unwrap();
    session.settle_save();

    assert_eq!(session.submit(&db).unwrap(), SubmitOutcome::Accepted);
    session.settle_submit();
    assert!(db.get("consultation-draft-7").unwrap().is_none());

    // The orchestrator records the submission once the delay settles.
    let payload = session.payload_json().unwrap();
    db.record_submission(Some("7"), Some("7"), &payload).unwrap();
    assert_eq!(db.submission_count().unwrap(), 1);
}

#[test]
fn failed_validation_keeps_draft_in_database() {
    let db = test_db();
    let mut session = ConsultationSession::hydrate(&db, Some(2)).unwrap();
    set_field(&mut session, SoapField::Subjective, "follow-up");
    session.save_draft(&db).unwrap();
    session.settle_save();

    // Assessment missing: submit must fail and leave the stored draft alone.
    assert_eq!(session.submit(&db).unwrap(), SubmitOutcome::ValidationFailed);
    assert_eq!(session.validation_errors().assessment, Some("Required"));
    assert!(db.get("consultation-draft-2").unwrap().is_some());
}

#[test]
fn drafts_for_different_appointments_are_independent() {
    let db = test_db();

    let mut a = ConsultationSession::hydrate(&db, Some(1)).unwrap();
    set_field(&mut a, SoapField::Plan, "plan for appointment one");
    a.save_draft(&db).unwrap();

    let mut b = ConsultationSession::hydrate(&db, Some(2)).unwrap();
    set_field(&mut b, SoapField::Plan, "plan for appointment two");
    b.save_draft(&db).unwrap();

    let a2 = ConsultationSession::hydrate(&db, Some(1)).unwrap();
    let b2 = ConsultationSession::hydrate(&db, Some(2)).unwrap();
    assert_eq!(a2.draft().plan, "plan for appointment one");
    assert_eq!(b2.draft().plan, "plan for appointment two");
}

// ===========================================================================
// Pharmacy REST API
// ===========================================================================

#[tokio::test]
async fn pharmacy_products_endpoint_serves_catalog() {
    let response = server::router()
        .oneshot(
            Request::builder()
                .uri("/api/pharmacy/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.as_array().unwrap().len(), products::all().len());
}

#[tokio::test]
async fn pharmacy_batches_endpoint_404s_unknown_product() {
    let response = server::router()
        .oneshot(
            Request::builder()
                .uri("/api/pharmacy/products/bogus/batches")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Product not found");
}
