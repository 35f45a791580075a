//! End-to-end scenarios walking a manifest through its lifecycle,
//! exercising the entity model, the validation rules, the state machine,
//! and the assembly seam together.

use chrono::NaiveDate;

use emanifest_assembly::{assemble, AssemblyError};
use emanifest_core::{EpaSiteId, LockReason, ManifestStatus, ManifestTrackingNumber, Timestamp};
use emanifest_model::{
    Address, CorrectionRequest, ElectronicSignature, Handler, Locality, Manifest, Signer,
    WasteCode, WasteLine,
};
use emanifest_rules::{set_separate_mailing_address, validate};
use emanifest_state::{can_transition, check_signed_edit, ensure_editable};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn address(street: &str, city: &str) -> Address {
    Address {
        address1: Some(street.to_string()),
        city: Some(city.to_string()),
        state: Some(Locality::from_code("VA")),
        zip: Some("23220".to_string()),
        ..Address::default()
    }
}

fn draft() -> Manifest {
    let mut m = Manifest::new();
    m.generator = Some(Handler::from_registry(
        EpaSiteId::parse("VATEST00001").unwrap(),
        "Acme Co",
        address("1 Main St", "Richmond"),
    ));
    m.designated_facility = Some(Handler::from_registry(
        EpaSiteId::parse("VATEST00002").unwrap(),
        "Disposal Inc",
        address("9 Plant Rd", "Norfolk"),
    ));
    m.transporters.push(Handler::from_registry(
        EpaSiteId::parse("VATEST00003").unwrap(),
        "Haulers LLC",
        Address::default(),
    ));
    m.wastes.push(WasteLine {
        epa_waste: true,
        waste_codes: vec![WasteCode::federal("D001")],
        description: Some("Ignitable solvent waste".to_string()),
        ..WasteLine::default()
    });
    m.potential_ship_date = Some(today());
    m
}

#[test]
fn full_lifecycle_from_draft_to_corrected() {
    let mut m = draft();

    // Draft -> tracking number assigned by the external authority.
    assert!(!can_transition(ManifestStatus::NotAssigned, ManifestStatus::Pending, &m));
    m.manifest_tracking_number = Some(ManifestTrackingNumber::parse("100000001ELC").unwrap());
    assert!(can_transition(ManifestStatus::NotAssigned, ManifestStatus::Pending, &m));
    m.status = Some(ManifestStatus::Pending);

    // Pending -> Scheduled through the assembly seam.
    let mut m = assemble(&m, today(), Some(ManifestStatus::Scheduled))
        .unwrap()
        .into_inner();
    assert_eq!(m.status, Some(ManifestStatus::Scheduled));

    // A transporter signs; custody passes.
    m.transporters[0].electronic_signatures.push(ElectronicSignature {
        signer: Some(Signer::named("Lee", "Driver")),
        signed_at: Timestamp::parse("2026-08-06T08:00:00Z").unwrap(),
    });
    let mut m = assemble(&m, today(), Some(ManifestStatus::InTransit))
        .unwrap()
        .into_inner();

    // The facility receives the shipment.
    m.received_date = Some(Timestamp::parse("2026-08-06T15:30:00Z").unwrap());
    let mut m = assemble(&m, today(), Some(ManifestStatus::ReadyForSignature))
        .unwrap()
        .into_inner();

    // Certification.
    m.certified_date = Some(Timestamp::parse("2026-08-06T16:00:00Z").unwrap());
    m.certified_by = Some(Signer::named("Pat", "Jones"));
    let m = assemble(&m, today(), Some(ManifestStatus::Signed))
        .unwrap()
        .into_inner();

    // Post-signature: a correction request opens and resolves.
    let signed = m.clone();
    let mut m = signed.clone();
    m.correction_requests.push(CorrectionRequest::open(
        "quantity on line 1 was wrong",
        Timestamp::parse("2026-08-07T09:00:00Z").unwrap(),
    ));
    m.status = Some(ManifestStatus::UnderCorrection);
    check_signed_edit(&signed, &m).unwrap();

    m.correction_requests[0].resolve(Timestamp::parse("2026-08-08T09:00:00Z").unwrap());
    assert!(can_transition(
        ManifestStatus::UnderCorrection,
        ManifestStatus::Corrected,
        &m
    ));
}

#[test]
fn skipping_states_is_never_legal() {
    let mut m = draft();
    m.manifest_tracking_number = Some(ManifestTrackingNumber::parse("100000002ELC").unwrap());
    m.certified_date = Some(Timestamp::parse("2026-08-06T16:00:00Z").unwrap());
    m.certified_by = Some(Signer::named("Pat", "Jones"));

    assert!(!can_transition(ManifestStatus::Pending, ManifestStatus::Signed, &m));
    assert!(!can_transition(ManifestStatus::NotAssigned, ManifestStatus::InTransit, &m));
    assert!(!can_transition(ManifestStatus::Scheduled, ManifestStatus::Signed, &m));
}

#[test]
fn rejected_drafts_report_every_failure_at_once() {
    let mut m = Manifest::new();
    m.generator = Some(Handler::from_registry(
        EpaSiteId::parse("VATEST00001").unwrap(),
        "Acme Co",
        address("1 Main St", "Richmond"),
    ));
    m.potential_ship_date = today().pred_opt();

    // validate: exactly the documented two failures.
    let result = validate(&m, today());
    assert_eq!(result.failures().len(), 2);
    assert_eq!(result.failures()[0].field, "designatedFacility");
    assert_eq!(result.failures()[1].field, "potentialShipDate");

    // assemble adds submittable completeness on top.
    let err = assemble(&m, today(), None).unwrap_err();
    match err {
        AssemblyError::Invalid(result) => {
            let fields: Vec<&str> = result.failures().iter().map(|f| f.field.as_str()).collect();
            assert!(fields.contains(&"designatedFacility"));
            assert!(fields.contains(&"potentialShipDate"));
            assert!(fields.contains(&"wastes"));
        }
        other => panic!("expected Invalid, got: {other}"),
    }
}

#[test]
fn locked_manifest_blocks_all_but_the_named_process() {
    let mut m = draft();
    m.locked = true;
    m.lock_reason = Some(LockReason::AsyncSign);

    assert!(ensure_editable(&m, None).is_err());
    assert!(ensure_editable(&m, Some(LockReason::EpaCorrection)).is_err());
    assert!(ensure_editable(&m, Some(LockReason::AsyncSign)).is_ok());
}

#[test]
fn mail_check_toggle_discards_interim_edits() {
    let mut m = draft();
    let generator = m.generator.as_mut().unwrap();

    // Opt into a separate mailing address and edit it.
    set_separate_mailing_address(generator, true);
    generator.mailing_address = address("PO Box 99", "Richmond");

    // Opting back out mirrors the current site address again.
    set_separate_mailing_address(generator, false);
    assert_eq!(generator.mailing_address, generator.site_address);

    // The document still validates and assembles.
    assert!(validate(&m, today()).is_valid());
    assert!(assemble(&m, today(), None).is_ok());
}

#[test]
fn wire_round_trip_preserves_order_and_keys() {
    let mut m = draft();
    m.transporters.push(Handler::from_registry(
        EpaSiteId::parse("VATEST00004").unwrap(),
        "Second Leg Freight",
        Address::default(),
    ));

    let json = serde_json::to_string(&m).unwrap();
    let back: Manifest = serde_json::from_str(&json).unwrap();

    // Custody order and line order are semantic; the wire must keep them.
    assert_eq!(back.transporters.len(), 2);
    assert_eq!(
        back.transporters[0].name.as_deref(),
        Some("Haulers LLC"),
    );
    assert_eq!(
        back.transporters[1].name.as_deref(),
        Some("Second Leg Freight"),
    );
    assert_eq!(back, m);
}
