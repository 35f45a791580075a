//! # Field Validation Rules
//!
//! The full-document validation pass. Every rule appends to one shared
//! failure list; nothing short-circuits, so one call surfaces every
//! violation for the caller to present together.
//!
//! Rule inventory:
//!
//! - **Required parties** — a generator and a designated facility must be
//!   present; a shipped document must carry at least one transporter.
//! - **Required fields per role** — generators and facilities need an EPA
//!   site id, a name, and a complete site address; transporters and
//!   brokers need id and name, and a complete address only when entered
//!   manually rather than looked up from the site directory.
//! - **Ship date** — `potentialShipDate` must be present and not before
//!   the reference date. Comparison is by calendar date, not instant, so
//!   a timezone boundary cannot fail a same-day ship date.
//! - **Flag/record coupling** — `rejection`/`rejectionInfo`,
//!   `import`/`importInfo`, and `locked`/`lockReason` are biconditional:
//!   each record is present iff its flag is set. Violations are reported
//!   against the flag's field path.
//! - **Residue** — carry-over tracking numbers are only valid when
//!   `residue` is set, and each must match the tracking-number format.
//! - **Certification pair** — `certifiedDate` and `certifiedBy` are only
//!   ever set together.
//!
//! Tracking-number *format* needs no rule here: `ManifestTrackingNumber`
//! cannot be constructed (or deserialized) malformed.

use chrono::NaiveDate;

use emanifest_core::{ManifestStatus, ManifestTrackingNumber};
use emanifest_model::{Address, Handler, HandlerRole, HandlerSource, Manifest};

use crate::result::{ValidationFailure, ValidationResult};

/// Validate a draft manifest against every field rule.
///
/// `today` is the reference calendar date for temporal rules; injecting it
/// keeps validation deterministic. The draft is never mutated — calling
/// twice yields the identical failure list.
pub fn validate(draft: &Manifest, today: NaiveDate) -> ValidationResult {
    let mut failures = Vec::new();
    check_parties(draft, &mut failures);
    check_ship_date(draft, today, &mut failures);
    check_flag_coupling(draft, &mut failures);
    check_residue(draft, &mut failures);
    check_certification(draft, &mut failures);
    ValidationResult::from_failures(failures)
}

// ─── Parties ─────────────────────────────────────────────────────────

/// Statuses at which custody has left the generator, requiring at least
/// one transporter on the document.
fn requires_transporters(status: ManifestStatus) -> bool {
    matches!(
        status,
        ManifestStatus::Scheduled
            | ManifestStatus::InTransit
            | ManifestStatus::ReadyForSignature
            | ManifestStatus::Signed
            | ManifestStatus::UnderCorrection
            | ManifestStatus::Corrected
    )
}

fn check_parties(draft: &Manifest, failures: &mut Vec<ValidationFailure>) {
    match &draft.generator {
        Some(generator) => check_handler(generator, HandlerRole::Generator, "generator", failures),
        None => failures.push(ValidationFailure::new("generator", "a generator is required")),
    }

    match &draft.designated_facility {
        Some(facility) => check_handler(
            facility,
            HandlerRole::DesignatedFacility,
            "designatedFacility",
            failures,
        ),
        None => failures.push(ValidationFailure::new(
            "designatedFacility",
            "a designated facility is required",
        )),
    }

    if requires_transporters(draft.effective_status()) && draft.transporters.is_empty() {
        failures.push(ValidationFailure::new(
            "transporters",
            "at least one transporter is required once the shipment is scheduled",
        ));
    }
    for (index, transporter) in draft.transporters.iter().enumerate() {
        let path = format!("transporters[{index}]");
        check_handler(transporter, HandlerRole::Transporter, &path, failures);
    }

    if let Some(broker) = &draft.broker {
        check_handler(broker, HandlerRole::Broker, "broker", failures);
    }
}

/// Role-conditional required fields for one handler.
fn check_handler(
    handler: &Handler,
    role: HandlerRole,
    path: &str,
    failures: &mut Vec<ValidationFailure>,
) {
    if handler.epa_site_id.is_none() {
        failures.push(ValidationFailure::new(
            format!("{path}.epaSiteId"),
            "an EPA site id is required",
        ));
    }
    if handler.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
        failures.push(ValidationFailure::new(
            format!("{path}.name"),
            "a site name is required",
        ));
    }

    // Generators and facilities always carry a complete site address on
    // the printed document. Transporters and brokers inherit theirs from
    // the site directory, so only manually entered records are checked.
    let address_required = match role {
        HandlerRole::Generator | HandlerRole::DesignatedFacility => true,
        HandlerRole::Transporter | HandlerRole::Broker => handler.source == HandlerSource::Manual,
    };
    if address_required {
        check_address(
            &handler.site_address,
            &format!("{path}.siteAddress"),
            failures,
        );
    }
}

/// The submission minimum for an address: `address1`, `city`, `state`,
/// `zip`. Each missing sub-field is reported by name.
fn check_address(address: &Address, path: &str, failures: &mut Vec<ValidationFailure>) {
    if address.address1.as_deref().map_or(true, str::is_empty) {
        failures.push(ValidationFailure::new(
            format!("{path}.address1"),
            "a street address is required",
        ));
    }
    if address.city.as_deref().map_or(true, str::is_empty) {
        failures.push(ValidationFailure::new(
            format!("{path}.city"),
            "a city is required",
        ));
    }
    if address.state.as_ref().map_or(true, |state| state.code.is_empty()) {
        failures.push(ValidationFailure::new(
            format!("{path}.state"),
            "a state is required",
        ));
    }
    if address.zip.as_deref().map_or(true, str::is_empty) {
        failures.push(ValidationFailure::new(
            format!("{path}.zip"),
            "a zip code is required",
        ));
    }
}

// ─── Temporal ────────────────────────────────────────────────────────

fn check_ship_date(draft: &Manifest, today: NaiveDate, failures: &mut Vec<ValidationFailure>) {
    match draft.potential_ship_date {
        None => failures.push(ValidationFailure::new(
            "potentialShipDate",
            "a potential ship date is required",
        )),
        Some(date) if date < today => failures.push(ValidationFailure::new(
            "potentialShipDate",
            "cannot be in the past",
        )),
        Some(_) => {}
    }
}

// ─── Flag / Record Coupling ──────────────────────────────────────────

fn check_flag_coupling(draft: &Manifest, failures: &mut Vec<ValidationFailure>) {
    coupling(
        draft.rejection,
        draft.rejection_info.is_some(),
        "rejection",
        "rejectionInfo",
        failures,
    );
    coupling(
        draft.import,
        draft.import_info.is_some(),
        "import",
        "importInfo",
        failures,
    );
    coupling(
        draft.locked,
        draft.lock_reason.is_some(),
        "locked",
        "lockReason",
        failures,
    );

    if let Some(info) = &draft.import_info {
        if info
            .import_generator
            .name
            .as_deref()
            .map_or(true, |name| name.trim().is_empty())
        {
            failures.push(ValidationFailure::new(
                "importInfo.importGenerator.name",
                "the import generator's name is required",
            ));
        }
        if info.port_of_entry.state.is_none() {
            failures.push(ValidationFailure::new(
                "importInfo.portOfEntry.state",
                "a port-of-entry state is required",
            ));
        }
        if info
            .port_of_entry
            .city_port
            .as_deref()
            .map_or(true, str::is_empty)
        {
            failures.push(ValidationFailure::new(
                "importInfo.portOfEntry.cityPort",
                "a port-of-entry city is required",
            ));
        }
    }
}

/// Biconditional presence: the record exists iff the flag is set.
/// Reported against the flag's field path.
fn coupling(
    flag: bool,
    record_present: bool,
    flag_field: &str,
    record_field: &str,
    failures: &mut Vec<ValidationFailure>,
) {
    if flag && !record_present {
        failures.push(ValidationFailure::new(
            flag_field,
            format!("{record_field} is required when {flag_field} is true"),
        ));
    }
    if !flag && record_present {
        failures.push(ValidationFailure::new(
            flag_field,
            format!("{record_field} must be absent when {flag_field} is false"),
        ));
    }
}

// ─── Residue ─────────────────────────────────────────────────────────

fn check_residue(draft: &Manifest, failures: &mut Vec<ValidationFailure>) {
    if !draft.residue && !draft.residue_new_manifest_tracking_numbers.is_empty() {
        failures.push(ValidationFailure::new(
            "residue",
            "residue tracking numbers are only valid when residue is true",
        ));
    }
    for (index, entry) in draft.residue_new_manifest_tracking_numbers.iter().enumerate() {
        if !ManifestTrackingNumber::is_valid_format(entry) {
            failures.push(ValidationFailure::new(
                format!("residueNewManifestTrackingNumbers[{index}]"),
                "does not match the manifest tracking number format",
            ));
        }
    }
}

// ─── Certification ───────────────────────────────────────────────────

fn check_certification(draft: &Manifest, failures: &mut Vec<ValidationFailure>) {
    if draft.certified_date.is_some() != draft.certified_by.is_some() {
        failures.push(ValidationFailure::new(
            "certifiedDate",
            "certifiedDate and certifiedBy must be set together",
        ));
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
