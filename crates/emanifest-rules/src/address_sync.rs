//! # Address Synchronization Policy
//!
//! A handler that has not opted into a distinct mailing address keeps it
//! identical to the site address. The mirror is one-way — site to mailing,
//! never the reverse — and a full replace, not a merge.
//!
//! While the separate-mailing flag is enabled the mirror is suspended and
//! the mailing address becomes independently editable, starting from the
//! last mirrored value. Disabling the flag resumes mirroring from the
//! *current* site address, discarding any manual mailing-address edits
//! made in between: last write wins toward the site address.

use emanifest_model::{Address, Handler};

/// Compute the mailing address for a handler.
///
/// With the separate-mailing flag off, the result is the site address
/// (full replace). With it on, the current mailing address is kept as-is.
pub fn sync_mailing_address(
    site_address: &Address,
    separate_mailing_enabled: bool,
    current_mailing_address: &Address,
) -> Address {
    if separate_mailing_enabled {
        current_mailing_address.clone()
    } else {
        site_address.clone()
    }
}

/// Apply a site-address change to a handler, re-propagating into the
/// mailing address when the mirror is active.
pub fn apply_site_address(handler: &mut Handler, site_address: Address) {
    handler.site_address = site_address;
    handler.mailing_address = sync_mailing_address(
        &handler.site_address,
        handler.separate_mailing_address,
        &handler.mailing_address,
    );
}

/// Toggle the separate-mailing flag on a handler.
///
/// Enabling suspends the mirror and leaves the last mirrored value in
/// place as the editing starting point. Disabling resumes the mirror from
/// the current site address.
pub fn set_separate_mailing_address(handler: &mut Handler, enabled: bool) {
    handler.separate_mailing_address = enabled;
    handler.mailing_address = sync_mailing_address(
        &handler.site_address,
        enabled,
        &handler.mailing_address,
    );
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use emanifest_model::Locality;

    fn site() -> Address {
        Address {
            street_number: Some("1".to_string()),
            address1: Some("Main St".to_string()),
            city: Some("Richmond".to_string()),
            state: Some(Locality::from_code("VA")),
            zip: Some("23220".to_string()),
            ..Address::default()
        }
    }

    fn po_box() -> Address {
        Address {
            address1: Some("PO Box 99".to_string()),
            city: Some("Richmond".to_string()),
            state: Some(Locality::from_code("VA")),
            zip: Some("23221".to_string()),
            ..Address::default()
        }
    }

    #[test]
    fn test_mirror_active_replaces_fully() {
        let mailing = sync_mailing_address(&site(), false, &po_box());
        assert_eq!(mailing, site());
    }

    #[test]
    fn test_mirror_suspended_keeps_mailing() {
        let mailing = sync_mailing_address(&site(), true, &po_box());
        assert_eq!(mailing, po_box());
    }

    #[test]
    fn test_site_change_propagates_while_mirroring() {
        let mut handler = Handler::manual();
        apply_site_address(&mut handler, site());
        assert_eq!(handler.mailing_address, site());

        let mut moved = site();
        moved.city = Some("Norfolk".to_string());
        apply_site_address(&mut handler, moved.clone());
        assert_eq!(handler.mailing_address, moved);
    }

    #[test]
    fn test_site_change_does_not_propagate_when_separate() {
        let mut handler = Handler::manual();
        apply_site_address(&mut handler, site());
        set_separate_mailing_address(&mut handler, true);
        handler.mailing_address = po_box();

        let mut moved = site();
        moved.city = Some("Norfolk".to_string());
        apply_site_address(&mut handler, moved);
        assert_eq!(handler.mailing_address, po_box());
    }

    #[test]
    fn test_enable_keeps_last_mirrored_value_as_starting_point() {
        let mut handler = Handler::manual();
        apply_site_address(&mut handler, site());
        set_separate_mailing_address(&mut handler, true);
        // Mirror suspended, but nothing cleared.
        assert_eq!(handler.mailing_address, site());
    }

    #[test]
    fn test_toggle_off_discards_manual_edits() {
        // false -> true -> false: final mailing address equals the site
        // address at the moment of the second toggle.
        let mut handler = Handler::manual();
        apply_site_address(&mut handler, site());

        set_separate_mailing_address(&mut handler, true);
        handler.mailing_address = po_box();

        let mut moved = site();
        moved.street_number = Some("200".to_string());
        apply_site_address(&mut handler, moved.clone());

        set_separate_mailing_address(&mut handler, false);
        assert_eq!(handler.mailing_address, moved);
    }
}
