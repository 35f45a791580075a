//! # Import Records
//!
//! Details required when the waste shipment was imported from a foreign
//! country. Presence is coupled biconditionally to the manifest's `import`
//! flag; the required sub-fields once present are checked by the rules.

use serde::{Deserialize, Serialize};

use crate::address::Locality;
use crate::handler::Handler;

/// The port where an imported shipment entered the country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortOfEntry {
    /// State/locality of the port.
    pub state: Option<Locality>,
    /// City or port name.
    pub city_port: Option<String>,
}

/// Details of an internationally imported shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportInfo {
    /// The foreign generator of the waste.
    pub import_generator: Handler,
    /// Where the shipment entered the country.
    pub port_of_entry: PortOfEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_info_serde_round_trip() {
        let info = ImportInfo {
            import_generator: Handler::manual(),
            port_of_entry: PortOfEntry {
                state: Some(Locality::from_code("TX")),
                city_port: Some("Laredo".to_string()),
            },
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: ImportInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
