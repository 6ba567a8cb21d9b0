//! Class identifiers of the Bluetooth NCP command set.
//!
//! A class selects the controller subsystem a command, response or event
//! belongs to. Values are part of the wire contract.

/// `dfu` class.
pub const DFU: u8 = 0x00;
/// `system` class.
pub const SYSTEM: u8 = 0x01;
/// `gap` class.
pub const GAP: u8 = 0x02;
/// `advertiser` class.
pub const ADVERTISER: u8 = 0x04;
/// `legacy_advertiser` class.
pub const LEGACY_ADVERTISER: u8 = 0x56;
/// `extended_advertiser` class.
pub const EXTENDED_ADVERTISER: u8 = 0x57;
/// `periodic_advertiser` class.
pub const PERIODIC_ADVERTISER: u8 = 0x58;
/// `scanner` class.
pub const SCANNER: u8 = 0x05;
/// `sync` class.
pub const SYNC: u8 = 0x42;
/// `past_receiver` class.
pub const PAST_RECEIVER: u8 = 0x51;
/// `advertiser_past` class.
pub const ADVERTISER_PAST: u8 = 0x52;
/// `sync_past` class.
pub const SYNC_PAST: u8 = 0x5b;
/// `connection` class.
pub const CONNECTION: u8 = 0x06;
/// `gatt` class.
pub const GATT: u8 = 0x09;
/// `gattdb` class.
pub const GATTDB: u8 = 0x46;
/// `gatt_server` class.
pub const GATT_SERVER: u8 = 0x0a;
/// `nvm` class.
pub const NVM: u8 = 0x0d;
/// `test` class.
pub const TEST: u8 = 0x0e;
/// `sm` class.
pub const SM: u8 = 0x0f;
/// `ota` class.
pub const OTA: u8 = 0x10;
/// `coex` class.
pub const COEX: u8 = 0x20;
/// `l2cap` class.
pub const L2CAP: u8 = 0x43;
/// `cte_transmitter` class.
pub const CTE_TRANSMITTER: u8 = 0x44;
/// `cte_receiver` class.
pub const CTE_RECEIVER: u8 = 0x45;
/// `user` class.
pub const USER: u8 = 0xff;

/// Every known class, in catalog order.
pub const ALL: &[(u8, &str)] = &[
    (DFU, "dfu"),
    (SYSTEM, "system"),
    (GAP, "gap"),
    (ADVERTISER, "advertiser"),
    (LEGACY_ADVERTISER, "legacy_advertiser"),
    (EXTENDED_ADVERTISER, "extended_advertiser"),
    (PERIODIC_ADVERTISER, "periodic_advertiser"),
    (SCANNER, "scanner"),
    (SYNC, "sync"),
    (PAST_RECEIVER, "past_receiver"),
    (ADVERTISER_PAST, "advertiser_past"),
    (SYNC_PAST, "sync_past"),
    (CONNECTION, "connection"),
    (GATT, "gatt"),
    (GATTDB, "gattdb"),
    (GATT_SERVER, "gatt_server"),
    (NVM, "nvm"),
    (TEST, "test"),
    (SM, "sm"),
    (OTA, "ota"),
    (COEX, "coex"),
    (L2CAP, "l2cap"),
    (CTE_TRANSMITTER, "cte_transmitter"),
    (CTE_RECEIVER, "cte_receiver"),
    (USER, "user"),
];

/// Returns the class name for an id, or `"unknown"`.
pub fn class_name(id: u8) -> &'static str {
    ALL.iter()
        .find(|(class_id, _)| *class_id == id)
        .map(|(_, name)| *name)
        .unwrap_or("unknown")
}

/// Looks a class id up by name.
pub fn class_by_name(name: &str) -> Option<u8> {
    ALL.iter()
        .find(|(_, class_name)| *class_name == name)
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_both_ways() {
        assert_eq!(class_name(SYSTEM), "system");
        assert_eq!(class_name(GATT_SERVER), "gatt_server");
        assert_eq!(class_by_name("user"), Some(USER));
        assert_eq!(class_by_name("legacy_advertiser"), Some(0x56));
    }

    #[test]
    fn unknown_class() {
        assert_eq!(class_name(0x7e), "unknown");
        assert_eq!(class_by_name("bogus"), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u8> = ALL.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ALL.len());
    }
}
