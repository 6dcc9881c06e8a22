// felica/src/protocol/status.rs
//! Reason strings for card-reported status flags.
//!
//! Status flag 1 only tells whether the error is tied to a block list entry;
//! status flag 2 carries the specific reason.

/// Classify status flag 1.
pub fn status1_strerror(status1: u8) -> &'static str {
    match status1 {
        0x00 => "Success",
        0xFF => "Error (no block list)",
        _ => "Error (block list)",
    }
}

/// Look up status flag 2. Unknown codes return `None`.
pub fn status2_strerror(status2: u8) -> Option<&'static str> {
    let s = match status2 {
        // common
        0x00 => "Success",
        0x01 => "Purse data under/overflow",
        0x02 => "Cashback data exceeded",
        0x70 => "Memory error",
        0x71 => "Memory warning",

        // card-specific
        0xA1 => "Illegal Number of Service",
        0xA2 => "Illegal command packet (specified Number of Block)",
        0xA3 => "Illegal Block List (specified order of Service)",
        0xA4 => "Illegal Service type",
        0xA5 => "Access is not allowed",
        0xA6 => "Illegal Service Code List",
        0xA7 => "Illegal Block List (access mode)",
        0xA8 => "Illegal Block Number (access to the specified data is inhibited)",
        0xA9 => "Data write failure",
        0xAA => "Key-change failure",
        0xAB => "Illegal Package Parity or Illegal Package MAC",
        0xAC => "Illegal parameter",
        0xAD => "Service exists already",
        0xAE => "Illegal System Code",
        0xAF => "Too many simultaneous cyclic write operations",
        0xC0 => "Illegal Package Identifier",
        0xC1 => "Discrepancy of parameters inside and outside Package",
        0xC2 => "Command is disabled already",
        _ => return None,
    };
    Some(s)
}

/// Best available reason for a status flag pair: the specific status 2
/// text when known, else the status 1 classification.
pub fn strerror(status1: u8, status2: u8) -> &'static str {
    if status2 != 0 {
        if let Some(s) = status2_strerror(status2) {
            return s;
        }
    }
    status1_strerror(status1)
}
