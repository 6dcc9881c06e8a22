// felica/src/history.rs
//! Transit card (Suica-style) transaction history.
//!
//! The history lives in service `0x090F` as up to 32 sixteen-byte records,
//! newest first. A record whose terminal species byte is zero marks the end.

use derive_more::Display;
use log::{debug, trace};

use crate::target::Target;
use crate::types::{BlockData, ServiceCode};
use crate::Result;

/// Service holding the transaction history.
pub const HISTORY_SERVICE: ServiceCode = ServiceCode::new(0x090f);

/// Number of history blocks a card keeps.
pub const HISTORY_BLOCKS: u8 = 32;

/// Kind of terminal that wrote a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalKind {
    #[display(fmt = "Train")]
    Train,
    #[display(fmt = "New card")]
    NewCard,
    #[display(fmt = "Vending Machine")]
    VendingMachine,
    #[display(fmt = "Other({:#04x})", _0)]
    Other(u8),
}

impl From<u8> for TerminalKind {
    fn from(species: u8) -> Self {
        match species {
            0x16 => Self::Train,
            0x19 => Self::NewCard,
            0xc8 => Self::VendingMachine,
            other => Self::Other(other),
        }
    }
}

/// Date packed into 16 bits: 7 bits of year since 2000, 4 of month, 5 of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl HistoryDate {
    pub fn from_packed(packed: u16) -> Self {
        Self {
            year: 2000 + (packed >> 9),
            month: ((packed >> 5) & 0x0f) as u8,
            day: (packed & 0x1f) as u8,
        }
    }
}

/// One decoded history block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    /// Raw terminal species; zero means an unused slot.
    pub terminal: u8,
    pub processing: u8,
    pub date: HistoryDate,
    pub entry_line: u8,
    pub entry_station: u8,
    pub exit_line: u8,
    pub exit_station: u8,
    /// Remaining balance after the transaction.
    pub balance: u16,
    /// 24-bit transaction serial.
    pub serial: u32,
    pub region: u8,
}

impl HistoryRecord {
    /// Layout: terminal(1) processing(1) pad(2) date(2, BE) entry line and
    /// station(2) exit line and station(2) balance(2, LE) serial(3, BE)
    /// region(1)
    pub fn decode(block: &BlockData) -> Self {
        let b = block.as_bytes();
        Self {
            terminal: b[0],
            processing: b[1],
            date: HistoryDate::from_packed(u16::from_be_bytes([b[4], b[5]])),
            entry_line: b[6],
            entry_station: b[7],
            exit_line: b[8],
            exit_station: b[9],
            balance: u16::from_le_bytes([b[10], b[11]]),
            serial: u32::from_be_bytes([0, b[12], b[13], b[14]]),
            region: b[15],
        }
    }

    pub fn terminal_kind(&self) -> TerminalKind {
        TerminalKind::from(self.terminal)
    }

    /// True for an unused history slot.
    pub fn is_empty(&self) -> bool {
        self.terminal == 0
    }
}

/// Read history records in card order, stopping at the first unused slot.
pub fn read_history(target: &Target) -> Result<Vec<HistoryRecord>> {
    let mut records = Vec::new();
    for index in 0..HISTORY_BLOCKS {
        let block = target.read_block(HISTORY_SERVICE, index)?;
        let record = HistoryRecord::decode(&block);
        if record.is_empty() {
            debug!("history ends at block {}", index);
            break;
        }
        trace!("history block {}: {}", index, block.to_hex());
        records.push(record);
    }
    Ok(records)
}
