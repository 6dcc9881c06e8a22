// felica/src/error.rs

use thiserror::Error;

use crate::protocol::status;
use crate::types::Idm;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The transport reported a negative byte count (link failure, card
    /// removed mid-exchange or timeout).
    #[error("nfc transport error: {code}")]
    Transport { code: i32 },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error(
        "felica status error: [{status1:02X}:{status2:02X}] \"{}\"",
        status_reason(.status1, .status2)
    )]
    CardStatus { status1: u8, status2: u8 },

    #[error("short read: {actual} != {expected}")]
    ShortRead { expected: usize, actual: usize },

    #[error("unexpected response length: {actual}")]
    UnexpectedResponseLength { actual: usize },

    #[error("missing block: expected {expected} blocks, got {actual}")]
    BlockCountMismatch { expected: usize, actual: usize },

    #[error("frame too large: {size} bytes exceeds the 255 byte limit")]
    FrameTooLarge { size: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("missing target")]
    NoTarget,

    #[error("transport handle used after release")]
    UseAfterRelease,

    /// The reply echoed an IDm other than the selected card's.
    #[error("idm mismatch: expected {}, got {}", .expected.to_hex(), .actual.to_hex())]
    IdmMismatch { expected: Idm, actual: Idm },
}

impl Error {
    /// Card-reported status flags, if this error carries them.
    pub fn status_flags(&self) -> Option<(u8, u8)> {
        match self {
            Error::CardStatus { status1, status2 } => Some((*status1, *status2)),
            _ => None,
        }
    }
}

fn status_reason(status1: &u8, status2: &u8) -> &'static str {
    status::strerror(*status1, *status2)
}

pub type Result<T> = std::result::Result<T, Error>;
