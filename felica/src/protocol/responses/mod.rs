// felica/src/protocol/responses/mod.rs

pub mod mode;
pub mod read;
pub mod search;

pub use mode::decode_get_mode;
pub use read::decode_read;
pub use search::decode_search_service_code;

use crate::protocol::commands::Command;
use crate::types::{BlockData, Idm, SearchEntry};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    GetMode {
        idm: Idm,
        mode: u8,
    },
    ReadWithoutEncryption {
        idm: Idm,
        status: (u8, u8),
        blocks: Vec<BlockData>,
    },
    SearchServiceCode {
        idm: Idm,
        entry: SearchEntry,
    },
}

impl Response {
    /// Decode the received bytes of a response to `cmd`.
    ///
    /// The bytes are expected to have passed the validation chain already;
    /// decoders still bounds-check every access and never panic.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        crate::protocol::parser::expect_response_code(data, cmd.response_code())?;

        match cmd {
            Command::GetMode => {
                let (idm, mode) = mode::decode_get_mode(data)?;
                Ok(Self::GetMode { idm, mode })
            }
            Command::ReadWithoutEncryption { blocks, .. } => {
                let (idm, status, blocks) = read::decode_read(data, blocks.len())?;
                Ok(Self::ReadWithoutEncryption {
                    idm,
                    status,
                    blocks,
                })
            }
            Command::SearchServiceCode { .. } => {
                let (idm, entry) = search::decode_search_service_code(data)?;
                Ok(Self::SearchServiceCode { idm, entry })
            }
        }
    }

    /// Return the response code byte associated with this response variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::GetMode { .. } => 0x05,
            Response::ReadWithoutEncryption { .. } => 0x07,
            Response::SearchServiceCode { .. } => 0x0B,
        }
    }

    /// IDm echoed back by the card.
    pub fn idm(&self) -> &Idm {
        match self {
            Response::GetMode { idm, .. }
            | Response::ReadWithoutEncryption { idm, .. }
            | Response::SearchServiceCode { idm, .. } => idm,
        }
    }
}
