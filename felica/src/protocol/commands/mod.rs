// felica/src/protocol/commands/mod.rs

pub mod mode;
pub mod read;
pub mod search;

pub use mode::encode_get_mode;
pub use read::encode_read;
pub use search::encode_search_service_code;

use crate::constants::{
    BLOCK_SIZE, CMD_GET_MODE, CMD_READ_WITHOUT_ENCRYPTION, CMD_SEARCH_SERVICE_CODE, HEADER_LEN,
    MAX_FRAME_LEN, SEARCH_SERVICE_DATA_LEN,
};
use crate::protocol::frame::Frame;
use crate::types::{BlockDescriptor, Idm, ServiceCode};
use crate::{Error, Result};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Request Response: asks the card for its current mode.
    GetMode,
    ReadWithoutEncryption {
        services: Vec<ServiceCode>,
        blocks: Vec<BlockDescriptor>,
    },
    SearchServiceCode {
        index: u16,
    },
}

impl Command {
    /// Command code byte placed in the request header.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetMode => CMD_GET_MODE,
            Self::ReadWithoutEncryption { .. } => CMD_READ_WITHOUT_ENCRYPTION,
            Self::SearchServiceCode { .. } => CMD_SEARCH_SERVICE_CODE,
        }
    }

    /// Response code paired with this command (`command_code + 1`).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command body (everything after the header).
    pub fn encode_body(&self) -> Result<Vec<u8>> {
        match self {
            Self::GetMode => Ok(encode_get_mode()),
            Self::ReadWithoutEncryption { services, blocks } => encode_read(services, blocks),
            Self::SearchServiceCode { index } => Ok(encode_search_service_code(*index)),
        }
    }

    /// Encode the full request frame addressed to `idm`.
    ///
    /// Fails with `FrameTooLarge` when either the request or the reply it
    /// asks for would not fit the one-byte length field.
    pub fn encode(&self, idm: Idm) -> Result<Vec<u8>> {
        let body = self.encode_body()?;
        let frame = Frame::encode(self.command_code(), idm, &body)?;

        let reply = self.response_len();
        if reply > MAX_FRAME_LEN {
            return Err(Error::FrameTooLarge { size: reply });
        }
        Ok(frame)
    }

    /// Size of a complete, well-formed response. For search-service this is
    /// the longest reply; shorter replies are meaningful there.
    pub fn response_len(&self) -> usize {
        match self {
            Self::GetMode => HEADER_LEN + 1,
            Self::ReadWithoutEncryption { blocks, .. } => HEADER_LEN + 3 + BLOCK_SIZE * blocks.len(),
            Self::SearchServiceCode { .. } => HEADER_LEN + SEARCH_SERVICE_DATA_LEN,
        }
    }
}
