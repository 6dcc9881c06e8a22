// felica/src/protocol/frame.rs

use crate::constants::{HEADER_LEN, MAX_FRAME_LEN};
use crate::protocol::parser;
use crate::types::Idm;
use crate::{Error, Result};

/// Header shared by every FeliCa request and response.
/// Format: [Len(1)] [Code(1)] [IDm(8)]
/// `Len` counts the whole frame, header included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub length: u8,
    pub command_code: u8,
    pub idm: Idm,
}

impl FrameHeader {
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0] = self.length;
        out[1] = self.command_code;
        out[2..].copy_from_slice(self.idm.as_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, HEADER_LEN)?;
        Ok(Self {
            length: parser::byte_at(data, 0)?,
            command_code: parser::byte_at(data, parser::CODE_OFFSET)?,
            idm: parser::idm_at(data, parser::IDM_OFFSET)?,
        })
    }
}

/// A header plus the command-specific body that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: FrameHeader,
    pub body: Vec<u8>,
}

impl Frame {
    /// Build the wire bytes for `body` prefixed by a header carrying the
    /// real frame length, `command_code` and `idm`.
    pub fn encode(command_code: u8, idm: Idm, body: &[u8]) -> Result<Vec<u8>> {
        let size = HEADER_LEN + body.len();
        if size > MAX_FRAME_LEN {
            return Err(Error::FrameTooLarge { size });
        }

        let header = FrameHeader {
            length: size as u8,
            command_code,
            idm,
        };
        let mut out = Vec::with_capacity(size);
        out.extend_from_slice(&header.encode());
        out.extend_from_slice(body);
        Ok(out)
    }

    /// Split a received frame into header and body. The length byte must
    /// match the number of bytes supplied.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = FrameHeader::decode(data)?;
        if header.length as usize != data.len() {
            return Err(Error::InvalidLength {
                expected: header.length as usize,
                actual: data.len(),
            });
        }
        Ok(Self {
            header,
            body: data[HEADER_LEN..].to_vec(),
        })
    }
}
