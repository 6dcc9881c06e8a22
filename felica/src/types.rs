// felica/src/types.rs

use crate::Error;
use crate::constants::{BLOCK_ACCESS_MODE, BLOCK_SIZE, IDM_LEN};
use derive_more::{Display, From};
use std::convert::TryFrom;

/// IDm - Newtype Pattern (8 バイト)
///
/// The card identifier captured at selection time. Copied into the header of
/// every request and echoed back by the card in every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; IDM_LEN]);

impl Idm {
    pub fn from_bytes(bytes: [u8; IDM_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IDM_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; IDM_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: IDM_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// ServiceCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display(fmt = "{:#06x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// Search-service sentinel marking the end of the service directory.
    pub const END: Self = Self(0xffff);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub fn is_end(&self) -> bool {
        *self == Self::END
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; BLOCK_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: BLOCK_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Two-byte block list element used by read requests.
///
/// The access-mode byte is always `0x80` (two-byte element, first service in
/// the service list); only the block index varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockDescriptor {
    pub index: u8,
}

impl BlockDescriptor {
    pub fn new(index: u8) -> Self {
        Self { index }
    }

    /// FeliCa のブロック要素を 2 バイトにエンコードする
    pub fn encode(&self) -> [u8; 2] {
        [BLOCK_ACCESS_MODE, self.index]
    }
}

/// One decoded search-service reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEntry {
    /// Two data bytes: a service code.
    Service(ServiceCode),
    /// Four data bytes that are not the end sentinel. Their meaning is not
    /// confirmed, so they are kept raw.
    Unrecognized([u8; 4]),
    /// End of the service directory.
    End,
}
