// felica/src/constants.rs
//! Common protocol constants used across the crate

/// IDm length in bytes
pub const IDM_LEN: usize = 8;

/// Frame header: length(1) + command code(1) + IDm(8)
pub const HEADER_LEN: usize = 1 + 1 + IDM_LEN;

/// Largest frame expressible by the one-byte length field
pub const MAX_FRAME_LEN: usize = 255;

/// Size of one FeliCa data block
pub const BLOCK_SIZE: usize = 16;

/// Access-mode byte of a two-byte block list element
pub const BLOCK_ACCESS_MODE: u8 = 0x80;

/// Command codes. Responses use `code + 1`.
pub const CMD_GET_MODE: u8 = 0x04;
pub const CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;
pub const CMD_SEARCH_SERVICE_CODE: u8 = 0x0A;

/// Search-service data bytes in a full-length reply
pub const SEARCH_SERVICE_DATA_LEN: usize = 4;

/// Low 16 bits of search-service data that mark the end of the directory
pub const SEARCH_SERVICE_END: u16 = 0xFFFF;
