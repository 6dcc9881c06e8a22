// felica/src/protocol/parser.rs

use crate::constants::IDM_LEN;
use crate::types::Idm;
use crate::{Error, Result};

/// Offset of the response code inside a frame (after the length byte).
pub const CODE_OFFSET: usize = 1;

/// Offset of the IDm inside a frame.
pub const IDM_OFFSET: usize = 2;

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a little-endian u16 at given index, with bounds checking.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_le_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse an Idm (8 bytes) at `start` index with bounds checking.
pub fn idm_at(data: &[u8], start: usize) -> Result<Idm> {
    let s = slice_at(data, start, IDM_LEN)?;
    Idm::try_from(s)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure the response code byte equals `expected`. Returns
/// UnexpectedResponse on mismatch and InvalidLength when the frame is too
/// short to carry a code at all.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(data, CODE_OFFSET)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
