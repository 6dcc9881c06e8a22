// felica/src/protocol/responses/mode.rs

use crate::constants::HEADER_LEN;
use crate::protocol::parser;
use crate::types::Idm;
use crate::Result;

/// Decode get-mode response (response code = 0x05)
/// Layout: header(10) + mode(1)
pub fn decode_get_mode(data: &[u8]) -> Result<(Idm, u8)> {
    parser::expect_response_code(data, 0x05)?;
    let idm = parser::idm_at(data, parser::IDM_OFFSET)?;
    let mode = parser::byte_at(data, HEADER_LEN)?;
    Ok((idm, mode))
}
