// felica/src/protocol/responses/read.rs

use crate::constants::{BLOCK_SIZE, HEADER_LEN};
use crate::protocol::parser;
use crate::types::{BlockData, Idm};
use crate::{Error, Result};

/// Decode ReadWithoutEncryption response payload (response code = 0x07)
/// Layout: header(10) + status1(1) + status2(1) + block_count(1) + blocks(N*16)
///
/// Status flags are returned as received; rejecting non-zero flags is the
/// validation chain's job. The block count must equal `expected_blocks`.
pub fn decode_read(data: &[u8], expected_blocks: usize) -> Result<(Idm, (u8, u8), Vec<BlockData>)> {
    parser::expect_response_code(data, 0x07)?;

    let idm = parser::idm_at(data, parser::IDM_OFFSET)?;
    let status1 = parser::byte_at(data, HEADER_LEN)?;
    let status2 = parser::byte_at(data, HEADER_LEN + 1)?;

    let block_count = parser::byte_at(data, HEADER_LEN + 2)? as usize;
    if block_count != expected_blocks {
        return Err(Error::BlockCountMismatch {
            expected: expected_blocks,
            actual: block_count,
        });
    }

    let start = HEADER_LEN + 3;
    let raw = parser::slice_at(data, start, block_count * BLOCK_SIZE)?;
    let blocks = raw
        .chunks_exact(BLOCK_SIZE)
        .map(BlockData::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok((idm, (status1, status2), blocks))
}
