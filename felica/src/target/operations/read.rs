use crate::protocol::checks::{ExactLength, LengthByte, StatusFlags};
use crate::protocol::{Command, Response};
use crate::target::Target;
use crate::target::operations::exchange::{ExchangeOptions, checked_exchange, decode_reply};
use crate::types::{BlockData, BlockDescriptor, ServiceCode};
use crate::{Error, Result};

/// Read multiple blocks from a card using ReadWithoutEncryption.
///
/// Runs the status-flag check before the length checks, so a card-reported
/// error is surfaced even when the reply is short. Reads whose reply could
/// not be framed (16 blocks or more) fail before any I/O.
pub fn read_blocks(
    target: &Target,
    services: &[ServiceCode],
    blocks: &[BlockDescriptor],
) -> Result<Vec<BlockData>> {
    let cmd = Command::ReadWithoutEncryption {
        services: services.to_vec(),
        blocks: blocks.to_vec(),
    };

    let out = checked_exchange(
        target,
        &cmd,
        &[&StatusFlags, &ExactLength, &LengthByte],
        &ExchangeOptions::new(target.timeout_ms()),
    )?;

    match decode_reply(target, &cmd, &out)? {
        Response::ReadWithoutEncryption { blocks, .. } => Ok(blocks),
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}

/// Convenience helper that reads a single block.
pub fn read_block(target: &Target, service: ServiceCode, index: u8) -> Result<BlockData> {
    let blocks = read_blocks(target, &[service], &[BlockDescriptor::new(index)])?;

    blocks.into_iter().next().ok_or(Error::BlockCountMismatch {
        expected: 1,
        actual: 0,
    })
}
