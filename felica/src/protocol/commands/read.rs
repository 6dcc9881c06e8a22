// felica/src/protocol/commands/read.rs

use crate::constants::{HEADER_LEN, MAX_FRAME_LEN};
use crate::types::{BlockDescriptor, ServiceCode};
use crate::{Error, Result};

/// Encode ReadWithoutEncryption body (FeliCa command code 0x06)
/// Layout: service_count(1) + services(2*n, LE) + block_count(1) + blocks(2*m)
pub fn encode_read(services: &[ServiceCode], blocks: &[BlockDescriptor]) -> Result<Vec<u8>> {
    if services.is_empty() {
        return Err(Error::InvalidArgument("service list is empty".into()));
    }
    if blocks.is_empty() {
        return Err(Error::InvalidArgument("block list is empty".into()));
    }

    let body_len = 1 + 2 * services.len() + 1 + 2 * blocks.len();
    if HEADER_LEN + body_len > MAX_FRAME_LEN {
        return Err(Error::FrameTooLarge {
            size: HEADER_LEN + body_len,
        });
    }

    let mut buf = Vec::with_capacity(body_len);
    buf.push(services.len() as u8);
    for svc in services {
        buf.extend_from_slice(&svc.to_le_bytes());
    }

    buf.push(blocks.len() as u8);
    for blk in blocks {
        buf.extend_from_slice(&blk.encode());
    }

    Ok(buf)
}
