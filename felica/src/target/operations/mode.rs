use crate::protocol::checks::{ExactLength, LengthByte};
use crate::protocol::{Command, Response};
use crate::target::Target;
use crate::target::operations::exchange::{ExchangeOptions, checked_exchange, decode_reply};
use crate::{Error, Result};

/// Ask the card for its current mode.
pub fn get_mode(target: &Target) -> Result<u8> {
    let cmd = Command::GetMode;
    let out = checked_exchange(
        target,
        &cmd,
        &[&ExactLength, &LengthByte],
        &ExchangeOptions::new(target.timeout_ms()),
    )?;

    match decode_reply(target, &cmd, &out)? {
        Response::GetMode { mode, .. } => Ok(mode),
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}
