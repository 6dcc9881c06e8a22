use log::{debug, trace, warn};

use crate::protocol::checks::{self, Check, ExchangeContext};
use crate::protocol::{Command, Response};
use crate::target::Target;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Per-call knobs for [`checked_exchange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeOptions {
    pub timeout_ms: u64,
    /// Receive buffer size. Defaults to the command's full response size.
    pub response_capacity: Option<usize>,
}

impl ExchangeOptions {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            response_capacity: None,
        }
    }

    pub fn response_capacity(mut self, capacity: usize) -> Self {
        self.response_capacity = Some(capacity);
        self
    }
}

/// Outcome of a successful checked exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchanged {
    /// Byte count reported by the transport.
    pub count: usize,
    /// The received bytes (`count` of them).
    pub response: Vec<u8>,
}

/// Send `cmd` to `target` and validate the reply.
///
/// The transport and response-code checks always run first, then `checks`
/// in the given order. The first failure aborts the call.
pub fn checked_exchange(
    target: &Target,
    cmd: &Command,
    checks: &[&dyn Check],
    options: &ExchangeOptions,
) -> Result<Exchanged> {
    let request = cmd.encode(*target.idm())?;
    let capacity = options
        .response_capacity
        .unwrap_or_else(|| cmd.response_len());
    let mut response = vec![0u8; capacity];

    trace!("tx {}", bytes_to_hex(&request));
    let count = target.handle().borrow_mut().expose()?.transceive_bytes(
        &request,
        &mut response,
        options.timeout_ms,
    );
    debug!(
        "command {:#04x}: sent {} bytes, transport returned {}",
        cmd.command_code(),
        request.len(),
        count
    );

    let ctx = ExchangeContext::new(
        count,
        &request,
        &response,
        cmd.response_code(),
        cmd.response_len(),
    );
    checks::run_chain(checks, &ctx)?;

    let received = ctx.received().to_vec();
    trace!("rx {}", bytes_to_hex(&received));

    Ok(Exchanged {
        count: received.len(),
        response: received,
    })
}

/// Decode the bytes of a checked exchange as the reply to `cmd`.
///
/// The echoed IDm must be the target's own.
pub fn decode_reply(target: &Target, cmd: &Command, out: &Exchanged) -> Result<Response> {
    let response = Response::decode(cmd, &out.response)?;
    if response.idm() != target.idm() {
        let err = Error::IdmMismatch {
            expected: *target.idm(),
            actual: *response.idm(),
        };
        warn!("{}", err);
        return Err(err);
    }
    Ok(response)
}
