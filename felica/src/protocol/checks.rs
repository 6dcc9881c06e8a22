// felica/src/protocol/checks.rs
//! Response validation chain.
//!
//! Every exchange runs [`TransportOk`] then [`ResponseCode`], followed by the
//! command-specific checks the caller opts into ([`StatusFlags`],
//! [`ExactLength`], [`LengthByte`]). Evaluation stops at the first failing check and only
//! that error is surfaced.

use log::{trace, warn};

use crate::constants::HEADER_LEN;
use crate::protocol::parser::CODE_OFFSET;
use crate::{Error, Result};

/// Everything a check may look at after one transport exchange.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeContext<'a> {
    /// Signed byte count returned by the transport.
    pub count: i32,
    /// Request frame as sent.
    pub request: &'a [u8],
    /// Whole receive buffer; bytes past `count` are whatever the buffer was
    /// initialised with.
    pub response: &'a [u8],
    /// Response code the command expects (`command_code + 1`).
    pub expected_code: u8,
    /// Size of a complete, well-formed response.
    pub expected_len: usize,
}

impl<'a> ExchangeContext<'a> {
    pub fn new(
        count: i32,
        request: &'a [u8],
        response: &'a [u8],
        expected_code: u8,
        expected_len: usize,
    ) -> Self {
        Self {
            count,
            request,
            response,
            expected_code,
            expected_len,
        }
    }

    /// Bytes actually received, or an empty slice after a transport error.
    pub fn received(&self) -> &'a [u8] {
        let n = usize::try_from(self.count).unwrap_or(0);
        &self.response[..n.min(self.response.len())]
    }

    fn response_byte(&self, idx: usize) -> u8 {
        self.response.get(idx).copied().unwrap_or(0)
    }
}

/// A single step of the validation chain.
pub trait Check {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &ExchangeContext<'_>) -> Result<()>;
}

/// Fails with [`Error::Transport`] when the byte count is negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportOk;

impl Check for TransportOk {
    fn name(&self) -> &'static str {
        "transport"
    }

    fn evaluate(&self, ctx: &ExchangeContext<'_>) -> Result<()> {
        if ctx.count < 0 {
            return Err(Error::Transport { code: ctx.count });
        }
        Ok(())
    }
}

/// Fails with [`Error::UnexpectedResponse`] when the response header code is
/// not the command code plus one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseCode;

impl Check for ResponseCode {
    fn name(&self) -> &'static str {
        "response-code"
    }

    fn evaluate(&self, ctx: &ExchangeContext<'_>) -> Result<()> {
        let actual = ctx.response_byte(CODE_OFFSET);
        if actual != ctx.expected_code {
            return Err(Error::UnexpectedResponse {
                expected: ctx.expected_code,
                actual,
            });
        }
        Ok(())
    }
}

/// Fails with [`Error::CardStatus`] when either status flag following the
/// header is non-zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusFlags;

impl Check for StatusFlags {
    fn name(&self) -> &'static str {
        "status-flags"
    }

    fn evaluate(&self, ctx: &ExchangeContext<'_>) -> Result<()> {
        let status1 = ctx.response_byte(HEADER_LEN);
        let status2 = ctx.response_byte(HEADER_LEN + 1);
        if status1 != 0 || status2 != 0 {
            let err = Error::CardStatus { status1, status2 };
            warn!("{}", err);
            return Err(err);
        }
        Ok(())
    }
}

/// Fails with [`Error::ShortRead`] unless exactly `expected_len` bytes
/// arrived. Not for commands whose reply length carries meaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactLength;

impl Check for ExactLength {
    fn name(&self) -> &'static str {
        "exact-length"
    }

    fn evaluate(&self, ctx: &ExchangeContext<'_>) -> Result<()> {
        let actual = usize::try_from(ctx.count).unwrap_or(0);
        if ctx.count < 0 || actual != ctx.expected_len {
            return Err(Error::ShortRead {
                expected: ctx.expected_len,
                actual,
            });
        }
        Ok(())
    }
}

/// Fails with [`Error::InvalidLength`] when the reply's own length byte
/// disagrees with the byte count. Only for fixed-size replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthByte;

impl Check for LengthByte {
    fn name(&self) -> &'static str {
        "length-byte"
    }

    fn evaluate(&self, ctx: &ExchangeContext<'_>) -> Result<()> {
        let actual = usize::try_from(ctx.count).unwrap_or(0);
        let declared = ctx.response_byte(0) as usize;
        if declared != actual {
            return Err(Error::InvalidLength {
                expected: declared,
                actual,
            });
        }
        Ok(())
    }
}

/// Checks run before any command-specific one, in this order.
pub const UNIVERSAL: [&dyn Check; 2] = [&TransportOk, &ResponseCode];

/// Run `checks` in order, stopping at the first failure.
pub fn run_checks(checks: &[&dyn Check], ctx: &ExchangeContext<'_>) -> Result<()> {
    for check in checks {
        check.evaluate(ctx).inspect_err(|e| {
            trace!("check {} failed: {}", check.name(), e);
        })?;
    }
    Ok(())
}

/// Run the universal checks followed by `extra`.
pub fn run_chain(extra: &[&dyn Check], ctx: &ExchangeContext<'_>) -> Result<()> {
    run_checks(&UNIVERSAL, ctx)?;
    run_checks(extra, ctx)
}
