use log::{debug, warn};

use crate::protocol::{Command, Response};
use crate::target::Target;
use crate::target::operations::exchange::{ExchangeOptions, checked_exchange, decode_reply};
use crate::types::{SearchEntry, ServiceCode};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Issue one SearchServiceCode query at `index`.
///
/// No length check runs: the reply length tells a service code from an
/// area entry, and any other length becomes `UnexpectedResponseLength`.
pub fn search_service_code(target: &Target, index: u16) -> Result<SearchEntry> {
    let cmd = Command::SearchServiceCode { index };
    let out = checked_exchange(
        target,
        &cmd,
        &[],
        &ExchangeOptions::new(target.timeout_ms()),
    )?;

    match decode_reply(target, &cmd, &out)? {
        Response::SearchServiceCode { entry, .. } => Ok(entry),
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}

/// Where a [`ServiceSearch`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Next query goes to this index.
    Querying(u16),
    /// End of directory reached (or the index space ran out).
    Done,
    /// An exchange failed; the error was yielded.
    Failed,
}

/// Iterator over service codes returned by SearchServiceCode.
///
/// Yields `Ok(code)` for each service in discovery order and a single
/// `Err` if an exchange fails, after which it is exhausted. Codes yielded
/// before the error remain valid.
pub struct ServiceSearch<'a> {
    target: &'a Target,
    state: SearchState,
}

impl<'a> ServiceSearch<'a> {
    pub fn new(target: &'a Target) -> Self {
        Self {
            target,
            state: SearchState::Querying(0),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    fn advance(&mut self, index: u16) {
        self.state = match index.checked_add(1) {
            Some(next) => SearchState::Querying(next),
            None => {
                debug!("service index space exhausted");
                SearchState::Done
            }
        };
    }
}

impl<'a> Iterator for ServiceSearch<'a> {
    type Item = Result<ServiceCode>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let index = match self.state {
                SearchState::Querying(index) => index,
                SearchState::Done | SearchState::Failed => return None,
            };

            match search_service_code(self.target, index) {
                Ok(SearchEntry::Service(code)) => {
                    debug!("service {} at index {}", code, index);
                    self.advance(index);
                    return Some(Ok(code));
                }
                Ok(SearchEntry::Unrecognized(data)) => {
                    warn!(
                        "skipping unverified full-length entry {} at index {}",
                        bytes_to_hex(&data),
                        index
                    );
                    self.advance(index);
                }
                Ok(SearchEntry::End) => {
                    debug!("service directory ends at index {}", index);
                    self.state = SearchState::Done;
                    return None;
                }
                Err(e) => {
                    self.state = SearchState::Failed;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for ServiceSearch<'_> {}
