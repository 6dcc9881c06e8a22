// felica/src/target/mod.rs

use std::time::Duration;

use crate::history::{self, HistoryRecord};
use crate::transport::SharedHandle;
use crate::types::{BlockData, BlockDescriptor, Idm, SearchEntry, ServiceCode};
use crate::utils::{DEFAULT_TIMEOUT_MS, ms};
use crate::Result;

pub mod operations;

pub use operations::{ExchangeOptions, Exchanged, SearchState, ServiceSearch};

/// A selected FeliCa card: its IDm plus the shared reader handle.
///
/// Commands take `&self`; the target holds no state between them.
pub struct Target {
    idm: Idm,
    handle: SharedHandle,
    timeout_ms: u64,
}

impl Target {
    pub fn new(idm: Idm, handle: SharedHandle) -> Self {
        Self {
            idm,
            handle,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        ms(self.timeout_ms)
    }

    pub(crate) fn handle(&self) -> &SharedHandle {
        &self.handle
    }

    /// True once the reader behind this target has been released.
    pub fn is_released(&self) -> bool {
        self.handle.borrow().is_released()
    }

    /// Read the card's current mode (Request Response).
    pub fn get_mode(&self) -> Result<u8> {
        operations::get_mode(self)
    }

    /// Read one block of one service.
    pub fn read_block(&self, service: ServiceCode, index: u8) -> Result<BlockData> {
        operations::read_block(self, service, index)
    }

    /// Read blocks using ReadWithoutEncryption
    pub fn read_blocks(
        &self,
        services: &[ServiceCode],
        blocks: &[BlockDescriptor],
    ) -> Result<Vec<BlockData>> {
        operations::read_blocks(self, services, blocks)
    }

    /// Issue a single SearchServiceCode query.
    pub fn search_service_code(&self, index: u16) -> Result<SearchEntry> {
        operations::search_service_code(self, index)
    }

    /// Walk the service directory and return every service code in
    /// discovery order. Partial results are discarded on error; use
    /// [`service_search`](Self::service_search) to keep them.
    pub fn services(&self) -> Result<Vec<ServiceCode>> {
        self.service_search().collect()
    }

    /// Lazy service directory walk yielding each code as it is found.
    pub fn service_search(&self) -> ServiceSearch<'_> {
        ServiceSearch::new(self)
    }

    /// Transit history records, newest first.
    pub fn read_history(&self) -> Result<Vec<HistoryRecord>> {
        history::read_history(self)
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("idm", &self.idm.to_hex())
            .field("timeout_ms", &self.timeout_ms)
            .field("released", &self.is_released())
            .finish()
    }
}
