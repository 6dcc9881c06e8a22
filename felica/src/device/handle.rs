// felica/src/device/handle.rs

use std::marker::PhantomData;
use std::rc::Rc;

use log::{debug, info};

use crate::target::Target;
use crate::transport::{HandleGuard, SharedHandle, Transport};
use crate::utils::DEFAULT_TIMEOUT_MS;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces initiator initialization at compile time.
///
/// The transport lives in a [`HandleGuard`] shared with every [`Target`]
/// selected through this device, so [`close`](Device::close) invalidates
/// those targets too.
pub struct Device<State = Uninitialized> {
    handle: SharedHandle,
    timeout_ms: u64,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_timeout(transport, DEFAULT_TIMEOUT_MS)
    }

    pub(crate) fn with_timeout(transport: Box<dyn Transport>, timeout_ms: u64) -> Self {
        Self {
            handle: HandleGuard::new(transport).shared(),
            timeout_ms,
            _state: PhantomData,
        }
    }

    /// Put the reader in initiator mode. Returns an initialized Device on
    /// success.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        self.handle.borrow_mut().expose()?.initiator_init()?;
        debug!("initiator ready");

        Ok(Device {
            handle: self.handle,
            timeout_ms: self.timeout_ms,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Wait for a FeliCa card and bind a [`Target`] to it.
    pub fn select_felica(&mut self) -> Result<Target> {
        let idm = self
            .handle
            .borrow_mut()
            .expose()?
            .select_felica()?
            .ok_or(Error::NoTarget)?;
        info!("selected felica target {}", idm.to_hex());

        Ok(Target::new(idm, Rc::clone(&self.handle)).with_timeout(self.timeout_ms))
    }
}

impl<State> Device<State> {
    /// Release the transport. Idempotent; targets selected earlier fail
    /// with `UseAfterRelease` from now on.
    pub fn close(&mut self) {
        self.handle.borrow_mut().release();
    }

    pub fn is_closed(&self) -> bool {
        self.handle.borrow().is_released()
    }

    /// Exchange timeout handed to selected targets.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}
