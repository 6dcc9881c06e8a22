// felica/src/device/builder.rs

use std::time::Duration;

use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::utils::{DEFAULT_TIMEOUT_MS, to_ms};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    timeout_ms: u64,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Exchange timeout applied to targets selected through the device.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Same as [`timeout_ms`](Self::timeout_ms), whole milliseconds.
    pub fn timeout(self, timeout: Duration) -> Self {
        self.timeout_ms(to_ms(timeout))
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_timeout(t, self.timeout_ms)),
            None => Err(Error::InvalidArgument("no transport configured".into())),
        }
    }
}
