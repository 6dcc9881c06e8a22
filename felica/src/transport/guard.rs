// felica/src/transport/guard.rs

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Guard shared between a `Device` and every `Target` selected through it.
pub type SharedHandle = Rc<RefCell<HandleGuard>>;

/// Owns the transport and releases it at most once.
///
/// After [`release`](Self::release) the transport is gone and
/// [`expose`](Self::expose) fails with [`Error::UseAfterRelease`]. Dropping
/// the guard releases it if nobody did.
pub struct HandleGuard {
    transport: Option<Box<dyn Transport>>,
}

impl HandleGuard {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Wrap into the shared form handed to targets.
    pub fn shared(self) -> SharedHandle {
        Rc::new(RefCell::new(self))
    }

    /// Borrow the live transport.
    pub fn expose(&mut self) -> Result<&mut (dyn Transport + 'static)> {
        match self.transport.as_deref_mut() {
            Some(t) => Ok(t),
            None => Err(Error::UseAfterRelease),
        }
    }

    /// Close the transport. Further calls are no-ops.
    pub fn release(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            info!("releasing transport handle");
            transport.close();
        }
    }

    pub fn is_released(&self) -> bool {
        self.transport.is_none()
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for HandleGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandleGuard")
            .field("released", &self.is_released())
            .finish()
    }
}
