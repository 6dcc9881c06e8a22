// felica/src/transport/traits.rs

use crate::Result;
use crate::types::Idm;

/// libnfc-compatible error codes a transport may report as a negative byte
/// count.
pub mod codes {
    /// Input/output error
    pub const NFC_EIO: i32 = -1;
    /// Buffer overflow: the reply did not fit the receive buffer
    pub const NFC_EOVFLOW: i32 = -5;
    /// Operation timed out
    pub const NFC_ETIMEOUT: i32 = -6;
    /// Target released
    pub const NFC_ETGRELEASED: i32 = -10;
}

/// Transport trait abstracts the NFC initiator away from protocol logic.
///
/// Opening the reader is the implementor's business; the core only needs
/// byte exchange with a timeout, target selection and release.
pub trait Transport {
    /// Put the reader in initiator mode. Readers that need no setup keep the
    /// default.
    fn initiator_init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Block until a FeliCa target answers and return its IDm, or `None`
    /// when no target is in the field.
    fn select_felica(&mut self) -> Result<Option<Idm>>;

    /// Send `tx`, then receive at most `rx.len()` bytes into `rx`, waiting
    /// up to `timeout_ms`. Returns the number of bytes received, or a
    /// negative error code (see [`codes`]) on transport failure.
    fn transceive_bytes(&mut self, tx: &[u8], rx: &mut [u8], timeout_ms: u64) -> i32;

    /// Release the reader. Called at most once by
    /// [`HandleGuard`](crate::transport::HandleGuard).
    fn close(&mut self);
}
