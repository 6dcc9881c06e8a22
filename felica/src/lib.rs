// felica/src/lib.rs

//! felica
//!
//! FeliCa command/response engine over a generic NFC initiator transport:
//! frame building, validated request/response exchanges, block reads and
//! service directory enumeration.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod history;
pub mod prelude;
pub mod protocol;
pub mod target;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::device::{Device, DeviceBuilder};
pub use crate::error::{Error, Result};
pub use crate::target::{SearchState, ServiceSearch, Target};
pub use crate::types::{BlockData, BlockDescriptor, Idm, SearchEntry, ServiceCode};
