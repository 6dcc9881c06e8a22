// felica/src/prelude.rs

pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::protocol::{Command, Response};
pub use crate::history::{HistoryDate, HistoryRecord, TerminalKind};
pub use crate::target::{SearchState, ServiceSearch, Target};
pub use crate::transport::{HandleGuard, Transport};
pub use crate::{BlockData, BlockDescriptor, Error, Idm, Result, SearchEntry, ServiceCode};

// Re-export small utilities for convenience
pub use crate::utils::{DEFAULT_TIMEOUT_MS, bytes_to_hex, bytes_to_hex_spaced, ms, to_ms};
