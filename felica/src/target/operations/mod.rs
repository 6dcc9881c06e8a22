pub mod exchange;
pub mod mode;
pub mod read;
pub mod service;

// Re-export commonly used functions/types at the operations root so callers
// can use `crate::target::operations::read_blocks(...)` and receive the
// iterator type as `crate::target::operations::ServiceSearch`.
pub use exchange::{ExchangeOptions, Exchanged, checked_exchange};
pub use mode::get_mode;
pub use read::{read_block, read_blocks};
pub use service::{SearchState, ServiceSearch, search_service_code};
