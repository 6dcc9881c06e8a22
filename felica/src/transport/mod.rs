// felica/src/transport/mod.rs

pub mod guard;
pub mod mock;
pub mod traits;

pub use guard::{HandleGuard, SharedHandle};
pub use mock::{MockTransport, Reply};
pub use traits::Transport;
