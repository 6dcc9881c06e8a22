// felica/src/protocol/mod.rs

pub mod checks;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod status;

pub use checks::{
    Check, ExactLength, ExchangeContext, LengthByte, ResponseCode, StatusFlags, TransportOk,
};
pub use commands::{Command, encode_get_mode, encode_read, encode_search_service_code};
pub use frame::{Frame, FrameHeader};
pub use responses::{Response, decode_get_mode, decode_read, decode_search_service_code};
