// felica/src/protocol/commands/mode.rs

/// Encode the get-mode (Request Response, command code 0x04) body.
/// The request is the header alone.
pub fn encode_get_mode() -> Vec<u8> {
    Vec::new()
}
