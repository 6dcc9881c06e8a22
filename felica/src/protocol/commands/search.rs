// felica/src/protocol/commands/search.rs

/// Encode SearchServiceCode body (FeliCa command code 0x0A)
/// Layout: index(2, LE)
pub fn encode_search_service_code(index: u16) -> Vec<u8> {
    index.to_le_bytes().to_vec()
}
