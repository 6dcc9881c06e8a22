// felica/src/protocol/responses/search.rs

use crate::constants::{HEADER_LEN, SEARCH_SERVICE_DATA_LEN, SEARCH_SERVICE_END};
use crate::error::{Error, Result};
use crate::protocol::parser;
use crate::types::{Idm, SearchEntry, ServiceCode};

/// Decode SearchServiceCode response (expected response code = 0x0B)
///
/// The reply length is the signal:
/// - header + 2: a service code, or `0xFFFF` at the end of the directory
/// - header + 4: unrecognized data, or end of directory when the low 16
///   bits are `0xFFFF`
/// - anything else is rejected with `UnexpectedResponseLength`
pub fn decode_search_service_code(data: &[u8]) -> Result<(Idm, SearchEntry)> {
    const FULL: usize = HEADER_LEN + SEARCH_SERVICE_DATA_LEN;
    const SHORT: usize = FULL - 2;

    let entry = match data.len() {
        SHORT => {
            let code = parser::le_u16_at(data, HEADER_LEN)?;
            if code == SEARCH_SERVICE_END {
                SearchEntry::End
            } else {
                SearchEntry::Service(ServiceCode::new(code))
            }
        }
        FULL => {
            let code = parser::le_u16_at(data, HEADER_LEN)?;
            if code == SEARCH_SERVICE_END {
                SearchEntry::End
            } else {
                let raw = parser::slice_at(data, HEADER_LEN, SEARCH_SERVICE_DATA_LEN)?;
                let mut bytes = [0u8; SEARCH_SERVICE_DATA_LEN];
                bytes.copy_from_slice(raw);
                SearchEntry::Unrecognized(bytes)
            }
        }
        actual => return Err(Error::UnexpectedResponseLength { actual }),
    };

    parser::expect_response_code(data, 0x0B)?;
    let idm = parser::idm_at(data, parser::IDM_OFFSET)?;

    Ok((idm, entry))
}
