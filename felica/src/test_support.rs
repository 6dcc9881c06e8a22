//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build the replies a FeliCa card would send and wire a
//! `MockTransport` up to a `Target`, so tests across the crate and the
//! tests/ directory share the same simulated card.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{
    BLOCK_SIZE, CMD_GET_MODE, CMD_READ_WITHOUT_ENCRYPTION, CMD_SEARCH_SERVICE_CODE, HEADER_LEN,
    IDM_LEN,
};
use crate::device::{Device, Initialized};
use crate::target::Target;
use crate::transport::{HandleGuard, MockTransport, Reply};
use crate::types::Idm;
use crate::Result;

/// IDm used by the simulated card.
pub const SAMPLE_IDM: [u8; IDM_LEN] = [0x01, 0x2e, 0x4c, 0x12, 0x34, 0x56, 0x78, 0x9a];

/// Build a response frame: length byte, `command_code + 1`, IDm, body.
#[doc(hidden)]
pub fn reply_frame(command_code: u8, idm: [u8; IDM_LEN], body: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(HEADER_LEN + body.len());
    v.push((HEADER_LEN + body.len()) as u8);
    v.push(command_code.wrapping_add(1));
    v.extend_from_slice(&idm);
    v.extend_from_slice(body);
    v
}

#[doc(hidden)]
pub fn mode_reply(idm: [u8; IDM_LEN], mode: u8) -> Vec<u8> {
    reply_frame(CMD_GET_MODE, idm, &[mode])
}

/// Successful or failed read reply carrying `blocks`.
#[doc(hidden)]
pub fn read_reply(
    idm: [u8; IDM_LEN],
    status1: u8,
    status2: u8,
    blocks: &[[u8; BLOCK_SIZE]],
) -> Vec<u8> {
    let mut body = vec![status1, status2, blocks.len() as u8];
    for b in blocks {
        body.extend_from_slice(b);
    }
    reply_frame(CMD_READ_WITHOUT_ENCRYPTION, idm, &body)
}

/// Read error reply as cards send it: header and status flags only.
#[doc(hidden)]
pub fn read_error_reply(idm: [u8; IDM_LEN], status1: u8, status2: u8) -> Vec<u8> {
    reply_frame(CMD_READ_WITHOUT_ENCRYPTION, idm, &[status1, status2])
}

/// Short (two data byte) search reply; `0xffff` is the end sentinel.
#[doc(hidden)]
pub fn search_service_reply(idm: [u8; IDM_LEN], code: u16) -> Vec<u8> {
    reply_frame(CMD_SEARCH_SERVICE_CODE, idm, &code.to_le_bytes())
}

/// Full-length (four data byte) search reply.
#[doc(hidden)]
pub fn search_full_reply(idm: [u8; IDM_LEN], data: [u8; 4]) -> Vec<u8> {
    reply_frame(CMD_SEARCH_SERVICE_CODE, idm, &data)
}

/// A MockTransport with `SAMPLE_IDM` in the field and `replies` queued,
/// shared so the caller can inspect it after handing it over.
#[doc(hidden)]
pub fn sample_mock(replies: Vec<Reply>) -> Rc<RefCell<MockTransport>> {
    MockTransport::with_replies(replies)
        .with_target(Idm::from_bytes(SAMPLE_IDM))
        .shared()
}

/// A Target bound to `SAMPLE_IDM` whose transport plays `replies`.
#[doc(hidden)]
pub fn mock_target(replies: Vec<Reply>) -> (Target, Rc<RefCell<MockTransport>>) {
    let mock = sample_mock(replies);
    let handle = HandleGuard::new(Box::new(Rc::clone(&mock))).shared();
    (Target::new(Idm::from_bytes(SAMPLE_IDM), handle), mock)
}

/// Create and initialize a Device backed by `mock`.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &Rc<RefCell<MockTransport>>) -> Result<Device<Initialized>> {
    Device::new_with_transport(Box::new(Rc::clone(mock))).initialize()
}
