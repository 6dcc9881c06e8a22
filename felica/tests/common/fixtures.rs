// fixtures.rs: shared cards, replies and devices for integration tests

use std::cell::RefCell;
use std::rc::Rc;

use felica::device::{Device, Initialized};
use felica::test_support;
use felica::transport::{MockTransport, Reply};
use felica::types::{Idm, ServiceCode};

/// Suica-style transaction history service
pub fn history_service() -> ServiceCode {
    felica::history::HISTORY_SERVICE
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(test_support::SAMPLE_IDM)
}

/// One history block as a transit card stores it: train ride on 2019-03-07,
/// balance 11918.
pub fn history_block() -> [u8; 16] {
    let bytes = hex::decode("160100022667e3c9e3cb8e2e0000d800").unwrap();
    bytes.try_into().unwrap()
}

pub fn bytes(reply: Vec<u8>) -> Reply {
    Reply::Bytes(reply)
}

pub fn service_reply(code: u16) -> Reply {
    Reply::Bytes(test_support::search_service_reply(
        test_support::SAMPLE_IDM,
        code,
    ))
}

/// Device in initiator mode with the sample card in the field.
pub fn ready_device(replies: Vec<Reply>) -> (Device<Initialized>, Rc<RefCell<MockTransport>>) {
    let mock = test_support::sample_mock(replies);
    let dev = test_support::initialized_mock_device(&mock).unwrap();
    (dev, mock)
}
