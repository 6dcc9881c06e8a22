// felica/src/transport/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::Result;
use crate::transport::traits::{Transport, codes};
use crate::types::Idm;

/// One scripted answer of the simulated card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Bytes the card sends back.
    Bytes(Vec<u8>),
    /// Negative transport error code.
    Error(i32),
}

/// Mock transport for unit tests. It records sent frames and returns queued
/// replies; an empty queue behaves like a card that never answers.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub replies: Vec<Reply>,
    /// Timeout passed with each exchange, in send order.
    pub timeouts: Vec<u64>,
    /// IDm reported by `select_felica`; `None` simulates an empty field.
    pub target: Option<Idm>,
    pub init_calls: usize,
    pub close_calls: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, idm: Idm) -> Self {
        self.target = Some(idm);
        self
    }

    pub fn push_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
    }

    /// Wrap for sharing with a test that inspects the mock after handing it
    /// to a guard.
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }
}

impl Transport for MockTransport {
    fn initiator_init(&mut self) -> Result<()> {
        self.init_calls += 1;
        Ok(())
    }

    fn select_felica(&mut self) -> Result<Option<Idm>> {
        Ok(self.target)
    }

    fn transceive_bytes(&mut self, tx: &[u8], rx: &mut [u8], timeout_ms: u64) -> i32 {
        self.sent.push(tx.to_vec());
        self.timeouts.push(timeout_ms);

        if self.replies.is_empty() {
            return codes::NFC_ETIMEOUT;
        }
        match self.replies.remove(0) {
            Reply::Error(code) => code,
            Reply::Bytes(bytes) if bytes.len() > rx.len() => codes::NFC_EOVFLOW,
            Reply::Bytes(bytes) => {
                rx[..bytes.len()].copy_from_slice(&bytes);
                bytes.len() as i32
            }
        }
    }

    fn close(&mut self) {
        self.close_calls += 1;
    }
}

impl Transport for Rc<RefCell<MockTransport>> {
    fn initiator_init(&mut self) -> Result<()> {
        self.borrow_mut().initiator_init()
    }

    fn select_felica(&mut self) -> Result<Option<Idm>> {
        self.borrow_mut().select_felica()
    }

    fn transceive_bytes(&mut self, tx: &[u8], rx: &mut [u8], timeout_ms: u64) -> i32 {
        self.borrow_mut().transceive_bytes(tx, rx, timeout_ms)
    }

    fn close(&mut self) {
        self.borrow_mut().close()
    }
}
