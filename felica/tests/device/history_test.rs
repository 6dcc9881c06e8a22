#[path = "../common/mod.rs"]
mod common;

use felica::history::{HistoryDate, TerminalKind};
use felica::test_support::{self, SAMPLE_IDM};
use felica::Error;

fn block(data: [u8; 16]) -> felica::transport::Reply {
    common::bytes(test_support::read_reply(SAMPLE_IDM, 0, 0, &[data]))
}

#[test]
fn history_read_through_selected_target() {
    common::init_logging();
    let ride = common::history_block();
    let mut charge = ride;
    charge[0] = 0xc8;
    charge[10..12].copy_from_slice(&1000u16.to_le_bytes());

    let (mut dev, mock) = common::ready_device(vec![block(ride), block(charge), block([0; 16])]);
    let target = dev.select_felica().unwrap();
    let records = target.read_history().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].terminal_kind(), TerminalKind::Train);
    assert_eq!(
        records[0].date,
        HistoryDate {
            year: 2019,
            month: 3,
            day: 7
        }
    );
    assert_eq!(records[0].balance, 11918);
    assert_eq!(records[1].terminal_kind(), TerminalKind::VendingMachine);
    assert_eq!(records[1].balance, 1000);
    assert_eq!(mock.borrow().sent.len(), 3);
}

#[test]
fn empty_history_reads_one_block() {
    let (mut dev, mock) = common::ready_device(vec![block([0; 16])]);
    let target = dev.select_felica().unwrap();
    assert!(target.read_history().unwrap().is_empty());
    assert_eq!(mock.borrow().sent.len(), 1);
}

#[test]
fn history_after_close_fails() {
    let (mut dev, _mock) = common::ready_device(vec![block(common::history_block())]);
    let target = dev.select_felica().unwrap();
    dev.close();
    assert_eq!(target.read_history(), Err(Error::UseAfterRelease));
}
