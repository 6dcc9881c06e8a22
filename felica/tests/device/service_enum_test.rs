#[path = "../common/mod.rs"]
mod common;

use felica::test_support::{self, SAMPLE_IDM};
use felica::transport::Reply;
use felica::{Error, SearchState, ServiceCode};

#[test]
fn enumerates_until_sentinel() {
    common::init_logging();
    let (mut dev, mock) = common::ready_device(vec![
        common::service_reply(0x000a),
        common::service_reply(0x0065),
        common::service_reply(0xffff),
    ]);
    let target = dev.select_felica().unwrap();

    let mut search = target.service_search();
    let codes: Vec<_> = search.by_ref().collect::<Result<_, _>>().unwrap();
    assert_eq!(codes, vec![ServiceCode::new(0x000a), ServiceCode::new(0x0065)]);
    assert_eq!(search.state(), SearchState::Done);
    assert_eq!(mock.borrow().sent.len(), 3);
}

#[test]
fn bad_length_at_index_two_halts() {
    let mut odd = test_support::search_service_reply(SAMPLE_IDM, 0x0100);
    odd.truncate(11);
    odd[0] = 11;
    let (mut dev, mock) = common::ready_device(vec![
        common::service_reply(0x000a),
        common::service_reply(0x0065),
        Reply::Bytes(odd),
        common::service_reply(0x0200),
    ]);
    let target = dev.select_felica().unwrap();

    assert_eq!(
        target.services(),
        Err(Error::UnexpectedResponseLength { actual: 11 })
    );
    let sent = &mock.borrow().sent;
    assert_eq!(sent.len(), 3);
    assert_eq!(&sent[2][10..], &[2, 0]);
}

#[test]
fn partial_results_survive_through_the_iterator() {
    let (mut dev, _mock) = common::ready_device(vec![
        common::service_reply(0x090f),
        common::service_reply(0x1008),
    ]);
    let target = dev.select_felica().unwrap();

    // Third query times out (empty queue).
    let mut found = Vec::new();
    let mut failure = None;
    for item in target.service_search() {
        match item {
            Ok(code) => found.push(code),
            Err(e) => failure = Some(e),
        }
    }
    assert_eq!(found, vec![ServiceCode::new(0x090f), ServiceCode::new(0x1008)]);
    assert!(matches!(failure, Some(Error::Transport { .. })));
}

#[test]
fn full_length_entries_are_skipped() {
    let (mut dev, _mock) = common::ready_device(vec![
        common::bytes(test_support::search_full_reply(SAMPLE_IDM, [0x00, 0x00, 0xfe, 0xff])),
        common::service_reply(0x008b),
        common::bytes(test_support::search_full_reply(SAMPLE_IDM, [0x00, 0x10, 0xff, 0x17])),
        common::service_reply(0x100b),
        common::service_reply(0xffff),
    ]);
    let target = dev.select_felica().unwrap();
    assert_eq!(
        target.services().unwrap(),
        vec![ServiceCode::new(0x008b), ServiceCode::new(0x100b)]
    );
}
