#[path = "../common/mod.rs"]
mod common;

use felica::test_support::{self, SAMPLE_IDM};
use felica::transport::traits::codes;
use felica::transport::Reply;
use felica::Error;

#[test]
fn read_single_block_via_mock_device() {
    let block = common::history_block();
    let (mut dev, _mock) =
        common::ready_device(vec![common::bytes(test_support::read_reply(
            SAMPLE_IDM,
            0,
            0,
            &[block],
        ))]);

    let target = dev.select_felica().unwrap();
    let data = target.read_block(common::history_service(), 0).unwrap();
    assert_eq!(data.as_bytes(), &block);
}

#[test]
fn status_error_carries_flags_and_reason() {
    let (mut dev, _mock) = common::ready_device(vec![common::bytes(
        test_support::read_error_reply(SAMPLE_IDM, 0x01, 0xa5),
    )]);
    let target = dev.select_felica().unwrap();

    let err = target.read_block(common::history_service(), 0).unwrap_err();
    assert_eq!(err.status_flags(), Some((0x01, 0xa5)));
    assert!(err.to_string().contains("Access is not allowed"));
}

#[test]
fn transport_errors_are_not_retried() {
    let (mut dev, mock) = common::ready_device(vec![
        Reply::Error(codes::NFC_ETGRELEASED),
        common::bytes(test_support::read_reply(SAMPLE_IDM, 0, 0, &[[0; 16]])),
    ]);
    let target = dev.select_felica().unwrap();

    assert_eq!(
        target.read_block(common::history_service(), 0),
        Err(Error::Transport {
            code: codes::NFC_ETGRELEASED
        })
    );
    assert_eq!(mock.borrow().sent.len(), 1);
}

#[test]
fn oversized_reply_is_a_transport_overflow() {
    let mut reply = test_support::read_reply(SAMPLE_IDM, 0, 0, &[[0; 16]]);
    reply.push(0);
    let (mut dev, _mock) = common::ready_device(vec![common::bytes(reply)]);
    let target = dev.select_felica().unwrap();
    assert_eq!(
        target.read_block(common::history_service(), 0),
        Err(Error::Transport {
            code: codes::NFC_EOVFLOW
        })
    );
}

#[test]
fn read_history_with_question_mark() -> anyhow::Result<()> {
    let blocks = [common::history_block(), [0u8; 16]];
    let (mut dev, mock) = common::ready_device(vec![common::bytes(test_support::read_reply(
        SAMPLE_IDM, 0, 0, &blocks,
    ))]);

    let target = dev.select_felica()?;
    let data = target.read_blocks(
        &[common::history_service()],
        &[felica::BlockDescriptor::new(0), felica::BlockDescriptor::new(1)],
    )?;
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].as_bytes(), &blocks[0]);
    assert_eq!(mock.borrow().sent[0][13..], [0x02, 0x80, 0x00, 0x80, 0x01]);

    dev.close();
    assert!(matches!(
        target.read_blocks(&[common::history_service()], &[felica::BlockDescriptor::new(0)]),
        Err(Error::UseAfterRelease)
    ));
    Ok(())
}
