#[path = "../common/mod.rs"]
mod common;

use felica::protocol::{Command, Frame};
use felica::types::{BlockDescriptor, ServiceCode};
use felica::Error;

#[test]
fn every_command_carries_length_and_card_id() {
    let idm = common::sample_idm();
    let cmds = [
        Command::GetMode,
        Command::ReadWithoutEncryption {
            services: vec![common::history_service()],
            blocks: vec![BlockDescriptor::new(0)],
        },
        Command::SearchServiceCode { index: 0x0102 },
    ];

    for cmd in &cmds {
        let bytes = cmd.encode(idm).unwrap();
        let frame = Frame::decode(&bytes).unwrap();
        assert_eq!(frame.header.length as usize, bytes.len());
        assert_eq!(frame.header.command_code, cmd.command_code());
        assert_eq!(frame.header.idm, idm);
    }
}

#[test]
fn search_request_layout() {
    let bytes = Command::SearchServiceCode { index: 0x0102 }
        .encode(common::sample_idm())
        .unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(&bytes[10..], &[0x02, 0x01]);
}

#[test]
fn read_request_over_ceiling_is_rejected() {
    let services: Vec<_> = (0..130u16).map(ServiceCode::new).collect();
    let cmd = Command::ReadWithoutEncryption {
        services,
        blocks: vec![BlockDescriptor::new(0)],
    };
    assert!(matches!(
        cmd.encode(common::sample_idm()),
        Err(Error::FrameTooLarge { size: 274 })
    ));
}

#[test]
fn read_whose_reply_cannot_be_framed_is_rejected() {
    let read = |n: u8| Command::ReadWithoutEncryption {
        services: vec![common::history_service()],
        blocks: (0..n).map(BlockDescriptor::new).collect(),
    };
    assert!(read(15).encode(common::sample_idm()).is_ok());
    assert_eq!(
        read(16).encode(common::sample_idm()),
        Err(Error::FrameTooLarge { size: 269 })
    );
}
