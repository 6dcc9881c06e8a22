#[path = "../common/mod.rs"]
mod common;

use felica::protocol::checks::{self, ExactLength, ExchangeContext, StatusFlags};
use felica::protocol::Command;
use felica::test_support;
use felica::Error;
use proptest::prelude::*;

fn read_cmd() -> Command {
    Command::ReadWithoutEncryption {
        services: vec![common::history_service()],
        blocks: vec![felica::BlockDescriptor::new(0)],
    }
}

#[test]
fn get_mode_length_boundaries() {
    let cmd = Command::GetMode;
    let n = cmd.response_len();
    let mut reply = test_support::mode_reply(test_support::SAMPLE_IDM, 0);
    reply.push(0);

    let outcomes: Vec<bool> = [n - 1, n, n + 1]
        .iter()
        .map(|&count| {
            let ctx = ExchangeContext::new(
                count as i32,
                &[],
                &reply,
                cmd.response_code(),
                n,
            );
            checks::run_chain(&[&ExactLength], &ctx).is_ok()
        })
        .collect();
    assert_eq!(outcomes, vec![false, true, false]);
}

#[test]
fn universal_checks_run_without_extras() {
    let cmd = read_cmd();
    let reply = test_support::read_error_reply(test_support::SAMPLE_IDM, 0xff, 0xa1);
    let ctx = ExchangeContext::new(
        reply.len() as i32,
        &[],
        &reply,
        cmd.response_code(),
        cmd.response_len(),
    );
    // Status and length are opt-in; without them the reply passes.
    assert_eq!(checks::run_chain(&[], &ctx), Ok(()));
    assert_eq!(
        checks::run_chain(&[&StatusFlags, &ExactLength], &ctx),
        Err(Error::CardStatus {
            status1: 0xff,
            status2: 0xa1
        })
    );
}

proptest! {
    #[test]
    fn negative_counts_always_transport_errors(code in i32::MIN..0) {
        let cmd = Command::GetMode;
        let buf = vec![0u8; cmd.response_len()];
        let ctx = ExchangeContext::new(code, &[], &buf, cmd.response_code(), cmd.response_len());
        prop_assert_eq!(
            checks::run_chain(&[&StatusFlags, &ExactLength], &ctx),
            Err(Error::Transport { code })
        );
    }

    #[test]
    fn response_code_must_be_command_plus_one(actual in any::<u8>()) {
        let cmd = Command::GetMode;
        let mut reply = test_support::mode_reply(test_support::SAMPLE_IDM, 0);
        reply[1] = actual;
        let ctx = ExchangeContext::new(reply.len() as i32, &[], &reply, cmd.response_code(), cmd.response_len());
        let res = checks::run_chain(&[&ExactLength], &ctx);
        if actual == 0x05 {
            prop_assert_eq!(res, Ok(()));
        } else {
            prop_assert_eq!(res, Err(Error::UnexpectedResponse { expected: 0x05, actual }));
        }
    }
}
