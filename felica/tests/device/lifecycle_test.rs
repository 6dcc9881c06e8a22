#[path = "../common/mod.rs"]
mod common;

use felica::device::DeviceBuilder;
use felica::transport::MockTransport;
use felica::Error;

#[test]
fn get_mode_via_selected_target() {
    common::init_logging();
    let (mut dev, mock) = common::ready_device(vec![common::bytes(
        felica::test_support::mode_reply(felica::test_support::SAMPLE_IDM, 0x03),
    )]);

    let target = dev.select_felica().unwrap();
    assert_eq!(target.idm(), &common::sample_idm());
    assert_eq!(target.get_mode().unwrap(), 0x03);
    assert_eq!(mock.borrow().init_calls, 1);
    assert_eq!(mock.borrow().timeouts, vec![300]);
}

#[test]
fn targets_fail_loudly_after_close() {
    let (mut dev, mock) = common::ready_device(vec![]);
    let first = dev.select_felica().unwrap();
    let second = dev.select_felica().unwrap();

    dev.close();
    dev.close();

    assert_eq!(mock.borrow().close_calls, 1);
    for target in [&first, &second] {
        assert!(target.is_released());
        assert!(matches!(target.get_mode(), Err(Error::UseAfterRelease)));
        assert!(matches!(target.services(), Err(Error::UseAfterRelease)));
    }
}

#[test]
fn dropping_everything_releases_once() {
    let mock = felica::test_support::sample_mock(vec![]);
    {
        let mut dev = felica::test_support::initialized_mock_device(&mock).unwrap();
        let _target = dev.select_felica().unwrap();
        drop(dev);
        // The target still holds the guard.
        assert_eq!(mock.borrow().close_calls, 0);
    }
    assert_eq!(mock.borrow().close_calls, 1);
}

#[test]
fn builder_timeout_reaches_the_wire() {
    let mock = felica::test_support::sample_mock(vec![common::bytes(
        felica::test_support::mode_reply(felica::test_support::SAMPLE_IDM, 0),
    )]);
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(std::rc::Rc::clone(&mock)))
        .timeout_ms(1000)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();

    dev.select_felica().unwrap().get_mode().unwrap();
    assert_eq!(mock.borrow().timeouts, vec![1000]);
}

#[test]
fn empty_field_reports_no_target() {
    let mut dev = felica::device::Device::new_with_transport(Box::new(MockTransport::new()))
        .initialize()
        .unwrap();
    assert!(matches!(dev.select_felica(), Err(Error::NoTarget)));
}
