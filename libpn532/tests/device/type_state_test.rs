#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder, Phase, SessionState};
use libpn532::transport::MockTransport;

#[test]
fn connect_transitions_and_reconnects() {
    let mock = MockTransport::new();
    common::seed_connect(&mock);

    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .config(common::fast_config())
        .build()
        .unwrap();
    assert_eq!(device.phase(), Phase::Disconnected);
    assert!(!device.state().connected);

    let ready = device.connect().unwrap();
    assert_eq!(ready.phase(), Phase::Ready);
    assert_eq!(ready.firmware().unwrap().ic, 0x32);

    // Disconnect returns a handle that can connect again.
    let again: Device = ready.disconnect().unwrap();
    assert_eq!(again.state(), SessionState::default());
    common::seed_connect(&mock);
    let ready = again.connect().unwrap();
    assert!(ready.state().connected);
}

#[test]
fn firmware_can_be_queried_again() {
    let mock = MockTransport::new();
    common::seed_connect(&mock);
    mock.push_reply(common::reply(0x02, &[0x32, 0x01, 0x07, 0x07]));
    let mut dev = common::ready_device(mock).unwrap();
    let fw = dev.firmware_version().unwrap();
    assert_eq!(fw.revision, 0x07);
    assert_eq!(dev.firmware(), Some(fw));
}
