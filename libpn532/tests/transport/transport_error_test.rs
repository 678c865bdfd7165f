#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::device::DeviceBuilder;
use libpn532::transport::MockTransport;

#[test]
fn write_failure_at_connect_is_fatal() {
    let mock = MockTransport::new();
    mock.set_fail_writes(true);
    let res = DeviceBuilder::new()
        .with_transport(Box::new(mock))
        .config(common::fast_config())
        .connect();
    match res {
        Err(e @ Error::Transport(_)) => assert!(e.is_fatal()),
        Err(e) => panic!("expected Transport error, got {:?}", e),
        Ok(_) => panic!("connect should fail"),
    }
}

#[test]
fn silent_chip_is_not_fatal() {
    let mock = MockTransport::new();
    let res = DeviceBuilder::new()
        .with_transport(Box::new(mock))
        .config(common::fast_config())
        .connect();
    match res {
        Err(e) => assert!(!e.is_fatal()),
        Ok(_) => panic!("connect should fail without a firmware reply"),
    }
}
