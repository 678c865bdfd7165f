#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libpn532::card::CardKind;
use libpn532::session::{CancellationToken, PollOptions};
use libpn532::transport::MockTransport;

#[test]
fn poll_returns_first_detected_target() {
    let mock = MockTransport::new();
    common::seed_connect(&mock);
    mock.push_reply(common::reply(0x14, &[]));
    mock.push_reply(common::reply(0x4A, &[0x00]));
    mock.push_reply(common::reply(0x4A, &common::fixtures::passive_target_fields()));

    let mut dev = common::ready_device(mock.clone()).unwrap();
    let opts = PollOptions {
        poll_interval: Duration::ZERO,
        ..PollOptions::default()
    };
    let target = dev
        .poll_for_target(&CancellationToken::new(), &opts)
        .unwrap()
        .expect("target");

    assert_eq!(target.kind(), CardKind::Iso14443_4);
    assert_eq!(target.uid().len(), 7);
    assert_eq!(dev.state().active_target, Some(target.number()));

    // Detection frames ask for one Type A target.
    let last = mock.last_sent().unwrap();
    assert_eq!(&last[5..9], &[0xD4, 0x4A, 0x01, 0x00]);
}

#[test]
fn poll_with_inconsistent_uid_keeps_polling() {
    let mock = MockTransport::new();
    common::seed_connect(&mock);
    mock.push_reply(common::reply(0x14, &[]));
    let mut broken = common::fixtures::passive_target_fields();
    broken.truncate(8);
    mock.push_reply(common::reply(0x4A, &broken));
    mock.push_reply(common::reply(0x4A, &common::fixtures::passive_target_fields()));

    let mut dev = common::ready_device(mock).unwrap();
    let opts = PollOptions {
        poll_interval: Duration::ZERO,
        ..PollOptions::default()
    };
    let target = dev.poll_for_target(&CancellationToken::new(), &opts).unwrap();
    assert!(target.is_some());
}
