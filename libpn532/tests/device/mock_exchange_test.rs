#[path = "../common/mod.rs"]
mod common;

use libpn532::device::Phase;
use libpn532::protocol::Detection;
use libpn532::transport::MockTransport;
use libpn532::types::CardType;
use libpn532::{ChipError, Error};

#[test]
fn select_ppse_through_target() {
    let mock = MockTransport::new();
    common::seed_connect(&mock);
    mock.push_reply(common::reply(0x4A, &common::fixtures::passive_target_fields()));
    let mut answer = vec![0x00];
    answer.extend(common::fixtures::ppse_answer());
    mock.push_reply(common::reply(0x40, &answer));
    mock.push_reply(common::reply(0x52, &[0x00]));

    let mut dev = common::ready_device(mock.clone()).unwrap();
    let target = match dev.in_list_passive_target(1, CardType::Iso14443A).unwrap() {
        Detection::Found(t) => t,
        Detection::NoTarget => panic!("expected a target"),
    };

    let resp = target
        .exchange(&mut dev, &common::fixtures::select_ppse())
        .unwrap();
    assert_eq!(resp, common::fixtures::ppse_answer());
    assert_eq!(&resp[resp.len() - 2..], &[0x90, 0x00]);
    assert_eq!(dev.phase(), Phase::Ready);

    target.release(&mut dev);
    assert_eq!(dev.state().active_target, None);
    assert_eq!(mock.pending_replies(), 0);
}

#[test]
fn exchange_failure_carries_status() {
    let mock = MockTransport::new();
    common::seed_connect(&mock);
    mock.push_reply(common::reply(0x4A, &common::fixtures::passive_target_fields()));
    mock.push_reply(common::reply(0x40, &[0x01]));

    let mut dev = common::ready_device(mock).unwrap();
    let target = dev
        .in_list_passive_target(1, CardType::Iso14443A)
        .unwrap()
        .into_target()
        .unwrap();
    match target.exchange(&mut dev, &common::fixtures::select_ppse()) {
        Err(Error::Chip(ChipError::ExchangeFailed(1))) => {}
        other => panic!("expected ExchangeFailed(1), got {:?}", other),
    }
}
