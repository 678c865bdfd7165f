#[path = "../common/mod.rs"]
mod common;

use libpn532::card::CardKind;
use libpn532::protocol::codec::decode_response_frame;
use libpn532::protocol::{Detection, Frame, Response};
use libpn532::{ChipError, Error, FrameError};

#[test]
fn bare_firmware_fields_decode() {
    let frame = common::fixtures::bare_frame(&common::fixtures::BARE_FIRMWARE);
    match decode_response_frame(0x02, &frame).unwrap() {
        Response::FirmwareVersion(fw) => {
            assert_eq!(fw.ic, 0xA9);
            assert_eq!(fw.version, 0x32);
            assert_eq!(fw.revision, 0x01);
            assert_eq!(fw.support, 0x07);
            assert_eq!(fw.to_string(), "v50.1 (IC: 0xA9, Support: 0x07)");
        }
        other => panic!("expected firmware response, got {:?}", other),
    }
}

#[test]
fn passive_target_decodes_descriptor() {
    let frame = common::response_frame(0x4A, &common::fixtures::passive_target_fields());
    let payload = Frame::decode(&frame).unwrap();
    match Response::from_frame(0x4A, &payload).unwrap() {
        Response::PassiveTarget(Detection::Found(t)) => {
            assert_eq!(t.number().as_u8(), 1);
            assert_eq!(t.atqa().to_hex(), "0044");
            assert_eq!(t.uid().as_bytes(), &common::fixtures::sample_uid_bytes());
            assert_eq!(t.kind(), CardKind::Iso14443_4);
        }
        other => panic!("expected a target, got {:?}", other),
    }
}

#[test]
fn zero_targets_is_not_an_error() {
    let frame = common::response_frame(0x4A, &[0x00]);
    assert_eq!(
        decode_response_frame(0x4A, &frame).unwrap(),
        Response::PassiveTarget(Detection::NoTarget)
    );
}

#[test]
fn uid_length_past_end_is_truncated() {
    let mut fields = common::fixtures::passive_target_fields();
    fields.truncate(fields.len() - 3);
    let frame = common::response_frame(0x4A, &fields);
    match decode_response_frame(0x4A, &frame) {
        Err(Error::Frame(FrameError::Truncated { .. })) => {}
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn exchange_status_one_is_failure_without_payload() {
    let frame = common::response_frame(0x40, &[0x01, 0x90, 0x00]);
    match decode_response_frame(0x40, &frame) {
        Err(Error::Chip(ChipError::ExchangeFailed(1))) => {}
        other => panic!("expected ExchangeFailed(1), got {:?}", other),
    }
}

#[test]
fn exchange_ok_returns_answer() {
    let mut fields = vec![0x00];
    fields.extend(common::fixtures::ppse_answer());
    let frame = common::response_frame(0x40, &fields);
    assert_eq!(
        decode_response_frame(0x40, &frame).unwrap(),
        Response::DataExchange(common::fixtures::ppse_answer())
    );
}

#[test]
fn bare_exchange_status_matching_response_code_is_failure() {
    let frame = common::fixtures::bare_frame(&[0x41, 0x00, 0x90, 0x00]);
    match decode_response_frame(0x40, &frame) {
        Err(Error::Chip(ChipError::ExchangeFailed(0x41))) => {}
        other => panic!("expected ExchangeFailed(0x41), got {:?}", other),
    }
}

#[test]
fn chip_exchange_status_after_response_code_is_failure() {
    let frame = common::response_frame(0x40, &[0x41, 0x00, 0x90, 0x00]);
    match decode_response_frame(0x40, &frame) {
        Err(Error::Chip(ChipError::ExchangeFailed(0x41))) => {}
        other => panic!("expected ExchangeFailed(0x41), got {:?}", other),
    }
}
