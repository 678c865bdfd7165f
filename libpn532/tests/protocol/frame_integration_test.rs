#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{Frame, SliceSource, decode_frame, read_frame};
use libpn532::{Error, FrameError};

#[test]
fn firmware_reply_decodes_from_stream() {
    let frame = common::response_frame(0x02, &[0x32, 0x01, 0x06, 0x07]);
    let mut src = SliceSource::new(&frame);
    let data = decode_frame(&mut src, 100).unwrap();
    assert_eq!(data, vec![0x03, 0x32, 0x01, 0x06, 0x07]);
    assert!(src.remaining().is_empty());
}

#[test]
fn back_to_back_frames_are_read_in_order() {
    let mut stream = common::response_frame(0x4A, &[0x00]);
    stream.extend(common::response_frame(0x52, &[0x00]));
    let mut src = SliceSource::new(&stream);
    assert_eq!(read_frame(&mut src, 100).unwrap().data, vec![0x4B, 0x00]);
    assert_eq!(read_frame(&mut src, 100).unwrap().data, vec![0x53, 0x00]);
}

#[test]
fn d7_direction_tag_is_accepted() {
    // Only the checksum is verified, not the tag value.
    let frame = Frame::encode(0xD7, 0xA9, &[0x32, 0x01, 0x07]).unwrap();
    let decoded = Frame::decode(&frame).unwrap();
    assert_eq!(decoded.tag, 0xD7);
    assert_eq!(decoded.data, common::fixtures::BARE_FIRMWARE.to_vec());
}

#[test]
fn bad_length_checksum_is_reported_before_body() {
    let frame = [0x00, 0x00, 0xFF, 0x03, 0x00];
    match Frame::decode(&frame) {
        Err(Error::Frame(FrameError::BadLengthChecksum {
            length: 0x03,
            checksum: 0x00,
        })) => {}
        other => panic!("expected BadLengthChecksum, got {:?}", other),
    }
}

#[test]
fn declared_length_longer_than_capture_is_truncated() {
    let frame = common::response_frame(0x4A, &common::fixtures::passive_target_fields());
    match Frame::decode(&frame[..frame.len() - 4]) {
        Err(Error::Frame(FrameError::Truncated { .. })) => {}
        other => panic!("expected Truncated, got {:?}", other),
    }
}
