#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{Command, EmulationProfile, SamConfig};
use libpn532::types::TargetNumber;

#[test]
fn sam_and_release_frames() {
    assert_eq!(
        Command::SamConfiguration(SamConfig::default()).encode().unwrap(),
        hex::decode("0000FF05FBD4140114010200").unwrap()
    );
    // D4 52 01 -> 0x127 -> DCS 0xD9
    assert_eq!(
        Command::InRelease {
            target: TargetNumber::new(1)
        }
        .encode()
        .unwrap(),
        hex::decode("0000FF03FDD45201D900").unwrap()
    );
}

#[test]
fn select_ppse_exchange_params() {
    let apdu = common::fixtures::select_ppse();
    let cmd = Command::InDataExchange {
        target: TargetNumber::new(1),
        apdu: apdu.clone(),
    };
    let params = cmd.params();
    assert_eq!(params[0], 0x01);
    assert_eq!(&params[1..], apdu.as_slice());

    let frame = cmd.encode().unwrap();
    // LEN covers TFI + opcode + Tg + APDU
    assert_eq!(frame[3] as usize, 3 + apdu.len());
    assert_eq!(frame[5..7], [0xD4, 0x40]);
}

#[test]
fn default_emulation_profile_params() {
    let params = Command::TgInitAsTarget(EmulationProfile::default()).params();
    assert_eq!(
        params,
        vec![
            0x04, 0x00, 0x04, 0x08, 0x12, 0x34, 0x56, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00
        ]
    );
}

#[test]
fn largest_apdu_still_fits() {
    // Tg + 252 APDU bytes = 253 parameter bytes
    let cmd = Command::InDataExchange {
        target: TargetNumber::new(1),
        apdu: vec![0xAB; 252],
    };
    let frame = cmd.encode().unwrap();
    assert_eq!(frame[3], 0xFF);
    assert_eq!(frame[4], 0x01);
}
