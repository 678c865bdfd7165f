#![cfg(feature = "serial")]

use libpn532::Result;
use libpn532::device::DeviceBuilder;
use serial_test::serial;

// These tests need a PN532 on a serial port. They are marked `#[ignore]`
// so CI does not attempt to run them. Run manually with:
//
// PN532_PORT=/dev/ttyUSB0 cargo test -p libpn532 --test hardware --features serial -- --ignored

fn port() -> Option<String> {
    std::env::var("PN532_PORT").ok()
}

#[test]
#[ignore]
#[serial]
fn connect_and_read_firmware() -> Result<()> {
    let Some(path) = port() else {
        return Ok(());
    };
    let mut dev = DeviceBuilder::new().open_serial(&path, 115_200)?.connect()?;
    let fw = dev.firmware_version()?;
    assert_eq!(Some(fw), dev.firmware());
    dev.disconnect()?;
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn sam_configuration_succeeds() -> Result<()> {
    let Some(path) = port() else {
        return Ok(());
    };
    let mut dev = DeviceBuilder::new().open_serial(&path, 115_200)?.connect()?;
    dev.ensure_sam_configured()?;
    assert!(dev.state().sam_configured);
    Ok(())
}
