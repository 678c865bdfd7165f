//! Simple probe example for a PN532 on a serial port.
//!
//! Usage:
//!   cargo run -p libpn532 --example firmware_probe --features serial -- /dev/ttyUSB0 [baud]

use libpn532::device::DeviceBuilder;
use libpn532::protocol::Detection;
use libpn532::{CardType, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let baud = args
        .next()
        .and_then(|b| b.parse().ok())
        .unwrap_or(115_200);

    let mut dev = DeviceBuilder::new()
        .log_frames(log::Level::Debug)
        .open_serial(&path, baud)?
        .connect()?;

    if let Some(fw) = dev.firmware() {
        println!("Firmware: {}", fw);
    }

    dev.ensure_sam_configured()?;
    match dev.in_list_passive_target(1, CardType::Iso14443A)? {
        Detection::Found(target) => {
            println!(
                "Target {}: UID {} ({})",
                target.number(),
                target.uid().to_hex(),
                target.kind()
            );
            target.release(&mut dev);
        }
        Detection::NoTarget => println!("No target in field"),
    }

    dev.disconnect()?;
    Ok(())
}
