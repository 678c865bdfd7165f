// libpn532-rs/pn532-cli/src/main.rs

//! Terminal controller for a PN532 on a serial / rfcomm link.
//!
//! Usage:
//!   pn532-cli --port /dev/rfcomm0 --mode pn532-reads-card

use std::process;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use libpn532::device::{Device, DeviceBuilder, DeviceConfig, LogConfig, Ready};
use libpn532::session::CancellationToken;
use log::debug;

mod report;
mod scenarios;

const AFTER_HELP: &str = "\
Bluetooth setup:
  hcitool scan                      # find the PN532 MAC address
  sudo rfcomm bind 0 <MAC_ADDRESS>  # bind it to /dev/rfcomm0
  sudo chmod 666 /dev/rfcomm0       # allow non-root access";

/// Drive a PN532 NFC module through one of the test scenarios.
#[derive(Parser)]
#[command(name = "pn532-cli", about = "PN532 terminal controller", after_help = AFTER_HELP)]
struct Cli {
    /// Serial port the PN532 is bound to.
    #[arg(long, default_value = "/dev/rfcomm0")]
    port: String,

    /// Serial baud rate.
    #[arg(long, default_value_t = 115_200)]
    baudrate: u32,

    /// Test scenario to run. Without it the scenario menu is printed.
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Log every frame and decoded field.
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Phone on an NFC card (no PN532 involvement)
    PhoneReadsCard,
    /// Card on the PN532
    Pn532ReadsCard,
    /// Phone on the PN532, which emulates a card
    Pn532Emulates,
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn device_config(debug: bool) -> DeviceConfig {
    DeviceConfig {
        logging: if debug {
            LogConfig::verbose()
        } else {
            LogConfig::default()
        },
        ..DeviceConfig::default()
    }
}

fn connect(port: &str, baud: u32, config: DeviceConfig) -> libpn532::Result<Device<Ready>> {
    DeviceBuilder::new()
        .config(config)
        .open_serial(port, baud)?
        .connect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    report::banner(&cli.port, cli.baudrate);

    let (port, baud, config) = (cli.port.clone(), cli.baudrate, device_config(cli.debug));
    let connected = tokio::task::spawn_blocking(move || connect(&port, baud, config))
        .await
        .context("connect task panicked")?;
    let mut device = match connected {
        Ok(device) => device,
        Err(e) => {
            report::connection_failed(&cli.port, &e);
            process::exit(1);
        }
    };
    report::connected(device.firmware());

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Ctrl+C received");
            on_signal.cancel();
        }
    });

    let mode = cli.mode;
    let token = cancel.clone();
    let device = tokio::task::spawn_blocking(move || {
        let outcome = match mode {
            Some(Mode::PhoneReadsCard) => {
                scenarios::phone_reads_card();
                Ok(())
            }
            Some(Mode::Pn532ReadsCard) => scenarios::pn532_reads_card(&mut device, &token),
            Some(Mode::Pn532Emulates) => scenarios::pn532_emulates(&mut device, &token),
            None => {
                report::menu();
                Ok(())
            }
        };
        // Scenario failures are reported; they do not change the exit code.
        if let Err(e) = outcome {
            report::scenario_failed(&e);
        }
        if token.is_cancelled() {
            report::stopped_by_user();
        }
        device
    })
    .await
    .context("scenario task panicked")?;

    shut_down(device);
    Ok(())
}

/// Close the port. A failing close is reported but does not change the
/// exit code, which only reflects the connection.
fn shut_down(device: Device<Ready>) -> bool {
    match device.disconnect() {
        Ok(_) => {
            report::disconnected();
            true
        }
        Err(e) => {
            report::close_failed(&e);
            false
        }
    }
}
