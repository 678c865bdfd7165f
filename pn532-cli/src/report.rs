// libpn532-rs/pn532-cli/src/report.rs

//! Console rendering of scenario results. Nothing in here talks to the
//! device; the scenarios hand over structured values and this module
//! turns them into text.

use libpn532::card::Target;
use libpn532::session::EmulationSummary;
use libpn532::utils::bytes_to_hex_upper;
use libpn532::{Error, FirmwareVersion};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn header(title: &str, steps: &[&str]) {
    println!("\n{}\n{}\n{}", rule(), title, rule());
    println!("\nSetup:");
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}

pub fn banner(port: &str, baud: u32) {
    println!("PN532 Terminal Controller");
    println!("  Port:     {}", port);
    println!("  Baudrate: {}", baud);
}

pub fn connected(firmware: Option<FirmwareVersion>) {
    match firmware {
        Some(fw) => println!("\nConnected to PN532, firmware {}", fw),
        None => println!("\nConnected to PN532"),
    }
}

pub fn connection_failed(port: &str, err: &Error) {
    eprintln!("\nConnection failed: {}", err);
    if err.is_fatal() {
        eprintln!("\nTips:");
        eprintln!("  1. Check the binding: ls -l {}", port);
        eprintln!("  2. Bind the PN532: sudo rfcomm bind 0 <BT_MAC_ADDRESS>");
        eprintln!("  3. Check permissions: sudo chmod 666 {}", port);
    }
    eprintln!("\nExiting.");
}

pub fn menu() {
    println!("\nPN532 connected and ready");
    println!("\nAvailable test scenarios:");
    println!("  1. phone-reads-card    : Phone on NFC card");
    println!("  2. pn532-reads-card    : Card on PN532");
    println!("  3. pn532-emulates      : Phone on PN532 (emulation)");
    println!("\nRun with --mode <scenario> to start testing");
}

pub fn phone_reads_card_setup() {
    header(
        "SCENARIO 1: Phone Reads Physical NFC Card",
        &[
            "Place NFC card on table/surface",
            "Place phone on top of card",
            "Open the card reading screen of the phone app",
            "Phone's internal NFC should detect the card",
        ],
    );
    println!("This scenario tests the phone's own NFC (no PN532 involvement).");
    println!("Check the app UI for card detection.");
}

pub fn pn532_reads_card_setup() {
    header(
        "SCENARIO 2: PN532 Reads Physical NFC Card",
        &[
            "Place NFC card on top of PN532 module",
            "PN532 will read the card over the serial link",
        ],
    );
    println!("Polling for cards... (Ctrl+C to stop)");
}

pub fn pn532_emulates_setup() {
    header(
        "SCENARIO 3: PN532 Emulates Card (Phone Reads PN532)",
        &[
            "PN532 enters card emulation mode",
            "Place phone on top of PN532",
            "Phone's NFC should detect PN532 as a card",
        ],
    );
    println!("Waiting for phone to connect... (Ctrl+C to stop)");
}

/// Multi-line description of a detected target.
pub fn format_target(target: &Target) -> String {
    format!(
        "Card Details:\n   UID: {}\n   Type: {}\n   ATQA: {}\n   SAK: {}\n   Target: {}",
        target.uid().to_hex(),
        target.kind(),
        target.atqa().to_hex(),
        target.sak(),
        target.number()
    )
}

pub fn card_details(target: &Target) {
    println!("\n{}", format_target(target));
}

/// Split an APDU answer into its data and the trailing status word.
pub fn split_status_word(answer: &[u8]) -> Option<(&[u8], u16)> {
    if answer.len() < 2 {
        return None;
    }
    let (data, sw) = answer.split_at(answer.len() - 2);
    Some((data, u16::from_be_bytes([sw[0], sw[1]])))
}

/// CLA/INS/P1/P2 of a command APDU, or None when it is too short.
pub fn format_apdu_header(command: &[u8]) -> Option<String> {
    match command {
        [cla, ins, p1, p2, ..] => Some(format!(
            "   CLA: {:02X}\n   INS: {:02X}\n   P1: {:02X}\n   P2: {:02X}",
            cla, ins, p1, p2
        )),
        _ => None,
    }
}

pub fn apdu_command(apdu: &[u8]) {
    println!("\nTransceiving APDU:\n   Command: {}", bytes_to_hex_upper(apdu));
}

pub fn apdu_answer(answer: &[u8]) {
    println!("   Response: {}", bytes_to_hex_upper(answer));
    if let Some((_, sw)) = split_status_word(answer) {
        println!("   Status Word: {:04X}", sw);
    }
    println!("SELECT PPSE successful");
}

pub fn apdu_failed(err: &Error) {
    println!("SELECT PPSE failed: {}", err);
}

pub fn reading_complete() {
    println!("\nCard reading complete");
}

pub fn phone_command(command: &[u8]) {
    println!("\nPhone sent command: {}", bytes_to_hex_upper(command));
    if let Some(fields) = format_apdu_header(command) {
        println!("{}", fields);
    }
}

pub fn responding(reply: &[u8]) {
    println!("   -> Responding: {}", bytes_to_hex_upper(reply));
}

pub fn emulation_summary(summary: &EmulationSummary) {
    println!(
        "\nEmulation finished: {} commands received, {} replies sent, {} failed",
        summary.commands_received, summary.replies_sent, summary.send_failures
    );
}

pub fn scenario_failed(err: &Error) {
    eprintln!("\nError: {}", err);
}

pub fn stopped_by_user() {
    println!("\nStopped by user");
}

pub fn close_failed(err: &Error) {
    eprintln!("Closing the port failed: {}", err);
}

pub fn disconnected() {
    println!("Disconnected from PN532");
}
