// Shared helpers for the integration test crates under `tests/`.
#![allow(dead_code)]

pub mod fixtures;

pub use libpn532::test_support::{fast_config, ready_device, reply, response_frame, seed_connect};
