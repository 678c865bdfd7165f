#[path = "../common/mod.rs"]
mod common;

use libpn532::transport::{MockTransport, Transport};

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_reply(vec![0x01, 0x02, 0x03]);
    m.write(&[0xAA]).unwrap();
    assert_eq!(m.sent().len(), 1);
    // Partial reads leave the rest buffered.
    assert_eq!(m.read(2, 1000).unwrap(), vec![0x01, 0x02]);
    assert_eq!(m.read(2, 1000).unwrap(), vec![0x03]);
}

#[test]
fn boxed_mock_keeps_shared_log() {
    let m = MockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(m.clone());
    boxed.write(&[0x55; 10]).unwrap();
    boxed.flush_input().unwrap();
    boxed.close().unwrap();
    assert_eq!(m.sent(), vec![vec![0x55; 10]]);
    assert_eq!(m.flush_count(), 1);
    assert!(m.is_closed());
}
