use super::*;

#[test]
fn status_class_distinguishes_every_state() {
    let classes = [
        connection_status_class(ConnectionState::Connecting),
        connection_status_class(ConnectionState::Open),
        connection_status_class(ConnectionState::Closed),
        connection_status_class(ConnectionState::Errored),
    ];
    for (i, a) in classes.iter().enumerate() {
        assert!(a.starts_with("status-bar__dot "));
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn open_state_reads_connected() {
    assert_eq!(connection_label(ConnectionState::Open), "Connected");
    assert_eq!(connection_label(ConnectionState::Closed), "Disconnected");
}
