use super::*;

// =============================================================
// SocketSlot
// =============================================================

#[test]
fn begin_claims_an_idle_slot_once() {
    let mut slot = SocketSlot::default();
    assert!(slot.begin().is_some());
    assert_eq!(slot.state(), &ConnectionState::Connecting);
    assert!(slot.begin().is_none());
}

#[test]
fn begin_is_refused_while_connected_or_retrying() {
    let mut slot = SocketSlot::default();
    let _stop = slot.begin();
    slot.set_state(ConnectionState::Connected);
    assert!(slot.begin().is_none());
    slot.set_state(ConnectionState::Reconnecting { attempt: 3 });
    assert!(slot.begin().is_none());
}

#[test]
fn failed_slot_can_be_claimed_again() {
    let mut slot = SocketSlot::default();
    let _stop = slot.begin();
    slot.set_state(ConnectionState::Failed {
        reason: "gave up".to_string(),
    });
    assert!(slot.begin().is_some());
}

#[test]
fn stop_signals_loop_and_frees_slot_immediately() {
    let mut slot = SocketSlot::default();
    let mut stop_rx = slot.begin().expect("idle slot");
    slot.set_state(ConnectionState::Connected);

    assert!(slot.stop());
    assert_eq!(slot.state(), &ConnectionState::Disconnected);
    assert!(matches!(stop_rx.try_recv(), Ok(Some(()))));

    // Logout followed by an immediate login
    assert!(slot.begin().is_some());
}

#[test]
fn stop_while_dialing_reports_no_lost_connection() {
    let mut slot = SocketSlot::default();
    let _stop = slot.begin();
    assert!(!slot.stop());
    assert_eq!(slot.state(), &ConnectionState::Disconnected);
}

#[test]
fn stop_without_loop_is_noop() {
    let mut slot = SocketSlot::default();
    assert!(!slot.stop());
    slot.set_state(ConnectionState::Failed {
        reason: "bad url".to_string(),
    });
    assert!(!slot.stop());
    assert!(matches!(slot.state(), ConnectionState::Failed { .. }));
}
