//! Integration Tests für den LED-Sequenzer
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedLines

mod common;

use core::cell::RefCell;
use core::pin::pin;

use common::{MockLedLines, high_count, poll_once, yield_once};
use esp_core::{LedLevels, LedPhase, LedSequencer, SuspendSignal};

/// LED-Task Body wie in der Firmware, der Timer ist durch yield_once() ersetzt
async fn led_body(sequencer: &RefCell<LedSequencer<MockLedLines>>) {
    loop {
        sequencer.borrow_mut().begin_phase();
        yield_once().await;
        sequencer.borrow_mut().end_phase();
    }
}

// ============================================================================
// Tests: Zyklus-Reihenfolge
// ============================================================================

#[test]
fn test_exactly_one_line_high_during_hold() {
    let mut seq = LedSequencer::new(MockLedLines::new(), 500);

    for _ in 0..9 {
        seq.begin_phase();
        assert_eq!(high_count(seq.leds().levels), 1);
        seq.end_phase();
        assert_eq!(high_count(seq.leds().levels), 0);
    }
    assert_eq!(seq.leds().max_simultaneous_high, 1);
}

#[test]
fn test_cycle_order_red_green_blue() {
    let mut seq = LedSequencer::new(MockLedLines::new(), 500);

    for _ in 0..6 {
        seq.begin_phase();
        seq.end_phase();
    }

    assert_eq!(
        seq.leds().switched_on(),
        vec![
            LedPhase::Red,
            LedPhase::Green,
            LedPhase::Blue,
            LedPhase::Red,
            LedPhase::Green,
            LedPhase::Blue,
        ]
    );
}

#[test]
fn test_each_phase_switched_off_before_next() {
    let mut seq = LedSequencer::new(MockLedLines::new(), 500);
    seq.begin_phase();
    seq.end_phase();
    seq.begin_phase();

    // 3x Low beim Start, dann Rot an/aus, Grün an
    let writes = &seq.leds().writes[3..];
    assert_eq!(
        writes,
        &[
            (LedPhase::Red, true),
            (LedPhase::Red, false),
            (LedPhase::Green, true),
        ]
    );
}

#[test]
fn test_hold_time_is_configured_delay() {
    let mut seq = LedSequencer::new(MockLedLines::new(), 250);
    assert_eq!(seq.begin_phase(), 250);
}

// ============================================================================
// Tests: Suspend / Resume über das SuspendSignal
// ============================================================================

#[test]
fn test_gated_task_runs_when_not_suspended() {
    let signal = SuspendSignal::new();
    let seq = RefCell::new(LedSequencer::new(MockLedLines::new(), 500));
    let mut task = pin!(signal.gate(led_body(&seq)));

    assert!(poll_once(task.as_mut()).is_pending());
    assert_eq!(seq.borrow().levels(), LedLevels::new(true, false, false));

    assert!(poll_once(task.as_mut()).is_pending());
    assert_eq!(seq.borrow().levels(), LedLevels::new(false, true, false));
}

#[test]
fn test_suspend_freezes_outputs_and_position() {
    let signal = SuspendSignal::new();
    let handle = signal.handle();
    let seq = RefCell::new(LedSequencer::new(MockLedLines::new(), 500));
    let mut task = pin!(signal.gate(led_body(&seq)));

    // Rot, dann Grün
    let _ = poll_once(task.as_mut());
    let _ = poll_once(task.as_mut());
    assert_eq!(seq.borrow().phase(), LedPhase::Green);

    handle.suspend();
    let writes_before = seq.borrow().leds().writes.len();
    for _ in 0..5 {
        assert!(poll_once(task.as_mut()).is_pending());
    }

    // Keine Ausgabe-Änderung während der Pause
    assert_eq!(seq.borrow().leds().writes.len(), writes_before);
    assert_eq!(seq.borrow().phase(), LedPhase::Green);
}

#[test]
fn test_resume_continues_from_frozen_phase() {
    let signal = SuspendSignal::new();
    let handle = signal.handle();
    let seq = RefCell::new(LedSequencer::new(MockLedLines::new(), 500));
    let mut task = pin!(signal.gate(led_body(&seq)));

    let _ = poll_once(task.as_mut());
    let _ = poll_once(task.as_mut());

    handle.suspend();
    let _ = poll_once(task.as_mut());
    handle.resume();
    let _ = poll_once(task.as_mut());

    // Weiter mit Blau, kein Neustart bei Rot
    assert_eq!(seq.borrow().phase(), LedPhase::Blue);
    assert_eq!(
        seq.borrow().leds().switched_on(),
        vec![LedPhase::Red, LedPhase::Green, LedPhase::Blue]
    );
}
