// LED Sequenzer Task - Rot → Grün → Blau über drei GPIO Outputs
use defmt::{debug, info};
use embassy_time::{Duration, Timer};

use esp_core::{LedLines, LedSequencer, SuspendGate, TaskId};

use crate::config::LED_PHASE_MS;
use crate::hal::GpioLedLines;

/// LED Sequenzer Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Endlosschleife über die drei Phasen. Jede Phase: Leitung an,
/// Haltezeit abwarten, Leitung aus, nächste Phase.
///
/// Die Funktion weiß nichts vom Pausieren: der Task-Wrapper hält den
/// Future über das `SuspendGate` an, die Zyklus-Position bleibt dabei
/// einfach im Future-Zustand erhalten.
pub async fn led_sequencer_logic<L: LedLines>(mut sequencer: LedSequencer<L>) {
    loop {
        let hold_ms = sequencer.begin_phase();
        debug!("LED: {} on", sequencer.phase().name());

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(hold_ms)).await;

        sequencer.end_phase();
    }
}

/// LED Sequenzer Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `leds`: Die drei LED-Ausgänge
/// - `run_gate`: Gate des Run/Suspend-Flags (steuern kann nur der Button-Task)
#[embassy_executor::task]
pub async fn led_sequencer_task(leds: GpioLedLines, run_gate: SuspendGate<'static>) {
    info!("{} started", TaskId::LedSequencer.name());

    let sequencer = LedSequencer::new(leds, LED_PHASE_MS);
    run_gate.gate(led_sequencer_logic(sequencer)).await;
}
