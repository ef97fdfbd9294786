// Buzzer Task - Piep-Muster oder Stille, gesteuert über den Command-Channel
use defmt::info;
use embassy_time::{Duration, Timer};

use esp_core::{BeepPattern, BuzzerController, BuzzerCycle, CommandSource, TaskId, ToneOutput};

use crate::BuzzerCommandReceiver;
use crate::hal::LedcTone;

/// Buzzer Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Pro Iteration wird höchstens ein Kommando geholt (non-blocking) und
/// angewendet. Erst danach wird der Ausgang geschaltet. Ein laufendes
/// Ton- oder Pausenintervall wird nicht unterbrochen.
pub async fn buzzer_logic<T: ToneOutput, S: CommandSource>(
    mut buzzer: BuzzerController<T>,
    commands: S,
) {
    loop {
        let step = buzzer.step(commands.poll_command());

        if let Some(transition) = step.transition {
            info!(
                "Buzzer: {} ({} -> {})",
                transition.command, transition.from, transition.to
            );
        }

        match step.cycle {
            BuzzerCycle::Beep { on_ms, off_ms } => {
                Timer::after(Duration::from_millis(on_ms)).await;
                buzzer.end_beep();
                Timer::after(Duration::from_millis(off_ms)).await;
            }
            BuzzerCycle::Idle { poll_ms } => {
                Timer::after(Duration::from_millis(poll_ms)).await;
            }
        }
    }
}

/// Buzzer Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `tone`: LEDC Tongenerator (Frequenz bereits konfiguriert)
/// - `commands`: Channel Receiver für Kommandos vom Button-Task
#[embassy_executor::task]
pub async fn buzzer_task(tone: LedcTone, commands: BuzzerCommandReceiver) {
    info!("{} started", TaskId::BuzzerController.name());

    let buzzer = BuzzerController::new(tone, BeepPattern::default());
    buzzer_logic(buzzer, commands).await;
}
