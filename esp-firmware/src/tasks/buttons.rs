// Button Task - Pollt Taster A/B und verteilt Kommandos
use defmt::{info, warn};
use embassy_time::{Duration, Timer};

use esp_core::{ButtonInputs, ButtonMonitor, CommandSink, SuspendHandle, TaskId};

use crate::BuzzerCommandSender;
use crate::config::BUTTON_POLL_MS;
use crate::hal::GpioButtons;

/// Button Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Festes Poll-Intervall, ein Sample pro Fenster, nur steigende Flanken
/// lösen Aktionen aus. Verworfene Kommandos (Queue voll) werden nur geloggt.
pub async fn button_logic<I: ButtonInputs, S: CommandSink>(
    mut monitor: ButtonMonitor<I>,
    led: SuspendHandle<'_>,
    commands: S,
) {
    loop {
        let outcome = monitor.poll(&led, &commands);

        if let Some(suspended) = outcome.led_suspended {
            info!(
                "Button A: LED {}, buzzer muted",
                if suspended { "paused" } else { "resumed" }
            );
        }
        if outcome.b_pressed {
            info!("Button B: toggle beep");
        }
        if outcome.dropped > 0 {
            warn!("Command queue full, dropped {} command(s)", outcome.dropped);
        }

        Timer::after(Duration::from_millis(BUTTON_POLL_MS)).await;
    }
}

/// Button Task - läuft auf dem höher priorisierten Interrupt-Executor
///
/// # Parameter
/// - `buttons`: Taster A und B (active-low)
/// - `led`: Handle zum Pausieren/Fortsetzen des LED-Tasks
/// - `commands`: Channel Sender zum Buzzer-Task
#[embassy_executor::task]
pub async fn button_task(
    buttons: GpioButtons,
    led: SuspendHandle<'static>,
    commands: BuzzerCommandSender,
) {
    info!("{} started", TaskId::ButtonMonitor.name());

    button_logic(ButtonMonitor::new(buttons), led, commands).await;
}
