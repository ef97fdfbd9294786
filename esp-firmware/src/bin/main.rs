// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::{SendSpawner, Spawner};
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::timg::TimerGroup;
use esp_rtos::embassy::InterruptExecutor;
use static_cell::StaticCell;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;

// Projekt-Module und Konfiguration
use esp_core::TaskId;
use esp_signal_steuerung::config::{BUTTON_EXECUTOR_PRIORITY, BUZZER_DUTY_PERCENT, BUZZER_FREQ_HZ};
use esp_signal_steuerung::hal::{GpioButtons, GpioLedLines, LedcTone};
use esp_signal_steuerung::tasks::{button_task, buzzer_task, led_sequencer_task};
use esp_signal_steuerung::{BuzzerCommandChannel, StartupError, SuspendSignal, halt};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Run/Suspend-Flag des LED-Tasks (nur der Button-Task bekommt einen Handle)
static LED_RUN_SIGNAL: SuspendSignal = SuspendSignal::new();

/// Command-Channel Button → Buzzer
static COMMAND_CHANNEL: StaticCell<BuzzerCommandChannel> = StaticCell::new();

/// Höher priorisierter Executor für den Button-Task
static BUTTON_EXECUTOR: StaticCell<InterruptExecutor<2>> = StaticCell::new();

/// Main Entry Point
///
/// Initialisiert Hardware, Command-Channel und startet die drei Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
/// Jeder Startfehler ist fatal und endet in `halt()`.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Initializing hardware...");

    // LEDs: active-high, Start mit allen Leitungen aus
    // Rot = GPIO4, Grün = GPIO5, Blau = GPIO6
    let leds = GpioLedLines::new(
        Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO6, Level::Low, OutputConfig::default()),
    );

    // Taster: active-low mit internem Pull-Up
    // A = GPIO9 (BOOT-Taster auf dem DevKit), B = GPIO18
    let button_config = InputConfig::default().with_pull(Pull::Up);
    let buttons = GpioButtons::new(
        Input::new(peripherals.GPIO9, button_config),
        Input::new(peripherals.GPIO18, button_config),
    );

    // Buzzer: passiver Buzzer an GPIO10, LEDC PWM mit fester Frequenz und Duty
    let tone = match LedcTone::new(
        peripherals.LEDC,
        peripherals.GPIO10,
        BUZZER_FREQ_HZ,
        BUZZER_DUTY_PERCENT,
    ) {
        Ok(tone) => tone,
        Err(e) => halt(e),
    };
    info!(
        "Buzzer: {} Hz, {}% duty",
        BUZZER_FREQ_HZ, BUZZER_DUTY_PERCENT
    );

    // Command-Channel erstellen (Button → Buzzer)
    let Some(channel) = COMMAND_CHANNEL.try_init(BuzzerCommandChannel::new()) else {
        halt(StartupError::ChannelUnavailable)
    };
    let channel: &'static BuzzerCommandChannel = channel;

    // Button-Executor auf höherer Interrupt-Priorität starten
    let Some(button_executor) =
        BUTTON_EXECUTOR.try_init(InterruptExecutor::new(sw_interrupt.software_interrupt2))
    else {
        halt(StartupError::ExecutorUnavailable)
    };
    let high_prio_spawner = button_executor.start(BUTTON_EXECUTOR_PRIORITY);

    info!("Starting tasks...");
    if let Err(e) = spawn_tasks(
        &spawner,
        high_prio_spawner,
        leds,
        buttons,
        tone,
        channel,
    ) {
        halt(e);
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

/// Spawnt LED- und Buzzer-Task im Thread-Mode, den Button-Task höher priorisiert
fn spawn_tasks(
    spawner: &Spawner,
    high_prio_spawner: SendSpawner,
    leds: GpioLedLines,
    buttons: GpioButtons,
    tone: LedcTone,
    channel: &'static BuzzerCommandChannel,
) -> Result<(), StartupError> {
    // Nur der Button-Task bekommt den Handle zum Pausieren des LED-Tasks,
    // der LED-Task selbst nur das Gate
    let (led_handle, led_gate) = LED_RUN_SIGNAL.split();

    spawner
        .spawn(led_sequencer_task(leds, led_gate))
        .map_err(|_| StartupError::SpawnFailed(TaskId::LedSequencer))?;

    spawner
        .spawn(buzzer_task(tone, channel.receiver()))
        .map_err(|_| StartupError::SpawnFailed(TaskId::BuzzerController))?;

    high_prio_spawner
        .spawn(button_task(buttons, led_handle, channel.sender()))
        .map_err(|_| StartupError::SpawnFailed(TaskId::ButtonMonitor))?;

    Ok(())
}
