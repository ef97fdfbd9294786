// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{StartupError, SuspendSignal};

use defmt::error;
use esp_core::{CommandChannel, CommandReceiver, CommandSender};

// Embassy Mutex-Typ: Channel wird von zwei Executoren benutzt
// (Button-Task auf Interrupt-Priorität, Buzzer-Task im Thread-Mode)
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, CriticalSectionRawMutex, BuzzerCommand, 5>
// Nutze:  BuzzerCommandSender

/// Channel für Buzzer-Kommandos (Button Task → Buzzer Task)
/// - 5: Nachrichten-Kapazität, volle Queue = Kommando wird verworfen
pub type BuzzerCommandChannel = CommandChannel<CriticalSectionRawMutex>;

/// Sender für Buzzer-Kommandos (nur der Button Task)
pub type BuzzerCommandSender = CommandSender<'static, CriticalSectionRawMutex>;

/// Receiver für Buzzer-Kommandos (nur der Buzzer Task)
pub type BuzzerCommandReceiver = CommandReceiver<'static, CriticalSectionRawMutex>;

// ============================================================================
// Fataler Startfehler
// ============================================================================

/// Meldet einen Startfehler und hält das System dauerhaft an
///
/// Kein Reboot, kein Retry, kein Betrieb mit reduziertem Funktionsumfang.
pub fn halt(err: StartupError) -> ! {
    error!("FATAL: {} - system halted", err);
    loop {
        core::hint::spin_loop();
    }
}
