// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Zeit-Konstanten der Steuerlogik (LED-Phase, Piep-Muster, Poll-Intervalle)
// liegen in esp_core::config und werden hier re-exportiert.

pub use esp_core::config::{
    BEEP_DURATION_MS, BEEP_PERIOD_MS, BUTTON_POLL_MS, COMMAND_QUEUE_CAPACITY, LED_PHASE_MS,
    SILENT_POLL_MS,
};

// ============================================================================
// Buzzer Konfiguration
// ============================================================================
//
// Pin-Zuordnung steht direkt bei der Initialisierung in main.rs

/// Tonfrequenz in Hz
pub const BUZZER_FREQ_HZ: u32 = 2700;

/// Tastverhältnis des Tons in Prozent ("Lautstärke")
pub const BUZZER_DUTY_PERCENT: u8 = 50;

// ============================================================================
// Scheduler Konfiguration
// ============================================================================

/// Interrupt-Priorität des Button-Executors
/// Höher als der Thread-Mode Executor von LED- und Buzzer-Task
pub const BUTTON_EXECUTOR_PRIORITY: esp_hal::interrupt::Priority =
    esp_hal::interrupt::Priority::Priority2;
