// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Button → Buzzer über den Command-Channel, Button → LED über das SuspendSignal.

pub mod buttons;
pub mod buzzer;
pub mod led_sequencer;

// Re-export Tasks für einfachen Import
pub use buttons::button_task;
pub use buzzer::buzzer_task;
pub use led_sequencer::led_sequencer_task;
