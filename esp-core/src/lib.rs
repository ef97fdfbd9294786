//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Zustandsautomaten für LED-Sequenz,
//! Buzzer und Taster sowie den Suspend-Mechanismus für Tasks.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod buttons;
pub mod buzzer;
pub mod channel;
pub mod config;
pub mod error;
pub mod sequencer;
pub mod suspend;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use buttons::{ButtonMonitor, EdgeDetector, PollOutcome};
pub use buzzer::{BuzzerController, BuzzerCycle, BuzzerStep};
pub use channel::{CommandChannel, CommandReceiver, CommandSender, CommandSink, CommandSource};
pub use config::BeepPattern;
pub use error::StartupError;
pub use sequencer::LedSequencer;
pub use suspend::{SuspendGate, SuspendHandle, SuspendSignal, Suspendable};
pub use traits::{ButtonInputs, LedLines, ToneOutput};
pub use types::{Button, BuzzerCommand, BuzzerMode, BuzzerTransition, LedLevels, LedPhase, TaskId};
