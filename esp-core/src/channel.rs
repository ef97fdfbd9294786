//! Command-Channel (Button-Task → Buzzer-Task)
//!
//! Begrenzte FIFO-Queue mit nicht-blockierendem Senden und Empfangen.
//! Ist die Queue voll, wird das Kommando verworfen (kein Retry).

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::COMMAND_QUEUE_CAPACITY;
use crate::types::BuzzerCommand;

/// Channel für Buzzer-Kommandos
pub type CommandChannel<M> = Channel<M, BuzzerCommand, COMMAND_QUEUE_CAPACITY>;

/// Sender-Seite (nur der Button-Task)
pub type CommandSender<'a, M> = Sender<'a, M, BuzzerCommand, COMMAND_QUEUE_CAPACITY>;

/// Receiver-Seite (nur der Buzzer-Task)
pub type CommandReceiver<'a, M> = Receiver<'a, M, BuzzerCommand, COMMAND_QUEUE_CAPACITY>;

/// Nicht-blockierendes Senden
pub trait CommandSink {
    /// Gibt `false` zurück wenn das Kommando verworfen wurde (Queue voll)
    fn offer(&self, command: BuzzerCommand) -> bool;
}

/// Nicht-blockierendes Empfangen
pub trait CommandSource {
    /// `None` heißt "kein neues Kommando in diesem Zyklus", kein Fehler
    fn poll_command(&self) -> Option<BuzzerCommand>;
}

impl<M: RawMutex, const N: usize> CommandSink for Sender<'_, M, BuzzerCommand, N> {
    fn offer(&self, command: BuzzerCommand) -> bool {
        self.try_send(command).is_ok()
    }
}

impl<M: RawMutex, const N: usize> CommandSink for Channel<M, BuzzerCommand, N> {
    fn offer(&self, command: BuzzerCommand) -> bool {
        self.try_send(command).is_ok()
    }
}

impl<M: RawMutex, const N: usize> CommandSource for Receiver<'_, M, BuzzerCommand, N> {
    fn poll_command(&self) -> Option<BuzzerCommand> {
        self.try_receive().ok()
    }
}

impl<M: RawMutex, const N: usize> CommandSource for Channel<M, BuzzerCommand, N> {
    fn poll_command(&self) -> Option<BuzzerCommand> {
        self.try_receive().ok()
    }
}
