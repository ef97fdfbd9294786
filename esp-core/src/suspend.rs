//! Suspend/Resume für async Tasks
//!
//! Embassy kennt kein vTaskSuspend. Stattdessen wird der Task-Body in ein
//! `Suspendable` gewickelt: solange das Signal gesetzt ist, wird der innere
//! Future nicht gepollt und friert an seinem aktuellen `.await` ein.
//! Beim Resume wird der Task geweckt und läuft an derselben Stelle weiter.
//!
//! Schreiben darf nur, wer einen `SuspendHandle` besitzt (der Button-Task).
//! Der gegatete Task bekommt nur ein `SuspendGate` und kann sich damit
//! einwickeln, aber nicht selbst pausieren.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};

use embassy_sync::waitqueue::AtomicWaker;
use pin_project_lite::pin_project;

/// Run/Suspend-Flag eines Tasks (typischerweise als `static`)
pub struct SuspendSignal {
    suspended: AtomicBool,
    waker: AtomicWaker,
}

impl SuspendSignal {
    pub const fn new() -> Self {
        Self {
            suspended: AtomicBool::new(false),
            waker: AtomicWaker::new(),
        }
    }

    /// Capability zum Pausieren/Fortsetzen
    pub fn handle(&self) -> SuspendHandle<'_> {
        SuspendHandle { signal: self }
    }

    /// Teilt das Signal in Steuer-Handle und Gate
    ///
    /// Der Handle geht an den steuernden Task, das Gate an den gesteuerten.
    pub fn split(&self) -> (SuspendHandle<'_>, SuspendGate<'_>) {
        (self.handle(), SuspendGate { signal: self })
    }

    /// Wickelt einen Task-Body so, dass er pausiert werden kann
    pub fn gate<F: Future>(&self, future: F) -> Suspendable<'_, F> {
        Suspendable {
            signal: self,
            inner: future,
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Acquire)
    }

    fn set(&self, suspended: bool) {
        self.suspended.store(suspended, Ordering::Release);
        if !suspended {
            self.waker.wake();
        }
    }
}

impl Default for SuspendSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle mit dem ein anderer Task den gegateten Task steuert
#[derive(Clone, Copy)]
pub struct SuspendHandle<'a> {
    signal: &'a SuspendSignal,
}

impl SuspendHandle<'_> {
    pub fn suspend(&self) {
        self.signal.set(true);
    }

    pub fn resume(&self) {
        self.signal.set(false);
    }

    /// Wechselt den Zustand, gibt den neuen Zustand zurück (`true` = pausiert)
    pub fn toggle(&self) -> bool {
        let suspended = !self.signal.is_suspended();
        self.signal.set(suspended);
        suspended
    }

    pub fn is_suspended(&self) -> bool {
        self.signal.is_suspended()
    }
}

/// Sicht des gegateten Tasks auf sein Signal: nur `gate()`, keine Steuerung
#[derive(Clone, Copy)]
pub struct SuspendGate<'a> {
    signal: &'a SuspendSignal,
}

impl<'a> SuspendGate<'a> {
    pub fn gate<F: Future>(self, future: F) -> Suspendable<'a, F> {
        self.signal.gate(future)
    }
}

pin_project! {
    /// Future-Wrapper der den inneren Future nur im Run-Zustand pollt
    pub struct Suspendable<'a, F> {
        signal: &'a SuspendSignal,
        #[pin]
        inner: F,
    }
}

impl<F: Future> Future for Suspendable<'_, F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if this.signal.is_suspended() {
            this.signal.waker.register(cx.waker());
            // resume() kann zwischen Prüfung und register() gelaufen sein
            if this.signal.is_suspended() {
                return Poll::Pending;
            }
        }

        this.inner.poll(cx)
    }
}
