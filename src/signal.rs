//! Edge-triggered exit request
//!
//! The button interrupt raises the signal; the running effect takes it. Both
//! sides go through a critical section, so a raise that lands between the read
//! and the clear of [`ExitListener::take`] cannot be lost.

use core::cell::Cell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Flag shared between the interrupt handler and the effect loop
///
/// Usually placed in a `static`:
///
/// ```ignore
/// static BUTTON: ExitSignal = ExitSignal::new();
///
/// fn on_button_interrupt() {
///     BUTTON.raise();
/// }
/// ```
pub struct ExitSignal {
    pending: Mutex<Cell<bool>>,
    listener_taken: Mutex<Cell<bool>>,
}

impl ExitSignal {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
            listener_taken: Mutex::new(Cell::new(false)),
        }
    }

    /// Request the running effect to return
    ///
    /// Safe to call from interrupt context. Several raises before the next
    /// [`take`](ExitListener::take) collapse into one request.
    pub fn raise(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    /// Check for a pending request without consuming it
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }

    /// Hand out the single consumer of this signal
    ///
    /// Returns `None` once a listener has been given out.
    pub fn listener(&self) -> Option<ExitListener<'_>> {
        let already_taken =
            critical_section::with(|cs| self.listener_taken.borrow(cs).replace(true));
        if already_taken {
            #[cfg(feature = "esp32-log")]
            println!("[ExitSignal.listener] listener already taken");
            return None;
        }
        Some(ExitListener { signal: self })
    }
}

impl Default for ExitSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// The only reader of an [`ExitSignal`]
///
/// Not `Clone`: a request is consumed by exactly one party.
pub struct ExitListener<'a> {
    signal: &'a ExitSignal,
}

impl ExitListener<'_> {
    /// Read and clear the request in one step
    ///
    /// Returns `true` exactly once per raised request.
    pub fn take(&mut self) -> bool {
        critical_section::with(|cs| self.signal.pending.borrow(cs).replace(false))
    }
}
