//! Cooperative effect scheduling
//!
//! Effects are plain routines that run until they see an exit request and then
//! return. The scheduler never preempts: returning from [`Effect::run`] is the
//! only yield point, and the next effect in registration order starts from
//! scratch.

use core::fmt;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// A routine that animates the frame until it is asked to exit
///
/// `K` is the context the routine drives, normally a [`BlinkKit`](crate::BlinkKit).
/// Implementations must poll for exit requests regularly inside any unbounded
/// loop and return promptly once one is seen.
pub trait Effect<K: ?Sized> {
    /// Run until an exit request is observed
    fn run(&self, kit: &mut K);

    /// Short name for diagnostics
    fn name(&self) -> &'static str {
        "anonymous"
    }
}

impl<K: ?Sized, F> Effect<K> for F
where
    F: Fn(&mut K),
{
    fn run(&self, kit: &mut K) {
        self(kit);
    }
}

/// Returned by [`Scheduler::register`] when the registry is full
///
/// Carries the effect that was not registered.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RegistryFull<T>(pub T);

impl<T> fmt::Debug for RegistryFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RegistryFull(..)")
    }
}

impl<T> fmt::Display for RegistryFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("effect registry is full")
    }
}

/// Observable scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No effect has run yet
    Idle,
    /// The effect at `cursor` is running or ran last
    Running { cursor: usize },
}

/// Fixed-capacity effect registry with a cycling cursor
///
/// `M` is the maximum number of effects. Effects are registered at startup,
/// before the first [`run_next`](Self::run_next).
pub struct Scheduler<'e, K: ?Sized, const M: usize> {
    effects: Vec<&'e dyn Effect<K>, M>,
    cursor: Option<usize>,
}

impl<'e, K: ?Sized, const M: usize> Scheduler<'e, K, M> {
    pub const fn new() -> Self {
        Self {
            effects: Vec::new(),
            cursor: None,
        }
    }

    /// Append an effect to the cycle
    ///
    /// Returns the effect back when the registry is already full.
    pub fn register(
        &mut self,
        effect: &'e dyn Effect<K>,
    ) -> Result<(), RegistryFull<&'e dyn Effect<K>>> {
        self.effects.push(effect).map_err(|rejected| {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Scheduler.register] registry full ({} effects), dropping {}",
                M,
                rejected.name()
            );
            RegistryFull(rejected)
        })
    }

    /// Register effects in cycle order, dropping whatever does not fit
    pub fn register_all<I>(&mut self, effects: I)
    where
        I: IntoIterator<Item = &'e dyn Effect<K>>,
    {
        for effect in effects {
            let _ = self.register(effect);
        }
    }

    /// Advance to the next effect and run it until it returns
    ///
    /// Must not be called from inside an effect. Returns `false` without doing
    /// anything when no effect is registered.
    pub fn run_next(&mut self, kit: &mut K) -> bool {
        let next = match self.cursor {
            Some(cursor) if cursor + 1 < self.effects.len() => cursor + 1,
            _ => 0,
        };
        let Some(effect) = self.effects.get(next).copied() else {
            #[cfg(feature = "esp32-log")]
            println!("[Scheduler.run_next] no effects registered");
            return false;
        };

        self.cursor = Some(next);
        #[cfg(feature = "esp32-log")]
        println!("[Scheduler.run_next] starting {} ({})", effect.name(), next);
        effect.run(kit);
        true
    }

    /// Cycle through the effects forever
    pub fn run(&mut self, kit: &mut K) -> ! {
        loop {
            self.run_next(kit);
        }
    }

    pub fn state(&self) -> SchedulerState {
        match self.cursor {
            None => SchedulerState::Idle,
            Some(cursor) => SchedulerState::Running { cursor },
        }
    }

    /// Index of the effect that ran last
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        M
    }
}

impl<K: ?Sized, const M: usize> Default for Scheduler<'_, K, M> {
    fn default() -> Self {
        Self::new()
    }
}
