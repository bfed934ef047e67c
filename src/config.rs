//! Board configuration
//!
//! Constants describe the reference board: 18 LEDs, 18 intensity levels and a
//! current budget that allows 3 lit LEDs at a time. The group size comes from
//! the board's current budget and is not derived from the LED count.

use crate::gamma::GammaTable;
use crate::{BlinkKit, FrameBuffer, Scheduler};

/// Number of LEDs on the reference board
pub const NUM_LEDS: usize = 18;

/// Number of intensity levels
pub const NUM_INTENSITIES: usize = NUM_LEDS;

/// LEDs that may be lit at the same time
pub const GROUP_SIZE: usize = 3;

/// Capacity of the effect registry
pub const MAX_EFFECTS: usize = 20;

/// Startup configuration for a [`BlinkKit`]
#[derive(Debug, Clone, Copy)]
pub struct KitConfig<const L: usize> {
    /// Level to duty mapping used by the renderer
    pub gamma: GammaTable<L>,
    /// Level the default frame starts at
    pub initial_level: u8,
}

impl<const L: usize> Default for KitConfig<L> {
    fn default() -> Self {
        Self {
            gamma: GammaTable::quadratic(),
            initial_level: 0,
        }
    }
}

impl KitConfig<NUM_INTENSITIES> {
    /// Configuration of the reference board
    pub const fn reference() -> Self {
        Self {
            gamma: GammaTable::reference(),
            initial_level: 0,
        }
    }
}

/// Frame of the reference board
pub type ReferenceFrame = FrameBuffer<NUM_LEDS, NUM_INTENSITIES>;

/// Kit of the reference board
pub type ReferenceKit<'a, S> = BlinkKit<'a, S, NUM_LEDS, NUM_INTENSITIES, GROUP_SIZE>;

/// Scheduler of the reference board
pub type ReferenceScheduler<'e, 'a, S> = Scheduler<'e, ReferenceKit<'a, S>, MAX_EFFECTS>;
