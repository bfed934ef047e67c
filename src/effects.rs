//! Built-in effects
//!
//! Each effect sets up its own frame when it starts, so nothing carries over
//! between runs.

use crate::LedSink;
use crate::frame::FrameBuffer;
use crate::kit::BlinkKit;
use crate::scheduler::{Effect, RegistryFull, Scheduler};

/// Slowest speed step of [`SmoothRoll`], in ticks per frame
const ROLL_SLOWEST: u16 = 19;
/// Fastest speed step of [`SmoothRoll`], in ticks per frame
const ROLL_FASTEST: u16 = 2;
/// Frames shown per speed step are `ROLL_STEPS - ticks`
const ROLL_STEPS: u16 = 20;

const FILL_DRAIN_TICKS: u16 = 10;
const FLASH_TICKS: u16 = 3;

/// Triangle profile rolling right, speeding up and slowing down
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothRoll;

/// Lit LEDs fill in from the left until the strip is full, then drain
#[derive(Debug, Clone, Copy, Default)]
pub struct FillDrain;

/// Whole strip ramps up to full brightness and back down
#[derive(Debug, Clone, Copy, Default)]
pub struct Flash;

impl SmoothRoll {
    /// Show `ROLL_STEPS - ticks` frames at `ticks` per frame, rolling each time
    fn roll_at<S: LedSink, const N: usize, const L: usize, const G: usize>(
        kit: &mut BlinkKit<'_, S, N, L, G>,
        ticks: u16,
    ) {
        for _ in ticks..ROLL_STEPS {
            kit.display_for(ticks);
            kit.frame_mut().rotate_right();
        }
    }
}

impl<'a, S: LedSink, const N: usize, const L: usize, const G: usize>
    Effect<BlinkKit<'a, S, N, L, G>> for SmoothRoll
{
    fn run(&self, kit: &mut BlinkKit<'a, S, N, L, G>) {
        kit.frame_mut().triangle();
        loop {
            for ticks in ROLL_FASTEST..=ROLL_SLOWEST {
                Self::roll_at(kit, ticks);
                if kit.should_exit() {
                    return;
                }
            }
            for ticks in (ROLL_FASTEST + 1..=ROLL_SLOWEST).rev() {
                Self::roll_at(kit, ticks);
                if kit.should_exit() {
                    return;
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "smooth_roll"
    }
}

impl<'a, S: LedSink, const N: usize, const L: usize, const G: usize>
    Effect<BlinkKit<'a, S, N, L, G>> for FillDrain
{
    fn run(&self, kit: &mut BlinkKit<'a, S, N, L, G>) {
        let full = FrameBuffer::<N, L>::MAX_LEVEL;
        kit.frame_mut().clear(0);
        kit.frame_mut().shift_right(full);
        while !kit.should_exit() {
            kit.display_for(FILL_DRAIN_TICKS);
            let frame = kit.frame_mut();
            // Lit LEDs come in until the right end lights up, then dark ones
            let incoming = full - frame.peek_right();
            frame.shift_right(incoming);
        }
    }

    fn name(&self) -> &'static str {
        "fill_drain"
    }
}

impl<'a, S: LedSink, const N: usize, const L: usize, const G: usize>
    Effect<BlinkKit<'a, S, N, L, G>> for Flash
{
    fn run(&self, kit: &mut BlinkKit<'a, S, N, L, G>) {
        let full = FrameBuffer::<N, L>::MAX_LEVEL;
        loop {
            for level in (0..=full).chain((0..=full).rev()) {
                kit.frame_mut().clear(level);
                kit.display_for(FLASH_TICKS);
                if kit.should_exit() {
                    return;
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "flash"
    }
}

/// Register the built-in effects in their cycle order
pub fn register_builtin<'e, 'a, S, const N: usize, const L: usize, const G: usize, const M: usize>(
    scheduler: &mut Scheduler<'e, BlinkKit<'a, S, N, L, G>, M>,
) -> Result<(), RegistryFull<&'e dyn Effect<BlinkKit<'a, S, N, L, G>>>>
where
    S: LedSink,
{
    scheduler.register(&SmoothRoll)?;
    scheduler.register(&FillDrain)?;
    scheduler.register(&Flash)?;
    Ok(())
}
