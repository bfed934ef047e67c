//! Software PWM over multiplexed LED groups
//!
//! The board cannot source current for every LED at once, so LEDs are lit in
//! consecutive groups of `G`. Within a group all members switch on together and
//! one shared counter runs from 1 to [`MAX_DUTY`]; each member switches off when
//! the counter reaches its duty value. That gives every LED its own duty cycle
//! from a single busy loop, without a hardware timer per LED.
//!
//! A scan cannot be interrupted. Button presses that arrive meanwhile stay
//! pending in the exit signal until the effect polls it.

use crate::LedSink;
use crate::frame::FrameBuffer;
use crate::gamma::{GammaTable, MAX_DUTY};

/// Lights a frame buffer on an [`LedSink`]
///
/// `L` is the number of intensity levels, `G` the number of LEDs that may be
/// lit at the same time.
#[derive(Debug)]
pub struct Renderer<S: LedSink, const L: usize, const G: usize> {
    sink: S,
    gamma: GammaTable<L>,
}

impl<S: LedSink, const L: usize, const G: usize> Renderer<S, L, G> {
    /// Create a renderer, switching every LED off first
    pub fn new(mut sink: S, gamma: GammaTable<L>) -> Self {
        sink.init();
        Self { sink, gamma }
    }

    /// Light `frame` for `ticks` multiplex periods
    ///
    /// Every LED is dark again when this returns. Nothing is lit between calls.
    /// `N` must be a non-zero multiple of `G`, which is checked at compile time.
    pub fn display_for<const N: usize>(&mut self, frame: &FrameBuffer<N, L>, ticks: u16) {
        const {
            assert!(G > 0, "multiplex group size must be non-zero");
            assert!(N % G == 0, "LED count must be a multiple of the group size");
        }

        for _ in 0..ticks {
            for (group, levels) in frame.as_slice().chunks_exact(G).enumerate() {
                self.scan_group(group * G, levels);
            }
        }
    }

    /// One PWM period for the group starting at `first_led`
    fn scan_group(&mut self, first_led: usize, levels: &[u8]) {
        let mut duties = [0u8; G];
        for (duty, &level) in duties.iter_mut().zip(levels) {
            *duty = self.gamma.duty(level);
        }

        for (offset, &duty) in duties.iter().enumerate() {
            if duty > 0 {
                self.sink.energize(first_led + offset);
            }
        }

        // Duties never exceed MAX_DUTY, so every lit member is switched off
        // exactly once before the loop ends.
        for step in 1..=MAX_DUTY {
            for (offset, &duty) in duties.iter().enumerate() {
                if duty == step {
                    self.sink.deenergize(first_led + offset);
                }
            }
        }
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }
}
