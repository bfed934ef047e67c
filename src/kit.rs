//! The context every effect runs against
//!
//! [`BlinkKit`] owns the active frame buffer, the renderer and the exit
//! listener. Effects mutate the frame through [`frame_mut`](BlinkKit::frame_mut),
//! light it with [`display_for`](BlinkKit::display_for) and poll
//! [`should_exit`](BlinkKit::should_exit) between time slices.

use core::mem;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedSink;
use crate::config::KitConfig;
use crate::frame::FrameBuffer;
use crate::renderer::Renderer;
use crate::signal::ExitListener;

/// Effect context for `N` LEDs, `L` intensity levels and groups of `G`
pub struct BlinkKit<'a, S: LedSink, const N: usize, const L: usize, const G: usize> {
    renderer: Renderer<S, L, G>,
    frame: FrameBuffer<N, L>,
    exit: ExitListener<'a>,
}

impl<'a, S: LedSink, const N: usize, const L: usize, const G: usize> BlinkKit<'a, S, N, L, G> {
    /// Set up the kit; every LED is switched off before this returns
    pub fn new(sink: S, config: &KitConfig<L>, exit: ExitListener<'a>) -> Self {
        let mut frame = FrameBuffer::new();
        frame.clear(config.initial_level);
        Self {
            renderer: Renderer::new(sink, config.gamma),
            frame,
            exit,
        }
    }

    /// The active frame
    pub const fn frame(&self) -> &FrameBuffer<N, L> {
        &self.frame
    }

    /// The active frame, for the primitives
    pub fn frame_mut(&mut self) -> &mut FrameBuffer<N, L> {
        &mut self.frame
    }

    /// Make `frame` the active buffer
    ///
    /// The previously active contents end up in `frame`, so swapping again
    /// restores them. Nothing is dropped and only one buffer is active.
    pub fn swap_frame(&mut self, frame: &mut FrameBuffer<N, L>) {
        #[cfg(feature = "esp32-log")]
        println!("[BlinkKit.swap_frame] swapping active frame");
        mem::swap(&mut self.frame, frame);
    }

    /// Install `frame` as the active buffer and return the previous one
    pub fn replace_frame(&mut self, frame: FrameBuffer<N, L>) -> FrameBuffer<N, L> {
        mem::replace(&mut self.frame, frame)
    }

    /// Light the active frame for `ticks` multiplex periods
    ///
    /// Blocks until done and leaves every LED dark. Exit requests arriving
    /// meanwhile are kept for the next [`should_exit`](Self::should_exit).
    pub fn display_for(&mut self, ticks: u16) {
        self.renderer.display_for(&self.frame, ticks);
    }

    /// Consume a pending exit request
    ///
    /// An effect that gets `true` must return.
    pub fn should_exit(&mut self) -> bool {
        self.exit.take()
    }

    pub const fn renderer(&self) -> &Renderer<S, L, G> {
        &self.renderer
    }
}
