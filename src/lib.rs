#![no_std]

pub mod button;
pub mod config;
pub mod effects;
pub mod frame;
pub mod gamma;
pub mod kit;
pub mod pins;
pub mod renderer;
pub mod scheduler;
pub mod signal;

pub use button::{Button, PressedTo};
pub use config::KitConfig;
pub use effects::{FillDrain, Flash, SmoothRoll, register_builtin};
pub use frame::FrameBuffer;
pub use gamma::{GammaError, GammaTable, MAX_DUTY};
pub use kit::BlinkKit;
pub use pins::{PinBank, Polarity};
pub use renderer::Renderer;
pub use scheduler::{Effect, RegistryFull, Scheduler, SchedulerState};
pub use signal::{ExitListener, ExitSignal};

/// Abstract LED output
///
/// Implement this trait to support different hardware platforms.
/// The renderer only ever lights as many LEDs at once as its group size
/// allows; implementations must not add any limit of their own.
pub trait LedSink {
    /// Switch every LED off. Called once before the first frame is shown.
    fn init(&mut self);

    /// Switch a LED on
    fn energize(&mut self, led: usize);

    /// Switch a LED off
    fn deenergize(&mut self, led: usize);
}
