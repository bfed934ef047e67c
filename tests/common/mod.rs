//! Test doubles shared by the integration tests

#![allow(dead_code)]

use blink_kit::{ExitSignal, LedSink};

/// Largest LED index the recorder tracks
const MAX_LEDS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Init,
    On(usize),
    Off(usize),
}

/// Sink that records every call and tracks how many LEDs are lit
pub struct RecordingSink<'a> {
    pub events: Vec<Event>,
    lit: [bool; MAX_LEDS],
    pub max_lit: usize,
    pub energized: usize,
    raise_after: Option<(usize, &'a ExitSignal)>,
}

impl<'a> RecordingSink<'a> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            lit: [false; MAX_LEDS],
            max_lit: 0,
            energized: 0,
            raise_after: None,
        }
    }

    /// Raise `signal` when the `count`-th LED is switched on
    pub fn raise_after(mut self, count: usize, signal: &'a ExitSignal) -> Self {
        self.raise_after = Some((count, signal));
        self
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|lit| **lit).count()
    }

    pub fn ons(&self, led: usize) -> usize {
        self.events.iter().filter(|event| **event == Event::On(led)).count()
    }

    pub fn offs(&self, led: usize) -> usize {
        self.events.iter().filter(|event| **event == Event::Off(led)).count()
    }

    /// Events after `init`
    pub fn drawn(&self) -> &[Event] {
        match self.events.first() {
            Some(Event::Init) => &self.events[1..],
            _ => &self.events,
        }
    }
}

impl LedSink for RecordingSink<'_> {
    fn init(&mut self) {
        self.lit = [false; MAX_LEDS];
        self.events.push(Event::Init);
    }

    fn energize(&mut self, led: usize) {
        self.events.push(Event::On(led));
        self.lit[led] = true;
        self.max_lit = self.max_lit.max(self.lit_count());
        self.energized += 1;
        if let Some((count, signal)) = self.raise_after {
            if self.energized == count {
                signal.raise();
            }
        }
    }

    fn deenergize(&mut self, led: usize) {
        self.events.push(Event::Off(led));
        self.lit[led] = false;
    }
}
