use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{cell::RefCell, fmt};

use crate::{DecoderOptions, Diagnostics, HexDecoder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Warn(String),
    Info(String),
    Debug(u8, String),
}

/// Diagnostics sink that keeps every message for later inspection.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    events: RefCell<Vec<Event>>,
}

impl Recorder {
    pub(crate) fn take(&self) -> Vec<Event> {
        self.events.take()
    }

    pub(crate) fn warnings(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Warn(_)))
            .count()
    }
}

impl Diagnostics for Recorder {
    fn warn(&self, args: fmt::Arguments<'_>) {
        self.events.borrow_mut().push(Event::Warn(args.to_string()));
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.events.borrow_mut().push(Event::Info(args.to_string()));
    }

    fn debug(&self, level: u8, args: fmt::Arguments<'_>) {
        self.events
            .borrow_mut()
            .push(Event::Debug(level, args.to_string()));
    }
}

pub(crate) fn recording(options: DecoderOptions) -> HexDecoder<Recorder> {
    HexDecoder::with_diagnostics(options, Recorder::default())
}
