use core::fmt;

use log::{debug, info, trace, warn};

/// Sink for the advisory messages produced by decoders and reports.
///
/// Components take a `Diagnostics` value instead of consulting a process-wide
/// debug flag, so callers decide both where messages go and how chatty the
/// debug stream is.
pub trait Diagnostics {
    /// A recoverable condition the user should know about.
    fn warn(&self, args: fmt::Arguments<'_>);

    /// Regular output of a report.
    fn info(&self, args: fmt::Arguments<'_>);

    /// Instrumentation. `level` grows with verbosity; 1 is the least chatty.
    fn debug(&self, level: u8, args: fmt::Arguments<'_>);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn warn(&self, args: fmt::Arguments<'_>) {
        (**self).warn(args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        (**self).info(args);
    }

    fn debug(&self, level: u8, args: fmt::Arguments<'_>) {
        (**self).debug(level, args);
    }
}

/// Forwards to the `log` facade.
///
/// Debug lines above `debug_level` are dropped before they reach the logger.
/// Levels 1 and 2 map to `debug!`, anything higher to `trace!`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogDiagnostics {
    pub debug_level: u8,
}

impl LogDiagnostics {
    #[must_use]
    pub fn new(debug_level: u8) -> Self {
        Self { debug_level }
    }
}

impl Diagnostics for LogDiagnostics {
    fn warn(&self, args: fmt::Arguments<'_>) {
        warn!("{args}");
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        info!("{args}");
    }

    fn debug(&self, level: u8, args: fmt::Arguments<'_>) {
        if level > self.debug_level {
            return;
        }
        if level <= 2 {
            debug!("{args}");
        } else {
            trace!("{args}");
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl Diagnostics for Silent {
    fn warn(&self, _args: fmt::Arguments<'_>) {}

    fn info(&self, _args: fmt::Arguments<'_>) {}

    fn debug(&self, _level: u8, _args: fmt::Arguments<'_>) {}
}
