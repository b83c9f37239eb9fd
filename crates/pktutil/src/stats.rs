//! Throughput summary printed at the end of a replay run.

use core::{fmt, time::Duration};

use crate::diagnostics::Diagnostics;
#[cfg(feature = "std")]
use crate::error::StatsError;

/// Totals accumulated while sending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    pub bytes_sent: u64,
    pub packets_sent: u64,
    /// Write attempts that hit a full buffer and had to be repeated.
    pub failed: u64,
}

/// Rates derived from [`Counters`] over an elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Throughput {
    pub counters: Counters,
    pub elapsed: Duration,
    pub bytes_per_sec: f64,
    pub megabits_per_sec: f64,
    pub packets_per_sec: u64,
}

impl Throughput {
    /// Compute rates. A zero elapsed time or a zero counter yields zero rates.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(counters: Counters, elapsed: Duration) -> Self {
        let mut bytes_per_sec = 0.0;
        let mut megabits_per_sec = 0.0;
        let mut packets_per_sec = 0;

        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            if counters.bytes_sent > 0 {
                bytes_per_sec = counters.bytes_sent as f64 / secs;
                megabits_per_sec = bytes_per_sec * 8.0 / (1024.0 * 1024.0);
            }
            if counters.packets_sent > 0 {
                packets_per_sec = (counters.packets_sent as f64 / secs) as u64;
            }
        }

        Self {
            counters,
            elapsed,
            bytes_per_sec,
            megabits_per_sec,
            packets_per_sec,
        }
    }

    /// Send the report to `diagnostics`: both summary lines at info level and
    /// a warning when writes had to be repeated.
    pub fn report<D: Diagnostics + ?Sized>(&self, diagnostics: &D) {
        diagnostics.info(format_args!("{}", SentLine(self)));
        diagnostics.info(format_args!("{}", RateLine(self)));
        if self.counters.failed > 0 {
            diagnostics.warn(format_args!(
                " {} write attempts failed from full buffers and were repeated",
                self.counters.failed
            ));
        }
    }
}

struct SentLine<'a>(&'a Throughput);

impl fmt::Display for SentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(
            f,
            " {} packets ({} bytes) sent in {}.{:02} seconds",
            t.counters.packets_sent,
            t.counters.bytes_sent,
            t.elapsed.as_secs(),
            t.elapsed.subsec_millis() / 10
        )
    }
}

struct RateLine<'a>(&'a Throughput);

impl fmt::Display for RateLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(
            f,
            " {:.1} bytes/sec {:.2} megabits/sec {} packets/sec",
            t.bytes_per_sec, t.megabits_per_sec, t.packets_per_sec
        )
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SentLine(self))?;
        write!(f, "{}", RateLine(self))
    }
}

/// Start timestamp of a run that turns into the run's duration once stopped.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopwatch {
    Running(std::time::SystemTime),
    Stopped(Duration),
}

#[cfg(feature = "std")]
impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self::Running(std::time::SystemTime::now())
    }

    /// Stop against the wall clock. See [`Stopwatch::stop_at`].
    ///
    /// # Errors
    ///
    /// [`StatsError::ClockSkew`] if the clock went backwards.
    pub fn stop(&mut self) -> Result<Duration, StatsError> {
        self.stop_at(std::time::SystemTime::now())
    }

    /// Replace the start timestamp with the time elapsed until `now`.
    ///
    /// Stopping an already stopped watch returns the stored duration.
    ///
    /// # Errors
    ///
    /// [`StatsError::ClockSkew`] if `now` precedes the start. The watch keeps
    /// running in that case.
    pub fn stop_at(&mut self, now: std::time::SystemTime) -> Result<Duration, StatsError> {
        match *self {
            Stopwatch::Running(begin) => {
                let elapsed = now
                    .duration_since(begin)
                    .map_err(|err| StatsError::ClockSkew {
                        behind: err.duration(),
                    })?;
                *self = Stopwatch::Stopped(elapsed);
                Ok(elapsed)
            }
            Stopwatch::Stopped(elapsed) => Ok(elapsed),
        }
    }
}

/// Stop `begin`, compute the run's [`Throughput`] and report it.
///
/// # Errors
///
/// [`StatsError::ClockSkew`] if the wall clock reads earlier than `begin`.
#[cfg(feature = "std")]
pub fn packet_stats<D: Diagnostics + ?Sized>(
    begin: &mut Stopwatch,
    counters: Counters,
    diagnostics: &D,
) -> Result<Throughput, StatsError> {
    let elapsed = begin.stop()?;
    let throughput = Throughput::new(counters, elapsed);
    throughput.report(diagnostics);
    Ok(throughput)
}
