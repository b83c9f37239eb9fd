//! Top-level "diagnose and terminate" policy.
//!
//! Library functions return errors. Binaries that want the classic
//! `errx(1, ...)` behaviour route those errors through [`fatal`], usually via
//! [`OrExit::or_exit`]. With the `std` feature the process exits with status
//! 1; without it the error becomes a panic.

use core::{
    fmt::{self, Display},
    panic::Location,
};

use log::error;

/// Report `err` together with the caller's location and terminate.
#[track_caller]
#[cold]
pub fn fatal(err: &dyn Display) -> ! {
    let site = Location::caller();
    terminate(err, site)
}

/// Like [`fatal`], naming the operation that failed: `op() error: err`.
#[track_caller]
#[cold]
pub fn fatal_in(op: &str, err: &dyn Display) -> ! {
    let site = Location::caller();
    terminate(&InOp { op, err }, site)
}

struct InOp<'a> {
    op: &'a str,
    err: &'a dyn Display,
}

impl Display for InOp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}() error: {}", self.op, self.err)
    }
}

#[cfg(feature = "std")]
fn terminate(err: &dyn Display, site: &Location<'_>) -> ! {
    if log::log_enabled!(log::Level::Error) {
        error!("{err} ({site})");
    } else {
        // No logger installed; stderr is the only diagnostic channel left.
        std::eprintln!("error: {err} ({site})");
    }
    std::process::exit(1)
}

#[cfg(not(feature = "std"))]
fn terminate(err: &dyn Display, site: &Location<'_>) -> ! {
    error!("{err} ({site})");
    panic!("{err} ({site})")
}

/// Unwrap a result, treating the error as fatal.
pub trait OrExit<T> {
    #[track_caller]
    fn or_exit(self) -> T;

    /// As [`OrExit::or_exit`], with `op` named in the diagnostic.
    #[track_caller]
    fn or_exit_in(self, op: &str) -> T;
}

impl<T, E: Display> OrExit<T> for Result<T, E> {
    #[track_caller]
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&err),
        }
    }

    #[track_caller]
    fn or_exit_in(self, op: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal_in(op, &err),
        }
    }
}
