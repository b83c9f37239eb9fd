//! Support utilities for packet-replay tools.
//!
//! The centrepiece is [`decode_hex_list`], which turns a user-supplied
//! layer-2 header description such as `"00,1b,21,3a,4f,5e"` into raw bytes
//! inside a caller-owned buffer. Around it sit a guarded allocator
//! ([`GuardedBuf`]), an argv-style splitter ([`argv_create`]), a throughput
//! report ([`Throughput`]) and an IPv4 layer-4 accessor ([`layer4`]).
//!
//! Errors are returned as values. Tools that want the traditional
//! "print a diagnostic and exit" behaviour call [`OrExit::or_exit`] at the
//! top level.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod argv;
mod diagnostics;
mod error;
mod fatal;
mod guarded;
mod hex;
mod layer4;
mod stats;

#[cfg(test)]
mod tests;

pub use argv::argv_create;
pub use diagnostics::{Diagnostics, LogDiagnostics, Silent};
pub use error::{AllocError, AllocOp, DecodeError, Layer4Error, StatsError};
pub use fatal::{OrExit, fatal, fatal_in};
pub use guarded::GuardedBuf;
pub use hex::{DecodeStatus, Decoded, DecoderOptions, HexDecoder, decode_hex_list};
pub use layer4::{layer4, layer4_offset};
#[cfg(feature = "std")]
pub use stats::{Stopwatch, packet_stats};
pub use stats::{Counters, Throughput};
