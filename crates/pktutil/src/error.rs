use core::{fmt, panic::Location, time::Duration};

use bstr::BString;
use thiserror::Error;

/// Which guarded operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocOp {
    Allocate,
    Reallocate,
    Duplicate,
}

impl fmt::Display for AllocOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AllocOp::Allocate => "allocate",
            AllocOp::Reallocate => "reallocate",
            AllocOp::Duplicate => "duplicate",
        })
    }
}

/// The allocator could not satisfy a request made through [`GuardedBuf`].
///
/// `site` is the caller of the guarded operation, not a location inside this
/// crate.
///
/// [`GuardedBuf`]: crate::GuardedBuf
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{op}() error: unable to allocate {requested} bytes (block held {previous} bytes)")]
pub struct AllocError {
    pub op: AllocOp,
    pub requested: usize,
    pub previous: usize,
    pub site: &'static Location<'static>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("hex buffer must be larger than zero bytes")]
    ZeroCapacity,
    /// The token is not a hex number, is empty, or is larger than `0xff`.
    #[error("invalid hex byte '{token}' at token {index}")]
    InvalidToken { token: BString, index: usize },
    #[error(transparent)]
    OutOfMemory(#[from] AllocError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("wall clock reads {behind:?} earlier than the start timestamp")]
    ClockSkew { behind: Duration },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer4Error {
    #[error("empty IP packet")]
    Empty,
    #[error("IP header length {ihl} is below the minimum of 5 words")]
    HeaderTooShort { ihl: u8 },
    #[error("IP header claims {header_len} bytes but the packet holds {packet_len}")]
    Truncated {
        header_len: usize,
        packet_len: usize,
    },
}
