//! Zero-initialising heap blocks whose allocation failures are diagnosable.
//!
//! Every block knows its exact length, so growing a block zero-fills exactly
//! the new tail `[old_len, new_len)` and nothing else. The `try_*`
//! constructors report failure as [`AllocError`]; the plain ones treat it as
//! fatal (see [`fatal`](crate::fatal)).
//!
//! All operations are `#[track_caller]`: errors and trace lines name the
//! code that asked for memory, not this module.

use alloc::vec::Vec;
use core::{
    ops::{Deref, DerefMut},
    panic::Location,
};

use log::trace;

use crate::{
    error::{AllocError, AllocOp},
    fatal::fatal,
};

/// An owned, zero-initialised byte block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuardedBuf {
    bytes: Vec<u8>,
}

impl GuardedBuf {
    /// Allocate `size` zero bytes, reporting failure to the caller.
    #[track_caller]
    pub fn try_allocate(size: usize) -> Result<Self, AllocError> {
        let site = Location::caller();
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(size).map_err(|_| AllocError {
            op: AllocOp::Allocate,
            requested: size,
            previous: 0,
            site,
        })?;
        bytes.resize(size, 0);
        trace!("allocated {size} bytes at {site}");
        Ok(Self { bytes })
    }

    /// Allocate `size` zero bytes; failure is fatal.
    #[track_caller]
    #[must_use]
    pub fn allocate(size: usize) -> Self {
        match Self::try_allocate(size) {
            Ok(buf) => buf,
            Err(err) => fatal(&err),
        }
    }

    /// Copy `text` into a new block followed by a single NUL byte.
    ///
    /// The block is exactly `text.len() + 1` bytes long.
    #[track_caller]
    pub fn try_duplicate(text: &[u8]) -> Result<Self, AllocError> {
        let site = Location::caller();
        let requested = text.len().saturating_add(1);
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(requested).map_err(|_| AllocError {
            op: AllocOp::Duplicate,
            requested,
            previous: 0,
            site,
        })?;
        bytes.extend_from_slice(text);
        bytes.push(0);
        trace!("duplicated {requested} bytes at {site}");
        Ok(Self { bytes })
    }

    /// Copy `text` plus a NUL terminator; failure is fatal.
    #[track_caller]
    #[must_use]
    pub fn duplicate(text: &[u8]) -> Self {
        match Self::try_duplicate(text) {
            Ok(buf) => buf,
            Err(err) => fatal(&err),
        }
    }

    /// Resize the block to `new_size` bytes.
    ///
    /// Growing zero-fills the added tail. Shrinking releases the excess
    /// capacity. On failure the block is left untouched.
    #[track_caller]
    pub fn try_reallocate(&mut self, new_size: usize) -> Result<(), AllocError> {
        let site = Location::caller();
        let previous = self.bytes.len();
        if new_size > previous {
            self.bytes
                .try_reserve_exact(new_size - previous)
                .map_err(|_| AllocError {
                    op: AllocOp::Reallocate,
                    requested: new_size,
                    previous,
                    site,
                })?;
            self.bytes.resize(new_size, 0);
        } else {
            self.bytes.truncate(new_size);
            self.bytes.shrink_to_fit();
        }
        trace!("reallocated {previous} -> {new_size} bytes at {site}");
        Ok(())
    }

    /// Resize the block to `new_size` bytes; failure is fatal.
    #[track_caller]
    pub fn reallocate(&mut self, new_size: usize) {
        if let Err(err) = self.try_reallocate(new_size) {
            fatal(&err);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for GuardedBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for GuardedBuf {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for GuardedBuf {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
