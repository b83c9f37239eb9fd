//! Comma-separated hex byte lists.
//!
//! A description such as `"00,1b,21,3a,4f,5e"` is decoded one token at a time
//! into a caller-owned buffer. Each token is one byte; larger values and
//! non-hex text are errors.
//!
//! Truncation is not an error. When the buffer fills up before the list ends,
//! decoding stops, a warning goes to the injected [`Diagnostics`], and the
//! result reports one more token than bytes written. Tokens after the one that
//! did not fit are never examined.

mod digits;
mod options;
mod tokens;

use bstr::BString;
pub use options::DecoderOptions;
use tokens::TokenStream;

use crate::{
    diagnostics::{Diagnostics, LogDiagnostics},
    error::DecodeError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// Every token was decoded.
    Complete,
    /// The destination filled up and the rest of the list was skipped.
    Truncated,
}

/// Outcome of a successful decode.
///
/// `written` counts bytes stored in the destination. `tokens_seen` counts
/// tokens taken from the description, including the one that did not fit.
/// The two only differ on truncation, where `tokens_seen == written + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    written: usize,
    tokens_seen: usize,
}

impl Decoded {
    /// Bytes stored in the destination.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    #[must_use]
    pub fn tokens_seen(&self) -> usize {
        self.tokens_seen
    }

    /// The classic byte count: bytes written, or `capacity + 1` when the
    /// destination was too small.
    ///
    /// Callers treat `count() > capacity` as the truncation signal.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tokens_seen
    }

    #[must_use]
    pub fn status(&self) -> DecodeStatus {
        if self.tokens_seen > self.written {
            DecodeStatus::Truncated
        } else {
            DecodeStatus::Complete
        }
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.status() == DecodeStatus::Truncated
    }
}

/// Decoder for comma-separated hex byte lists.
#[derive(Debug, Clone, Default)]
pub struct HexDecoder<D: Diagnostics = LogDiagnostics> {
    options: DecoderOptions,
    diagnostics: D,
}

impl HexDecoder<LogDiagnostics> {
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self::with_diagnostics(options, LogDiagnostics::default())
    }
}

impl<D: Diagnostics> HexDecoder<D> {
    pub fn with_diagnostics(options: DecoderOptions, diagnostics: D) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Decode `description` into `destination`.
    ///
    /// `destination` is zeroed first; its length is the capacity. Bytes are
    /// written from offset 0 in token order. On error, bytes decoded from
    /// earlier tokens stay in place and nothing else is written.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::ZeroCapacity`] for an empty destination, before the
    ///   description is looked at.
    /// - [`DecodeError::InvalidToken`] for a token that is empty, not hex, or
    ///   above `0xff`.
    /// - [`DecodeError::OutOfMemory`] when the private copy of the
    ///   description cannot be allocated.
    #[track_caller]
    pub fn decode_into(
        &self,
        description: impl AsRef<[u8]>,
        destination: &mut [u8],
    ) -> Result<Decoded, DecodeError> {
        if destination.is_empty() {
            return self.fail(DecodeError::ZeroCapacity);
        }
        destination.fill(0);

        let capacity = destination.len();
        let mut tokens = TokenStream::new(description.as_ref())?;
        let mut written = 0;

        while let Some(token) = tokens.next_token() {
            let bytes = if self.options.allow_whitespace {
                token.bytes.trim_ascii()
            } else {
                token.bytes
            };
            // A blank after the final separator ends the list like "aa,bb," does.
            let trailing = token.last && token.index > 0;
            if bytes.is_empty() && (self.options.allow_empty_tokens || trailing) {
                continue;
            }

            if written == capacity {
                self.diagnostics.warn(format_args!(
                    "destination too small ({capacity} bytes), remaining data skipped"
                ));
                return Ok(Decoded {
                    written,
                    tokens_seen: written + 1,
                });
            }

            let Some(byte) = digits::parse_byte(bytes) else {
                return self.fail(DecodeError::InvalidToken {
                    token: BString::from(token.bytes),
                    index: token.index,
                });
            };
            destination[written] = byte;
            written += 1;
        }

        self.diagnostics
            .debug(1, format_args!("read {written} bytes of layer 2 data"));
        Ok(Decoded {
            written,
            tokens_seen: written,
        })
    }

    fn fail<T>(&self, err: DecodeError) -> Result<T, DecodeError> {
        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            panic!("{err}");
        }
        Err(err)
    }
}

/// Decode `description` into `destination` with default options, logging
/// through the `log` facade.
///
/// # Examples
///
/// ```rust
/// let mut buf = [0u8; 16];
/// let decoded = pktutil::decode_hex_list("aa,bb,cc", &mut buf).unwrap();
/// assert_eq!(decoded.count(), 3);
/// assert_eq!(&buf[..3], &[0xaa, 0xbb, 0xcc]);
/// ```
///
/// # Errors
///
/// See [`HexDecoder::decode_into`].
#[track_caller]
pub fn decode_hex_list(
    description: impl AsRef<[u8]>,
    destination: &mut [u8],
) -> Result<Decoded, DecodeError> {
    HexDecoder::new(DecoderOptions::default()).decode_into(description, destination)
}
