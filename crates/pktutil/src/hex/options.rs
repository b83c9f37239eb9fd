/// Configuration for [`HexDecoder`](super::HexDecoder).
///
/// The defaults are strict: every token must be a bare hex byte and only a
/// single trailing comma is tolerated.
///
/// # Examples
///
/// ```rust
/// use pktutil::{DecoderOptions, HexDecoder};
///
/// let decoder = HexDecoder::new(DecoderOptions {
///     allow_whitespace: true,
///     ..Default::default()
/// });
/// let mut buf = [0u8; 4];
/// let decoded = decoder.decode_into("de, ad, be, ef", &mut buf).unwrap();
/// assert_eq!(decoded.count(), 4);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Whether to trim ASCII whitespace around each token.
    ///
    /// When `false`, `"aa, bb"` is rejected because `" bb"` is not a hex
    /// number.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_whitespace: bool,

    /// Whether to skip empty tokens such as the middle one in `"aa,,bb"`.
    ///
    /// When `false`, an empty token is malformed input. A single trailing
    /// comma is accepted either way.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_empty_tokens: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on malformed input instead of returning the error.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces.
    pub panic_on_error: bool,
}
