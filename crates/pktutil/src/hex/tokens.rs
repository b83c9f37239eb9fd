//! In-place tokenizer over a private copy of the hex description.
//!
//! The description is duplicated into a [`GuardedBuf`] and each separator is
//! overwritten with NUL as it is consumed, so the caller's string is never
//! touched. The copy is released when the stream is dropped.

use crate::{error::AllocError, guarded::GuardedBuf};

const SEPARATOR: u8 = b',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub bytes: &'a [u8],
    /// Zero-based position of the token in the description.
    pub index: usize,
    /// No separator follows this token.
    pub last: bool,
}

#[derive(Debug)]
pub(crate) struct TokenStream {
    /// Description followed by its NUL terminator.
    text: GuardedBuf,
    cursor: usize,
    index: usize,
    done: bool,
}

impl TokenStream {
    #[track_caller]
    pub fn new(description: &[u8]) -> Result<Self, AllocError> {
        Ok(Self {
            text: GuardedBuf::try_duplicate(description)?,
            cursor: 0,
            index: 0,
            done: false,
        })
    }

    /// Yield the next token, or `None` once the description is exhausted.
    ///
    /// Empty tokens are returned as such, except for the empty remainder after
    /// a final separator: `"aa,"` yields only `"aa"`.
    pub fn next_token(&mut self) -> Option<Token<'_>> {
        if self.done {
            return None;
        }

        let end = self.text.len() - 1;
        let start = self.cursor;
        let stop = if let Some(pos) = self.text[start..end].iter().position(|&b| b == SEPARATOR) {
            let at = start + pos;
            self.text[at] = 0;
            self.cursor = at + 1;
            at
        } else {
            self.done = true;
            if start == end && self.index > 0 {
                return None;
            }
            end
        };

        let index = self.index;
        self.index += 1;
        Some(Token {
            bytes: &self.text[start..stop],
            index,
            last: self.done,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn collect(description: &str) -> Vec<Vec<u8>> {
        let mut stream = TokenStream::new(description.as_bytes()).unwrap();
        let mut out = Vec::new();
        while let Some(token) = stream.next_token() {
            assert_eq!(token.index, out.len());
            out.push(token.bytes.to_vec());
        }
        out
    }

    #[test]
    fn splits_in_order() {
        assert_eq!(collect("aa,bb,1,ff"), [&b"aa"[..], b"bb", b"1", b"ff"]);
    }

    #[test]
    fn single_token() {
        assert_eq!(collect("aa"), [b"aa"]);
    }

    #[test]
    fn trailing_separator_ends_the_list() {
        assert_eq!(collect("aa,bb,"), [b"aa", b"bb"]);
    }

    #[test]
    fn interior_and_leading_empties_are_reported() {
        assert_eq!(collect(",aa,,bb"), [&b""[..], b"aa", b"", b"bb"]);
        assert_eq!(collect("aa,,"), [&b"aa"[..], b""]);
    }

    #[test]
    fn empty_description_is_one_empty_token() {
        assert_eq!(collect(""), [b""]);
    }

    #[test]
    fn tokenizes_a_private_copy() {
        let description = "aa,bb";
        let mut stream = TokenStream::new(description.as_bytes()).unwrap();
        while stream.next_token().is_some() {}
        assert_eq!(stream.text.as_bytes(), b"aa\0bb\0");
        assert_eq!(description, "aa,bb");
    }

    #[test]
    fn only_the_final_token_is_marked_last() {
        let mut stream = TokenStream::new(b"aa,bb, ").unwrap();
        let mut last = Vec::new();
        while let Some(token) = stream.next_token() {
            last.push(token.last);
        }
        assert_eq!(last, [false, false, true]);
    }

    #[test]
    fn exhausted_stream_stays_exhausted() {
        let mut stream = TokenStream::new(b"aa").unwrap();
        assert!(stream.next_token().is_some());
        assert!(stream.next_token().is_none());
        assert!(stream.next_token().is_none());
    }
}
