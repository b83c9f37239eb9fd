use alloc::vec::Vec;

use bstr::{BStr, ByteSlice};

/// C-locale `isspace`.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Split `line` into at most `argc - 1` whitespace-separated arguments, in
/// place.
///
/// Whitespace in front of each argument is overwritten with NUL, and a NUL is
/// written right after the last argument taken, so `line` ends up holding the
/// arguments as consecutive C strings. A NUL already present in `line` ends
/// the input. Text beyond the `argc - 1`th argument is ignored.
///
/// `argc` counts the terminating slot of a C `argv` array, hence the `- 1`.
///
/// ```rust
/// let mut line = *b"  fragment -t  3 ";
/// let argv = pktutil::argv_create(&mut line, 8);
/// assert_eq!(argv, ["fragment", "-t", "3"]);
/// ```
pub fn argv_create(line: &mut [u8], argc: usize) -> Vec<&BStr> {
    let max = argc.saturating_sub(1);
    let mut spans = Vec::new();
    let mut p = 0;

    while spans.len() < max {
        while p < line.len() && line[p] != 0 && is_space(line[p]) {
            line[p] = 0;
            p += 1;
        }
        if p == line.len() || line[p] == 0 {
            break;
        }

        let start = p;
        while p < line.len() && line[p] != 0 && !is_space(line[p]) {
            p += 1;
        }
        spans.push(start..p);
    }
    if p < line.len() {
        line[p] = 0;
    }

    let line: &[u8] = line;
    spans
        .into_iter()
        .map(move |span| line[span].as_bstr())
        .collect()
}
