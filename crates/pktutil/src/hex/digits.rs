const INVALID: u8 = 0xff;

/// Maps an ASCII byte to its hex digit value, or `INVALID`.
const HEX_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i: u8 = 0;
    loop {
        table[i as usize] = match i {
            b'0'..=b'9' => i - b'0',
            b'a'..=b'f' => i - b'a' + 10,
            b'A'..=b'F' => i - b'A' + 10,
            _ => INVALID,
        };
        if i == u8::MAX {
            break table;
        }
        i += 1;
    }
};

/// Parse one token as a single byte.
///
/// Accepts an optional `0x`/`0X` prefix followed by at least one hex digit.
/// Leading zeros are fine (`"00ff"` is `0xff`); anything that does not fit in
/// a byte is rejected.
pub(crate) fn parse_byte(token: &[u8]) -> Option<u8> {
    let digits = match token {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => token,
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: u8 = 0;
    for &c in digits {
        let nibble = HEX_TABLE[usize::from(c)];
        if nibble == INVALID {
            return None;
        }
        value = value.checked_mul(16)?.checked_add(nibble)?;
    }
    Some(value)
}
