#![allow(missing_docs)]
#![allow(dead_code)]

use core::fmt::Write;

use pktutil::{DecoderOptions, HexDecoder, Silent};

/// Ethernet II header: broadcast destination, a locally administered source,
/// IPv4 ethertype.
pub const ETHERNET_HEADER: &str = "ff,ff,ff,ff,ff,ff,02,00,5e,10,00,01,08,00";

/// Decode every `(description, capacity)` pair and render one line per case.
pub fn render_cases(options: DecoderOptions, cases: &[(&str, usize)]) -> String {
    let decoder = HexDecoder::with_diagnostics(options, Silent);
    let mut out = String::new();
    for &(description, capacity) in cases {
        let mut buf = vec![0u8; capacity];
        match decoder.decode_into(description, &mut buf) {
            Ok(decoded) => writeln!(
                out,
                "{description:?} cap={capacity} -> count={} status={:?} bytes={:02x?}",
                decoded.count(),
                decoded.status(),
                &buf[..decoded.written()]
            )
            .unwrap(),
            Err(err) => writeln!(out, "{description:?} cap={capacity} -> error: {err}").unwrap(),
        }
    }
    out
}
