#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use pktutil::{DecodeError, DecoderOptions, HexDecoder, Silent, argv_create};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

const HEADER: usize = 2; // 1 flag + 1 capacity

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Separator spellings; the odd ones only decode with lenient options.
static SEPARATORS: &[&[u8]] = &[b",", b",", b",", b", ", b",,", b" ,"];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Every tenth run, replace the input with a synthesized, mostly well-formed
/// hex list so the fuzzer spends time past the first token.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        if max_size < HEADER {
            return fuzzer_mutate(data, size, max_size);
        }
        data[0] = with_rng(|rng| rng.random::<u8>() & 0x03);
        data[1] = with_rng(|rng| rng.random());

        let mut written = HEADER;
        while written < max_size {
            let before = written;
            written += append_token(&mut data[written..max_size]);
            written += append_separator(&mut data[written..max_size]);
            if written == before || with_rng(|rng| rng.random_ratio(1, 64)) {
                break;
            }
        }
        written
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one hex token in a random spelling. Returns the number of bytes
/// written, which is zero when the token does not fit.
fn append_token(buf: &mut [u8]) -> usize {
    let token = with_rng(|rng| {
        let value: u16 = if rng.random_ratio(1, 16) {
            rng.random()
        } else {
            u16::from(rng.random::<u8>())
        };
        match rng.random_range(0..4) {
            0 => format!("{value:x}"),
            1 => format!("{value:02X}"),
            2 => format!("0x{value:x}"),
            _ => format!("00{value:x}"),
        }
    });
    if token.len() > buf.len() {
        return 0;
    }
    buf[..token.len()].copy_from_slice(token.as_bytes());
    token.len()
}

fn append_separator(buf: &mut [u8]) -> usize {
    let sep = with_rng(|rng| SEPARATORS[rng.random_range(0..SEPARATORS.len())]);
    if sep.len() > buf.len() {
        return 0;
    }
    buf[..sep.len()].copy_from_slice(sep);
    sep.len()
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    flags: u8,
    capacity: u8,
    description: &'a [u8],
}

fn decoder(data: &[u8]) {
    let Ok(input) = Input::arbitrary_take_rest(Unstructured::new(data)) else {
        return;
    };

    let decoder = HexDecoder::with_diagnostics(
        DecoderOptions {
            allow_whitespace: input.flags & 1 != 0,
            allow_empty_tokens: input.flags & 2 != 0,
            panic_on_error: false,
        },
        Silent,
    );
    let capacity = usize::from(input.capacity);
    let mut buf = vec![0xa5u8; capacity];

    match decoder.decode_into(input.description, &mut buf) {
        Ok(decoded) => {
            assert!(decoded.written() <= capacity);
            if decoded.is_truncated() {
                assert_eq!(decoded.written(), capacity);
                assert_eq!(decoded.count(), capacity + 1);
            } else {
                assert_eq!(decoded.count(), decoded.written());
            }
            assert!(buf[decoded.written()..].iter().all(|&b| b == 0));
        }
        Err(DecodeError::ZeroCapacity) => assert_eq!(capacity, 0),
        Err(DecodeError::InvalidToken { index, .. }) => {
            assert!(capacity > 0);
            assert!(index <= input.description.iter().filter(|&&b| b == b',').count());
        }
        Err(DecodeError::OutOfMemory(err)) => panic!("{err}"),
    }

    // The argv splitter shares the in-place shape; it must never panic either.
    let mut line = input.description.to_vec();
    let argv = argv_create(&mut line, capacity);
    assert!(argv.len() < capacity.max(1));
}

fuzz_target!(|data: &[u8]| decoder(data));
