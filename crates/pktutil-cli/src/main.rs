//! `pktutil`: decode layer-2 hex descriptions, split argument strings and
//! print throughput reports from the command line.
//!
//! Every library error is fatal here: it is logged with its call site and
//! the process exits with status 1.

use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{Level, debug};
use pktutil::{
    Counters, DecoderOptions, GuardedBuf, HexDecoder, LogDiagnostics, OrExit, Throughput,
    argv_create, layer4,
};

/// Largest frame a layer-4 lookup will decode.
const MAX_PACKET: usize = 65_535;

#[derive(Parser, Debug)]
#[command(name = "pktutil", version, about = "Packet tool helpers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Decode a comma-separated hex byte list such as a layer-2 header
    L2 {
        /// e.g. "ff,ff,ff,ff,ff,ff,02,00,5e,10,00,01,08,00"
        description: String,
        /// Size of the destination buffer in bytes
        #[arg(long, default_value_t = 1514)]
        capacity: usize,
        /// Trim whitespace around tokens
        #[arg(long)]
        allow_whitespace: bool,
        /// Skip empty tokens instead of rejecting them
        #[arg(long)]
        allow_empty: bool,
    },
    /// Split a command string into arguments, one per output line
    Argv {
        line: String,
        /// Size of the argv array, including its terminating slot
        #[arg(long, default_value_t = 64)]
        argc: usize,
    },
    /// Print the throughput report for the given totals
    Stats {
        #[arg(long)]
        bytes: u64,
        #[arg(long)]
        packets: u64,
        #[arg(long, default_value_t = 0)]
        failed: u64,
        #[arg(long)]
        elapsed_ms: u64,
    },
    /// Decode an IPv4 packet given as a hex list and print its layer-4 part
    Layer4 { description: String },
}

/// Decoder debug level implied by the log level.
fn debug_level(level: Option<Level>) -> u8 {
    match level {
        Some(Level::Trace) => u8::MAX,
        Some(Level::Debug) => 2,
        _ => 0,
    }
}

fn hex_line(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(command: Commands, diagnostics: LogDiagnostics) {
    match command {
        Commands::L2 {
            description,
            capacity,
            allow_whitespace,
            allow_empty,
        } => {
            let decoder = HexDecoder::with_diagnostics(
                DecoderOptions {
                    allow_whitespace,
                    allow_empty_tokens: allow_empty,
                    ..Default::default()
                },
                diagnostics,
            );
            let mut buf = GuardedBuf::allocate(capacity);
            let decoded = decoder
                .decode_into(&description, &mut buf)
                .or_exit_in("decode_into");
            debug!("{} tokens seen, {} bytes written", decoded.tokens_seen(), decoded.written());
            println!("{}", hex_line(&buf[..decoded.written()]));
        }
        Commands::Argv { line, argc } => {
            let mut line = line.into_bytes();
            for arg in argv_create(&mut line, argc) {
                println!("{arg}");
            }
        }
        Commands::Stats {
            bytes,
            packets,
            failed,
            elapsed_ms,
        } => {
            let counters = Counters {
                bytes_sent: bytes,
                packets_sent: packets,
                failed,
            };
            Throughput::new(counters, Duration::from_millis(elapsed_ms)).report(&diagnostics);
        }
        Commands::Layer4 { description } => {
            let decoder = HexDecoder::with_diagnostics(DecoderOptions::default(), diagnostics);
            let mut buf = GuardedBuf::allocate(MAX_PACKET);
            let decoded = decoder
                .decode_into(&description, &mut buf)
                .or_exit_in("decode_into");
            let packet = &buf[..decoded.written()];
            let payload = layer4(packet).or_exit_in("layer4");
            println!("offset {}", packet.len() - payload.len());
            println!("{}", hex_line(payload));
        }
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let diagnostics = LogDiagnostics::new(debug_level(cli.verbose.log_level()));
    run(cli.command, diagnostics);
}
