//! DotDecoder TUI entry point.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use dotdecoder_app::{App, GestureConfig, Runtime};
use dotdecoder_core::Dictionary;
use dotdecoder_tui::TerminalDriver;
use tracing_subscriber::EnvFilter;

/// DotDecoder terminal UI
#[derive(Parser, Debug)]
#[command(name = "dotdecoder-tui")]
#[command(about = "Terminal UI for the bit-vector / BIP-39 word decoder")]
#[command(version)]
struct Args {
    /// Path to the wordlist file (2048 words, one per line, in standard
    /// order - word number = line number)
    #[arg(short, long)]
    wordlist: PathBuf,

    /// Mouse-after-touch suppression window in milliseconds
    #[arg(long, default_value_t = 600)]
    mouse_suppression_ms: u64,

    /// Event poll timeout in milliseconds
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let text = std::fs::read_to_string(&args.wordlist)?;
    let dictionary = Dictionary::parse(&text)?;

    let config = GestureConfig {
        mouse_suppression_window: Duration::from_millis(args.mouse_suppression_ms),
    };
    let app = App::with_config(dictionary, config);
    let driver = TerminalDriver::new(Duration::from_millis(args.tick_ms))?;

    Ok(Runtime::new(driver, app).run()?)
}
