use std::env;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use window_sink::{SinkOptions, WindowHandle, WindowSinkError, sink_window};

const EXIT_USAGE: u8 = 1;
const EXIT_INVALID_HANDLE: u8 = 2;
const EXIT_SET_WINDOW_POS: u8 = 3;

fn main() -> ExitCode {
    // Silent unless RUST_LOG opts in; diagnostics share stderr with the
    // contractual failure messages.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "off".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = env::args().skip(1);
    let mut clear_topmost = false;
    let handle_text = loop {
        match args.next() {
            Some(arg) if arg == "--clear-topmost" => clear_topmost = true,
            Some(arg) => break arg,
            None => {
                eprintln!("usage: send-to-bottom [--clear-topmost] <hwnd in hex>");
                return ExitCode::from(EXIT_USAGE);
            }
        }
    };

    // Malformed hex is not rejected here: it resolves to the null handle
    // and fails the liveness check below, same as an explicit "0".
    let handle = WindowHandle::from_hex(&handle_text);
    debug!("resolved {handle_text:?} to {handle}, clear_topmost={clear_topmost}");

    let options = SinkOptions::builder().clear_topmost(clear_topmost).build();
    match sink_window(handle, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ WindowSinkError::InvalidHandle) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_INVALID_HANDLE)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_SET_WINDOW_POS)
        }
    }
}
