//! Decode keyboard protocol sequences given on the command line.
//!
//! Each argument is a CSI payload plus trailer, written without the
//! `ESC [` introducer so it survives shell quoting:
//!
//! ```bash
//! cargo run --example keydump -p vtkitty -- "97;5u" "1;2B" "2~"
//! ```
//!
//! For every sequence the decoded event, its canonical re-encoding and
//! the window-system form are printed. Set `RUST_LOG=debug` for decode
//! tracing.

use vtkitty::{decode_key_event, encode_key_event};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: keydump <payload+trailer>...   e.g. keydump \"97;5u\" \"1;2B\"");
        std::process::exit(2);
    }

    for arg in &args {
        let Some(trailer) = arg.chars().next_back() else {
            tracing::warn!("empty argument skipped");
            continue;
        };
        let payload = &arg[..arg.len() - trailer.len_utf8()];
        tracing::debug!(payload, %trailer, "decoding");

        match decode_key_event(payload, trailer) {
            Ok(event) => {
                let canonical = encode_key_event(&event);
                let window = event.as_window_system_event();
                println!(
                    "CSI {arg}: key={:?} mods=[{}] kind={:?} text={:?}",
                    event.key, event.mods, event.kind, event.text
                );
                println!("  canonical: {}", canonical.escape_debug());
                println!(
                    "  window system: key={} mods={:#x} action={}",
                    window.key, window.mods, window.action
                );
            }
            Err(err) => {
                tracing::error!(%err, sequence = %arg, "decode failed");
            }
        }
    }
}
