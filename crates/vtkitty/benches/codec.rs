//! Codec profiling program.
//!
//! Feeds representative wire payloads through the decoder, canonical
//! events through the encoder, and shortcut specs through the parser,
//! and reports per-operation timings for each workload.

use std::hint::black_box;
use std::time::{Duration, Instant};

use vtkitty::{
    KeyEvent, KeyModifiers, ShortcutParser, decode_key_event, encode_key_event,
};

const ITERATIONS: usize = 200_000;

fn time<F: FnMut()>(mut op: F) -> Duration {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        op();
    }
    start.elapsed()
}

fn report(name: &str, ops_per_iteration: usize, elapsed: Duration) {
    let total_ops = ITERATIONS * ops_per_iteration;
    let nanos_per_op = elapsed.as_nanos() / total_ops as u128;
    println!("{name:<24} {total_ops:>10} ops in {elapsed:>10.2?} ({nanos_per_op} ns/op)");
}

fn bench_decode() {
    let payloads: &[(&str, char)] = &[
        ("97", 'u'),
        ("", 'A'),
        ("1;6", 'H'),
        ("2;5", '~'),
        ("97:65:113;2:2;65", 'u'),
        ("57399;9", 'u'),
    ];
    let elapsed = time(|| {
        for &(payload, trailer) in payloads {
            black_box(decode_key_event(black_box(payload), trailer).ok());
        }
    });
    report("decode", payloads.len(), elapsed);
}

fn bench_encode() {
    let events = [
        KeyEvent::new("a"),
        KeyEvent::enter(),
        KeyEvent::new("F1"),
        KeyEvent {
            mods: KeyModifiers::CTRL,
            ..KeyEvent::new("INSERT")
        },
        KeyEvent {
            mods: KeyModifiers::SHIFT,
            shifted_key: "A".into(),
            text: "A".into(),
            ..KeyEvent::new("a")
        },
    ];
    let elapsed = time(|| {
        for event in &events {
            black_box(encode_key_event(black_box(event)));
        }
    });
    report("encode", events.len(), elapsed);
}

fn bench_shortcut_parse() {
    let parser = ShortcutParser::default();
    let specs = ["ctrl+shift+a", "cmd++", "alt+enter", "f12"];

    let elapsed = time(|| {
        for spec in specs {
            black_box(parser.parse(black_box(spec)));
        }
    });
    report("shortcut (cached)", specs.len(), elapsed);

    let elapsed = time(|| {
        for spec in specs {
            let cold = ShortcutParser::default();
            black_box(cold.parse(black_box(spec)));
        }
    });
    report("shortcut (uncached)", specs.len(), elapsed);
}

fn main() {
    println!("vtkitty codec benchmarks ({ITERATIONS} iterations per workload)");
    bench_decode();
    bench_encode();
    bench_shortcut_parse();
}
