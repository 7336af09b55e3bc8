use std::time::Instant;
use std::hint::black_box;

use crate::config::{ModemConfig, SidebandType};
use crate::core::StreamChain;
use crate::demodulate::AmDemod;
use crate::modulate::AmMod;
use crate::util::tone;

// --- small helpers ------------------------------------------------------

fn minsps_from_env(default_msps: f32) -> f32 {
    std::env::var("AM_MODEM_THROUGHPUT_MINSPS")
        .ok()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(default_msps)
}

/// Run `repeats` passes, return (msamples/sec, elapsed_secs).
fn measure_throughput(mut f: impl FnMut() -> usize, samples_per_pass: usize, repeats: usize) -> (f32, f64) {
    let start = Instant::now();
    let mut sink = 0.0f64;
    for _ in 0..repeats {
        let n = f();
        sink = black_box(sink + (n as f64) * 1e-12);
    }
    let dt = start.elapsed().as_secs_f64();
    let total_samples = samples_per_pass as f64 * repeats as f64;
    let msps = (total_samples / dt) / 1.0e6;
    black_box(sink);
    (msps as f32, dt)
}

fn roundtrip_throughput(label: &str, cfg: ModemConfig, default_msps: f32) {
    let n = 65_536;
    let repeats = 10;

    let audio = tone(0.125, n, 0.5);
    let mut tx = StreamChain::new(AmMod::new(cfg).unwrap());
    let mut rx = StreamChain::new(AmDemod::new(cfg).unwrap());

    let (msps, dt) = measure_throughput(
        || {
            let iq = tx.process_ref(&audio);
            let out = rx.process(iq);
            out.len()
        },
        n,
        repeats,
    );

    println!("[{label}] {:.2} Msps in {:.3}s", msps, dt);
    let min_msps = minsps_from_env(default_msps);
    assert!(msps >= min_msps, "{label} throughput {:.2} Msps < min {:.2} Msps", msps, min_msps);
}

// --- DSB ----------------------------------------------------------------

#[test]
fn throughput_dsb_envelope_roundtrip() {
    roundtrip_throughput("DSB", ModemConfig::new(0.5, SidebandType::Dsb, false), 0.2);
}

#[test]
fn throughput_dsb_costas_roundtrip() {
    roundtrip_throughput("DSB-SC", ModemConfig::new(0.5, SidebandType::Dsb, true), 0.1);
}

// --- SSB: three quadrature filters per round trip ------------------------

#[test]
fn throughput_usb_roundtrip() {
    roundtrip_throughput("USB", ModemConfig::new(0.5, SidebandType::Usb, false), 0.05);
}

#[test]
fn throughput_lsb_suppressed_roundtrip() {
    roundtrip_throughput("LSB-SC", ModemConfig::new(0.5, SidebandType::Lsb, true), 0.05);
}
