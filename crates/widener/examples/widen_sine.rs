//! Example: Widen a synthetic stereo signal and report mid/side levels
//!
//! Usage: cargo run --example widen_sine [config.toml]
//!
//! Reads `[stereo_widener]` settings from the given TOML file (defaults to
//! enabled at 100% when no file is given) and prints how each pipeline stage
//! changes the stereo image.

use anyhow::Result;
use std::f32::consts::PI;
use stereo_widener::*;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Stereo Widener Demo ===\n");

    let plugin = match std::env::args().nth(1) {
        Some(path) => {
            let store = TomlFileStore::new(path);
            println!("Loading settings from {}", store.path().display());
            WidenerPlugin::from_store(&store)?
        }
        None => {
            let store = MemoryStore::new(WidenerSettings::new(true, 100.0));
            WidenerPlugin::from_store(&store)?
        }
    };

    println!("  Enabled: {}", plugin.is_enabled());
    println!("  Width: {}%", plugin.width());
    println!("  Gains: {:?}\n", plugin.widener().gains());

    // One second of 440 Hz with the right channel lagging
    let sample_rate = 48000;
    let mut float_block = Vec::with_capacity(sample_rate * 2);
    for i in 0..sample_rate {
        let phase = 2.0 * PI * 440.0 * i as f32 / sample_rate as f32;
        float_block.push(phase.sin() * 0.5);
        float_block.push((phase + 0.8).sin() * 0.5);
    }

    let mut pcm_block = Vec::new();
    f32_to_s16(&float_block, &mut pcm_block);

    report("Input", &float_block);

    plugin.process_block(&mut float_block, sample_rate, 2);
    report(&format!("{:?} stage", f32::FORMAT), &float_block);

    plugin.process_block(&mut pcm_block, sample_rate, 2);
    let mut decoded = Vec::new();
    s16_to_f32(&pcm_block, &mut decoded);
    report(&format!("{:?} stage", i16::FORMAT), &decoded);

    Ok(())
}

fn report(label: &str, samples: &[f32]) {
    let block = AudioBlock::new(samples, 2);
    let (mid, side) = mid_side_rms_dbfs(block);
    println!(
        "{:<10} peak {:>7.2} dBFS | mid {:>7.2} dBFS | side {:>7.2} dBFS",
        label,
        calculate_peak_dbfs(block),
        mid,
        side
    );
}
