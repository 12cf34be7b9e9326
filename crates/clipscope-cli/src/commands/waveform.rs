//! Waveform dump command.

use crate::commands::common::{SignalArgs, load_config};
use clap::Args;
use clipscope_analysis::residual;
use clipscope_core::{ShaperCatalog, reference};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Args)]
pub struct WaveformArgs {
    /// Shaper to render
    #[arg(short, long = "shaper", value_name = "KEY")]
    shaper: String,

    #[command(flatten)]
    signal: SignalArgs,

    /// Emit JSON instead of CSV
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct WaveformOutput<'a> {
    shaper: &'static str,
    reference: &'a [f32],
    shaped: &'a [f32],
    residual: &'a [f32],
}

pub fn run(args: WaveformArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    args.signal.apply(&mut config);
    config.shapers = vec![args.shaper.clone()];
    config.validate()?;

    let catalog = ShaperCatalog::new();
    let kind = catalog.kind(&args.shaper)?;
    let signal = config.signal_config();

    let dry = reference(&signal)?;
    let shaped = catalog.generate(kind.key(), &signal)?;
    let diff = residual(&shaped, &dry)?;

    if args.json {
        let output = WaveformOutput {
            shaper: kind.key(),
            reference: &dry,
            shaped: &shaped,
            residual: &diff,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    let mut csv = String::with_capacity(dry.len() * 40);
    csv.push_str("index,reference,shaped,residual\n");
    for (i, ((r, s), d)) in dry.iter().zip(shaped.iter()).zip(diff.iter()).enumerate() {
        writeln!(csv, "{},{:.6},{:.6},{:.6}", i, r, s, d)?;
    }
    print!("{}", csv);

    Ok(())
}
