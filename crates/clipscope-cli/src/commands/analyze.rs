//! Harmonic and residual analysis command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use crate::commands::common::{SignalArgs, format_db, load_config};
use clap::Args;
use clipscope_analysis::{ShaperReport, SpectrumEntry, analyze_shapers, rms_db, thd_db};
use serde::Serialize;
use std::path::Path;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Shaper to analyze (repeatable, defaults to the configured selection)
    #[arg(short, long = "shaper", value_name = "KEY")]
    shapers: Vec<String>,

    #[command(flatten)]
    signal: SignalArgs,

    /// Harmonics to report, DC included
    #[arg(long)]
    harmonics: Option<usize>,

    /// Emit JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    sample_count: usize,
    cycles: u32,
    drive: f32,
    knee: f32,
    shapers: Vec<ShaperOutput<'a>>,
}

#[derive(Serialize)]
struct ShaperOutput<'a> {
    key: &'static str,
    name: &'static str,
    residual_rms: f32,
    residual_rms_db: f32,
    residual_peak: f32,
    thd: f32,
    thd_db: f32,
    harmonics: &'a [SpectrumEntry],
}

impl<'a> From<&'a ShaperReport> for ShaperOutput<'a> {
    fn from(report: &'a ShaperReport) -> Self {
        Self {
            key: report.kind.key(),
            name: report.kind.name(),
            residual_rms: report.residual_rms,
            residual_rms_db: rms_db(&report.residual),
            residual_peak: report.residual_peak,
            thd: report.thd,
            thd_db: thd_db(&report.spectrum),
            harmonics: &report.spectrum,
        }
    }
}

pub fn run(args: AnalyzeArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    args.signal.apply(&mut config);
    if !args.shapers.is_empty() {
        config.shapers = args.shapers;
    }
    if let Some(harmonics) = args.harmonics {
        config.harmonics = harmonics;
    }
    config.validate()?;

    let kinds = config.shaper_kinds()?;
    tracing::debug!(count = kinds.len(), drive = config.drive, knee = config.knee, "analyzing");
    let reports = analyze_shapers(kinds, &config.signal_config(), &config.analyzer())?;

    if args.json {
        let output = AnalysisOutput {
            sample_count: config.sample_count,
            cycles: config.cycles,
            drive: config.drive,
            knee: config.knee,
            shapers: reports.iter().map(ShaperOutput::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} samples, {} cycles, drive {:.2}, knee {:.2}",
        config.sample_count, config.cycles, config.drive, config.knee
    );

    for report in &reports {
        println!();
        println!("{} ({})", report.kind.name(), report.kind.key());
        println!("  {:>4}  {:>10}  {:>8}", "h", "Magnitude", "dB");
        println!("  {:>4}  {:>10}  {:>8}", "--", "---------", "--");
        for entry in &report.spectrum {
            println!(
                "  {:>4}  {:>10.6}  {}",
                entry.harmonic,
                entry.magnitude,
                format_db(entry.db, entry.is_significant())
            );
        }
        println!(
            "  Residual RMS: {:.6} ({:.1} dB)",
            report.residual_rms,
            rms_db(&report.residual)
        );
        println!("  Residual peak: {:.6}", report.residual_peak);
        println!(
            "  THD: {:.4}% ({:.1} dB)",
            report.thd * 100.0,
            thd_db(&report.spectrum)
        );
    }

    Ok(())
}
