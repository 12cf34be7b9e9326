//! Integration tests for clipscope-analysis.
//!
//! Drives catalog shapers through the generator and checks the harmonic
//! structure the analyzers report against known properties of odd curves.

use clipscope_analysis::{
    AnalysisError, HarmonicAnalyzer, analyze_shapers, dft_bin, residual, rms, spectrum,
};
use clipscope_core::{ShaperCatalog, ShaperKind, SignalConfig, generate, reference};
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn shaped(key: &str, drive: f32, knee: f32) -> Vec<f32> {
    let config = SignalConfig::default()
        .with_sample_count(1024)
        .with_cycles(6.0)
        .with_drive(drive)
        .with_knee(knee);
    ShaperCatalog::new()
        .generate(key, &config)
        .unwrap()
        .into_vec()
}

// ===========================================================================
// 1. Harmonic structure
// ===========================================================================

#[test]
fn clean_shaper_puts_everything_on_the_fundamental() {
    for drive in [0.5, 1.0, 3.0, 6.0] {
        let entries = spectrum(&shaped("clean", drive, 0.0), 16);
        assert_eq!(entries.len(), 17);
        assert!((entries[1].magnitude - drive).abs() < 1e-4 * drive);
        for entry in entries.iter().filter(|e| e.harmonic != 1) {
            assert!(
                !entry.is_significant(),
                "drive {drive}: harmonic {} = {}",
                entry.harmonic,
                entry.magnitude
            );
        }
    }
}

#[test]
fn hard_clip_adds_odd_harmonics_only() {
    let entries = spectrum(&shaped("hard", 3.0, 0.0), 16);

    assert!(entries[3].is_significant(), "h3 = {}", entries[3].magnitude);
    assert!(entries[5].is_significant(), "h5 = {}", entries[5].magnitude);
    assert!((entries[3].magnitude - 0.3557).abs() < 1e-3);
    assert!((entries[5].magnitude - 0.1502).abs() < 1e-3);

    assert!(!entries[2].is_significant(), "h2 = {}", entries[2].magnitude);
    assert_eq!(entries[2].db, 0.0);
}

#[test]
fn every_shaper_cancels_even_harmonics() {
    for kind in ShaperKind::ALL {
        for (drive, knee) in [(1.0, 0.0), (3.0, 0.0), (3.0, 0.5), (6.0, 0.9), (6.0, 1.0)] {
            let entries = spectrum(&shaped(kind.key(), drive, knee), 16);
            for entry in entries.iter().filter(|e| e.harmonic % 2 == 0) {
                assert!(
                    !entry.is_significant(),
                    "{kind} drive={drive} knee={knee}: harmonic {} = {}",
                    entry.harmonic,
                    entry.magnitude
                );
            }
        }
    }
}

#[test]
fn tanh_at_unity_drive_is_dominated_by_fundamental() {
    let entries = spectrum(&shaped("softTanh", 1.0, 0.0), 16);
    let fundamental = entries[1].magnitude;
    assert!((fundamental - 0.8117).abs() < 1e-3);

    // every other harmonic sits at least 20 dB under the fundamental
    for entry in entries.iter().filter(|e| e.harmonic != 1) {
        assert!(
            entry.magnitude < 0.1 * fundamental,
            "harmonic {} = {}",
            entry.harmonic,
            entry.magnitude
        );
    }
    assert!(entries[3].db < -20.0 && entries[3].db > -30.0);
}

#[test]
fn cubic_at_unity_drive_is_a_pure_third() {
    // x - x³/3 on a unit sine: 3/4 fundamental, 1/12 third, nothing above
    let entries = spectrum(&shaped("softCubic", 1.0, 0.0), 16);
    assert!((entries[1].magnitude - 0.75).abs() < 1e-4);
    assert!((entries[3].magnitude - 1.0 / 12.0).abs() < 1e-4);
    for entry in entries.iter().filter(|e| e.harmonic > 3) {
        assert!(!entry.is_significant(), "harmonic {}", entry.harmonic);
    }
}

#[test]
fn knee_keeps_more_fundamental() {
    // the linear region passes more of the sine before the curve bends
    let bare = spectrum(&shaped("softAtan", 3.0, 0.0), 16);
    let kneed = spectrum(&shaped("softAtan", 3.0, 0.5), 16);
    assert!((bare[1].magnitude - 1.0314).abs() < 1e-3);
    assert!((kneed[1].magnitude - 1.1765).abs() < 1e-3);
}

// ===========================================================================
// 2. DFT cross-check
// ===========================================================================

#[test]
fn direct_dft_matches_fft() {
    let signal = shaped("softTanh", 4.0, 0.2);
    let n = signal.len();

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x as f64, 0.0)).collect();
    FftPlanner::<f64>::new().plan_fft_forward(n).process(&mut buffer);

    for k in (0..n / 2).step_by(6) {
        let direct = dft_bin(&signal, k);
        assert!(
            (direct - buffer[k]).norm() < 1e-6,
            "bin {k}: direct {direct} fft {}",
            buffer[k]
        );
    }
}

#[test]
fn custom_fundamental_bin() {
    let config = SignalConfig::default()
        .with_sample_count(2048)
        .with_cycles(10.0)
        .with_drive(3.0);
    let wave = generate(ShaperKind::Hard, &config).unwrap();
    let entries = HarmonicAnalyzer::new(10, 8).analyze(&wave);
    assert_eq!(entries.len(), 9);
    assert!(entries[1].magnitude > 1.0);
    assert!(entries[3].is_significant());
    assert!(!entries[4].is_significant());
}

// ===========================================================================
// 3. Residual
// ===========================================================================

#[test]
fn residual_is_reference_minus_shaped() {
    let config = SignalConfig::default().with_drive(2.0);
    let dry = reference(&config).unwrap();
    let wet = generate(ShaperKind::Hard, &config).unwrap();
    let diff = residual(&wet, &dry).unwrap();

    for i in 0..dry.len() {
        assert_eq!(diff[i], dry[i] - wet[i]);
    }
    // hard clip only removes the peaks
    assert!(rms(&diff) > 0.0);
    assert!(rms(&diff) < rms(&dry));
}

#[test]
fn residual_rejects_mismatched_windows() {
    let long = reference(&SignalConfig::default()).unwrap();
    let short = reference(&SignalConfig::default().with_sample_count(512)).unwrap();
    assert_eq!(
        residual(&long, &short).unwrap_err(),
        AnalysisError::LengthMismatch {
            shaped: 1024,
            reference: 512
        }
    );
}

#[test]
fn empty_window_is_degenerate_not_an_error() {
    let config = SignalConfig::default().with_sample_count(0);
    let reports = analyze_shapers(ShaperKind::ALL, &config, &HarmonicAnalyzer::default()).unwrap();
    for report in reports {
        assert!(report.shaped.is_empty());
        assert!(report.spectrum.is_empty());
        assert_eq!(report.residual_rms, 0.0);
        assert_eq!(report.thd, 0.0);
    }
}
