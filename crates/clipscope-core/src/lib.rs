//! Clipscope Core - waveshaping curves and test-tone generation
//!
//! This crate holds the signal side of clipscope: a fixed family of
//! odd-symmetric clipping curves, a knee wrapper that gives every curve an
//! undistorted linear region, a catalog that names them, and a generator that
//! drives a sampled sine through any of them.
//!
//! # Building Blocks
//!
//! - [`ShaperKind`] - Tagged set of transfer functions (clean, hard, tanh, cubic, arctan, foldback)
//! - [`apply_knee`] - Knee blending for any pure curve
//! - [`ShaperCatalog`] - Registration-ordered descriptors (key, name, description)
//! - [`SignalConfig`] - Sample count, cycle count, drive and knee with documented defaults
//! - [`generate`] / [`generate_with`] / [`reference`] - Build a [`Waveform`]
//!
//! # Example
//!
//! ```rust
//! use clipscope_core::{ShaperCatalog, SignalConfig};
//!
//! let catalog = ShaperCatalog::new();
//! let config = SignalConfig::default().with_drive(3.0);
//! let shaped = catalog.generate("hard", &config).unwrap();
//!
//! assert_eq!(shaped.len(), 1024);
//! assert!(shaped.iter().all(|s| s.abs() <= 1.0));
//! ```
//!
//! # no_std Support
//!
//! Like the rest of the math here, the crate only needs `alloc` and `libm`.
//! Disable the default `std` feature to build without the standard library.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod catalog;
pub mod error;
pub mod math;
pub mod shaper;
pub mod waveform;

pub use catalog::{ShaperCatalog, ShaperDescriptor, ShaperInfo};
pub use error::CoreError;
pub use math::{linear_to_db, sign};
pub use shaper::{
    MAX_KNEE, ShaperKind, apply_knee, atan_soft_clip, clamp_knee, cubic_soft_clip, foldback,
    hard_clip, tanh_soft_clip,
};
pub use waveform::{
    DEFAULT_CYCLES, DEFAULT_DRIVE, DEFAULT_KNEE, DEFAULT_SAMPLE_COUNT, SignalConfig, Waveform,
    generate, generate_with, reference,
};
