// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_text_fit --heading-base-level=0

//! Understory Text Fit: fit single-line labels into a width.
//!
//! Given a width and a way to measure text, this crate answers two layout
//! questions that come up when drawing labels inside shapes:
//!
//! - how much of a label fits ([`fit_prefix`]), and
//! - where the baseline goes so the line is vertically centred
//!   ([`vertical_baseline`]).
//!
//! Measurement is delegated to the host through [`TextMeasure`]. A
//! [`MonospaceMeasure`] based on Unicode display widths is provided for
//! character-cell hosts and tests, and [`FnMeasure`] adapts a closure.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_text_fit::{FontMetrics, MonospaceMeasure, TextFitter};
//!
//! let fitter = TextFitter::new(MonospaceMeasure::new(8.0, FontMetrics::new(-10.0, 2.0)));
//!
//! assert_eq!(fitter.fit("Release planning", 60.0), "Release");
//! assert_eq!(fitter.fit("Release planning", 0.0), "");
//! assert_eq!(fitter.vertical_baseline(20.0), 24.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod measure;

pub use fit::{TextFitter, fit_prefix, vertical_baseline};
pub use measure::{FnMeasure, FontMetrics, MonospaceMeasure, TextMeasure};
