// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use unicode_segmentation::UnicodeSegmentation;

use crate::{FontMetrics, TextMeasure};

/// Returns the longest prefix of `label` whose advance is `<= available`.
///
/// Candidate prefixes end on extended grapheme cluster boundaries, so a
/// cluster such as an emoji sequence or a base letter with combining marks is
/// never split. The scan stops at the first cluster that overflows, which
/// yields the longest fitting prefix for any measure whose advances grow
/// with the string.
///
/// Returns an empty string when `available` is zero, negative, or NaN.
#[must_use]
pub fn fit_prefix<'a, M: TextMeasure + ?Sized>(
    label: &'a str,
    available: f64,
    measure: &M,
) -> &'a str {
    if available.is_nan() || available <= 0.0 {
        return "";
    }
    let mut fitted = 0;
    for (offset, cluster) in label.grapheme_indices(true) {
        let end = offset + cluster.len();
        if measure.advance(&label[..end]) > available {
            break;
        }
        fitted = end;
    }
    &label[..fitted]
}

/// Returns the baseline that vertically centres a line on `center_y`.
///
/// This is `center_y - (descent + ascent) / 2` with a negative ascent.
#[must_use]
pub fn vertical_baseline(center_y: f64, metrics: FontMetrics) -> f64 {
    center_y - (metrics.descent + metrics.ascent) / 2.0
}

/// A [`TextMeasure`] bundled with the fitting helpers.
#[derive(Clone, Copy, Debug)]
pub struct TextFitter<M> {
    measure: M,
}

impl<M: TextMeasure> TextFitter<M> {
    /// Creates a fitter over `measure`.
    #[must_use]
    pub fn new(measure: M) -> Self {
        Self { measure }
    }

    /// Returns the wrapped measure.
    #[must_use]
    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Returns the advance of `text`.
    #[must_use]
    pub fn advance(&self, text: &str) -> f64 {
        self.measure.advance(text)
    }

    /// See [`fit_prefix`].
    #[must_use]
    pub fn fit<'a>(&self, label: &'a str, available: f64) -> &'a str {
        fit_prefix(label, available, &self.measure)
    }

    /// See [`vertical_baseline`].
    #[must_use]
    pub fn vertical_baseline(&self, center_y: f64) -> f64 {
        vertical_baseline(center_y, self.measure.metrics())
    }
}
