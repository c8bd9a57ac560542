// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Circle, Point, Rect, RoundedRect};

use crate::LayoutMetrics;

/// Drawable outline of a task: a rounded body with a notch on its left edge.
///
/// Hosts fill `body` and then clear `notch` from it (destination-out
/// compositing or an even-odd path).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaskShape {
    /// Rounded task body.
    pub body: RoundedRect,
    /// Circle centred on the middle of the left edge, removed from the body.
    pub notch: Circle,
}

impl TaskShape {
    /// Builds the shape for a task rectangle.
    #[must_use]
    pub fn new(rect: Rect, metrics: &LayoutMetrics) -> Self {
        Self {
            body: RoundedRect::from_rect(rect, metrics.corner_radius),
            notch: Circle::new(
                Point::new(rect.x0, rect.center().y),
                metrics.notch_radius(),
            ),
        }
    }
}

/// Where a task label goes inside its shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSlot {
    /// Left edge of the text, past the margin and the notch.
    pub origin_x: f64,
    /// Vertical centre of the task rectangle.
    pub center_y: f64,
    /// Width left for text. Zero or negative when nothing fits.
    pub available_width: f64,
}

impl LabelSlot {
    /// Computes the label slot for a task rectangle.
    #[must_use]
    pub fn new(rect: Rect, metrics: &LayoutMetrics) -> Self {
        let notch = metrics.notch_radius();
        let margin = metrics.text_horizontal_margin;
        Self {
            origin_x: rect.x0 + margin + notch,
            center_y: rect.center().y,
            available_width: rect.width() - margin * 2.0 - notch,
        }
    }
}
