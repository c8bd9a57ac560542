// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached rasterization of task shapes.
//!
//! Instead of issuing one fill per task on every frame, a host can render all
//! on-screen [`TaskShape`]s into an offscreen buffer once per layout revision
//! and blit that buffer per frame. [`RasterCache`] tracks which
//! [`LayoutSnapshot`] the buffer belongs to and asks a host-supplied
//! [`ShapeRasterizer`] for a new one whenever it is handed a different
//! snapshot.

use alloc::sync::{Arc, Weak};

use kurbo::Size;

use crate::{LayoutSnapshot, TaskShape};

/// Renders task shapes into a host-owned raster.
pub trait ShapeRasterizer {
    /// Offscreen buffer type, for example a bitmap or a GPU texture.
    type Raster;

    /// Renders `shapes`, each body filled with its notch cleared, into a new
    /// raster of `size`.
    fn rasterize(&mut self, size: Size, shapes: &[TaskShape]) -> Self::Raster;
}

/// Raster of task shapes keyed by snapshot identity.
///
/// Revisions are only ordered within one [`GanttChart`](crate::GanttChart),
/// so the cache compares snapshot allocations instead. The weak reference
/// keeps the allocation from being reused while the entry exists.
#[derive(Debug)]
pub struct RasterCache<R> {
    entry: Option<(Weak<LayoutSnapshot>, R)>,
}

impl<R> Default for RasterCache<R> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<R> RasterCache<R> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raster for `snapshot`, rasterizing if the cache holds
    /// another snapshot's raster or none.
    ///
    /// Returns `None` without rasterizing when the snapshot's viewport has
    /// no area.
    pub fn get_or_rasterize<Z>(
        &mut self,
        snapshot: &Arc<LayoutSnapshot>,
        rasterizer: &mut Z,
    ) -> Option<&R>
    where
        Z: ShapeRasterizer<Raster = R>,
    {
        let viewport = snapshot.viewport();
        if viewport.is_empty() {
            self.entry = None;
            return None;
        }
        if !self.is_valid_for(snapshot) {
            let shapes = snapshot.task_shapes();
            log::debug!(
                "rasterizing {} task shapes at {}x{} for revision {}",
                shapes.len(),
                viewport.width,
                viewport.height,
                snapshot.revision(),
            );
            let raster = rasterizer.rasterize(viewport.size(), &shapes);
            self.entry = Some((Arc::downgrade(snapshot), raster));
        }
        self.entry.as_ref().map(|(_, raster)| raster)
    }

    /// Returns `true` if the cached raster was built for this very `snapshot`.
    #[must_use]
    pub fn is_valid_for(&self, snapshot: &Arc<LayoutSnapshot>) -> bool {
        match &self.entry {
            Some((owner, _)) => core::ptr::eq(owner.as_ptr(), Arc::as_ptr(snapshot)),
            None => false,
        }
    }

    /// Returns the cached raster regardless of which snapshot it belongs to.
    #[must_use]
    pub fn cached(&self) -> Option<&R> {
        self.entry.as_ref().map(|(_, raster)| raster)
    }

    /// Drops the cached raster.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
