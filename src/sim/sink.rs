//! Snapshot sinks: where a running simulation hands each generation for display.

use crate::space::lattice::Lattice;

/// Receives every observed generation, starting with generation 0.
pub trait LatticeSink {
    fn record(&mut self, generation: usize, lattice: &Lattice);
}

/// Discards all snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LatticeSink for NullSink {
    #[inline]
    fn record(&mut self, _generation: usize, _lattice: &Lattice) {}
}

impl<F: FnMut(usize, &Lattice)> LatticeSink for F {
    #[inline]
    fn record(&mut self, generation: usize, lattice: &Lattice) {
        self(generation, lattice)
    }
}

/// Keeps every `stride`-th snapshot, optionally downscaled, as animation frames.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    stride: usize,
    display_size: Option<usize>,
    frames: Vec<(usize, Lattice)>,
}

impl FrameRecorder {
    /// `stride == 0` is treated as 1.
    pub fn new(stride: usize) -> Self {
        Self { stride: stride.max(1), display_size: None, frames: Vec::new() }
    }

    /// Downscale kept frames to `side × side` (see [`Lattice::rescale`]).
    pub fn with_display_size(mut self, side: usize) -> Self {
        self.display_size = Some(side);
        self
    }

    pub fn frames(&self) -> &[(usize, Lattice)] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<(usize, Lattice)> {
        self.frames
    }
}

impl LatticeSink for FrameRecorder {
    fn record(&mut self, generation: usize, lattice: &Lattice) {
        if generation % self.stride != 0 {
            return;
        }
        let frame = match self.display_size {
            Some(side) => lattice.rescale(side),
            None => lattice.clone(),
        };
        self.frames.push((generation, frame));
    }
}
