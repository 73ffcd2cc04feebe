//! Progress observation for rasterisation runs.

use std::{num::NonZeroU64, time::Instant};

/// Default number of work units between progress updates.
pub const DEFAULT_INTERVAL: NonZeroU64 = NonZeroU64::new(10_000).unwrap();

/// Receives progress updates from the rasteriser.
///
/// Updates are delivered inline from the render loop and have no effect on
/// the produced buffer.
pub trait Progress {
    /// `done` of `total` units are complete.
    fn update(&mut self, done: u64, total: u64, at: Instant);

    /// All `total` units are complete.
    fn finish(&mut self, _total: u64, _at: Instant) {}
}

/// A progress sink that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _done: u64, _total: u64, _at: Instant) {}
}

impl<F> Progress for F
where
    F: FnMut(u64, u64, Instant),
{
    fn update(&mut self, done: u64, total: u64, at: Instant) {
        self(done, total, at);
    }
}
