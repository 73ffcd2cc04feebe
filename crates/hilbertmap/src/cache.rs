//! Per-run memoisation of block colours.

use std::collections::HashMap;

use crate::{canvas::Canvas, color::Color, error::Result, projector::ColorProjector};

/// When a run should memoise block colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Memoize {
    /// Memoise only when blocks span more than one pixel.
    #[default]
    Auto,
    /// Always memoise.
    Always,
    /// Never memoise; every lookup recomputes.
    Never,
}

impl Memoize {
    /// Decide for a concrete canvas.
    pub fn enabled_for(self, canvas: &Canvas) -> bool {
        match self {
            Self::Auto => canvas.size() > canvas.blocks().count(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl From<Option<bool>> for Memoize {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Auto,
            Some(true) => Self::Always,
            Some(false) => Self::Never,
        }
    }
}

/// Block colour lookups for a single rasterisation run.
///
/// Entries are added on first lookup and never evicted; the key space is
/// bounded by `blocks²`. The cache owns its projector and is dropped with the
/// run.
#[derive(Debug)]
pub struct BlockColorCache {
    /// Source of colours on a miss.
    projector: ColorProjector,
    /// Stored colours, or `None` in pass-through mode.
    entries: Option<HashMap<(u32, u32), Color>>,
    /// Number of projector invocations so far.
    computed: u64,
}

impl BlockColorCache {
    /// Wrap `projector`; when `memoize` is false every lookup recomputes.
    pub fn new(projector: ColorProjector, memoize: bool) -> Self {
        Self {
            projector,
            entries: memoize.then(HashMap::new),
            computed: 0,
        }
    }

    /// Colour of block `(x, y)`, computing and storing it on first use.
    pub fn get_or_compute(&mut self, x: u32, y: u32) -> Result<Color> {
        let Some(entries) = &mut self.entries else {
            self.computed += 1;
            return self.projector.color(x, y);
        };
        if let Some(color) = entries.get(&(x, y)) {
            return Ok(*color);
        }
        let color = self.projector.color(x, y)?;
        self.computed += 1;
        entries.insert((x, y), color);
        Ok(color)
    }

    /// Whether lookups are memoised.
    pub fn is_memoizing(&self) -> bool {
        self.entries.is_some()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times the projector has been invoked.
    pub fn computed(&self) -> u64 {
        self.computed
    }

    /// The wrapped projector.
    pub fn projector(&self) -> &ColorProjector {
        &self.projector
    }
}
