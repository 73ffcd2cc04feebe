//! Canvas geometry: block counts and the block partition of a square canvas.

use std::fmt;

use crate::error::{Error, Result};

/// Block counts accepted per canvas side. Every entry is `8^n`, so `blocks²`
/// distances fill a whole number of 3D curve levels.
pub const ACCEPTED_BLOCKS: [u32; 5] = [1, 8, 64, 512, 4096];

/// Widest pixel layout, in bytes per pixel.
pub const MAX_CHANNELS: usize = 4;

/// Number of blocks along each side of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCount(u32);

impl BlockCount {
    /// Blocks per side.
    pub fn count(self) -> u32 {
        self.0
    }

    /// Order of the 2D curve that addresses exactly `count × count` blocks.
    pub fn order(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Total number of blocks on the canvas.
    pub fn total(self) -> u64 {
        u64::from(self.0) * u64::from(self.0)
    }
}

impl TryFrom<u32> for BlockCount {
    type Error = Error;

    fn try_from(blocks: u32) -> Result<Self> {
        if ACCEPTED_BLOCKS.contains(&blocks) {
            Ok(Self(blocks))
        } else {
            Err(Error::InvalidBlocks(blocks))
        }
    }
}

impl fmt::Display for BlockCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A square canvas split into `blocks × blocks` equal squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    /// Pixels per side.
    size: u32,
    /// Blocks per side.
    blocks: BlockCount,
    /// Pixels per block side.
    block_size: u32,
}

impl Canvas {
    /// Partition a `size × size` canvas. `size` must be a positive multiple of
    /// the block count, and a buffer of [`MAX_CHANNELS`] bytes per pixel must
    /// fit in memory.
    pub fn new(size: u32, blocks: BlockCount) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidCanvas(size));
        }
        buffer_len(size, MAX_CHANNELS)?;
        if !size.is_multiple_of(blocks.count()) {
            return Err(Error::Indivisible {
                size,
                blocks: blocks.count(),
            });
        }
        Ok(Self {
            size,
            blocks,
            block_size: size / blocks.count(),
        })
    }

    /// Pixels per side.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Blocks per side.
    pub fn blocks(&self) -> BlockCount {
        self.blocks
    }

    /// Pixels per block side.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }

    /// Bytes in a buffer of `channels` bytes per pixel.
    pub fn buffer_len(&self, channels: usize) -> Result<usize> {
        buffer_len(self.size, channels)
    }

    /// Block owning pixel `(x, y)`.
    pub fn block_of(&self, x: u32, y: u32) -> (u32, u32) {
        (x / self.block_size, y / self.block_size)
    }
}

/// `size² × channels`, bounded by the largest possible allocation.
fn buffer_len(size: u32, channels: usize) -> Result<usize> {
    let side = usize::try_from(size).map_err(|_| Error::CanvasTooLarge(size))?;
    side.checked_mul(side)
        .and_then(|n| n.checked_mul(channels))
        .filter(|&n| isize::try_from(n).is_ok())
        .ok_or(Error::CanvasTooLarge(size))
}
