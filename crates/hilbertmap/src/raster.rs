//! Canvas construction: turning block colours into a pixel buffer.
//!
//! Two strategies are provided. [`Method::Blocks`] visits every block once and
//! stamps its colour over the block's pixels; [`Method::Pixels`] visits every
//! pixel and looks up the colour of its block. Both produce identical bytes
//! and differ only in traversal order and in the number of progress units
//! (`blocks²` vs. `size²`).

use std::{fmt, num::NonZeroU64, str::FromStr, time::Instant};

use log::debug;

use crate::{
    cache::BlockColorCache,
    canvas::Canvas,
    color::Color,
    error::{Error, Result},
    progress::{DEFAULT_INTERVAL, Progress},
};

/// Canvas construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Compute each block once and stamp it into the buffer.
    Blocks,
    /// Sample every pixel, fetching its block's colour.
    #[default]
    Pixels,
}

impl Method {
    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Pixels => "pixels",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blocks" => Ok(Self::Blocks),
            "pixels" => Ok(Self::Pixels),
            other => Err(Error::InvalidMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bytes stored per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelLayout {
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Red, green, blue, and an opaque alpha channel.
    Rgba,
}

impl ChannelLayout {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Channel bytes for `color`; only the first [`channels`](Self::channels)
    /// entries are meaningful.
    fn encode(self, color: Color) -> [u8; 4] {
        let [r, g, b] = color.to_rgb8();
        [r, g, b, u8::MAX]
    }
}

impl FromStr for ChannelLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            other => Err(Error::InvalidLayout(other.to_string())),
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        })
    }
}

/// A square, row-major pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels per side.
    size: u32,
    /// Bytes per pixel.
    layout: ChannelLayout,
    /// Raw channel bytes, top row first.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A zero-filled buffer covering `canvas`.
    fn new(canvas: &Canvas, layout: ChannelLayout) -> Result<Self> {
        Ok(Self {
            size: canvas.size(),
            layout,
            data: vec![0; canvas.buffer_len(layout.channels())?],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size
    }

    /// Channel layout.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Channel bytes of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let ch = self.layout.channels();
        let start = (y as usize * self.size as usize + x as usize) * ch;
        &self.data[start..start + ch]
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("size", &self.size)
            .field("layout", &self.layout)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Builds pixel buffers for a canvas.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    /// Canvas geometry.
    canvas: Canvas,
    /// Traversal strategy.
    method: Method,
    /// Output channel layout.
    layout: ChannelLayout,
    /// Units between progress updates.
    interval: NonZeroU64,
}

impl Rasterizer {
    /// A rasteriser producing RGB output with the default progress interval.
    pub fn new(canvas: Canvas, method: Method) -> Self {
        Self {
            canvas,
            method,
            layout: ChannelLayout::Rgb,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Set the output channel layout.
    pub fn with_layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the number of units between progress updates.
    pub fn with_interval(mut self, interval: NonZeroU64) -> Self {
        self.interval = interval;
        self
    }

    /// Canvas geometry.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Traversal strategy.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Render the canvas, fetching block colours from `cache`.
    pub fn render(
        &self,
        cache: &mut BlockColorCache,
        progress: &mut dyn Progress,
    ) -> Result<PixelBuffer> {
        let blocks = self.canvas.blocks().count();
        if cache.projector().blocks().count() != blocks {
            return Err(Error::InvalidGrid(format!(
                "projector built for {} blocks, canvas has {blocks}",
                cache.projector().blocks()
            )));
        }
        debug!(
            "rasterizing {0}x{0} canvas, {1} blocks of {2}px, method {3}",
            self.canvas.size(),
            blocks,
            self.canvas.block_size(),
            self.method()
        );
        let mut buf = PixelBuffer::new(&self.canvas, self.layout)?;
        let total = match self.method {
            Method::Blocks => self.stamp_blocks(&mut buf, cache, progress)?,
            Method::Pixels => self.sample_pixels(&mut buf, cache, progress)?,
        };
        progress.finish(total, Instant::now());
        debug!(
            "rasterized {total} units with {} colour computations",
            cache.computed()
        );
        Ok(buf)
    }

    /// Report `done` of `total` if it falls on the progress cadence.
    fn tick(&self, progress: &mut dyn Progress, done: u64, total: u64) {
        if done.is_multiple_of(self.interval.get()) {
            progress.update(done, total, Instant::now());
        }
    }

    /// Block-stamping traversal. Returns the number of units processed.
    fn stamp_blocks(
        &self,
        buf: &mut PixelBuffer,
        cache: &mut BlockColorCache,
        progress: &mut dyn Progress,
    ) -> Result<u64> {
        let blocks = self.canvas.blocks().count();
        let block_size = self.canvas.block_size() as usize;
        let size = self.canvas.size() as usize;
        let ch = self.layout.channels();
        let total = self.canvas.blocks().total();

        let mut done = 0;
        for bx in 0..blocks {
            for by in 0..blocks {
                self.tick(progress, done, total);
                let px = self.layout.encode(cache.get_or_compute(bx, by)?);
                let row = px[..ch].repeat(block_size);
                let left = bx as usize * block_size;
                for y in by as usize * block_size..(by as usize + 1) * block_size {
                    let start = (y * size + left) * ch;
                    buf.data[start..start + row.len()].copy_from_slice(&row);
                }
                done += 1;
            }
        }
        Ok(total)
    }

    /// Pixel-sampling traversal. Returns the number of units processed.
    fn sample_pixels(
        &self,
        buf: &mut PixelBuffer,
        cache: &mut BlockColorCache,
        progress: &mut dyn Progress,
    ) -> Result<u64> {
        let ch = self.layout.channels();
        let row_len = self.canvas.size() as usize * ch;
        let total = self.canvas.pixel_count();

        let mut done = 0;
        for (y, row) in (0..).zip(buf.data.chunks_exact_mut(row_len)) {
            for (x, dst) in (0..).zip(row.chunks_exact_mut(ch)) {
                self.tick(progress, done, total);
                let (bx, by) = self.canvas.block_of(x, y);
                let px = self.layout.encode(cache.get_or_compute(bx, by)?);
                dst.copy_from_slice(&px[..ch]);
                done += 1;
            }
        }
        Ok(total)
    }
}
