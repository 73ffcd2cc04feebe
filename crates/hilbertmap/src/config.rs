//! Run configuration: raw options and their validated form.

use std::{num::NonZeroU64, path::PathBuf};

use crate::{
    axes::AxisOrder,
    cache::{BlockColorCache, Memoize},
    canvas::{BlockCount, Canvas},
    error::{Error, Result},
    progress::{DEFAULT_INTERVAL, Progress},
    projector::{ColorProjector, Projection},
    raster::{ChannelLayout, Method, PixelBuffer, Rasterizer},
};

/// Unvalidated options for one image.
///
/// [`validate`](Self::validate) checks every field before any curve is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOptions {
    /// Canvas side in pixels.
    pub canvas_size: u32,
    /// Blocks per canvas side.
    pub blocks: u32,
    /// Construction method (`blocks` or `pixels`).
    pub method: String,
    /// Projection policy (`scaleD`, `scaleXYZ`, `d`, `xyz`).
    pub projection: String,
    /// 2D axis selector (`xy` or `yx`).
    pub order2: String,
    /// 3D axis selector (a permutation of `xyz`).
    pub order3: String,
    /// Leading component of the output file name.
    pub output_base: String,
    /// Directory the output file is placed in.
    pub output_dir: PathBuf,
    /// Units between progress updates.
    pub progress_interval: u64,
    /// Compute the image without writing it.
    pub dry_run: bool,
    /// Force memoisation on or off; `None` decides from the canvas.
    pub memoize: Option<bool>,
    /// Pixel channel layout (`rgb` or `rgba`).
    pub layout: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            canvas_size: 512,
            blocks: 8,
            method: Method::Pixels.to_string(),
            projection: Projection::ScaleVector.to_string(),
            order2: "xy".into(),
            order3: "xyz".into(),
            output_base: "hilbert".into(),
            output_dir: PathBuf::from("./img"),
            progress_interval: DEFAULT_INTERVAL.get(),
            dry_run: false,
            memoize: None,
            layout: ChannelLayout::Rgb.to_string(),
        }
    }
}

impl MapOptions {
    /// Check every field and produce a [`MapConfig`].
    pub fn validate(&self) -> Result<MapConfig> {
        let blocks = BlockCount::try_from(self.blocks)?;
        let canvas = Canvas::new(self.canvas_size, blocks)?;
        Ok(MapConfig {
            canvas,
            method: self.method.parse()?,
            projection: self.projection.parse()?,
            order2: self.order2.parse()?,
            order3: self.order3.parse()?,
            output_base: self.output_base.clone(),
            output_dir: self.output_dir.clone(),
            progress_interval: NonZeroU64::new(self.progress_interval)
                .ok_or(Error::InvalidInterval)?,
            dry_run: self.dry_run,
            memoize: Memoize::from(self.memoize),
            layout: self.layout.parse()?,
        })
    }
}

/// A validated configuration for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    /// Canvas geometry.
    canvas: Canvas,
    /// Construction method.
    method: Method,
    /// Projection policy.
    projection: Projection,
    /// 2D axis selector.
    order2: AxisOrder<2>,
    /// 3D axis selector.
    order3: AxisOrder<3>,
    /// Leading component of the output file name.
    output_base: String,
    /// Output directory.
    output_dir: PathBuf,
    /// Units between progress updates.
    progress_interval: NonZeroU64,
    /// Skip writing the output.
    dry_run: bool,
    /// Memoisation policy.
    memoize: Memoize,
    /// Pixel channel layout.
    layout: ChannelLayout,
}

impl TryFrom<&MapOptions> for MapConfig {
    type Error = Error;

    fn try_from(options: &MapOptions) -> Result<Self> {
        options.validate()
    }
}

impl MapConfig {
    /// Canvas geometry.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Construction method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Projection policy.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// 2D axis selector.
    pub fn order2(&self) -> AxisOrder<2> {
        self.order2
    }

    /// 3D axis selector.
    pub fn order3(&self) -> AxisOrder<3> {
        self.order3
    }

    /// Whether output writing is skipped.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Pixel channel layout.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Whether this run memoises block colours.
    pub fn memoize(&self) -> bool {
        self.memoize.enabled_for(&self.canvas)
    }

    /// Output path, e.g. `img/hilbert-8-512x512-scaleXYZ-xy-xyz.png`.
    pub fn file_name(&self) -> PathBuf {
        let size = self.canvas.size();
        self.output_dir.join(format!(
            "{}-{}-{size}x{size}-{}-{}-{}.png",
            self.output_base,
            self.canvas.blocks(),
            self.projection,
            self.order2,
            self.order3
        ))
    }

    /// Projector for this configuration.
    pub fn projector(&self) -> Result<ColorProjector> {
        ColorProjector::new(
            self.canvas.blocks(),
            self.projection,
            self.order2,
            self.order3,
        )
    }

    /// A fresh cache for one run of this configuration.
    pub fn cache(&self) -> Result<BlockColorCache> {
        Ok(BlockColorCache::new(self.projector()?, self.memoize()))
    }

    /// Rasteriser for this configuration.
    pub fn rasterizer(&self) -> Rasterizer {
        Rasterizer::new(self.canvas, self.method)
            .with_layout(self.layout)
            .with_interval(self.progress_interval)
    }

    /// Compute the full pixel buffer.
    pub fn render(&self, progress: &mut dyn Progress) -> Result<PixelBuffer> {
        let mut cache = self.cache()?;
        self.rasterizer().render(&mut cache, progress)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn default_file_name() -> Result<()> {
        let config = MapOptions {
            output_dir: PathBuf::from("img"),
            ..MapOptions::default()
        }
        .validate()?;
        assert_eq!(
            config.file_name(),
            Path::new("img/hilbert-8-512x512-scaleXYZ-xy-xyz.png")
        );
        Ok(())
    }

    #[test]
    fn file_name_uses_canonical_projection() -> Result<()> {
        let config = MapOptions {
            canvas_size: 64,
            blocks: 64,
            projection: "d".into(),
            order2: "yx".into(),
            order3: "zyx".into(),
            output_base: "map".into(),
            output_dir: PathBuf::from("out"),
            ..MapOptions::default()
        }
        .validate()?;
        assert_eq!(
            config.file_name(),
            Path::new("out/map-64-64x64-scaleD-yx-zyx.png")
        );
        Ok(())
    }

    #[test]
    fn validation_errors() {
        let check = |options: MapOptions, expected: Error| {
            assert_eq!(options.validate(), Err(expected));
        };
        check(
            MapOptions {
                blocks: 3,
                ..MapOptions::default()
            },
            Error::InvalidBlocks(3),
        );
        check(
            MapOptions {
                method: "rows".into(),
                ..MapOptions::default()
            },
            Error::InvalidMethod("rows".into()),
        );
        check(
            MapOptions {
                projection: "hsv".into(),
                ..MapOptions::default()
            },
            Error::InvalidProjection("hsv".into()),
        );
        check(
            MapOptions {
                canvas_size: 500,
                ..MapOptions::default()
            },
            Error::Indivisible {
                size: 500,
                blocks: 8,
            },
        );
        check(
            MapOptions {
                canvas_size: u32::MAX,
                blocks: 1,
                ..MapOptions::default()
            },
            Error::CanvasTooLarge(u32::MAX),
        );
        check(
            MapOptions {
                progress_interval: 0,
                ..MapOptions::default()
            },
            Error::InvalidInterval,
        );
        assert!(
            MapOptions {
                order3: "xyy".into(),
                ..MapOptions::default()
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn parsed_fields() -> Result<()> {
        let config = MapOptions {
            method: "blocks".into(),
            projection: "d".into(),
            order2: "YX".into(),
            order3: "zyx".into(),
            ..MapOptions::default()
        }
        .validate()?;
        assert_eq!(config.method(), Method::Blocks);
        assert_eq!(config.projection(), Projection::ScaleDistance);
        assert_eq!(config.order2().to_string(), "yx");
        assert_eq!(config.order3().to_string(), "zyx");
        assert_eq!(config.rasterizer().method(), Method::Blocks);
        Ok(())
    }

    #[test]
    fn memoize_policy() -> Result<()> {
        let one_per_block = MapOptions {
            canvas_size: 64,
            blocks: 64,
            ..MapOptions::default()
        };
        assert!(!one_per_block.validate()?.memoize());
        assert!(
            MapOptions {
                memoize: Some(true),
                ..one_per_block
            }
            .validate()?
            .memoize()
        );
        assert!(MapOptions::default().validate()?.memoize());
        Ok(())
    }
}
