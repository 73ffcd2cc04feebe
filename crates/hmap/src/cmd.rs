//! Command handlers for the `hmap` CLI.
//!
//! `render` expands a sweep of options into validated configurations, renders
//! each one and writes the encoded PNG to disk.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use hilbertmap::{
    AxisOrder, BlockCount, ChannelLayout, ColorProjector, MapConfig, MapOptions, PixelBuffer,
    Progress,
};
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use log::{debug, info};

use crate::progress::{self, ProgressStyle};

/// Lists of option values to render every combination of.
pub struct Sweep {
    /// Canvas sizes.
    pub sizes: Vec<u32>,
    /// Block counts.
    pub blocks: Vec<u32>,
    /// Construction methods.
    pub methods: Vec<String>,
    /// Projection policies.
    pub projections: Vec<String>,
    /// 2D axis selectors.
    pub order2: Vec<String>,
    /// 3D axis selectors.
    pub order3: Vec<String>,
    /// Output file name prefix.
    pub output_base: String,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Units between progress updates.
    pub progress_interval: u64,
    /// Skip encoding and writing.
    pub dry_run: bool,
    /// Memoisation override.
    pub memoize: Option<bool>,
    /// Pixel channel layout.
    pub layout: String,
}

/// Pair every option in `acc` with every value, the existing options varying
/// slowest.
fn product<T>(
    acc: &[MapOptions],
    values: &[T],
    set: impl Fn(&mut MapOptions, &T),
) -> Vec<MapOptions> {
    let set = &set;
    acc.iter()
        .flat_map(|options| {
            values.iter().map(move |value| {
                let mut next = options.clone();
                set(&mut next, value);
                next
            })
        })
        .collect()
}

impl Sweep {
    /// Every combination, nested size → method → blocks → projection →
    /// order2 → order3.
    fn expand(&self) -> Vec<MapOptions> {
        let base = MapOptions {
            output_base: self.output_base.clone(),
            output_dir: self.output_dir.clone(),
            progress_interval: self.progress_interval,
            dry_run: self.dry_run,
            memoize: self.memoize,
            layout: self.layout.clone(),
            ..MapOptions::default()
        };
        let all = product(&[base], &self.sizes, |o, v| o.canvas_size = *v);
        let all = product(&all, &self.methods, |o, v| o.method.clone_from(v));
        let all = product(&all, &self.blocks, |o, v| o.blocks = *v);
        let all = product(&all, &self.projections, |o, v| o.projection.clone_from(v));
        let all = product(&all, &self.order2, |o, v| o.order2.clone_from(v));
        product(&all, &self.order3, |o, v| o.order3.clone_from(v))
    }
}

/// Expand and validate a sweep. Fails on the first invalid combination,
/// before anything is rendered.
pub fn plan(sweep: &Sweep) -> Result<Vec<MapConfig>> {
    sweep
        .expand()
        .iter()
        .map(|options| {
            options.validate().with_context(|| {
                format!(
                    "invalid configuration (size {}, blocks {}, method {}, projection {})",
                    options.canvas_size, options.blocks, options.method, options.projection
                )
            })
        })
        .collect()
}

/// What happened to one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The image was written to this path.
    Written(PathBuf),
    /// The output already existed and nothing was computed.
    Skipped,
    /// The image was computed but not written.
    DryRun,
}

/// Totals across a sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Images written.
    pub written: usize,
    /// Configurations skipped because their output exists.
    pub skipped: usize,
    /// Images computed in dry-run mode.
    pub dry_run: usize,
}

/// Render every configuration in order.
pub fn render_all(configs: &[MapConfig], style: ProgressStyle, force: bool) -> Result<Summary> {
    let mut summary = Summary::default();
    for (idx, config) in configs.iter().enumerate() {
        info!(
            "Generating {}/{}: {}",
            idx + 1,
            configs.len(),
            config.file_name().display()
        );
        debug!(
            "\tmethod {}, projection {}, axes {}/{}, memoize {}",
            config.method(),
            config.projection(),
            config.order2(),
            config.order3(),
            config.memoize()
        );
        let mut sink = progress::sink(style);
        match render_one(config, sink.as_mut(), force)? {
            Outcome::Written(_) => summary.written += 1,
            Outcome::Skipped => summary.skipped += 1,
            Outcome::DryRun => summary.dry_run += 1,
        }
    }
    Ok(summary)
}

/// Render one configuration, honouring skip-if-exists and dry-run.
pub fn render_one(
    config: &MapConfig,
    progress: &mut dyn Progress,
    force: bool,
) -> Result<Outcome> {
    let path = config.file_name();
    if !force && path.exists() {
        info!("\tAlready exists!");
        return Ok(Outcome::Skipped);
    }

    let buffer = config
        .render(progress)
        .with_context(|| format!("rendering {}", path.display()))?;

    if config.dry_run() {
        info!("\tdry run, not writing");
        return Ok(Outcome::DryRun);
    }

    let png = encode_png(&buffer)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    info!("\tWriting to: {}", path.display());
    fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
    Ok(Outcome::Written(path))
}

/// Encode a pixel buffer as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let color_type = match buffer.layout() {
        ChannelLayout::Rgb => ExtendedColorType::Rgb8,
        ChannelLayout::Rgba => ExtendedColorType::Rgba8,
    };
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(buffer.as_bytes(), buffer.width(), buffer.height(), color_type)
        .context("encoding PNG")?;
    Ok(bytes)
}

/// Parameters for a single block-colour lookup.
pub struct ColorLookup<'a> {
    /// Blocks per side.
    pub blocks: u32,
    /// Projection policy.
    pub projection: &'a str,
    /// 2D axis selector.
    pub order2: &'a str,
    /// 3D axis selector.
    pub order3: &'a str,
    /// Block column.
    pub x: u32,
    /// Block row.
    pub y: u32,
}

/// Describe the distance and colour of one block.
pub fn color(lookup: &ColorLookup<'_>) -> Result<String> {
    let order2: AxisOrder<2> = lookup.order2.parse()?;
    let order3: AxisOrder<3> = lookup.order3.parse()?;
    let projector = ColorProjector::new(
        BlockCount::try_from(lookup.blocks)?,
        lookup.projection.parse()?,
        order2,
        order3,
    )?;
    let (x, y) = (lookup.x, lookup.y);
    let distance = projector.distance(x, y)?;
    let color = projector.color(x, y)?;
    let hex: String = color.to_rgb8().iter().map(|c| format!("{c:02x}")).collect();
    Ok(format!(
        "block ({x},{y}): d={distance} color={color} rgb=#{hex}"
    ))
}
