//! Command‑line entry point for the `hmap` tool.
//!
//! Renders Hilbert colour maps to PNG files and looks up individual block
//! colours.

use std::{fmt::Display, path::PathBuf, process};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Env};
use log::LevelFilter;

/// CLI command implementations.
mod cmd;
/// Progress sinks for render runs.
mod progress;

use crate::progress::ProgressStyle;

#[derive(Parser)]
#[command(name = "hmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Options for the `render` subcommand. List-valued options take
/// comma-separated values and every combination is rendered.
#[derive(Args)]
struct RenderArgs {
    #[arg(
        short = 's',
        long = "size",
        value_delimiter = ',',
        default_value = "512",
        help = "Square canvas sizes in pixels"
    )]
    /// Canvas sizes.
    sizes: Vec<u32>,

    #[arg(
        short = 'b',
        long = "blocks",
        value_delimiter = ',',
        default_value = "8",
        help = "Blocks per side (1, 8, 64, 512 or 4096)"
    )]
    /// Block counts.
    blocks: Vec<u32>,

    #[arg(
        short = 'm',
        long = "method",
        value_delimiter = ',',
        default_value = "pixels",
        help = "Construction methods (blocks, pixels)"
    )]
    /// Construction methods.
    methods: Vec<String>,

    #[arg(
        short = 'p',
        long = "projection",
        value_delimiter = ',',
        default_value = "scaleXYZ",
        help = "Projections (scaleD, scaleXYZ, d, xyz)"
    )]
    /// Projection policies.
    projections: Vec<String>,

    #[arg(
        long = "order2",
        value_delimiter = ',',
        default_value = "xy",
        help = "2D axis orders (xy, yx)"
    )]
    /// 2D axis selectors.
    order2: Vec<String>,

    #[arg(
        long = "order3",
        value_delimiter = ',',
        default_value = "xyz",
        help = "3D axis orders (permutations of xyz)"
    )]
    /// 3D axis selectors.
    order3: Vec<String>,

    #[arg(long = "outbase", default_value = "hilbert", help = "Output file name prefix")]
    /// Output file name prefix.
    outbase: String,

    #[arg(long = "outdir", default_value = "./img", help = "Output directory")]
    /// Output directory.
    outdir: PathBuf,

    #[arg(
        long = "print-every",
        default_value_t = 10_000,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Work units between progress updates"
    )]
    /// Progress interval.
    print_every: u64,

    #[arg(long = "dry-run", help = "Compute images without writing them")]
    /// Skip encoding and writing.
    dry_run: bool,

    #[arg(long = "force", help = "Render even when the output file exists")]
    /// Overwrite existing outputs.
    force: bool,

    #[arg(
        long = "memoize",
        value_name = "BOOL",
        help = "Force block colour memoisation on or off (default: on when blocks span several pixels)"
    )]
    /// Memoisation override.
    memoize: Option<bool>,

    #[arg(long = "layout", default_value = "rgb", help = "Pixel layout (rgb, rgba)")]
    /// Pixel channel layout.
    layout: String,

    #[arg(long = "progress", value_enum, default_value_t, help = "Progress display")]
    /// Progress display style.
    progress: ProgressStyle,
}

#[derive(Subcommand)]
/// Subcommands supported by the `hmap` tool.
enum Commands {
    #[command(about = "Render colour maps to PNG files")]
    /// Render colour maps.
    Render(RenderArgs),

    #[command(about = "Print the curve distance and colour of one block")]
    /// Look up a single block colour.
    Color {
        #[arg(short = 'b', long = "blocks", default_value_t = 8, help = "Blocks per side")]
        /// Blocks per side.
        blocks: u32,

        #[arg(short = 'p', long = "projection", default_value = "scaleXYZ", help = "Projection")]
        /// Projection policy.
        projection: String,

        #[arg(long = "order2", default_value = "xy", help = "2D axis order")]
        /// 2D axis selector.
        order2: String,

        #[arg(long = "order3", default_value = "xyz", help = "3D axis order")]
        /// 3D axis selector.
        order3: String,

        #[arg(help = "Block column")]
        /// Block x coordinate.
        x: u32,

        #[arg(help = "Block row")]
        /// Block y coordinate.
        y: u32,
    },
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Initialise `env_logger`; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp_secs()
        .init();
}

/// Handle the `render` subcommand.
fn handle_render(args: RenderArgs) -> Result<()> {
    let RenderArgs {
        sizes,
        blocks,
        methods,
        projections,
        order2,
        order3,
        outbase,
        outdir,
        print_every,
        dry_run,
        force,
        memoize,
        layout,
        progress,
    } = args;

    let configs = cmd::plan(&cmd::Sweep {
        sizes,
        blocks,
        methods,
        projections,
        order2,
        order3,
        output_base: outbase,
        output_dir: outdir,
        progress_interval: print_every,
        dry_run,
        memoize,
        layout,
    })?;
    let summary = cmd::render_all(&configs, progress, force)?;
    println!(
        "{} written, {} skipped, {} dry run",
        summary.written, summary.skipped, summary.dry_run
    );
    Ok(())
}

/// Handle the `color` subcommand.
fn handle_color(lookup: &cmd::ColorLookup<'_>) -> Result<()> {
    println!("{}", cmd::color(lookup)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Render(args) => report_ok(handle_render(args), "OK!"),
        Commands::Color {
            blocks,
            projection,
            order2,
            order3,
            x,
            y,
        } => report_ok(
            handle_color(&cmd::ColorLookup {
                blocks,
                projection: &projection,
                order2: &order2,
                order3: &order3,
                x,
                y,
            }),
            "OK!",
        ),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_comma_separated_lists() {
        let cli = Cli::try_parse_from(["hmap", "render", "-s", "64,128", "-b", "1,8", "-p", "d,xyz"])
            .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.sizes, vec![64, 128]);
        assert_eq!(args.blocks, vec![1, 8]);
        assert_eq!(args.projections, vec!["d", "xyz"]);
        assert_eq!(args.methods, vec!["pixels"]);
        assert_eq!(args.print_every, 10_000);
        assert!(args.memoize.is_none());
    }

    #[test]
    fn rejects_zero_interval() {
        assert!(Cli::try_parse_from(["hmap", "render", "--print-every", "0"]).is_err());
    }
}
