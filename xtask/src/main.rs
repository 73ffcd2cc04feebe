//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Render the reference gallery of colour maps.
    Gallery {
        /// Output directory, relative to the repository root.
        #[arg(default_value = "img")]
        outdir: PathBuf,
        /// Canvas size of each image.
        #[arg(long, default_value_t = 512)]
        size: u32,
    },
}

/// Repository root, discovered from `CARGO_MANIFEST_DIR`.
fn repo_root() -> Result<PathBuf> {
    let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Ok(xtask_dir
        .parent()
        .context("xtask crate must live at <repo>/xtask")?
        .to_path_buf())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;
    sh.change_dir(repo_root()?);

    match cli.command {
        CommandName::Tidy => tidy(&sh),
        CommandName::Test => test(&sh),
        CommandName::Gallery { outdir, size } => gallery(&sh, &outdir, size),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(sh: &Shell) -> Result<()> {
    format_workspace(sh)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    format_workspace(sh)?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(sh: &Shell) -> Result<()> {
    let config = sh.current_dir().join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
    } else {
        cmd!(sh, "cargo +nightly fmt --all").run()?;
    }
    Ok(())
}

/// Run tests using cargo nextest.
fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Render every block count and projection with the release build.
fn gallery(sh: &Shell, outdir: &Path, size: u32) -> Result<()> {
    let size = size.to_string();
    cmd!(
        sh,
        "cargo run -q --release -p hmap -- render --outdir {outdir} -s {size} -b 1,8,64,512 -p scaleD,scaleXYZ --order3 xyz,zyx --progress log"
    )
    .run()?;
    Ok(())
}
