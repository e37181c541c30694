use anyhow::{Context, Result};
use clap::Parser;
use paintboard::Config;
use paintboard::draw::CairoSurface;
use paintboard::input::DrawingSession;
use paintboard::script::{Script, run_script};
use std::fs;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PAINTBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "paintboard")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Replay drawing gestures onto a canvas and save it as PNG")]
struct Cli {
    /// Gesture script to replay (TOML)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Where to write the rendered PNG
    #[arg(long, short = 'o', value_name = "FILE", default_value = "paintboard.png")]
    output: PathBuf,

    /// Config file to use instead of ~/.config/paintboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..=8192))]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..=8192))]
    height: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config: {err:#}; using defaults");
            Config::default()
        }),
    };

    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script: Script = source
        .parse()
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let width = cli.width.unwrap_or(config.canvas.width);
    let height = cli.height.unwrap_or(config.canvas.height);
    log::info!(
        "Replaying {} event(s) onto a {}x{} canvas",
        script.actions.len(),
        width,
        height
    );

    let mut surface = CairoSurface::image(
        i32::try_from(width).context("Canvas width out of range")?,
        i32::try_from(height).context("Canvas height out of range")?,
        Some(config.background_color()),
    )?;
    let mut session = DrawingSession::new(config.drawing.default_tool, config.initial_style());

    run_script(&mut session, &mut surface, &script);
    surface.write_png(&cli.output)?;

    Ok(())
}

fn print_usage() {
    println!("paintboard: Replay drawing gestures onto a canvas and save it as PNG");
    println!();
    println!("Usage:");
    println!("  paintboard --script gestures.toml --output drawing.png");
    println!("  paintboard --help      Show help");
    println!();
    println!("Tools: freehand (l), rectangle (r), oval (o), polygon (p), mirrored-freehand (s)");
    println!("Config: ~/.config/paintboard/config.toml ([drawing] and [canvas] sections)");
}
