use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use fingerpaint::{
    Config, StrokeCompositor,
    config::clamp_canvas_edge,
    image_io::{self, FileSaveConfig, ImageIoError},
    input::LayerKind,
    script::{ScriptRunner, parse_script},
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fingerpaint")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FINGERPAINT_GIT_HASH"), ")"),
    about = "Touch drawing canvas with brush settings and PNG export"
)]
struct Cli {
    /// Touch script to replay (one command per line)
    #[arg(long, short = 's', value_name = "FILE", required_unless_present = "init_config")]
    script: Option<PathBuf>,

    /// PNG placed on the canvas before the script runs
    #[arg(long, short = 'i', value_name = "PNG")]
    import: Option<PathBuf>,

    /// Write the drawing here instead of the configured export directory
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Canvas height in pixels (overrides the config)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Export with a transparent background instead of the paper color
    #[arg(long, action = ArgAction::SetTrue)]
    no_flatten: bool,

    /// Write a documented config file to the config directory and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config: {err:#}. Using defaults.");
        Config::default()
    });

    let Some(script_path) = cli.script.as_deref() else {
        anyhow::bail!("--script is required");
    };
    let script = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let commands = parse_script(&script)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let width = cli
        .width
        .map_or(config.canvas.width, |w| clamp_canvas_edge("width", w));
    let height = cli
        .height
        .map_or(config.canvas.height, |h| clamp_canvas_edge("height", h));
    let background = config.canvas.background_color();
    let mut canvas =
        StrokeCompositor::with_brush(width, height, config.brush.to_brush(), background);
    log::info!("Canvas {}x{}, {} script command(s)", width, height, commands.len());

    if let Some(import_path) = cli.import.as_deref() {
        let image = image_io::load_png(import_path).map_err(|err| {
            log::error!("Import of {} failed: {}", import_path.display(), err);
            err
        })?;
        canvas.import_image(&image);
    }

    let stats = ScriptRunner::new(&mut canvas, config.panel.layout).run(&commands);
    if canvas.is_stroking() {
        log::warn!("Script ended mid-stroke; the unfinished stroke is discarded");
    }
    if !canvas.layer(LayerKind::Temporary).is_blank() {
        log::warn!("Stroke layer holds unmerged content; add `commit` to keep it");
    }

    let flatten = config.export.flatten && !cli.no_flatten;
    let surface = if flatten {
        canvas.flattened(background)
    } else {
        canvas.snapshot(LayerKind::Committed)
    }
    .ok_or(ImageIoError::NothingToExport)?;

    let saved = match cli.output {
        Some(path) => {
            image_io::write_png(&surface, &path)?;
            path
        }
        None => image_io::save_png(&surface, &FileSaveConfig::from(&config.export))?,
    };

    println!(
        "{} stroke(s), {} segment(s), {} settings change(s)",
        stats.strokes, stats.segments, stats.panel_sessions
    );
    println!("Saved drawing to {}", saved.display());
    Ok(())
}
