use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "taiji", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the scene at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render a sequence of PNG frames into a directory.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Milliseconds of animation to run before capturing.
    #[arg(long, default_value_t = 0)]
    ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Total milliseconds to cover (inclusive).
    #[arg(long)]
    ms: u64,

    /// Milliseconds between captured frames.
    #[arg(long, default_value_t = 30)]
    step: u64,

    /// Output directory for `frame_<ms>.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_scene(path: &Path) -> anyhow::Result<taiji::Scene> {
    let scene = taiji::Scene::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    scene.validate()?;
    Ok(scene)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let frame = taiji::render_scene(&scene, args.ms)?;
    frame
        .write_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let mut sink = taiji::PngDirSink::new(&args.out_dir);
    let count = taiji::render_scene_frames(&scene, args.ms, args.step, &mut sink)?;

    eprintln!("wrote {count} frames to {}", args.out_dir.display());
    Ok(())
}
