use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sketchpath", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split multi-contour paths of an SVG into outer contours with their holes.
    Group(GroupArgs),
    /// Trace a bitmap with `potrace` (must be on PATH), then group the result.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct GroupingFlags {
    /// JSON grouping config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hole ownership policy.
    #[arg(long, value_enum)]
    policy: Option<PolicyChoice>,

    /// Compute per-path geometry in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print grouping statistics as JSON on stdout.
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[derive(Parser, Debug)]
struct GroupArgs {
    /// Input SVG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    grouping: GroupingFlags,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG.
    #[arg(long)]
    out: PathBuf,

    /// Luma threshold; darker pixels are traced.
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Write the tracer output without grouping.
    #[arg(long, default_value_t = false)]
    raw: bool,

    #[command(flatten)]
    grouping: GroupingFlags,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyChoice {
    FirstMatch,
    SmallestEnclosing,
}

impl From<PolicyChoice> for sketchpath::ContainmentPolicy {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::FirstMatch => Self::FirstMatch,
            PolicyChoice::SmallestEnclosing => Self::SmallestEnclosing,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Group(args) => cmd_group(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn load_config(flags: &GroupingFlags) -> anyhow::Result<sketchpath::GroupingConfig> {
    let mut cfg = match &flags.config {
        Some(path) => sketchpath::GroupingConfig::from_path(path)?,
        None => sketchpath::GroupingConfig::default(),
    };
    if let Some(policy) = flags.policy {
        cfg.containment = policy.into();
    }
    if flags.parallel {
        cfg.parallel = true;
    }
    if flags.threads.is_some() {
        cfg.threads = flags.threads;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_group(args: GroupArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.grouping)?;
    let stats = sketchpath::group_svg_file(&args.in_path, &args.out, &cfg)
        .with_context(|| format!("group '{}'", args.in_path.display()))?;

    if args.grouping.report {
        print_report(&stats)?;
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.grouping)?;
    let opts = sketchpath::TraceOptions {
        threshold: args.threshold,
        ..sketchpath::TraceOptions::default()
    };

    let traced = sketchpath::trace_image(&args.in_path, &opts)
        .with_context(|| format!("trace '{}'", args.in_path.display()))?;

    if args.raw {
        write(&args.out, &traced)?;
        eprintln!("wrote {}", args.out.display());
        return Ok(());
    }

    let grouped = sketchpath::group_svg(&traced, &cfg).context("group traced svg")?;
    write(&args.out, grouped.svg.as_bytes())?;

    if args.grouping.report {
        print_report(&grouped.stats)?;
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    sketchpath::write_output(path, bytes)?;
    Ok(())
}

fn print_report(stats: &sketchpath::GroupingStats) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(stats).context("serialize grouping report")?;
    println!("{json}");
    Ok(())
}
