use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "kinegrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a stored sequence and check its invariants.
    Validate(ValidateArgs),
    /// Extend a seed sequence into a closed pattern.
    Extend(ExtendArgs),
    /// List the legal seed boundaries for a CAP configuration.
    Boundaries(BoundariesArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ExtendArgs {
    /// Input seed sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// CAP kind to apply.
    #[arg(long, value_enum)]
    cap: CapChoice,

    /// Fraction of the closed pattern the seed represents.
    #[arg(long, value_enum, default_value_t = SliceChoice::Halved)]
    slice: SliceChoice,

    /// Output sequence JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BoundariesArgs {
    /// CAP kind to enumerate.
    #[arg(long, value_enum)]
    cap: CapChoice,

    /// Fraction of the closed pattern the seed represents.
    #[arg(long, value_enum, default_value_t = SliceChoice::Halved)]
    slice: SliceChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CapChoice {
    Rotated,
    MirroredVertical,
    MirroredHorizontal,
    Swapped,
}

impl CapChoice {
    fn to_kind(self) -> kinegrid::CapKind {
        match self {
            Self::Rotated => kinegrid::CapKind::Rotated,
            Self::MirroredVertical => kinegrid::CapKind::Mirrored(kinegrid::Axis::Vertical),
            Self::MirroredHorizontal => kinegrid::CapKind::Mirrored(kinegrid::Axis::Horizontal),
            Self::Swapped => kinegrid::CapKind::Swapped,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SliceChoice {
    Halved,
    Quartered,
}

impl SliceChoice {
    fn to_size(self) -> kinegrid::SliceSize {
        match self {
            Self::Halved => kinegrid::SliceSize::Halved,
            Self::Quartered => kinegrid::SliceSize::Quartered,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Extend(args) => cmd_extend(args),
        Command::Boundaries(args) => cmd_boundaries(args),
    }
}

fn read_sequence_json(path: &Path) -> anyhow::Result<kinegrid::Sequence> {
    let f = File::open(path).with_context(|| format!("open sequence '{}'", path.display()))?;
    let r = BufReader::new(f);
    let seq: kinegrid::Sequence =
        serde_json::from_reader(r).with_context(|| "parse sequence JSON")?;
    Ok(seq)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let seq = read_sequence_json(&args.in_path)?;
    seq.validate()?;
    eprintln!("ok: {} beats", seq.beats.len());
    Ok(())
}

fn cmd_extend(args: ExtendArgs) -> anyhow::Result<()> {
    let seed = read_sequence_json(&args.in_path)?;
    let out = kinegrid::generate_cap(&seed, args.cap.to_kind(), args.slice.to_size())?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(f, &out).with_context(|| "write sequence JSON")?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_boundaries(args: BoundariesArgs) -> anyhow::Result<()> {
    let pairs = kinegrid::legal_boundaries(args.cap.to_kind(), args.slice.to_size());
    serde_json::to_writer_pretty(std::io::stdout().lock(), &pairs)
        .with_context(|| "write boundary JSON")?;
    println!();
    Ok(())
}
