use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(name = "swf-emit", version)]
struct Cli {
    /// Log encoder decisions (compression, sizes, tag headers) to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a movie document as an SWF file.
    Movie(MovieArgs),
    /// Encode a single tag (header included).
    Tag(TagArgs),
}

#[derive(Parser, Debug)]
struct MovieArgs {
    /// Input movie JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SWF path.
    #[arg(long)]
    out: PathBuf,

    /// Container compression.
    #[arg(long, value_enum, default_value_t = CompressionChoice::None)]
    compression: CompressionChoice,
}

#[derive(Parser, Debug)]
struct TagArgs {
    /// Input tag JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path for the encoded tag bytes.
    #[arg(long)]
    out: PathBuf,

    /// SWF version used for version-dependent encodings.
    #[arg(long, default_value_t = 10)]
    swf_version: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompressionChoice {
    None,
    Deflate,
    Lzma,
}

impl From<CompressionChoice> for swf_emit::CompressionMethod {
    fn from(choice: CompressionChoice) -> Self {
        match choice {
            CompressionChoice::None => Self::None,
            CompressionChoice::Deflate => Self::Deflate,
            CompressionChoice::Lzma => Self::Lzma,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Movie(args) => cmd_movie(args),
        Command::Tag(args) => cmd_tag(args),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_movie(args: MovieArgs) -> anyhow::Result<()> {
    let movie: swf_emit::Movie = read_json(&args.in_path, "movie")?;
    let bytes = swf_emit::emit_movie(&movie, args.compression.into()).context("encode movie")?;
    write_output(&args.out, &bytes)?;
    eprintln!("wrote {} ({} bytes)", args.out.display(), bytes.len());
    Ok(())
}

fn cmd_tag(args: TagArgs) -> anyhow::Result<()> {
    let tag: swf_emit::Tag = read_json(&args.in_path, "tag")?;
    let bytes = swf_emit::emit_tag(&tag, args.swf_version).context("encode tag")?;
    write_output(&args.out, &bytes)?;
    eprintln!("wrote {} ({} bytes)", args.out.display(), bytes.len());
    Ok(())
}
