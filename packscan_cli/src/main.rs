use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use packscan_codecs::{decode, encode, is_available, Scanner};
use packscan_core::CodecId;

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "packscan",
    about = "Transcode byte streams across compression codecs and scan for the best fit",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file with one codec
    Compress {
        /// Source file ("-" reads stdin)
        input: PathBuf,
        /// Destination file ("-" writes stdout)
        output: PathBuf,
        /// Codec name (see `packscan codecs`)
        #[arg(short, long, default_value = "zstd")]
        codec: String,
    },
    /// Decompress a file with the codec that produced it
    Decompress {
        /// Source file ("-" reads stdin)
        input: PathBuf,
        /// Destination file ("-" writes stdout)
        output: PathBuf,
        /// Codec name the input was compressed with
        #[arg(short, long)]
        codec: String,
    },
    /// Run every available codec over the input and report sizes
    Scan {
        /// File to scan
        input: PathBuf,
        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Delete the input file once the scan finishes (destructive!)
        #[arg(long)]
        delete_source: bool,
    },
    /// List codec identifiers and their availability in this build
    Codecs,
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn codec_from_name(name: &str) -> anyhow::Result<CodecId> {
    let id = CodecId::from_name(name)
        .with_context(|| format!("unknown codec '{name}'; run `packscan codecs` for the list"))?;
    anyhow::ensure!(
        id.is_streaming(),
        "codec '{name}' is text-only and not usable for stream transcoding"
    );
    Ok(id)
}

fn open_source(path: &PathBuf) -> anyhow::Result<Box<dyn Read>> {
    if path.to_str() == Some("-") {
        Ok(Box::new(io::stdin()))
    } else {
        let file = File::open(path).with_context(|| format!("opening input file {path:?}"))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

fn write_sink(path: &PathBuf, data: &[u8]) -> anyhow::Result<()> {
    if path.to_str() == Some("-") {
        io::stdout().write_all(data)?;
    } else {
        std::fs::write(path, data).with_context(|| format!("writing output file {path:?}"))?;
    }
    Ok(())
}

fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_compress(input: PathBuf, output: PathBuf, codec_name: &str) -> anyhow::Result<()> {
    let id = codec_from_name(codec_name)?;
    let mut src = open_source(&input)?;

    let t0 = Instant::now();
    let compressed = encode(id, &mut src)?;
    let elapsed = t0.elapsed();

    write_sink(&output, &compressed)?;

    eprintln!("  codec       : {}", id);
    eprintln!("  compressed  : {}", human_bytes(compressed.len() as u64));
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_decompress(input: PathBuf, output: PathBuf, codec_name: &str) -> anyhow::Result<()> {
    let id = codec_from_name(codec_name)?;
    let mut src = open_source(&input)?;

    let t0 = Instant::now();
    let raw = decode(id, &mut src)?;
    let elapsed = t0.elapsed();

    write_sink(&output, &raw)?;

    eprintln!("  codec       : {}", id);
    eprintln!("  raw size    : {}", human_bytes(raw.len() as u64));
    eprintln!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_scan(input: PathBuf, json: bool, delete_source: bool) -> anyhow::Result<()> {
    let raw_size = std::fs::metadata(&input)
        .with_context(|| format!("reading input file {input:?}"))?
        .len();

    let t0 = Instant::now();
    let report = Scanner::new()
        .delete_source_after_scan(delete_source)
        .scan_file(&input)?;
    let elapsed = t0.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Best-fit scan: {:?} ===", input);
    println!();
    println!("  raw size    : {}", human_bytes(raw_size));
    println!();
    println!("  {:<14}  {:>12}  {:>8}", "codec", "compressed", "ratio");
    println!("  {}", "-".repeat(40));
    for (id, len) in report.iter() {
        let ratio = if len == 0 { 0.0 } else { raw_size as f64 / len as f64 };
        println!("  {:<14}  {:>12}  {:>7.2}x", id.name(), human_bytes(len), ratio);
    }
    println!();
    match report.best() {
        Some((id, len)) => println!("  best        : {} ({})", id, human_bytes(len)),
        None => println!("  best        : none (no codec available)"),
    }
    println!("  elapsed     : {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_codecs() -> anyhow::Result<()> {
    println!("  {:<14}  {:>10}  {}", "codec", "streaming", "available");
    println!("  {}", "-".repeat(38));
    for id in CodecId::ALL {
        println!(
            "  {:<14}  {:>10}  {}",
            id.name(),
            if id.is_streaming() { "yes" } else { "text" },
            if is_available(id) { "yes" } else { "no" }
        );
    }
    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
        } => run_compress(input, output, &codec),
        Commands::Decompress {
            input,
            output,
            codec,
        } => run_decompress(input, output, &codec),
        Commands::Scan {
            input,
            json,
            delete_source,
        } => run_scan(input, json, delete_source),
        Commands::Codecs => run_codecs(),
    }
}
