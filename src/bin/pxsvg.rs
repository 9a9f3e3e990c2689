use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "pxsvg", version, about = "Convert a raster image into a crisp-edged SVG")]
struct Cli {
    /// Input raster image (any format the decoder understands).
    input: PathBuf,

    /// Output SVG path. An existing file is overwritten.
    output: PathBuf,

    /// Re-render the written SVG and fail unless every pixel matches the input.
    #[arg(long)]
    verify: bool,

    /// Print a JSON summary of the conversion on stdout.
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = pxsvg::ConvertOpts { verify: cli.verify };
    let summary = pxsvg::convert_file(&cli.input, &cli.output, &opts).with_context(|| {
        format!(
            "convert '{}' -> '{}'",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    if cli.summary {
        let json = serde_json::to_string_pretty(&summary).context("serialize summary")?;
        println!("{json}");
    }

    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
