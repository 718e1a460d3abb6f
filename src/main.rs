//! midi2sp3ctra — command line front end for the score converter.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use sp3ctra_score::{
    convert_file, default_output_path, layout_to_json, ConvertOptions, OutputFormat,
    OverlapPolicy,
};

#[derive(Parser, Debug)]
#[command(version, about = "Generate a Sp3ctra-compatible PDF from a monophonic MIDI file")]
struct Args {
    /// Input MIDI file (.mid)
    input: PathBuf,

    /// Output file; defaults to ../pdf/<name>.pdf next to the input's directory
    output: Option<PathBuf>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, ignore_case = true)]
    log: LogLevel,

    /// What to do with a note-on for a pitch that is already sounding
    #[arg(long, value_enum, default_value_t = OverlapArg::Replace)]
    overlap: OverlapArg,

    /// Output format; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Also write the computed page layout as JSON
    #[arg(long, value_name = "PATH")]
    layout_json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OverlapArg {
    /// Drop the earlier note (compatible behaviour)
    Replace,
    /// Close the earlier note where the new one starts
    Truncate,
}

impl From<OverlapArg> for OverlapPolicy {
    fn from(arg: OverlapArg) -> Self {
        match arg {
            OverlapArg::Replace => OverlapPolicy::Replace,
            OverlapArg::Truncate => OverlapPolicy::Truncate,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Pdf,
    Svg,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pdf => OutputFormat::Pdf,
            FormatArg::Svg => OutputFormat::Svg,
        }
    }
}

fn init_logger(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn run(args: Args) -> Result<()> {
    let format = args.format.map(OutputFormat::from);
    let output = args.output.unwrap_or_else(|| {
        default_output_path(&args.input, format.unwrap_or_default())
    });

    let options = ConvertOptions {
        overlap: args.overlap.into(),
        format,
        ..ConvertOptions::default()
    };

    let layout = convert_file(&args.input, &output, &options)
        .with_context(|| format!("converting {}", args.input.display()))?;

    if let Some(path) = args.layout_json {
        let json = layout_to_json(&layout)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing layout to {}", path.display()))?;
        log::debug!("Layout written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
