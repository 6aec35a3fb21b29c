use clap::{Args, Parser, ValueEnum};
use jne_spider::symbols::scan::DEFAULT_RANGE;
use std::path::PathBuf;

/// Collect the Hoja de Vida of every presidential candidate into a spreadsheet.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CandidatosCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Download the ballot symbol of every party.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct SimbolosCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Probe a range of symbol IDs instead, saving every hit for manual inspection.
    ///
    /// Fires one request per ID against the JNE server; use sparingly.
    #[arg(long)]
    pub scan: bool,

    /// First symbol ID to probe, with `--scan`.
    #[arg(long, default_value_t = *DEFAULT_RANGE.start())]
    pub from: u32,

    /// Last symbol ID to probe (inclusive), with `--scan`.
    #[arg(long, default_value_t = *DEFAULT_RANGE.end())]
    pub to: u32,
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Sets the level of tracing.
    ///
    /// If no level is provided, progress is reported on the console instead.
    #[arg(short, long)]
    pub trace: Option<TraceLevel>,

    /// Output directory; overrides JNE_OUTPUT_DIR (candidatos) or JNE_ICON_DIR (simbolos).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pause between requests, in milliseconds; overrides JNE_DELAY_MS.
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
