use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pluvia rainfall frequency and drainage sizing.
#[derive(Parser)]
#[command(
    name = "pluvia",
    version,
    about = "Rainfall IDF analysis and drainage sizing"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Extract annual maxima for one accumulation duration.
    Maxima(MaximaArgs),
    /// Fit Gumbel and Log-Pearson III and tabulate the IDF relation.
    Idf(IdfArgs),
    /// Run the full design pipeline from a project file.
    Design(DesignArgs),
    /// Aggregate rainfall into daily, monthly or annual totals.
    Totals(TotalsArgs),
    /// Uniform-flow analysis of a trapezoidal channel.
    Channel(ChannelArgs),
    /// Size a circular conduit flowing full.
    Conduit(ConduitArgs),
}

/// Input options shared by the record-reading subcommands.
#[derive(clap::Args)]
pub struct RecordArgs {
    /// Path to the rainfall CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Optional TOML project file for column names and delimiter.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `maxima` subcommand.
#[derive(clap::Args)]
pub struct MaximaArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Accumulation duration in hours.
    #[arg(short, long, default_value_t = 24)]
    pub duration: u32,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `idf` subcommand.
#[derive(clap::Args)]
pub struct IdfArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Accumulation duration in hours. Overrides `[frequency].duration_hours`.
    #[arg(short, long)]
    pub duration: Option<u32>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `design` subcommand.
#[derive(clap::Args)]
pub struct DesignArgs {
    /// Path to TOML project file.
    #[arg(short, long, default_value = "pluvia.toml")]
    pub config: PathBuf,

    /// Override `[io].input` from the project file.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `totals` subcommand.
#[derive(clap::Args)]
pub struct TotalsArgs {
    #[command(flatten)]
    pub record: RecordArgs,

    /// Aggregation period: daily, monthly or annual.
    #[arg(short, long, default_value = "monthly")]
    pub period: String,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Lining given either as a table material or as an explicit Manning `n`.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct LiningArgs {
    /// Manning roughness coefficient.
    #[arg(short = 'n', long)]
    pub roughness: Option<f64>,

    /// Lining material (e.g. finished_concrete, average_earth).
    #[arg(short, long)]
    pub material: Option<String>,
}

/// Arguments for the `channel` subcommand.
#[derive(clap::Args)]
pub struct ChannelArgs {
    /// Design flow (m³/s).
    #[arg(short = 'q', long)]
    pub flow: f64,

    /// Base width (m).
    #[arg(short, long)]
    pub base_width: f64,

    /// Side slope z (horizontal per unit vertical).
    #[arg(short = 'z', long, default_value_t = 0.0)]
    pub side_slope: f64,

    /// Longitudinal slope (m/m).
    #[arg(short, long)]
    pub slope: f64,

    #[command(flatten)]
    pub lining: LiningArgs,

    /// Also solve the base width that carries the flow at this depth (m).
    #[arg(short, long)]
    pub depth: Option<f64>,
}

/// Arguments for the `conduit` subcommand.
#[derive(clap::Args)]
pub struct ConduitArgs {
    /// Design flow (m³/s).
    #[arg(short = 'q', long)]
    pub flow: f64,

    /// Longitudinal slope (m/m).
    #[arg(short, long)]
    pub slope: f64,

    #[command(flatten)]
    pub lining: LiningArgs,

    /// Smallest diameter tried (m).
    #[arg(long, default_value_t = 0.05)]
    pub d_min: f64,

    /// Largest diameter tried (m).
    #[arg(long, default_value_t = 3.0)]
    pub d_max: f64,

    /// Diameter increment (m).
    #[arg(long, default_value_t = 0.01)]
    pub step: f64,
}
