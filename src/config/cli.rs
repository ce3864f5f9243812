use crate::config::locale::LocalePreset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pycroft-display")]
#[command(about = "Byte labels, binary axis ticks and switch port ordering for Pycroft tables")]
pub struct CliConfig {
    /// TOML file with locale, tick and port settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured locale preset
    #[arg(long, global = true, value_enum)]
    pub locale: Option<LocalePreset>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format byte values with binary prefixes
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Table-style labels with one fixed decimal
        #[arg(long)]
        human: bool,

        /// Use SI (powers of 1000) units for --human
        #[arg(long, requires = "human")]
        si: bool,
    },

    /// Round a value up to a whole binary unit
    Ceil {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Print power-of-two axis ticks for a domain
    Ticks {
        #[arg(allow_negative_numbers = true)]
        min: f64,

        #[arg(allow_negative_numbers = true)]
        max: f64,

        /// Desired number of ticks (defaults to the configured count)
        #[arg(long)]
        count: Option<usize>,

        /// Print a JSON array of {value, label}
        #[arg(long)]
        json: bool,
    },

    /// Sort switch port names (reads stdin lines when no names are given)
    SortPorts {
        names: Vec<String>,

        /// Strip "?? (...)" wrappers before comparing
        #[arg(long)]
        patch: bool,
    },

    /// Sort the rows of a CSV table by a port column
    SortTable {
        file: PathBuf,

        /// Column holding the port names (defaults to ports.column)
        #[arg(long)]
        column: Option<String>,

        #[arg(long)]
        patch: bool,
    },

    /// Label a timestamp the way a time axis would
    TimeLabel {
        /// e.g. 2024-03-12T14:30:00
        time: chrono::NaiveDateTime,
    },
}
