pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{locale::Locale, DisplayConfig};
pub use self::core::{
    binary_prefix::{ceil, format, format_with, tick_range},
    port::{classify, clean_port_name, compare_patch_port, compare_port},
    scale::{BinaryScale, LinearScale},
    ticks::TickRange,
};
pub use domain::{CellValue, PortKind, PortOrdering, PrefixSystem, Scale, TickLabel};
pub use utils::error::{DisplayError, Result};
