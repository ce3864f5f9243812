use clap::Parser;
use pycroft_display::core::{binary_prefix, byte_size, cell, table, time_format};
use pycroft_display::utils::error::ErrorSeverity;
use pycroft_display::utils::logger;
use pycroft_display::utils::validation::{validate_required_field, Validate};
use pycroft_display::{
    CellValue, CliConfig, Command, DisplayConfig, Locale, PortOrdering, PrefixSystem, Result,
    TickLabel,
};
use std::io::{self, BufRead, Write};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_config(cli: &CliConfig) -> Result<DisplayConfig> {
    let mut config = match &cli.config {
        Some(path) => DisplayConfig::from_file(path)?,
        None => DisplayConfig::default(),
    };

    if let Some(preset) = cli.locale {
        config.locale.preset = preset;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig) -> Result<()> {
    let config = load_config(cli)?;
    let locale = config.locale();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Format { values, human, si } => {
            let system = if *si {
                PrefixSystem::Si
            } else {
                config.bytes.prefix
            };
            let cell = CellValue::from_vec(values.clone());
            let label = cell::format_cell(&cell, ", ", |value| {
                if *human {
                    byte_size::byte_formatter(Some(*value), system)
                } else {
                    Some(binary_prefix::format_with(*value, &locale))
                }
            });
            writeln!(out, "{}", label.unwrap_or_default())?;
        }
        Command::Ceil { value } => {
            writeln!(out, "{}", binary_prefix::ceil(*value))?;
        }
        Command::Ticks {
            min,
            max,
            count,
            json,
        } => {
            let count = count.unwrap_or(config.ticks.count);
            let ticks = tick_labels([*min, *max], count, &locale);
            tracing::debug!("Generated {} ticks", ticks.len());
            if *json {
                serde_json::to_writer_pretty(&mut out, &ticks)?;
                writeln!(out)?;
            } else {
                for tick in &ticks {
                    writeln!(out, "{}\t{}", tick.value, tick.label)?;
                }
            }
        }
        Command::SortPorts { names, patch } => {
            let ordering = ordering_for(*patch, &config);
            let mut names = if names.is_empty() {
                read_lines(io::stdin().lock())?
            } else {
                names.clone()
            };
            table::sort_ports(&mut names, ordering);
            for name in &names {
                writeln!(out, "{}", name)?;
            }
        }
        Command::SortTable {
            file,
            column,
            patch,
        } => {
            let column = match column {
                Some(column) => column.as_str(),
                None => validate_required_field("ports.column", &config.ports.column)?.as_str(),
            };
            let ordering = ordering_for(*patch, &config);
            let reader = std::fs::File::open(file)?;
            let rows = table::sort_csv_by_port(reader, &mut out, column, ordering)?;
            tracing::info!("Sorted {} rows of {}", rows, file.display());
        }
        Command::TimeLabel { time } => {
            writeln!(out, "{}", time_format::time_label(time, &locale))?;
        }
    }

    Ok(())
}

fn ordering_for(patch_flag: bool, config: &DisplayConfig) -> PortOrdering {
    if patch_flag {
        PortOrdering::Patch
    } else {
        config.ports.ordering()
    }
}

fn tick_labels(domain: [f64; 2], count: usize, locale: &Locale) -> Vec<TickLabel> {
    binary_prefix::tick_range(domain, Some(count))
        .iter()
        .map(|value| TickLabel {
            value,
            label: binary_prefix::format_with(value, locale),
        })
        .collect()
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }
    Ok(names)
}
