//! Byte counts as shown in table cells.

use crate::core::number::shortest;
use crate::domain::model::PrefixSystem;

/// `1536` becomes `1.5 KiB` (binary) or `1.5 kB` (SI).
///
/// Values below one unit are printed as is, larger values always carry one
/// decimal.
pub fn human_byte_size(bytes: f64, system: PrefixSystem) -> String {
    let threshold = system.threshold();
    if bytes.abs() < threshold {
        return format!("{} B", shortest(bytes, "."));
    }

    let units = system.units();
    let mut value = bytes;
    let mut unit = 0;
    loop {
        value /= threshold;
        if value.abs() < threshold || unit == units.len() - 1 {
            break;
        }
        unit += 1;
    }

    format!("{:.1} {}", value, units[unit])
}

/// Table cell formatter: empty cell for missing or zero values.
pub fn byte_formatter(value: Option<f64>, system: PrefixSystem) -> Option<String> {
    match value {
        Some(bytes) if bytes != 0.0 && !bytes.is_nan() => Some(human_byte_size(bytes, system)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_byte_size_binary() {
        assert_eq!(human_byte_size(512.0, PrefixSystem::Binary), "512 B");
        assert_eq!(human_byte_size(1024.0, PrefixSystem::Binary), "1.0 KiB");
        assert_eq!(human_byte_size(1536.0, PrefixSystem::Binary), "1.5 KiB");
        assert_eq!(human_byte_size(5.0 * 1024.0 * 1024.0, PrefixSystem::Binary), "5.0 MiB");
        assert_eq!(human_byte_size(-2048.0, PrefixSystem::Binary), "-2.0 KiB");
    }

    #[test]
    fn test_human_byte_size_si() {
        assert_eq!(human_byte_size(999.0, PrefixSystem::Si), "999 B");
        assert_eq!(human_byte_size(1000.0, PrefixSystem::Si), "1.0 kB");
        assert_eq!(human_byte_size(2_500_000.0, PrefixSystem::Si), "2.5 MB");
    }

    #[test]
    fn test_human_byte_size_stops_at_last_unit() {
        let huge = 5000.0 * 1000f64.powi(8);
        assert_eq!(human_byte_size(huge, PrefixSystem::Si), "5000.0 YB");
    }

    #[test]
    fn test_byte_formatter_skips_empty_values() {
        assert_eq!(byte_formatter(None, PrefixSystem::Binary), None);
        assert_eq!(byte_formatter(Some(0.0), PrefixSystem::Binary), None);
        assert_eq!(
            byte_formatter(Some(2048.0), PrefixSystem::Binary),
            Some("2.0 KiB".to_string())
        );
    }
}
